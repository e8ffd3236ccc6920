//! On-screen text: the equation and the three parameter readouts.
//!
//! Labels are not reactive. The sequencer regenerates a parameter's label at the
//! start of each phase that changes it and hands the old/new pair to the
//! renderer as a `LabelTransition`.

mod binding;
mod symbolic;

pub use binding::{EQUATION_TEX, EQUATION_TEXT, Label, LabelBinding, LabelTransition, Placement};
pub use symbolic::Symbolic;
