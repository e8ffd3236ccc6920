//! Scene parameters and the store that holds their current values.
//!
//! This module provides:
//! - `Parameter`, the three named scalars driving the plotted sinusoid
//! - `ParameterStore`, the single source of truth read by the curve binding and
//!   the label formatter, and written by the sequencer

mod store;

pub use store::{Parameter, ParameterStore};
