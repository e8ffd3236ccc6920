//! Wavescene - A scripted, frame-stepped animation of a parametrised sinusoid
//!
//! This library drives a plot of `y(t) = A * sin(2π f t + φ)` through a timeline
//! of parameter changes. A `ParameterStore` holds the current values, a
//! `ReactiveCurveBinding` re-samples the curve from it once per frame, labels are
//! regenerated at phase boundaries, and a `Sequencer` walks the timeline. Drawing
//! is delegated to a `Renderer`.

pub mod animation;
pub mod coords;
pub mod curve;
mod error;
pub mod labels;
pub mod params;
pub mod render;
pub mod scene;

// Re-export commonly used types at the crate root
pub use animation::{Animation, AnimationPhase, Easing, Sequencer, Stage, Timeline};
pub use coords::{Axes, CoordinateSystem};
pub use curve::{CurveSampler, ReactiveCurveBinding, Sinusoid, TimeDomain};
pub use error::{Error, Result};
pub use labels::{Label, LabelBinding, Symbolic};
pub use params::{Parameter, ParameterStore};
pub use render::{Recorder, Renderer};
pub use scene::{Scene, SceneConfig};

#[cfg(feature = "macros")]
pub use wavescene_macros::symbolic;
