//! Sampling and displaying the parametrised sinusoid.
//!
//! This module provides:
//! - `Sinusoid`, the closed-form `y(t) = A * sin(2π f t + φ)`
//! - `TimeDomain` and `CurveSampler`, turning the current parameter values into
//!   an ordered sequence of plot points
//! - `ReactiveCurveBinding`, which re-derives the displayed curve from the
//!   parameter store once per rendered frame

mod binding;
mod sampler;
mod sinusoid;

pub use binding::ReactiveCurveBinding;
pub use sampler::{CurvePoint, CurveSampler, TimeDomain};
pub use sinusoid::Sinusoid;
