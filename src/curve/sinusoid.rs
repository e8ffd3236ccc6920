//! Closed-form sinusoid evaluation.

use std::f64::consts::PI;

use crate::ParameterStore;

/// A sinusoid `y(t) = A * sin(2π f t + φ)` with fixed parameters.
///
/// Unlike a running oscillator this keeps no phase accumulator: every value is
/// evaluated directly from `t`, so samples can be taken in any order.
///
/// # Examples
///
/// ```
/// use wavescene::curve::Sinusoid;
///
/// let wave = Sinusoid::new(2.0, 1.0, 0.0);
/// assert!((wave.value_at(0.25) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sinusoid {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Sinusoid {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Snapshot of the store's current values.
    pub fn from_store(store: &ParameterStore) -> Self {
        Self::new(store.amplitude(), store.frequency(), store.phase())
    }

    /// Evaluates the sinusoid at time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * t + self.phase).sin()
    }
}
