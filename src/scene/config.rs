//! Scene configuration.

use std::f64::consts::FRAC_PI_2;

use crate::animation::Easing;
use crate::coords::{Axes, AxisRange};
use crate::curve::{CurveSampler, TimeDomain};
use crate::error::check_duration;
use crate::labels::Symbolic;
use crate::{Error, Parameter, ParameterStore, Result};

/// Constants driving the scripted scene.
///
/// All values are authored up front. `validate` rejects anything that would
/// make the timeline meaningless (empty domain, negative durations, non-finite
/// targets) instead of clamping it.
///
/// # Examples
///
/// ```
/// use wavescene::scene::SceneConfig;
///
/// let config = SceneConfig::default().with_frame_rate(60.0).with_hold(1.0);
/// assert!(config.validate().is_ok());
///
/// let broken = SceneConfig::default().with_hold(-1.0);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Time range the curve is plotted over, as `(start, end)`
    pub domain: (f64, f64),
    /// Samples per curve, at least 2
    pub resolution: usize,
    /// Rendered frames per scene time unit
    pub frame_rate: f64,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub x_length: f64,
    pub y_length: f64,
    /// Parameter values when the scene starts
    pub initial: ParameterStore,
    pub amplitude_target: f64,
    /// Phase target, shown symbolically once reached
    pub phase_target: Symbolic,
    pub frequency_target: f64,
    /// Run time of every reveal, conceal and parameter change
    pub run_time: f64,
    /// Pause after each major reveal and parameter change
    pub hold: f64,
    /// Pause after the teardown
    pub final_hold: f64,
    pub easing: Easing,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 10.0),
            resolution: 201,
            frame_rate: 30.0,
            x_range: AxisRange::new(0.0, 10.0, 1.0),
            y_range: AxisRange::new(-3.0, 3.0, 1.0),
            x_length: 10.0,
            y_length: 6.0,
            initial: ParameterStore::default(),
            amplitude_target: 2.0,
            phase_target: Symbolic::new(FRAC_PI_2, r"\pi/2", "π/2"),
            frequency_target: 2.0,
            run_time: 1.0,
            hold: 2.0,
            final_hold: 1.0,
            easing: Easing::Smooth,
        }
    }
}

impl SceneConfig {
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_run_time(mut self, run_time: f64) -> Self {
        self.run_time = run_time;
        self
    }

    pub fn with_hold(mut self, hold: f64) -> Self {
        self.hold = hold;
        self
    }

    pub fn with_final_hold(mut self, final_hold: f64) -> Self {
        self.final_hold = final_hold;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_initial(mut self, initial: ParameterStore) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_targets(mut self, amplitude: f64, phase: Symbolic, frequency: f64) -> Self {
        self.amplitude_target = amplitude;
        self.phase_target = phase;
        self.frequency_target = frequency;
        self
    }

    /// Axes described by this configuration.
    pub fn axes(&self) -> Result<Axes> {
        Axes::new(self.x_range, self.y_range, self.x_length, self.y_length)
    }

    /// Curve sampler described by this configuration.
    pub fn sampler(&self) -> Result<CurveSampler> {
        let (start, end) = self.domain;
        CurveSampler::new(TimeDomain::new(start, end)?, self.resolution)
    }

    /// Checks every constant, reporting the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.sampler()?;
        self.axes()?;
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(Error::InvalidFrameRate(self.frame_rate));
        }
        check_duration("animation run time", self.run_time)?;
        check_duration("hold", self.hold)?;
        check_duration("final hold", self.final_hold)?;

        let values = Parameter::ALL
            .iter()
            .map(|&parameter| (parameter, self.initial.get(parameter)))
            .chain([
                (Parameter::Amplitude, self.amplitude_target),
                (Parameter::Phase, self.phase_target.value),
                (Parameter::Frequency, self.frequency_target),
            ]);
        for (parameter, value) in values {
            if !value.is_finite() {
                return Err(Error::NonFiniteValue { parameter, value });
            }
        }
        Ok(())
    }
}
