//! Parameter names and the mutable parameter store.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// One of the three scalars of `y(t) = A * sin(2π f t + φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Peak value `A`
    Amplitude,
    /// Frequency `f` in Hz
    Frequency,
    /// Phase offset `φ` in radians, unbounded
    Phase,
}

impl Parameter {
    /// All parameters, in the order their labels are stacked on screen.
    pub const ALL: [Parameter; 3] = [Parameter::Amplitude, Parameter::Phase, Parameter::Frequency];

    /// Lower-case name used for lookups and log output.
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Amplitude => "amplitude",
            Parameter::Frequency => "frequency",
            Parameter::Phase => "phase",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "amplitude" => Ok(Parameter::Amplitude),
            "frequency" => Ok(Parameter::Frequency),
            "phase" => Ok(Parameter::Phase),
            other => Err(Error::UnknownParameter(other.to_string())),
        }
    }
}

/// Current values of amplitude, frequency and phase.
///
/// The store performs no range validation: any float written with `set` is
/// immediately visible to the next curve sample and the next label format call.
/// It is passed explicitly to every component that needs it rather than living
/// in global state.
///
/// # Examples
///
/// ```
/// use wavescene::{Parameter, ParameterStore};
///
/// let mut store = ParameterStore::default();
/// assert_eq!(store.get(Parameter::Amplitude), 1.0);
///
/// store.set(Parameter::Amplitude, 2.0);
/// assert_eq!(store.get(Parameter::Amplitude), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterStore {
    amplitude: f64,
    frequency: f64,
    phase: f64,
}

impl ParameterStore {
    /// Creates a store with explicit initial values.
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// Gets the current value of a parameter.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Amplitude => self.amplitude,
            Parameter::Frequency => self.frequency,
            Parameter::Phase => self.phase,
        }
    }

    /// Sets the current value of a parameter.
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::Amplitude => self.amplitude = value,
            Parameter::Frequency => self.frequency = value,
            Parameter::Phase => self.phase = value,
        }
    }

    /// Gets a parameter by its lower-case name.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavescene::ParameterStore;
    ///
    /// let store = ParameterStore::default();
    /// assert_eq!(store.get_named("frequency").unwrap(), 1.0);
    /// assert!(store.get_named("gain").is_err());
    /// ```
    pub fn get_named(&self, name: &str) -> Result<f64> {
        Ok(self.get(name.parse()?))
    }

    /// Sets a parameter by its lower-case name.
    pub fn set_named(&mut self, name: &str, value: f64) -> Result<()> {
        self.set(name.parse()?, value);
        Ok(())
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl Default for ParameterStore {
    /// The scene's starting values: `A = 1`, `f = 1`, `φ = 0`.
    fn default() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }
}
