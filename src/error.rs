//! Scene construction and rendering errors.
//!
//! Everything the scene does at run time is a total function over finite
//! numbers, so the only failures are authoring mistakes caught while a scene is
//! being configured, plus whatever the rendering collaborator reports.

use thiserror::Error;

use crate::animation::Stage;
use crate::params::Parameter;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or running a scene.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid duration for {what}: {duration}")]
    InvalidDuration { what: &'static str, duration: f64 },

    #[error("invalid time domain [{start}, {end}]: range must be finite and non-empty")]
    InvalidDomain { start: f64, end: f64 },

    #[error("curve resolution must be at least 2 samples, got {0}")]
    InvalidResolution(usize),

    #[error("frame rate must be finite and positive, got {0}")]
    InvalidFrameRate(f64),

    #[error("invalid axes: {message}")]
    InvalidAxes { message: String },

    #[error("value for {parameter} must be finite, got {value}")]
    NonFiniteValue { parameter: Parameter, value: f64 },

    #[error("{parameter} is written more than once in a single {stage} phase")]
    ConflictingWrites { parameter: Parameter, stage: Stage },

    #[error("stage {stage} cannot be scheduled after {previous}")]
    StageOrder { stage: Stage, previous: Stage },

    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    #[error("sequence has already finished")]
    SequenceFinished,

    #[error("renderer failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Validates a duration the way every scripted animation and hold requires.
pub(crate) fn check_duration(what: &'static str, duration: f64) -> Result<f64> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(duration)
    } else {
        Err(Error::InvalidDuration { what, duration })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_duration() {
        assert_eq!(check_duration("hold", 2.0).unwrap(), 2.0);
        assert_eq!(check_duration("hold", 0.0).unwrap(), 0.0);
        assert!(matches!(
            check_duration("hold", -1.0),
            Err(Error::InvalidDuration { what: "hold", .. })
        ));
        assert!(check_duration("hold", f64::NAN).is_err());
        assert!(check_duration("hold", f64::INFINITY).is_err());
    }

    #[test]
    fn test_messages() {
        let err = Error::InvalidDomain {
            start: 10.0,
            end: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid time domain [10, 0]: range must be finite and non-empty"
        );
        assert_eq!(
            Error::UnknownParameter("gain".into()).to_string(),
            "unknown parameter 'gain'"
        );
    }
}
