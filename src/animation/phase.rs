//! Vocabulary of a scripted scene: stages, displayed objects, animations and phases.

use std::fmt;

use super::Easing;
use crate::Parameter;

/// Stage of the scripted scene. Stages are entered in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Store and axes constructed, nothing on screen yet
    Init,
    ShowAxes,
    ShowInitialCurve,
    ShowLabels,
    ChangeAmplitude,
    ChangePhase,
    ChangeFrequency,
    Teardown,
    /// Sequence complete
    Done,
}

impl Stage {
    /// Every stage in canonical order.
    pub const ORDER: [Stage; 9] = [
        Stage::Init,
        Stage::ShowAxes,
        Stage::ShowInitialCurve,
        Stage::ShowLabels,
        Stage::ChangeAmplitude,
        Stage::ChangePhase,
        Stage::ChangeFrequency,
        Stage::Teardown,
        Stage::Done,
    ];

    /// True for the stages a timeline may schedule phases in.
    pub fn is_schedulable(&self) -> bool {
        !matches!(self, Stage::Init | Stage::Done)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Something the renderer can show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneObject {
    Axes,
    AxisLabels,
    /// The plotted sinusoid, bound to the parameter store
    Curve,
    /// `y(t) = A sin(2π f t + φ)`
    Equation,
    /// Readout for one parameter
    ParameterLabel(Parameter),
}

/// Visual style of a reveal or conceal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Draw the outline progressively
    Create,
    /// Write text stroke by stroke
    Write,
    FadeIn,
    FadeOut,
}

/// One animation inside a phase. All animations of a phase share its run time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    Reveal {
        object: SceneObject,
        effect: Effect,
    },
    Conceal {
        object: SceneObject,
        effect: Effect,
    },
    /// Move a parameter from whatever value it has when the phase starts to `target`
    Interpolate {
        parameter: Parameter,
        target: f64,
        easing: Easing,
    },
    /// Replace a parameter's label with one showing `value`
    Relabel {
        parameter: Parameter,
        value: f64,
    },
}

/// What a phase does with its time.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseKind {
    /// Run animations concurrently for `run_time`
    Play {
        animations: Vec<Animation>,
        run_time: f64,
    },
    /// Keep the scene static for `duration`; the curve is still redrawn per frame
    Hold {
        duration: f64,
    },
}

/// One immutable step of a timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationPhase {
    pub stage: Stage,
    pub kind: PhaseKind,
}

impl AnimationPhase {
    /// Wall-clock length of the phase in scene time units.
    pub fn duration(&self) -> f64 {
        match &self.kind {
            PhaseKind::Play { run_time, .. } => *run_time,
            PhaseKind::Hold { duration } => *duration,
        }
    }

    /// The phase's animations; empty for a hold.
    pub fn animations(&self) -> &[Animation] {
        match &self.kind {
            PhaseKind::Play { animations, .. } => animations,
            PhaseKind::Hold { .. } => &[],
        }
    }

    pub fn is_hold(&self) -> bool {
        matches!(self.kind, PhaseKind::Hold { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_is_sorted() {
        assert!(Stage::ORDER.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_schedulable_stages() {
        assert!(!Stage::Init.is_schedulable());
        assert!(!Stage::Done.is_schedulable());
        assert!(Stage::ChangePhase.is_schedulable());
    }

    #[test]
    fn test_phase_accessors() {
        let hold = AnimationPhase {
            stage: Stage::ShowAxes,
            kind: PhaseKind::Hold { duration: 2.0 },
        };
        assert!(hold.is_hold());
        assert_eq!(hold.duration(), 2.0);
        assert!(hold.animations().is_empty());

        let play = AnimationPhase {
            stage: Stage::ShowAxes,
            kind: PhaseKind::Play {
                animations: vec![Animation::Reveal {
                    object: SceneObject::Axes,
                    effect: Effect::Create,
                }],
                run_time: 1.0,
            },
        };
        assert!(!play.is_hold());
        assert_eq!(play.animations().len(), 1);
    }
}
