//! Ordered, validated list of animation phases.

use super::{Animation, AnimationPhase, PhaseKind, Stage};
use crate::error::check_duration;
use crate::{Error, Parameter, Result};

/// The phases of a scene in execution order.
///
/// A timeline is validated as it is built, so a sequencer never meets a bad
/// duration or target halfway through a run:
/// - durations must be finite and non-negative
/// - interpolation targets and label values must be finite
/// - a phase may write each parameter at most once
/// - stages must be schedulable and appear in canonical order
///
/// # Examples
///
/// ```
/// use wavescene::animation::{Animation, Easing, Stage, Timeline};
/// use wavescene::Parameter;
///
/// let mut timeline = Timeline::new();
/// timeline
///     .play(
///         Stage::ChangeAmplitude,
///         vec![Animation::Interpolate {
///             parameter: Parameter::Amplitude,
///             target: 2.0,
///             easing: Easing::Smooth,
///         }],
///         1.0,
///     )
///     .unwrap()
///     .hold(Stage::ChangeAmplitude, 2.0)
///     .unwrap();
///
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline.total_duration(), 3.0);
/// assert!(timeline.hold(Stage::ShowAxes, 1.0).is_err());
/// ```
/// Rejects a non-finite value or a second write to `parameter` within one phase.
fn record_write(
    written: &mut Vec<Parameter>,
    stage: Stage,
    parameter: Parameter,
    value: f64,
) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NonFiniteValue { parameter, value });
    }
    if written.contains(&parameter) {
        return Err(Error::ConflictingWrites { parameter, stage });
    }
    written.push(parameter);
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    phases: Vec<AnimationPhase>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a phase that runs `animations` concurrently for `run_time`.
    pub fn play(
        &mut self,
        stage: Stage,
        animations: Vec<Animation>,
        run_time: f64,
    ) -> Result<&mut Self> {
        check_duration("animation run time", run_time)?;

        let mut interpolated = Vec::new();
        let mut relabelled = Vec::new();
        for animation in &animations {
            if let Animation::Interpolate {
                parameter, target, ..
            } = *animation
            {
                record_write(&mut interpolated, stage, parameter, target)?;
            }
            if let Animation::Relabel { parameter, value } = *animation {
                record_write(&mut relabelled, stage, parameter, value)?;
            }
        }

        self.push(AnimationPhase {
            stage,
            kind: PhaseKind::Play {
                animations,
                run_time,
            },
        })
    }

    /// Appends a phase that keeps the scene static for `duration`.
    pub fn hold(&mut self, stage: Stage, duration: f64) -> Result<&mut Self> {
        check_duration("hold", duration)?;
        self.push(AnimationPhase {
            stage,
            kind: PhaseKind::Hold { duration },
        })
    }

    fn push(&mut self, phase: AnimationPhase) -> Result<&mut Self> {
        let previous = self.phases.last().map_or(Stage::Init, |last| last.stage);
        if !phase.stage.is_schedulable() || phase.stage < previous {
            return Err(Error::StageOrder {
                stage: phase.stage,
                previous,
            });
        }
        self.phases.push(phase);
        Ok(self)
    }

    pub fn phases(&self) -> &[AnimationPhase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Sum of all phase durations.
    pub fn total_duration(&self) -> f64 {
        self.phases.iter().map(AnimationPhase::duration).sum()
    }

    /// Distinct stages in the order they will be entered, excluding `Init`/`Done`.
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages: Vec<Stage> = self.phases.iter().map(|phase| phase.stage).collect();
        stages.dedup();
        stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Easing, Effect, SceneObject};

    fn interpolate(parameter: Parameter, target: f64) -> Animation {
        Animation::Interpolate {
            parameter,
            target,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_rejects_bad_durations() {
        let mut timeline = Timeline::new();
        assert!(matches!(
            timeline.hold(Stage::ShowAxes, -2.0),
            Err(Error::InvalidDuration { what: "hold", .. })
        ));
        assert!(timeline.play(Stage::ShowAxes, vec![], f64::NAN).is_err());
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_rejects_non_finite_target() {
        let mut timeline = Timeline::new();
        let result = timeline.play(
            Stage::ChangeAmplitude,
            vec![interpolate(Parameter::Amplitude, f64::INFINITY)],
            1.0,
        );
        assert!(matches!(
            result,
            Err(Error::NonFiniteValue {
                parameter: Parameter::Amplitude,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_overlapping_writes() {
        let mut timeline = Timeline::new();
        let result = timeline.play(
            Stage::ChangePhase,
            vec![
                interpolate(Parameter::Phase, 1.0),
                interpolate(Parameter::Phase, 2.0),
            ],
            1.0,
        );
        assert!(matches!(result, Err(Error::ConflictingWrites { .. })));

        // Different parameters in one phase are fine
        assert!(
            timeline
                .play(
                    Stage::ChangePhase,
                    vec![
                        interpolate(Parameter::Phase, 1.0),
                        interpolate(Parameter::Frequency, 2.0),
                    ],
                    1.0,
                )
                .is_ok()
        );
    }

    #[test]
    fn test_relabels_are_checked_like_interpolations() {
        let mut timeline = Timeline::new();
        let result = timeline.play(
            Stage::ChangePhase,
            vec![Animation::Relabel {
                parameter: Parameter::Phase,
                value: f64::NAN,
            }],
            1.0,
        );
        assert!(matches!(
            result,
            Err(Error::NonFiniteValue {
                parameter: Parameter::Phase,
                ..
            })
        ));

        let relabel = |value| Animation::Relabel {
            parameter: Parameter::Frequency,
            value,
        };
        let result = timeline.play(
            Stage::ChangeFrequency,
            vec![relabel(1.0), relabel(2.0)],
            1.0,
        );
        assert!(matches!(
            result,
            Err(Error::ConflictingWrites {
                parameter: Parameter::Frequency,
                stage: Stage::ChangeFrequency,
            })
        ));

        // An interpolation and a relabel of one parameter belong together
        assert!(
            timeline
                .play(
                    Stage::ChangeFrequency,
                    vec![interpolate(Parameter::Frequency, 2.0), relabel(2.0)],
                    1.0,
                )
                .is_ok()
        );
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_stage_ordering() {
        let mut timeline = Timeline::new();
        timeline.hold(Stage::ShowLabels, 1.0).unwrap();
        timeline.hold(Stage::ShowLabels, 1.0).unwrap();
        assert!(matches!(
            timeline.hold(Stage::ShowAxes, 1.0),
            Err(Error::StageOrder {
                stage: Stage::ShowAxes,
                previous: Stage::ShowLabels,
            })
        ));
        assert!(timeline.hold(Stage::Done, 1.0).is_err());
        assert!(Timeline::new().hold(Stage::Init, 1.0).is_err());
    }

    #[test]
    fn test_stages_and_duration() {
        let mut timeline = Timeline::new();
        timeline
            .play(
                Stage::ShowAxes,
                vec![Animation::Reveal {
                    object: SceneObject::Axes,
                    effect: Effect::Create,
                }],
                1.0,
            )
            .unwrap()
            .hold(Stage::ShowAxes, 2.0)
            .unwrap()
            .hold(Stage::Teardown, 0.5)
            .unwrap();

        assert_eq!(timeline.stages(), vec![Stage::ShowAxes, Stage::Teardown]);
        assert_eq!(timeline.total_duration(), 3.5);
    }
}
