//! The continuous-time signal script.

use super::SceneConfig;
use crate::Parameter;
use crate::Result;
use crate::animation::{Animation, Effect, SceneObject, Stage, Timeline};

/// Labels for the horizontal and vertical axes.
pub const AXIS_LABELS: (&str, &str) = ("t", "Amplitude");

fn reveal(object: SceneObject, effect: Effect) -> Animation {
    Animation::Reveal { object, effect }
}

fn fade_out(object: SceneObject) -> Animation {
    Animation::Conceal {
        object,
        effect: Effect::FadeOut,
    }
}

/// Interpolates `parameter` to `target` while morphing its label.
fn change(config: &SceneConfig, parameter: Parameter, target: f64) -> Vec<Animation> {
    vec![
        Animation::Interpolate {
            parameter,
            target,
            easing: config.easing,
        },
        Animation::Relabel {
            parameter,
            value: target,
        },
    ]
}

/// Builds the scripted timeline.
///
/// Axes and axis labels appear, then the curve and its equation, then the
/// three parameter readouts. Amplitude, phase and frequency are then changed in
/// that order, each followed by a hold, and finally everything fades out.
///
/// # Examples
///
/// ```
/// use wavescene::animation::Stage;
/// use wavescene::scene::{SceneConfig, continuous_time_signal};
///
/// let timeline = continuous_time_signal(&SceneConfig::default()).unwrap();
/// assert_eq!(timeline.stages().first(), Some(&Stage::ShowAxes));
/// assert_eq!(timeline.total_duration(), 18.0);
/// ```
pub fn continuous_time_signal(config: &SceneConfig) -> Result<Timeline> {
    use Parameter::{Amplitude, Frequency, Phase};

    let run_time = config.run_time;
    let mut timeline = Timeline::new();

    timeline
        .play(
            Stage::ShowAxes,
            vec![
                reveal(SceneObject::Axes, Effect::Create),
                reveal(SceneObject::AxisLabels, Effect::Write),
            ],
            run_time,
        )?
        .hold(Stage::ShowAxes, config.hold)?
        .play(
            Stage::ShowInitialCurve,
            vec![
                reveal(SceneObject::Curve, Effect::Create),
                reveal(SceneObject::Equation, Effect::Write),
            ],
            run_time,
        )?
        .hold(Stage::ShowInitialCurve, config.hold)?
        .play(
            Stage::ShowLabels,
            [Amplitude, Phase, Frequency]
                .map(|parameter| reveal(SceneObject::ParameterLabel(parameter), Effect::FadeIn))
                .to_vec(),
            run_time,
        )?
        .play(
            Stage::ChangeAmplitude,
            change(config, Amplitude, config.amplitude_target),
            run_time,
        )?
        .hold(Stage::ChangeAmplitude, config.hold)?
        .play(
            Stage::ChangePhase,
            change(config, Phase, config.phase_target.value),
            run_time,
        )?
        .hold(Stage::ChangePhase, config.hold)?
        .play(
            Stage::ChangeFrequency,
            change(config, Frequency, config.frequency_target),
            run_time,
        )?
        .hold(Stage::ChangeFrequency, config.hold)?
        .play(
            Stage::Teardown,
            vec![
                fade_out(SceneObject::Curve),
                fade_out(SceneObject::ParameterLabel(Amplitude)),
                fade_out(SceneObject::ParameterLabel(Frequency)),
                fade_out(SceneObject::ParameterLabel(Phase)),
                fade_out(SceneObject::Axes),
                fade_out(SceneObject::AxisLabels),
                fade_out(SceneObject::Equation),
            ],
            run_time,
        )?
        .hold(Stage::Teardown, config.final_hold)?;

    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::PhaseKind;

    #[test]
    fn test_stage_order() {
        let timeline = continuous_time_signal(&SceneConfig::default()).unwrap();
        assert_eq!(
            timeline.stages(),
            Stage::ORDER[1..Stage::ORDER.len() - 1].to_vec()
        );
    }

    #[test]
    fn test_show_labels_has_no_hold() {
        let timeline = continuous_time_signal(&SceneConfig::default()).unwrap();
        let phases: Vec<_> = timeline
            .phases()
            .iter()
            .filter(|phase| phase.stage == Stage::ShowLabels)
            .collect();
        assert_eq!(phases.len(), 1);
        assert!(!phases[0].is_hold());
        assert_eq!(phases[0].animations().len(), 3);
    }

    #[test]
    fn test_change_phases_pair_interpolation_with_relabel() {
        let config = SceneConfig::default();
        let timeline = continuous_time_signal(&config).unwrap();

        for (stage, parameter, target) in [
            (Stage::ChangeAmplitude, Parameter::Amplitude, 2.0),
            (Stage::ChangePhase, Parameter::Phase, config.phase_target.value),
            (Stage::ChangeFrequency, Parameter::Frequency, 2.0),
        ] {
            let phases: Vec<_> = timeline
                .phases()
                .iter()
                .filter(|phase| phase.stage == stage)
                .collect();
            assert_eq!(phases.len(), 2);
            assert_eq!(phases[1].kind, PhaseKind::Hold { duration: 2.0 });
            assert_eq!(
                phases[0].animations(),
                &[
                    Animation::Interpolate {
                        parameter,
                        target,
                        easing: config.easing,
                    },
                    Animation::Relabel {
                        parameter,
                        value: target,
                    },
                ]
            );
        }
    }

    #[test]
    fn test_teardown_conceals_everything() {
        let timeline = continuous_time_signal(&SceneConfig::default()).unwrap();
        let teardown = timeline
            .phases()
            .iter()
            .find(|phase| phase.stage == Stage::Teardown)
            .unwrap();
        assert_eq!(teardown.animations().len(), 7);
        assert!(
            teardown
                .animations()
                .iter()
                .all(|animation| matches!(animation, Animation::Conceal { .. }))
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SceneConfig::default().with_hold(-2.0);
        assert!(continuous_time_signal(&config).is_err());
    }
}
