//! Owning the scene state and driving a renderer through the timeline.

use tracing::{debug, info};

use super::{AXIS_LABELS, SceneConfig, continuous_time_signal};
use crate::animation::{Cue, SceneObject, Sequencer, Stage, Timeline};
use crate::coords::{Axes, AxisLabel, CoordinateSystem};
use crate::curve::ReactiveCurveBinding;
use crate::labels::LabelBinding;
use crate::render::{Frame, Renderer};
use crate::{Parameter, ParameterStore, Result};

/// Outcome of running a scene to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Stages entered, from `Init` to `Done`
    pub stages: Vec<Stage>,
    /// Frames handed to the renderer
    pub frames: u64,
    /// Parameter values at the end of the run
    pub store: ParameterStore,
}

/// The continuous-time signal scene.
///
/// `Scene` performs the `Init` stage on construction: it validates the
/// configuration, creates the parameter store, axes, curve binding and labels,
/// and builds the scripted timeline. `run` (or repeated `step` calls) then acts
/// as the render loop owner, calling the curve binding once per frame.
///
/// # Examples
///
/// ```
/// use wavescene::animation::Stage;
/// use wavescene::render::Recorder;
/// use wavescene::scene::{Scene, SceneConfig};
/// use wavescene::Parameter;
///
/// let mut scene = Scene::new(SceneConfig::default().with_frame_rate(10.0)).unwrap();
/// let mut recorder = Recorder::new();
/// let summary = scene.run(&mut recorder).unwrap();
///
/// assert_eq!(summary.stages.first(), Some(&Stage::Init));
/// assert_eq!(summary.stages.last(), Some(&Stage::Done));
/// assert_eq!(summary.store.get(Parameter::Frequency), 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct Scene {
    store: ParameterStore,
    axes: Axes,
    axis_labels: [AxisLabel; 2],
    binding: ReactiveCurveBinding,
    labels: LabelBinding,
    sequencer: Sequencer,
    visible: Vec<SceneObject>,
}

impl Scene {
    /// Builds the scripted scene from `config`.
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem found; nothing is clamped.
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let timeline = continuous_time_signal(&config)?;
        Self::with_timeline(config, timeline)
    }

    /// Builds a scene that plays a custom timeline with the configured store,
    /// axes and curve.
    pub fn with_timeline(config: SceneConfig, timeline: Timeline) -> Result<Self> {
        config.validate()?;
        let store = config.initial;
        let axes = config.axes()?;
        let binding = ReactiveCurveBinding::new(config.sampler()?, &store, &axes);
        let mut labels = LabelBinding::new(&store);
        labels.register_symbol(Parameter::Phase, config.phase_target);
        let sequencer = Sequencer::new(timeline, config.frame_rate)?;

        info!(
            phases = sequencer.timeline().len(),
            frames = sequencer.total_frames(),
            "scene initialised"
        );

        Ok(Self {
            store,
            axis_labels: axes.axis_labels(AXIS_LABELS.0, AXIS_LABELS.1),
            axes,
            binding,
            labels,
            sequencer,
            visible: Vec::new(),
        })
    }

    fn handle_cue(&mut self, cue: Cue, renderer: &mut impl Renderer) -> Result<()> {
        match cue {
            Cue::StageEntered(stage) => renderer.enter_stage(stage),
            Cue::Reveal {
                object,
                effect,
                run_time,
            } => {
                if object == SceneObject::Curve {
                    debug!("attaching curve binding");
                    self.binding.attach();
                }
                if !self.visible.contains(&object) {
                    self.visible.push(object);
                }
                renderer.reveal(object, effect, run_time)
            }
            Cue::Conceal {
                object,
                effect,
                run_time,
            } => {
                if object == SceneObject::Curve {
                    debug!("detaching curve binding");
                    self.binding.detach();
                }
                self.visible.retain(|visible| *visible != object);
                renderer.conceal(object, effect, run_time)
            }
            Cue::Transform(transition) => renderer.transform(&transition),
            Cue::Hold(duration) => renderer.hold(duration),
        }
    }

    /// Advances the scene by one frame, forwarding requests and the frame to
    /// `renderer`.
    ///
    /// Returns `false` once the scene has reached `Done`.
    pub fn step(&mut self, renderer: &mut impl Renderer) -> Result<bool> {
        let tick = self.sequencer.tick(&mut self.store, &mut self.labels)?;
        for cue in tick.cues {
            self.handle_cue(cue, renderer)?;
        }

        let Some(clock) = tick.frame else {
            return Ok(false);
        };

        self.binding.on_frame(&self.store, &self.axes);
        renderer.draw_frame(&Frame {
            clock,
            store: &self.store,
            samples: self.binding.points(),
            curve: self.binding.geometry(),
            labels: &self.labels,
            axis_labels: &self.axis_labels,
            visible: &self.visible,
        })?;
        Ok(true)
    }

    /// Runs the scene to completion.
    pub fn run(&mut self, renderer: &mut impl Renderer) -> Result<RunSummary> {
        while self.step(renderer)? {}

        info!(frames = self.sequencer.frame_index(), "scene finished");
        Ok(RunSummary {
            stages: self.sequencer.trace().to_vec(),
            frames: self.sequencer.frame_index(),
            store: self.store,
        })
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn binding(&self) -> &ReactiveCurveBinding {
        &self.binding
    }

    pub fn labels(&self) -> &LabelBinding {
        &self.labels
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn stage(&self) -> Stage {
        self.sequencer.stage()
    }

    pub fn visible(&self) -> &[SceneObject] {
        &self.visible
    }

    pub fn is_finished(&self) -> bool {
        self.sequencer.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::animation::Effect;
    use crate::labels::LabelTransition;
    use crate::render::{Recorder, RenderCommand};

    /// Accepts every request but fails to draw once `budget` frames are spent.
    struct FailingRenderer {
        budget: u64,
    }

    impl Renderer for FailingRenderer {
        fn reveal(&mut self, _: SceneObject, _: Effect, _: f64) -> Result<()> {
            Ok(())
        }

        fn conceal(&mut self, _: SceneObject, _: Effect, _: f64) -> Result<()> {
            Ok(())
        }

        fn transform(&mut self, _: &LabelTransition) -> Result<()> {
            Ok(())
        }

        fn hold(&mut self, _: f64) -> Result<()> {
            Ok(())
        }

        fn draw_frame(&mut self, _: &Frame<'_>) -> Result<()> {
            if self.budget == 0 {
                return Err(Error::Render("display lost".to_string()));
            }
            self.budget -= 1;
            Ok(())
        }
    }

    fn scene() -> Scene {
        Scene::new(SceneConfig::default().with_frame_rate(10.0)).unwrap()
    }

    #[test]
    fn test_init_state() {
        let scene = scene();
        assert_eq!(scene.stage(), Stage::Init);
        assert_eq!(*scene.store(), ParameterStore::default());
        assert!(!scene.binding().is_attached());
        assert!(scene.visible().is_empty());
        assert_eq!(scene.labels().current(Parameter::Phase).text, "φ = 0");
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let result = Scene::new(SceneConfig::default().with_resolution(0));
        assert!(matches!(result, Err(Error::InvalidResolution(0))));
    }

    #[test]
    fn test_binding_attaches_with_curve() {
        let mut scene = scene();
        let mut recorder = Recorder::new();
        while scene.stage() != Stage::ShowInitialCurve {
            scene.step(&mut recorder).unwrap();
        }
        assert!(scene.binding().is_attached());
        assert!(scene.visible().contains(&SceneObject::Curve));
    }

    #[test]
    fn test_run_to_completion() {
        let mut scene = scene();
        let mut recorder = Recorder::new();
        let summary = scene.run(&mut recorder).unwrap();

        assert_eq!(summary.stages, Stage::ORDER.to_vec());
        assert_eq!(summary.frames, 180);
        assert_eq!(recorder.frames().count(), 180);
        assert!(scene.is_finished());
        assert!(scene.visible().is_empty());
        assert!(!scene.binding().is_attached());

        // Only Init is never announced to the renderer
        assert_eq!(recorder.stages(), Stage::ORDER[1..].to_vec());
    }

    #[test]
    fn test_step_after_done_fails() {
        let mut scene = scene();
        let mut recorder = Recorder::new();
        scene.run(&mut recorder).unwrap();
        assert!(matches!(
            scene.step(&mut recorder),
            Err(Error::SequenceFinished)
        ));
    }

    #[test]
    fn test_hold_requests_reach_renderer() {
        let mut scene = scene();
        let mut recorder = Recorder::new();
        scene.run(&mut recorder).unwrap();

        let holds: Vec<f64> = recorder
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Hold(duration) => Some(*duration),
                _ => None,
            })
            .collect();
        assert_eq!(holds, vec![2.0, 2.0, 2.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_render_failure_stops_the_run() {
        let mut scene = scene();
        let mut renderer = FailingRenderer { budget: 3 };
        let result = scene.run(&mut renderer);
        assert!(matches!(
            result,
            Err(Error::Render(message)) if message == "display lost"
        ));
        assert_ne!(scene.stage(), Stage::Done);
        assert!(scene.step(&mut renderer).is_err());
    }
}
