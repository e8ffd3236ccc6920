//! A renderer that records every request it receives.

use super::{Frame, Renderer};
use crate::ParameterStore;
use crate::Result;
use crate::animation::{Effect, FrameClock, SceneObject, Stage};
use crate::curve::CurvePoint;
use crate::labels::LabelTransition;

/// Owned copy of a rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub clock: FrameClock,
    pub store: ParameterStore,
    pub samples: Vec<CurvePoint>,
    pub visible: Vec<SceneObject>,
}

/// One request as received by a `Recorder`.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    EnterStage(Stage),
    Reveal {
        object: SceneObject,
        effect: Effect,
        run_time: f64,
    },
    Conceal {
        object: SceneObject,
        effect: Effect,
        run_time: f64,
    },
    Transform(LabelTransition),
    Hold(f64),
    Frame(FrameRecord),
}

/// Records every request for later inspection.
///
/// # Examples
///
/// ```
/// use wavescene::render::{Recorder, RenderCommand, Renderer};
/// use wavescene::animation::{Effect, SceneObject};
///
/// let mut recorder = Recorder::new();
/// recorder.reveal(SceneObject::Axes, Effect::Create, 1.0).unwrap();
/// recorder.hold(2.0).unwrap();
///
/// assert_eq!(recorder.commands().len(), 2);
/// assert_eq!(recorder.commands()[1], RenderCommand::Hold(2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Vec<RenderCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Recorded frames in order.
    pub fn frames(&self) -> impl Iterator<Item = &FrameRecord> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Frame(frame) => Some(frame),
            _ => None,
        })
    }

    /// Stages entered, in order.
    pub fn stages(&self) -> Vec<Stage> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::EnterStage(stage) => Some(*stage),
                _ => None,
            })
            .collect()
    }

    /// Label transforms, in order.
    pub fn transforms(&self) -> Vec<&LabelTransition> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Transform(transition) => Some(transition),
                _ => None,
            })
            .collect()
    }

    /// The last frame rendered while `stage` was active.
    pub fn last_frame_in(&self, stage: Stage) -> Option<&FrameRecord> {
        self.frames().filter(|frame| frame.clock.stage == stage).last()
    }
}

impl Renderer for Recorder {
    fn enter_stage(&mut self, stage: Stage) -> Result<()> {
        self.commands.push(RenderCommand::EnterStage(stage));
        Ok(())
    }

    fn reveal(&mut self, object: SceneObject, effect: Effect, run_time: f64) -> Result<()> {
        self.commands.push(RenderCommand::Reveal {
            object,
            effect,
            run_time,
        });
        Ok(())
    }

    fn conceal(&mut self, object: SceneObject, effect: Effect, run_time: f64) -> Result<()> {
        self.commands.push(RenderCommand::Conceal {
            object,
            effect,
            run_time,
        });
        Ok(())
    }

    fn transform(&mut self, transition: &LabelTransition) -> Result<()> {
        self.commands.push(RenderCommand::Transform(transition.clone()));
        Ok(())
    }

    fn hold(&mut self, duration: f64) -> Result<()> {
        self.commands.push(RenderCommand::Hold(duration));
        Ok(())
    }

    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.commands.push(RenderCommand::Frame(FrameRecord {
            clock: frame.clock,
            store: *frame.store,
            samples: frame.samples.to_vec(),
            visible: frame.visible.to_vec(),
        }));
        Ok(())
    }
}
