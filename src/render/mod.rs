//! The seam to the rendering collaborator.
//!
//! The crate never produces pixels. A `Renderer` receives reveal, conceal,
//! transform and hold requests at phase boundaries, and a `Frame` snapshot for
//! every rendered frame. `Recorder` is a renderer that simply keeps everything
//! it is sent.

mod recorder;

pub use recorder::{FrameRecord, Recorder, RenderCommand};

use crate::ParameterStore;
use crate::Result;
use crate::animation::{Effect, FrameClock, SceneObject, Stage};
use crate::coords::{AxisLabel, RenderPoint};
use crate::curve::CurvePoint;
use crate::labels::{LabelBinding, LabelTransition};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub clock: FrameClock,
    /// Parameter values this frame was sampled with
    pub store: &'a ParameterStore,
    /// Curve samples in domain coordinates
    pub samples: &'a [CurvePoint],
    /// Curve samples in render space
    pub curve: &'a [RenderPoint],
    pub labels: &'a LabelBinding,
    pub axis_labels: &'a [AxisLabel],
    /// Objects currently on screen
    pub visible: &'a [SceneObject],
}

/// Receives drawing requests from a running scene.
///
/// Requests arrive in scene order: all requests for a phase come before that
/// phase's first frame, and phases never overlap.
pub trait Renderer {
    /// Called when the scene enters a new stage.
    fn enter_stage(&mut self, _stage: Stage) -> Result<()> {
        Ok(())
    }

    /// Brings `object` on screen over `run_time`.
    fn reveal(&mut self, object: SceneObject, effect: Effect, run_time: f64) -> Result<()>;

    /// Takes `object` off screen over `run_time`.
    fn conceal(&mut self, object: SceneObject, effect: Effect, run_time: f64) -> Result<()>;

    /// Morphs one label into another over the transition's duration.
    fn transform(&mut self, transition: &LabelTransition) -> Result<()>;

    /// Keeps the scene static for `duration`.
    fn hold(&mut self, duration: f64) -> Result<()>;

    /// Draws one frame.
    fn draw_frame(&mut self, frame: &Frame<'_>) -> Result<()>;
}
