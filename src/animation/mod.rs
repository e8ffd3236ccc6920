//! Time-sequenced animation of the scene.
//!
//! This module provides:
//! - `Easing` rate functions for parameter interpolation
//! - the scene vocabulary: `Stage`, `SceneObject`, `Effect`, `Animation`, `AnimationPhase`
//! - `Timeline`, a validated ordered list of phases
//! - `Sequencer`, which executes a timeline frame by frame

mod easing;
mod phase;
mod sequencer;
mod timeline;

pub use easing::Easing;
pub use phase::{Animation, AnimationPhase, Effect, PhaseKind, SceneObject, Stage};
pub use sequencer::{Cue, FrameClock, PlayState, Sequencer, Tick};
pub use timeline::Timeline;
