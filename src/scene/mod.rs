//! The scripted continuous-time signal scene.
//!
//! This module provides:
//! - `SceneConfig`, every constant the script uses, validated before anything runs
//! - `continuous_time_signal`, the scripted timeline
//! - `Scene`, which owns the parameter store, curve binding and labels and
//!   drives a `Renderer` frame by frame until the timeline is done

mod config;
mod player;
mod script;

pub use config::SceneConfig;
pub use player::{RunSummary, Scene};
pub use script::{AXIS_LABELS, continuous_time_signal};
