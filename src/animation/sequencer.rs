//! Frame-stepped execution of a timeline.
//!
//! The `Sequencer` walks a `Timeline` one rendered frame at a time. At each
//! phase boundary it emits `Cue`s for the renderer (stage changes, reveals,
//! conceals, label transforms, holds); on every frame it writes interpolated
//! parameter values into the store.

use tracing::{debug, info, trace};

use super::{Animation, Easing, Effect, PhaseKind, SceneObject, Stage, Timeline};
use crate::labels::{LabelBinding, LabelTransition};
use crate::{Error, Parameter, ParameterStore, Result};

/// Playback state of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// Constructed, no frame produced yet
    Ready,
    Playing,
    /// `Done` has been entered; further ticks are errors
    Finished,
}

/// A request for the rendering collaborator, issued at a phase boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    StageEntered(Stage),
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
}

/// Timing of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// 1-based frame number since the start of the run
    pub index: u64,
    /// Scene time at the end of this frame
    pub time: f64,
    pub stage: Stage,
    /// Progress through the current phase, reaching exactly 1.0 on its last frame
    pub progress: f64,
}

/// Result of advancing the sequencer by one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Requests issued before this frame, in order
    pub cues: Vec<Cue>,
    /// The frame to render, or `None` once the sequence has reached `Done`
    pub frame: Option<FrameClock>,
}

#[derive(Debug, Clone, Copy)]
struct Interpolation {
    parameter: Parameter,
    from: f64,
    to: f64,
    easing: Easing,
}

impl Interpolation {
    fn value_at(&self, progress: f64) -> f64 {
        self.easing.interpolate(self.from, self.to, progress)
    }
}

#[derive(Debug, Clone)]
struct ActivePhase {
    frame: u64,
    frames: u64,
    interpolations: Vec<Interpolation>,
}

impl ActivePhase {
    fn apply(&self, store: &mut ParameterStore, progress: f64) {
        for interpolation in &self.interpolations {
            store.set(interpolation.parameter, interpolation.value_at(progress));
        }
    }
}

/// Number of frames a phase of `duration` occupies, or `None` if the count
/// does not fit in a `u64`. Any positive duration gets at least one frame.
fn frames_for(duration: f64, frame_rate: f64) -> Option<u64> {
    if duration == 0.0 {
        return Some(0);
    }
    let frames = (duration * frame_rate).round();
    if frames < u64::MAX as f64 {
        Some((frames as u64).max(1))
    } else {
        None
    }
}

/// Runs a timeline's phases strictly in sequence, one frame per `tick`.
///
/// Interpolations start from whatever value the store holds when their phase
/// begins and finish exactly on the scripted target. Label transforms are taken
/// from the `LabelBinding` when the phase starts, so labels change at phase
/// boundaries only.
///
/// # Examples
///
/// ```
/// use wavescene::animation::{Animation, Easing, Sequencer, Stage, Timeline};
/// use wavescene::labels::LabelBinding;
/// use wavescene::{Parameter, ParameterStore};
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
///     .unwrap();
///
/// let mut store = ParameterStore::default();
/// let mut labels = LabelBinding::new(&store);
/// let mut sequencer = Sequencer::new(timeline, 10.0).unwrap();
///
/// while !sequencer.is_finished() {
///     sequencer.tick(&mut store, &mut labels).unwrap();
/// }
///
/// assert_eq!(store.get(Parameter::Amplitude), 2.0);
/// assert_eq!(
///     sequencer.trace(),
///     &[Stage::Init, Stage::ChangeAmplitude, Stage::Done]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Sequencer {
    timeline: Timeline,
    frame_rate: f64,
    /// Frame count of each phase
    frames: Vec<u64>,
    total_frames: u64,
    state: PlayState,
    stage: Stage,
    trace: Vec<Stage>,
    next_phase: usize,
    active: Option<ActivePhase>,
    frame_index: u64,
}

impl Sequencer {
    /// Creates a sequencer in the `Init` stage.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrameRate` unless `frame_rate` is finite and positive,
    /// and `Error::InvalidDuration` if a phase is too long to count in frames.
    pub fn new(timeline: Timeline, frame_rate: f64) -> Result<Self> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(Error::InvalidFrameRate(frame_rate));
        }

        let mut frames = Vec::with_capacity(timeline.len());
        let mut total_frames: u64 = 0;
        for phase in timeline.phases() {
            let count = frames_for(phase.duration(), frame_rate);
            match count.and_then(|count| total_frames.checked_add(count)) {
                Some(total) => total_frames = total,
                None => {
                    return Err(Error::InvalidDuration {
                        what: "phase frame count",
                        duration: phase.duration(),
                    });
                }
            }
            frames.extend(count);
        }

        Ok(Self {
            timeline,
            frame_rate,
            frames,
            total_frames,
            state: PlayState::Ready,
            stage: Stage::Init,
            trace: vec![Stage::Init],
            next_phase: 0,
            active: None,
            frame_index: 0,
        })
    }

    /// Total frames the whole timeline will produce.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    fn enter(&mut self, stage: Stage, cues: &mut Vec<Cue>) {
        if stage == self.stage {
            return;
        }
        info!(%stage, "entering stage");
        self.stage = stage;
        self.trace.push(stage);
        cues.push(Cue::StageEntered(stage));
    }

    fn start_phase(
        &mut self,
        store: &ParameterStore,
        labels: &mut LabelBinding,
        cues: &mut Vec<Cue>,
    ) {
        let index = self.next_phase;
        self.next_phase += 1;
        let phase = self.timeline.phases()[index].clone();
        let frames = self.frames[index];

        self.enter(phase.stage, cues);
        debug!(
            phase = index,
            hold = phase.is_hold(),
            duration = phase.duration(),
            frames,
            "starting phase"
        );

        let mut interpolations = Vec::new();
        match phase.kind {
            PhaseKind::Hold { duration } => cues.push(Cue::Hold(duration)),
            PhaseKind::Play {
                animations,
                run_time,
            } => {
                for animation in animations {
                    match animation {
                        Animation::Reveal { object, effect } => cues.push(Cue::Reveal {
                            object,
                            effect,
                            run_time,
                        }),
                        Animation::Conceal { object, effect } => cues.push(Cue::Conceal {
                            object,
                            effect,
                            run_time,
                        }),
                        Animation::Interpolate {
                            parameter,
                            target,
                            easing,
                        } => interpolations.push(Interpolation {
                            parameter,
                            from: store.get(parameter),
                            to: target,
                            easing,
                        }),
                        Animation::Relabel { parameter, value } => {
                            cues.push(Cue::Transform(
                                labels.transition_to(parameter, value, run_time),
                            ));
                        }
                    }
                }
            }
        }

        self.active = Some(ActivePhase {
            frame: 0,
            frames,
            interpolations,
        });
    }

    /// Advances by one rendered frame.
    ///
    /// Starts the next phase if needed (collecting its cues), writes this
    /// frame's interpolated values into `store`, and returns the frame. Phases
    /// of zero duration complete instantly without producing a frame. After the
    /// last phase the sequencer enters `Done` and returns a tick without a frame.
    ///
    /// # Errors
    ///
    /// Returns `Error::SequenceFinished` if called after `Done` was entered.
    pub fn tick(&mut self, store: &mut ParameterStore, labels: &mut LabelBinding) -> Result<Tick> {
        if self.state == PlayState::Finished {
            return Err(Error::SequenceFinished);
        }
        self.state = PlayState::Playing;

        let mut cues = Vec::new();
        loop {
            if self.active.is_none() {
                if self.next_phase == self.timeline.len() {
                    self.enter(Stage::Done, &mut cues);
                    self.state = PlayState::Finished;
                    return Ok(Tick { cues, frame: None });
                }
                self.start_phase(store, labels, &mut cues);
            }

            let Some(active) = self.active.as_mut() else {
                continue;
            };

            if active.frames == 0 {
                active.apply(store, 1.0);
                self.active = None;
                continue;
            }

            active.frame += 1;
            let progress = active.frame as f64 / active.frames as f64;
            active.apply(store, progress);
            let phase_complete = active.frame == active.frames;

            self.frame_index += 1;
            let frame = FrameClock {
                index: self.frame_index,
                time: self.frame_index as f64 / self.frame_rate,
                stage: self.stage,
                progress,
            };
            trace!(frame = frame.index, progress, "frame");

            if phase_complete {
                self.active = None;
            }
            return Ok(Tick {
                cues,
                frame: Some(frame),
            });
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlayState::Finished
    }

    /// The stage currently executing.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Every stage entered so far, starting with `Init`.
    pub fn trace(&self) -> &[Stage] {
        &self.trace
    }

    /// Frames produced so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}
