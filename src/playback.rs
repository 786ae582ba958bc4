//! Time-apportioned viseme playback scheduling.
//!
//! The TTS collaborator supplies one total clip duration, not per-phoneme
//! timing, so playback approximates lip-sync by dividing time evenly
//! across words and then evenly across each word's stress-expanded frames.
//! A five-syllable word gets the same budget as a one-syllable word; that
//! is a documented approximation, not something to correct against real
//! phonetic durations.

use crate::sequence::VisemeSequence;
use crate::sink::AvatarSink;
use crate::viseme::Viseme;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Where a playback run currently stands.
///
/// `Stopped` is terminal for a run; a new [`PlaybackScheduler::start`]
/// reinitializes from scratch. Indices only ever advance (frame, then
/// word); a run never rewinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Scheduled {
        word_index: usize,
        frame_index: usize,
    },
    Stopped,
}

/// State owned exclusively by one scheduler instance.
struct PlaybackState {
    phase: Phase,
    sequence: VisemeSequence,
    total_duration: Duration,
    /// Monotonically increasing run generation. A wake-up whose generation
    /// no longer matches the state is stale and must not emit.
    generation: u64,
    cancel: CancellationToken,
    /// Non-owning reference to the animation runtime. Emission to a
    /// torn-down sink is a no-op.
    sink: Option<Weak<dyn AvatarSink>>,
}

/// Single-timeline scheduler emitting viseme updates in lock-step with a
/// speech clip of known duration.
///
/// At most one wake-up is pending at any time. Emissions are strictly
/// sequential; if the host stalls, frames lag but are never skipped or
/// reordered. Must be used from within a tokio runtime.
pub struct PlaybackScheduler {
    state: Arc<Mutex<PlaybackState>>,
}

impl PlaybackScheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(PlaybackState {
                phase: Phase::Idle,
                sequence: Vec::new(),
                total_duration: Duration::ZERO,
                generation: 0,
                cancel: CancellationToken::new(),
                sink: None,
            })),
        }
    }

    /// Begin a playback run.
    ///
    /// Any in-flight run is stopped first: new utterances preempt, they
    /// never queue. A non-positive (or non-finite) duration or an empty
    /// sequence emits the neutral shape and transitions straight to
    /// `Stopped` without arming a timer. Otherwise the first frame is
    /// emitted synchronously and one wake-up is armed per frame boundary.
    ///
    /// The scheduler keeps only a weak reference to `sink`; the caller
    /// owns its lifetime.
    pub fn start(
        &self,
        sequence: VisemeSequence,
        total_duration_secs: f64,
        sink: &Arc<dyn AvatarSink>,
    ) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        if matches!(state.phase, Phase::Scheduled { .. }) {
            debug!("preempting in-flight lip-sync run");
            state.cancel.cancel();
            emit(&state.sink, Viseme::Neutral);
        }
        state.generation += 1;
        state.sink = Some(Arc::downgrade(sink));

        let schedulable = total_duration_secs.is_finite()
            && total_duration_secs > 0.0
            && !sequence.is_empty()
            && !sequence[0].is_empty();
        if !schedulable {
            debug!(
                words = sequence.len(),
                total_secs = total_duration_secs,
                "nothing to schedule, resting the mouth"
            );
            state.phase = Phase::Stopped;
            state.sequence = Vec::new();
            emit(&state.sink, Viseme::Neutral);
            return;
        }

        state.phase = Phase::Scheduled {
            word_index: 0,
            frame_index: 0,
        };
        state.sequence = sequence;
        state.total_duration = Duration::from_secs_f64(total_duration_secs);
        state.cancel = CancellationToken::new();

        info!(
            words = state.sequence.len(),
            total_secs = total_duration_secs,
            "lip-sync playback started"
        );
        emit(&state.sink, state.sequence[0][0]);

        let generation = state.generation;
        let cancel = state.cancel.clone();
        let interval = frame_interval(&state);
        drop(state);

        tokio::spawn(run(Arc::clone(&self.state), generation, cancel, interval));
    }

    /// Cancel the pending wake-up and rest the mouth.
    ///
    /// The neutral emission happens within this call, atomically with the
    /// cancellation: once `stop()` returns, no further emission from the
    /// cancelled run can be observed. Safe from any state, including
    /// `Idle` and repeated calls from `Stopped`.
    pub fn stop(&self) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        if matches!(state.phase, Phase::Scheduled { .. }) {
            debug!("lip-sync playback stopped");
        }
        state.cancel.cancel();
        state.generation += 1;
        state.phase = Phase::Stopped;
        emit(&state.sink, Viseme::Neutral);
    }

    /// Whether a run is currently scheduled.
    pub fn is_active(&self) -> bool {
        self.state
            .lock()
            .map(|state| matches!(state.phase, Phase::Scheduled { .. }))
            .unwrap_or(false)
    }
}

impl Default for PlaybackScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Wake-up loop for one run: sleep to the next frame boundary, advance,
/// emit. Exits silently when cancelled or stale.
async fn run(
    shared: Arc<Mutex<PlaybackState>>,
    generation: u64,
    cancel: CancellationToken,
    first_interval: Duration,
) {
    let mut interval = first_interval;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(interval) => {}
        }

        let Ok(mut state) = shared.lock() else {
            return;
        };
        if state.generation != generation {
            return;
        }
        let Phase::Scheduled {
            word_index,
            frame_index,
        } = state.phase
        else {
            return;
        };

        let frames_in_word = state.sequence[word_index].len();
        let (word_index, frame_index) = if frame_index + 1 < frames_in_word {
            (word_index, frame_index + 1)
        } else {
            (word_index + 1, 0)
        };

        if word_index >= state.sequence.len() || state.sequence[word_index].is_empty() {
            state.phase = Phase::Stopped;
            emit(&state.sink, Viseme::Neutral);
            info!("lip-sync playback complete");
            return;
        }

        state.phase = Phase::Scheduled {
            word_index,
            frame_index,
        };
        emit(&state.sink, state.sequence[word_index][frame_index]);
        interval = frame_interval(&state);
    }
}

/// Interval until the next frame boundary of the current word: the word
/// budget (`total / word_count`, constant per run) split evenly across the
/// word's frames.
fn frame_interval(state: &PlaybackState) -> Duration {
    let Phase::Scheduled { word_index, .. } = state.phase else {
        return Duration::ZERO;
    };
    let per_word = state.total_duration / state.sequence.len().max(1) as u32;
    per_word / state.sequence[word_index].len().max(1) as u32
}

/// Deliver a viseme to the sink if the animation runtime is still alive.
fn emit(sink: &Option<Weak<dyn AvatarSink>>, viseme: Viseme) {
    if let Some(sink) = sink.as_ref().and_then(Weak::upgrade) {
        sink.set_viseme(viseme);
    }
}
