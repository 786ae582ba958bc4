//! Lipspeak: speech-synchronized viseme scheduling for avatar lip-sync.
//!
//! Drives a facial-animation avatar's mouth shape in lock-step with a
//! synthesized speech clip of known duration:
//! Reply text → word tokens → stress-weighted viseme frames → timed emissions
//!
//! # Architecture
//!
//! The engine is built from small injected components:
//! - **Segmentation**: utterances become uppercase, letters-only word tokens
//! - **Pronunciation lookup**: an immutable CMU-format dictionary maps each
//!   token to its phoneme transcription
//! - **Viseme mapping**: a fixed table groups phonetically similar sounds
//!   into integer mouth-shape classes (4 = neutral/fallback)
//! - **Sequencing**: ARPABET stress digits weight how many frames a vowel
//!   holds, one frame list per word
//! - **Playback**: a single-timeline state machine divides the clip
//!   duration evenly across words, then across frames, and emits IDs to an
//!   [`AvatarSink`] with deterministic cancellation
//!
//! Audio synthesis, decoding, and rendering stay with external
//! collaborators; the engine only consumes the clip duration and produces
//! integer viseme codes.

pub mod config;
pub mod dict;
pub mod director;
pub mod error;
pub mod playback;
pub mod segment;
pub mod sequence;
pub mod sink;
pub mod viseme;

pub use config::{LipSyncConfig, StressPolicy};
pub use dict::PronunciationDict;
pub use director::{SpeechDirector, SpokenClip, TtsVoice};
pub use error::{LipSyncError, Result};
pub use playback::PlaybackScheduler;
pub use sequence::{SequenceBuilder, VisemeSequence};
pub use sink::{AvatarSink, ChannelSink};
pub use viseme::Viseme;
