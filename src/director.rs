//! Orchestration of TTS synthesis and lip-sync playback.
//!
//! The director ties the pieces together the way the surrounding
//! conversation flow uses them: hand it reply text and a TTS collaborator,
//! and it animates the avatar's mouth for the duration of the spoken clip.
//! The crate never fetches or decodes audio itself; the collaborator owns
//! playback and reports the clip duration once playback has started.

use crate::config::LipSyncConfig;
use crate::dict::PronunciationDict;
use crate::error::Result;
use crate::playback::PlaybackScheduler;
use crate::sequence::SequenceBuilder;
use crate::sink::AvatarSink;
use crate::viseme::Viseme;
use std::sync::Arc;
use tracing::warn;

/// Playable speech reported by a TTS collaborator once playback begins.
#[derive(Debug, Clone, Copy)]
pub struct SpokenClip {
    /// Total clip duration in seconds.
    pub duration_secs: f64,
}

/// Text-to-speech collaborator.
///
/// Implementations synthesize the utterance, begin playing it, and resolve
/// with the clip duration, the "on start" signal the scheduler consumes.
#[async_trait::async_trait]
pub trait TtsVoice: Send + Sync {
    /// Synthesize `text`, start playback, and return the clip duration.
    ///
    /// # Errors
    ///
    /// Returns an error if synthesis or playback cannot start.
    async fn synthesize(&self, text: &str) -> Result<SpokenClip>;
}

/// Drives avatar mouth animation in lock-step with synthesized speech.
pub struct SpeechDirector {
    builder: SequenceBuilder,
    scheduler: PlaybackScheduler,
}

impl SpeechDirector {
    /// Create a director over an already-loaded pronunciation table.
    pub fn new(dict: Arc<PronunciationDict>, config: &LipSyncConfig) -> Self {
        Self {
            builder: SequenceBuilder::new(dict, config.stress),
            scheduler: PlaybackScheduler::new(),
        }
    }

    /// Create a director, loading the dictionary named in `config`.
    ///
    /// A missing or unreadable dictionary degrades to an empty table; the
    /// avatar still animates, every word just uses the neutral shape.
    pub fn from_config(config: &LipSyncConfig) -> Self {
        let dict = match &config.dictionary.path {
            Some(path) => PronunciationDict::load(path),
            None => PronunciationDict::empty(),
        };
        Self::new(Arc::new(dict), config)
    }

    /// Speak `text` through `voice` and animate `sink` in lock-step.
    ///
    /// A new call preempts any utterance still playing. Synthesis failure
    /// rests the mouth and logs; it never surfaces to the conversation
    /// flow.
    pub async fn speak(&self, text: &str, voice: &dyn TtsVoice, sink: &Arc<dyn AvatarSink>) {
        let clip = match voice.synthesize(text).await {
            Ok(clip) => clip,
            Err(e) => {
                warn!("TTS synthesis failed: {e}; resting the mouth");
                self.scheduler.stop();
                sink.set_viseme(Viseme::Neutral);
                return;
            }
        };

        let sequence = self.builder.build(text);
        self.scheduler.start(sequence, clip.duration_secs, sink);
    }

    /// Stop the current utterance's mouth animation, if any.
    pub fn stop(&self) {
        self.scheduler.stop();
    }

    /// Whether an utterance is currently animating.
    pub fn is_speaking(&self) -> bool {
        self.scheduler.is_active()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::error::LipSyncError;
    use std::sync::Mutex;
    use std::time::Duration;

    struct FixedVoice {
        duration_secs: f64,
    }

    #[async_trait::async_trait]
    impl TtsVoice for FixedVoice {
        async fn synthesize(&self, _text: &str) -> Result<SpokenClip> {
            Ok(SpokenClip {
                duration_secs: self.duration_secs,
            })
        }
    }

    struct FailingVoice;

    #[async_trait::async_trait]
    impl TtsVoice for FailingVoice {
        async fn synthesize(&self, _text: &str) -> Result<SpokenClip> {
            Err(LipSyncError::Tts("synthesis backend unavailable".into()))
        }
    }

    struct RecordingSink {
        emitted: Mutex<Vec<Viseme>>,
    }

    impl AvatarSink for RecordingSink {
        fn set_viseme(&self, viseme: Viseme) {
            self.emitted.lock().unwrap().push(viseme);
        }
    }

    fn test_director() -> SpeechDirector {
        let dict = Arc::new(PronunciationDict::parse("HI HH AY1\n"));
        SpeechDirector::new(dict, &LipSyncConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_speak_animates_and_completes() {
        let director = test_director();
        let recorder = Arc::new(RecordingSink {
            emitted: Mutex::new(Vec::new()),
        });
        let sink: Arc<dyn AvatarSink> = recorder.clone();

        director
            .speak("Hi!", &FixedVoice { duration_secs: 1.0 }, &sink)
            .await;
        assert!(director.is_speaking());

        tokio::time::sleep(Duration::from_secs(2)).await;
        // HI = HH AY1 → Neutral, Front ×2, then the completion rest.
        assert_eq!(
            *recorder.emitted.lock().unwrap(),
            vec![
                Viseme::Neutral,
                Viseme::Front,
                Viseme::Front,
                Viseme::Neutral
            ]
        );
        assert!(!director.is_speaking());
    }

    #[tokio::test]
    async fn test_synthesis_failure_rests_mouth() {
        let director = test_director();
        let recorder = Arc::new(RecordingSink {
            emitted: Mutex::new(Vec::new()),
        });
        let sink: Arc<dyn AvatarSink> = recorder.clone();

        director.speak("Hi!", &FailingVoice, &sink).await;
        assert!(!director.is_speaking());
        assert_eq!(*recorder.emitted.lock().unwrap(), vec![Viseme::Neutral]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_reply_rests_mouth_without_timer() {
        let director = test_director();
        let recorder = Arc::new(RecordingSink {
            emitted: Mutex::new(Vec::new()),
        });
        let sink: Arc<dyn AvatarSink> = recorder.clone();

        director
            .speak("...", &FixedVoice { duration_secs: 2.0 }, &sink)
            .await;
        assert!(!director.is_speaking());
        assert_eq!(*recorder.emitted.lock().unwrap(), vec![Viseme::Neutral]);
    }
}
