//! Stress-weighted viseme sequence construction.
//!
//! Turns an utterance into one frame list per word: each phoneme
//! contributes its viseme class, and ARPABET stress digits weight how many
//! frames a vowel holds, so stressed syllables linger on screen.

use crate::config::StressPolicy;
use crate::dict::PronunciationDict;
use crate::segment;
use crate::viseme::{self, Viseme};
use std::sync::Arc;

/// Ordered viseme frames for one utterance, grouped by word.
///
/// Every inner list is non-empty: words with no usable mapping carry the
/// single neutral frame instead.
pub type VisemeSequence = Vec<Vec<Viseme>>;

/// Builds viseme sequences from utterance text.
pub struct SequenceBuilder {
    dict: Arc<PronunciationDict>,
    policy: StressPolicy,
}

impl SequenceBuilder {
    /// Create a builder over an injected pronunciation table.
    pub fn new(dict: Arc<PronunciationDict>, policy: StressPolicy) -> Self {
        Self { dict, policy }
    }

    /// Build the viseme sequence for an utterance.
    ///
    /// An empty or all-punctuation utterance yields an empty sequence:
    /// there are no words to speak.
    pub fn build(&self, text: &str) -> VisemeSequence {
        self.build_tokens(&segment::tokenize(text))
    }

    /// Build the viseme sequence for pre-tokenized words.
    pub fn build_tokens(&self, tokens: &[String]) -> VisemeSequence {
        tokens.iter().map(|token| self.word_frames(token)).collect()
    }

    fn word_frames(&self, token: &str) -> Vec<Viseme> {
        let Some(phonemes) = self.dict.lookup(token) else {
            return vec![Viseme::Neutral];
        };

        let mut frames = Vec::with_capacity(phonemes.len());
        for symbol in phonemes {
            let (core, repeats) = match split_stress(symbol) {
                Some((core, stress)) => (core, self.policy.repeats(stress)),
                None => (symbol.as_str(), 1),
            };
            frames.extend(std::iter::repeat_n(viseme::classify(core), repeats));
        }

        if frames.is_empty() {
            frames.push(Viseme::Neutral);
        }
        frames
    }
}

/// Split a trailing ARPABET stress digit (0/1/2) off a phoneme symbol.
///
/// Returns `None` for symbols without one, which the builder treats as
/// unstressed with the symbol unchanged as the core.
fn split_stress(symbol: &str) -> Option<(&str, u32)> {
    let last = symbol.chars().last()?;
    if !last.is_ascii_digit() {
        return None;
    }
    let stress = last.to_digit(10)?;
    (stress <= 2).then(|| (&symbol[..symbol.len() - 1], stress))
}
