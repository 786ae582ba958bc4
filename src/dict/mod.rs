//! CMU-format pronunciation dictionary.
//!
//! Line-oriented records of the form `TOKEN PH1 PH2 ...`, with `;;;`
//! comment lines. The table is built once and held immutable; callers
//! inject it into the sequence builder rather than reaching for ambient
//! state.

use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Immutable word → phoneme-transcription lookup table.
pub struct PronunciationDict {
    entries: HashMap<String, Vec<String>>,
}

impl PronunciationDict {
    /// An empty dictionary. Every lookup misses, so every word animates
    /// with the neutral mouth shape.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Load a dictionary file.
    ///
    /// A file that cannot be read degrades to an empty dictionary with a
    /// diagnostic; lip-sync keeps working, every word just falls back to
    /// the neutral shape.
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => {
                let dict = Self::from_bytes(&bytes);
                info!(
                    "loaded {} pronunciation entries from {}",
                    dict.len(),
                    path.display()
                );
                dict
            }
            Err(e) => {
                warn!(
                    "cannot read pronunciation dictionary {}: {e}; \
                     all words will use the neutral mouth shape",
                    path.display()
                );
                Self::empty()
            }
        }
    }

    /// Decode and parse dictionary bytes.
    ///
    /// UTF-8 is tried first; published CMU dictionary files carry a few
    /// Latin-1 bytes in comment lines, so non-UTF-8 input falls back to a
    /// byte-for-byte Latin-1 decode, which cannot fail.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::parse(text),
            Err(_) => {
                warn!("dictionary is not valid UTF-8, decoding as Latin-1");
                let text: String = bytes.iter().map(|&b| b as char).collect();
                Self::parse(&text)
            }
        }
    }

    /// Parse dictionary text.
    ///
    /// Lines starting with `;;;` are comments; lines with fewer than two
    /// whitespace-separated fields are skipped. Later records for the same
    /// token replace earlier ones.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            if line.starts_with(";;;") {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let phonemes: Vec<String> = fields.map(str::to_owned).collect();
            if phonemes.is_empty() {
                continue;
            }
            entries.insert(word.to_owned(), phonemes);
        }
        Self { entries }
    }

    /// Look up the phoneme transcription for an exact uppercase key.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
