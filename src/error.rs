//! Error types for the lipspeak engine.

/// Top-level error type for the lip-sync engine.
///
/// Most failure modes in this crate are deliberately *not* errors: a
/// missing dictionary, an unknown word, or an invalid schedule input all
/// degrade to the neutral mouth shape instead of propagating. The variants
/// here cover the genuinely exceptional paths.
#[derive(Debug, thiserror::Error)]
pub enum LipSyncError {
    /// Text-to-speech collaborator error.
    #[error("TTS error: {0}")]
    Tts(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, LipSyncError>;
