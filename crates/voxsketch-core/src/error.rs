//! Error handling for VoxSketch
//!
//! A single error type covers the failure modes that reach the user:
//! - Spoken commands that could not be understood
//! - Speech recognition that is unavailable or was aborted
//! - Design documents that fail to parse
//! - Rendering and export failures
//!
//! Undo/redo on an empty history is not an error and never produces one.

use thiserror::Error;

/// VoxSketch error type
#[derive(Error, Debug)]
pub enum Error {
    /// No shape keyword or command keyword was recognized in an utterance
    #[error("Command not understood: \"{0}\"")]
    CommandNotUnderstood(String),

    /// The platform offers no speech recognition capability
    #[error("Speech recognition is not supported on this platform")]
    VoiceUnsupported,

    /// The platform aborted a recognition session
    #[error("Speech recognition aborted: {0}")]
    VoiceAborted(String),

    /// A design document is not a valid JSON array of shapes
    #[error("Invalid design file: {0}")]
    InvalidDesign(#[from] serde_json::Error),

    /// Rendering or image encoding failed
    #[error("Render error: {0}")]
    Render(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Whether the error originates at the speech recognition boundary
    pub fn is_voice_error(&self) -> bool {
        matches!(self, Error::VoiceUnsupported | Error::VoiceAborted(_))
    }
}

/// Result type for VoxSketch operations
pub type Result<T> = std::result::Result<T, Error>;
