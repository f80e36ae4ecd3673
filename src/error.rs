use thiserror::Error;

/// Classifies rule source errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// No input was supplied
    Missing,
    /// Input bytes are not valid UTF-8
    Undecodable,
    /// Input decoded to an empty string
    Empty,
}

/// TLD engine error types
#[derive(Error, Debug)]
pub enum TldError {
    #[error("Invalid suffix list source: {message}")]
    InvalidSource {
        kind: SourceErrorKind,
        message: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TldError {
    pub(crate) fn invalid_source(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        TldError::InvalidSource {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TldError>;
