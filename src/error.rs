//! Crate-level error types.
//!
//! [`NumfieldError`] covers the failures the host binary can hit
//! (configuration, terminal I/O) and propagates with `?`.
//! [`ValidationError`] is the widget's own, user-facing kind: it is never
//! propagated as a fault, the field recovers in place and shows its message.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumfieldError>;

/// Top-level error type returned by all fallible public APIs.
#[derive(Debug, thiserror::Error)]
pub enum NumfieldError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup/teardown or log file access failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for NumfieldError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Outcome of committing a field whose text was not acceptable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The committed text did not parse as a number (empty or bare `-` included).
    #[error("value must be a number")]
    NotANumber,

    /// The committed number fell outside the configured bounds.
    #[error("value must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },
}
