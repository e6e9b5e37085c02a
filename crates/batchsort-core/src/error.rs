//! Error types for batchsort.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for batchsort.
#[derive(Error, Debug)]
pub enum Error {
    /// The request body was not a valid batch payload.
    ///
    /// The display text is fixed so it can be returned to clients verbatim;
    /// the decoder's own message is kept for logging.
    #[error("Invalid JSON payload")]
    Decode {
        /// Decoder message describing what was wrong.
        message: String,
    },

    /// A unit of work in a concurrent sort could not be run to completion.
    #[error("Failed to schedule sort for sequence {index}: {message}")]
    Scheduling {
        /// Batch slot the unit was responsible for.
        index: usize,
        /// Error message.
        message: String,
    },

    /// A strategy name did not match any built-in strategy.
    #[error("Unknown strategy: {name} (expected sequential or concurrent)")]
    UnknownStrategy {
        /// The name that was given.
        name: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error (unexpected state).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Returns `true` if the error was caused by the caller's input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::UnknownStrategy { .. })
    }

    /// Creates a decode error with the given message.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates a scheduling error for the given batch slot.
    #[must_use]
    pub fn scheduling(index: usize, message: impl Into<String>) -> Self {
        Self::Scheduling {
            index,
            message: message.into(),
        }
    }

    /// Creates an internal error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
