//! Unified error types for chatstats.
//!
//! Parsing a chat export is a single deterministic pass, so there is no
//! recovery policy: the first malformed line aborts the parse and is
//! reported through [`ChatstatsError`] together with its 1-based line number.
//!
//! Aggregation over parsed messages never fails.

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// A body continuation line appeared while no message was open.
    ///
    /// This happens when:
    /// - The export starts with a line that is neither a message nor an event
    /// - A stray line follows a system event
    #[error("Line {line}: continuation line without an open message: {content:?}")]
    OrphanContinuation {
        /// 1-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// A message line carried a date or time that does not exist
    /// (e.g. day 32, month 13, hour 24).
    #[error("Line {line}: invalid date/time '{input}'")]
    InvalidTimestamp {
        /// 1-based line number
        line: usize,
        /// The raw `DD.MM.YY, HH:MM` prefix as it appeared in the line
        input: String,
    },

    /// A line pattern failed to compile.
    #[error("Invalid line pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates an orphan continuation error.
    pub fn orphan_continuation(line: usize, content: impl Into<String>) -> Self {
        ChatstatsError::OrphanContinuation {
            line,
            content: content.into(),
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(line: usize, input: impl Into<String>) -> Self {
        ChatstatsError::InvalidTimestamp {
            line,
            input: input.into(),
        }
    }

    /// Returns `true` if this is an orphan continuation error.
    pub fn is_orphan_continuation(&self) -> bool {
        matches!(self, ChatstatsError::OrphanContinuation { .. })
    }

    /// Returns `true` if this is an invalid timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatstatsError::InvalidTimestamp { .. })
    }

    /// Returns the input line number this error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            ChatstatsError::OrphanContinuation { line, .. }
            | ChatstatsError::InvalidTimestamp { line, .. } => Some(*line),
            ChatstatsError::InvalidPattern(_) => None,
        }
    }
}
