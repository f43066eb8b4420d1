//! Error handling for eventears
//!
//! Provides the error types used across the crate:
//! - [`Rejection`]: why a single-shot event future failed
//! - [`Error`]: crate-level failures such as invalid configuration
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::event::EventName;

/// Rejection of a single-shot event future
///
/// Carries the argument that caused the failure so callers get back exactly
/// the value that was emitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection<A> {
    /// The error event fired and the detector classified it as a failure
    #[error("Error event `{event}` fired: {error:?}")]
    Detected {
        /// The error event name.
        event: EventName,
        /// The first argument of the error event.
        error: A,
    },

    /// The success event fired with a single error-like argument
    #[error("Event `{event}` delivered an error: {error:?}")]
    ErrorPayload {
        /// The success event name.
        event: EventName,
        /// The error-like argument.
        error: A,
    },

    /// The caller cancelled the wait before either event fired
    #[error("Wait for `{event}` was cancelled")]
    Cancelled {
        /// The success event that was being awaited.
        event: EventName,
    },
}

impl<A> Rejection<A> {
    /// The value carried by this rejection, if any
    pub fn error(&self) -> Option<&A> {
        match self {
            Rejection::Detected { error, .. } | Rejection::ErrorPayload { error, .. } => {
                Some(error)
            }
            Rejection::Cancelled { .. } => None,
        }
    }

    /// Consume the rejection and return the carried value, if any
    pub fn into_error(self) -> Option<A> {
        match self {
            Rejection::Detected { error, .. } | Rejection::ErrorPayload { error, .. } => {
                Some(error)
            }
            Rejection::Cancelled { .. } => None,
        }
    }

    /// The event whose occurrence (or absence) produced this rejection
    pub fn event(&self) -> &EventName {
        match self {
            Rejection::Detected { event, .. }
            | Rejection::ErrorPayload { event, .. }
            | Rejection::Cancelled { event } => event,
        }
    }

    /// Check if this rejection came from cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Rejection::Cancelled { .. })
    }
}

/// Main error type for eventears
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
