//! Listener arguments and error-like values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A value that carries a human-readable message.
///
/// Every `std::error::Error` is error-like; its message is its `Display`
/// output.
pub trait ErrorLike {
    /// The human-readable message.
    fn message(&self) -> Cow<'_, str>;
}

impl<T: std::error::Error + ?Sized> ErrorLike for T {
    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

/// A value passed to listeners when an event is emitted.
///
/// `as_error_like` is the capability check used by the single-shot adapter:
/// an argument that exposes an error-like view is treated as a failure when
/// it arrives alone on a success event, and is what substring detectors
/// search.
pub trait EventArg: Clone + fmt::Debug + Send + Sync + 'static {
    /// The error-like view of this argument, if it has one.
    fn as_error_like(&self) -> Option<&dyn ErrorLike> {
        None
    }
}

impl EventArg for serde_json::Value {}

impl EventArg for String {}

impl EventArg for EventFault {
    fn as_error_like(&self) -> Option<&dyn ErrorLike> {
        Some(self)
    }
}

/// An error value delivered through an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct EventFault {
    /// The human-readable message.
    pub message: String,
    /// Optional machine-readable code, e.g. `"ECONNREFUSED"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl EventFault {
    /// Create a fault from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Attach a machine-readable code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// General-purpose event argument: either a JSON value or a fault.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Ordinary data.
    Value(serde_json::Value),
    /// An error-like value.
    Fault(EventFault),
}

impl Payload {
    /// A fault payload with the given message.
    pub fn fault(message: impl Into<String>) -> Self {
        Payload::Fault(EventFault::new(message))
    }

    /// The JSON value, if this is not a fault.
    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Value(value) => Some(value),
            Payload::Fault(_) => None,
        }
    }

    /// The fault, if this is one.
    pub fn as_fault(&self) -> Option<&EventFault> {
        match self {
            Payload::Fault(fault) => Some(fault),
            Payload::Value(_) => None,
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Payload::Fault(_))
    }
}

impl EventArg for Payload {
    fn as_error_like(&self) -> Option<&dyn ErrorLike> {
        match self {
            Payload::Fault(fault) => Some(fault),
            Payload::Value(_) => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Value(value) => write!(f, "{}", value),
            Payload::Fault(fault) => write!(f, "Fault: {}", fault),
        }
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Value(value)
    }
}

impl From<EventFault> for Payload {
    fn from(fault: EventFault) -> Self {
        Payload::Fault(fault)
    }
}

impl From<i64> for Payload {
    fn from(value: i64) -> Self {
        Payload::Value(value.into())
    }
}

impl From<i32> for Payload {
    fn from(value: i32) -> Self {
        Payload::Value(value.into())
    }
}

impl From<f64> for Payload {
    fn from(value: f64) -> Self {
        Payload::Value(value.into())
    }
}

impl From<bool> for Payload {
    fn from(value: bool) -> Self {
        Payload::Value(value.into())
    }
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Value(value.into())
    }
}

impl From<String> for Payload {
    fn from(value: String) -> Self {
        Payload::Value(value.into())
    }
}
