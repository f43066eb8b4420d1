//! Error detectors for the error event.

use std::fmt;
use std::sync::Arc;

use crate::event::EventArg;
use crate::types::PredicateFn;

/// Decides whether an occurrence of the error event is a failure.
pub enum ErrorDetector<A> {
    /// Every occurrence is a failure.
    Always,
    /// Failure when the predicate returns true for the first argument.
    Predicate(Arc<PredicateFn<A>>),
    /// Failure when the argument is error-like and its message contains the text.
    Substring(String),
}

impl<A: EventArg> ErrorDetector<A> {
    /// Detector that treats every occurrence as a failure
    pub fn always() -> Self {
        ErrorDetector::Always
    }

    /// Detector backed by a predicate
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        ErrorDetector::Predicate(Arc::new(predicate))
    }

    /// Detector matching on a substring of the error message
    pub fn substring(text: impl Into<String>) -> Self {
        ErrorDetector::Substring(text.into())
    }

    /// Evaluate the detector against an error-event argument
    pub fn matches(&self, arg: &A) -> bool {
        match self {
            ErrorDetector::Always => true,
            ErrorDetector::Predicate(predicate) => predicate(arg),
            ErrorDetector::Substring(text) => arg
                .as_error_like()
                .is_some_and(|err| err.message().contains(text.as_str())),
        }
    }
}

impl<A> Default for ErrorDetector<A> {
    fn default() -> Self {
        ErrorDetector::Always
    }
}

impl<A> Clone for ErrorDetector<A> {
    fn clone(&self) -> Self {
        match self {
            ErrorDetector::Always => ErrorDetector::Always,
            ErrorDetector::Predicate(predicate) => ErrorDetector::Predicate(Arc::clone(predicate)),
            ErrorDetector::Substring(text) => ErrorDetector::Substring(text.clone()),
        }
    }
}

impl<A> fmt::Debug for ErrorDetector<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetector::Always => write!(f, "Always"),
            ErrorDetector::Predicate(_) => write!(f, "Predicate(..)"),
            ErrorDetector::Substring(text) => write!(f, "Substring({:?})", text),
        }
    }
}

impl<A> From<&str> for ErrorDetector<A> {
    fn from(text: &str) -> Self {
        ErrorDetector::Substring(text.to_string())
    }
}

impl<A> From<String> for ErrorDetector<A> {
    fn from(text: String) -> Self {
        ErrorDetector::Substring(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Payload;

    #[test]
    fn test_always_matches_anything() {
        let detector = ErrorDetector::<Payload>::default();
        assert!(detector.matches(&Payload::from(1)));
        assert!(detector.matches(&Payload::fault("boom")));
    }

    #[test]
    fn test_substring_matches_message() {
        let detector = ErrorDetector::<Payload>::from("timeout");
        assert!(detector.matches(&Payload::fault("operation timeout")));
        assert!(!detector.matches(&Payload::fault("connection refused")));
    }

    #[test]
    fn test_substring_ignores_non_errors() {
        let detector = ErrorDetector::<Payload>::substring("timeout");
        assert!(!detector.matches(&Payload::from("timeout")));
    }

    #[test]
    fn test_predicate() {
        let detector = ErrorDetector::predicate(|arg: &Payload| {
            arg.as_fault().is_some_and(|fault| fault.code.as_deref() == Some("EPIPE"))
        });
        assert!(detector.matches(&Payload::Fault(
            crate::event::EventFault::new("broken pipe").with_code("EPIPE")
        )));
        assert!(!detector.matches(&Payload::fault("broken pipe")));
        assert_eq!(format!("{:?}", detector.clone()), "Predicate(..)");
    }
}
