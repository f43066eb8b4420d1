//! # Single-shot event adapter
//!
//! Turns the next occurrence of an event into a [`Deferred`] future.
//!
//! - The success event resolves the future with its arguments: no arguments
//!   resolve [`Resolution::Empty`], one argument [`Resolution::Single`], more
//!   [`Resolution::Many`]. A single error-like argument rejects instead.
//! - The optional error event rejects the future when the [`ErrorDetector`]
//!   classifies its first argument as a failure. Occurrences the detector
//!   does not match are ignored and later ones are evaluated again.
//!
//! Both listeners are unregistered before the future settles, whichever
//! path fires first.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eventears_core::{promisify, Emitter, ErrorDetector, Payload};
//! use std::sync::Arc;
//!
//! let emitter = Arc::new(Emitter::<Payload>::new());
//! let connected = promisify(
//!     &emitter,
//!     "connect",
//!     Some("error".into()),
//!     ErrorDetector::substring("ECONNREFUSED"),
//! );
//!
//! emitter.emit("connect", &[]);
//! assert!(connected.await.is_ok());
//! ```

mod deferred;
mod detector;
mod resolution;

pub use deferred::{CancelHandle, Deferred};
pub use detector::ErrorDetector;
pub use resolution::{Outcome, Rejection, Resolution};

use std::sync::{Arc, Weak};
use tokio::sync::oneshot;

use deferred::Settle;

use crate::emitter::{EventEmitter, Listener};
use crate::event::{EventArg, EventName};
use crate::types::{empty_slot, slot, Slot};

/// Wait for the next occurrence of `event` on `emitter`
///
/// Equivalent to [`promisify`] without an error event.
pub fn once<A, E>(emitter: &Arc<E>, event: impl Into<EventName>) -> Deferred<A>
where
    A: EventArg,
    E: EventEmitter<A> + ?Sized + 'static,
{
    promisify(emitter, event, None, ErrorDetector::Always)
}

/// Wait for the next occurrence of `event`, optionally failing on `error_event`
///
/// The listeners are registered before this function returns, so emissions
/// that happen after the call are observed even if the future has not been
/// polled yet. The emitter is only weakly referenced.
pub fn promisify<A, E>(
    emitter: &Arc<E>,
    event: impl Into<EventName>,
    error_event: Option<EventName>,
    detector: ErrorDetector<A>,
) -> Deferred<A>
where
    A: EventArg,
    E: EventEmitter<A> + ?Sized + 'static,
{
    let event = event.into();
    let (tx, rx) = oneshot::channel();

    let pending = Arc::new(Pending {
        emitter: Arc::downgrade(emitter),
        event: event.clone(),
        error_event,
        detector,
        sender: slot(tx),
        listeners: empty_slot(),
    });

    let weak = Arc::downgrade(&pending);
    let success = Listener::new(move |args: &[A]| {
        if let Some(pending) = weak.upgrade() {
            pending.on_success(args);
        }
    });

    let error = pending.error_event.as_ref().map(|_| {
        let weak = Arc::downgrade(&pending);
        Listener::new(move |args: &[A]| {
            if let Some(pending) = weak.upgrade() {
                pending.on_error(args);
            }
        })
    });

    *pending.listeners.lock() = Some(Registered {
        success: success.clone(),
        error: error.clone(),
    });

    if let (Some(error_event), Some(error)) = (&pending.error_event, error) {
        emitter.subscribe(error_event, error);
    }
    emitter.subscribe(&event, success);
    tracing::trace!(event = %event, error_event = ?pending.error_event.as_ref().map(ToString::to_string), "Waiting for event");

    Deferred::new(rx, pending, event)
}

struct Registered<A> {
    success: Listener<A>,
    error: Option<Listener<A>>,
}

/// Shared state of one pending adapter.
///
/// Listeners hold it weakly; the `Deferred` and its cancel handles hold it
/// strongly.
struct Pending<A, E: ?Sized> {
    emitter: Weak<E>,
    event: EventName,
    error_event: Option<EventName>,
    detector: ErrorDetector<A>,
    /// Taken exactly once, by whichever path settles first.
    sender: Slot<oneshot::Sender<Outcome<A>>>,
    listeners: Slot<Registered<A>>,
}

impl<A, E> Pending<A, E>
where
    A: EventArg,
    E: EventEmitter<A> + ?Sized,
{
    fn on_success(&self, args: &[A]) {
        self.settle(|| match args {
            [single] if single.as_error_like().is_some() => Err(Rejection::ErrorPayload {
                event: self.event.clone(),
                error: single.clone(),
            }),
            args => Ok(Resolution::from_args(args)),
        });
    }

    fn on_error(&self, args: &[A]) {
        let (Some(error_event), Some(error)) = (&self.error_event, args.first()) else {
            return;
        };
        if !self.detector.matches(error) {
            tracing::trace!(event = %error_event, "Error event ignored by detector");
            return;
        }
        self.settle(|| {
            Err(Rejection::Detected {
                event: error_event.clone(),
                error: error.clone(),
            })
        });
    }

    /// Unregister the listeners, then deliver the outcome. No-op once settled.
    ///
    /// The outcome is only built by the call that wins the sender.
    fn settle(&self, outcome: impl FnOnce() -> Outcome<A>) -> bool {
        let Some(sender) = self.sender.lock().take() else {
            return false;
        };
        self.unregister();

        let outcome = outcome();
        match &outcome {
            Ok(_) => tracing::trace!(event = %self.event, "Event resolved"),
            Err(rejection) => tracing::debug!(event = %self.event, "Event rejected: {}", rejection),
        }
        if sender.send(outcome).is_err() {
            tracing::trace!(event = %self.event, "Deferred dropped before settlement");
        }
        true
    }

    fn unregister(&self) {
        let Some(registered) = self.listeners.lock().take() else {
            return;
        };
        let Some(emitter) = self.emitter.upgrade() else {
            return;
        };

        if let (Some(error_event), Some(error)) = (&self.error_event, &registered.error) {
            emitter.unsubscribe(error_event, error);
        }
        emitter.unsubscribe(&self.event, &registered.success);
    }
}

impl<A, E> Settle for Pending<A, E>
where
    A: EventArg,
    E: EventEmitter<A> + ?Sized,
{
    fn cancel(&self) -> bool {
        self.settle(|| {
            Err(Rejection::Cancelled {
                event: self.event.clone(),
            })
        })
    }

    fn is_settled(&self) -> bool {
        self.sender.lock().is_none()
    }
}
