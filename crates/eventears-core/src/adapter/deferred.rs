//! The future returned by [`promisify`](super::promisify).

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use super::resolution::{Outcome, Rejection};
use crate::event::EventName;

/// Adapter state as seen by the future and its cancel handles.
pub(crate) trait Settle: Send + Sync {
    /// Unregister the listeners and reject with `Cancelled` if still pending.
    fn cancel(&self) -> bool;

    fn is_settled(&self) -> bool;
}

/// Future of the first qualifying occurrence of an event.
///
/// Resolves or rejects exactly once. No timeout is applied: if neither the
/// success event nor a detected error event ever fires, the future stays
/// pending. Use [`Deferred::cancel`] or a [`CancelHandle`] to stop waiting
/// and unregister the listeners. Dropping the future cancels it, so racing it
/// against `tokio::time::timeout` leaves nothing registered on the emitter.
#[must_use = "a Deferred does nothing unless awaited or cancelled"]
pub struct Deferred<A> {
    rx: oneshot::Receiver<Outcome<A>>,
    state: Arc<dyn Settle>,
    event: EventName,
}

impl<A> Deferred<A> {
    pub(crate) fn new(
        rx: oneshot::Receiver<Outcome<A>>,
        state: Arc<dyn Settle>,
        event: EventName,
    ) -> Self {
        Self { rx, state, event }
    }

    /// The success event being awaited
    pub fn event(&self) -> &EventName {
        &self.event
    }

    /// Whether the result has reached a terminal state
    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }

    /// Stop waiting: unregister both listeners and reject with `Cancelled`
    ///
    /// Returns false if the result had already settled.
    pub fn cancel(&self) -> bool {
        self.state.cancel()
    }

    /// A handle that can cancel this wait from elsewhere
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            state: Arc::clone(&self.state),
        }
    }
}

impl<A> Future for Deferred<A> {
    type Output = Outcome<A>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // Sender dropped without a value
            Poll::Ready(Err(_)) => Poll::Ready(Err(Rejection::Cancelled {
                event: self.event.clone(),
            })),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<A> Drop for Deferred<A> {
    fn drop(&mut self) {
        self.state.cancel();
    }
}

impl<A> fmt::Debug for Deferred<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("event", &self.event)
            .field("settled", &self.is_settled())
            .finish()
    }
}

/// Cloneable handle for cancelling a pending [`Deferred`].
#[derive(Clone)]
pub struct CancelHandle {
    state: Arc<dyn Settle>,
}

impl CancelHandle {
    /// Unregister the listeners and reject the deferred result with `Cancelled`
    ///
    /// Returns false if the result had already settled.
    pub fn cancel(&self) -> bool {
        self.state.cancel()
    }

    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("settled", &self.is_settled())
            .finish()
    }
}
