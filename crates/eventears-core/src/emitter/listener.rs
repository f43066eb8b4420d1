//! Listener handles.

use std::fmt;
use std::sync::Arc;

use crate::types::ListenerFn;

/// A shareable event callback.
///
/// Identity is the identity of the wrapped closure: clones of a listener are
/// the same listener, so a clone can be used to unsubscribe the original.
pub struct Listener<A> {
    callback: Arc<ListenerFn<A>>,
}

impl<A> Listener<A> {
    /// Wrap a closure into a listener
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&[A]) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Invoke the callback with the arguments of one emission
    pub fn call(&self, args: &[A]) {
        (self.callback)(args)
    }

    /// Check whether two handles refer to the same callback
    pub fn same_as(&self, other: &Listener<A>) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.callback) as *const ()
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<A> Eq for Listener<A> {}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", self.addr())
    }
}
