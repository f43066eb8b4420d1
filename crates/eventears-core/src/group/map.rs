//! Ordered listener maps.

use std::fmt;

use crate::emitter::Listener;
use crate::event::EventName;

/// Ordered list of (event name, listener) pairs.
pub struct ListenerMap<A> {
    entries: Vec<(EventName, Listener<A>)>,
}

impl<A> ListenerMap<A> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a closure for `event`
    pub fn on<F>(self, event: impl Into<EventName>, callback: F) -> Self
    where
        F: Fn(&[A]) + Send + Sync + 'static,
    {
        self.with_listener(event, Listener::new(callback))
    }

    /// Add an existing listener handle for `event`
    pub fn with_listener(mut self, event: impl Into<EventName>, listener: Listener<A>) -> Self {
        self.entries.push((event.into(), listener));
        self
    }

    /// Iterate the pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&EventName, &Listener<A>)> {
        self.entries.iter().map(|(event, listener)| (event, listener))
    }

    /// The listener registered for `event`, if any
    pub fn get(&self, event: &EventName) -> Option<&Listener<A>> {
        self.entries
            .iter()
            .find(|(name, _)| name == event)
            .map(|(_, listener)| listener)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for ListenerMap<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for ListenerMap<A> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<A> fmt::Debug for ListenerMap<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<A, N: Into<EventName>> FromIterator<(N, Listener<A>)> for ListenerMap<A> {
    fn from_iter<I: IntoIterator<Item = (N, Listener<A>)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(event, listener)| (event.into(), listener))
                .collect(),
        }
    }
}

/// Build a [`ListenerMap`] from `event => closure` pairs
#[macro_export]
macro_rules! listeners {
    ($($event:expr => $callback:expr),* $(,)?) => {
        $crate::group::ListenerMap::new()$(.on($event, $callback))*
    };
}
