//! Listener groups
//!
//! Registers a batch of listeners on an emitter in one step and removes
//! exactly those listeners again with [`ListenerGroup::cleanup`].
//!
//! ```rust,ignore
//! use eventears_core::{listeners, Emitter, ListenerGroup, Payload};
//! use std::sync::Arc;
//!
//! let emitter = Arc::new(Emitter::<Payload>::new());
//! let group = ListenerGroup::new(
//!     emitter.clone(),
//!     listeners! {
//!         "data" => |args: &[Payload]| println!("data: {:?}", args),
//!         "end" => |_: &[Payload]| println!("end"),
//!     },
//! );
//!
//! // ...
//! group.cleanup();
//! ```

mod map;

pub use map::*;

use std::sync::Arc;

use crate::emitter::EventEmitter;

/// A set of listeners registered together on one emitter.
pub struct ListenerGroup<A, E: ?Sized> {
    emitter: Arc<E>,
    listeners: ListenerMap<A>,
}

impl<A, E> ListenerGroup<A, E>
where
    E: EventEmitter<A> + ?Sized,
{
    /// Register every listener in `listeners` on `emitter`, in map order
    pub fn new(emitter: Arc<E>, listeners: ListenerMap<A>) -> Self {
        for (event, listener) in listeners.iter() {
            emitter.subscribe(event, listener.clone());
        }
        tracing::debug!(listeners = listeners.len(), "Listener group registered");
        Self { emitter, listeners }
    }

    /// Unregister every listener this group registered, in map order
    ///
    /// Safe to call more than once.
    pub fn cleanup(&self) {
        for (event, listener) in self.listeners.iter() {
            self.emitter.unsubscribe(event, listener);
        }
        tracing::debug!(listeners = self.listeners.len(), "Listener group cleaned up");
    }

    /// The emitter the listeners were registered on
    pub fn emitter(&self) -> &Arc<E> {
        &self.emitter
    }

    /// The registered listeners
    pub fn listeners(&self) -> &ListenerMap<A> {
        &self.listeners
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<A, E: ?Sized> std::fmt::Debug for ListenerGroup<A, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGroup")
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{Emitter, Listener};
    use crate::event::EventName;

    #[test]
    fn test_empty_group() {
        let emitter = Arc::new(Emitter::<i32>::new());
        let group = ListenerGroup::new(emitter.clone(), ListenerMap::new());
        assert!(group.is_empty());
        group.cleanup();
        assert!(emitter.event_names().is_empty());
    }

    #[test]
    fn test_group_registers_and_cleans_up() {
        let emitter = Arc::new(Emitter::<i32>::new());
        let map = ListenerMap::new()
            .on("a", |_: &[i32]| {})
            .on("b", |_: &[i32]| {});
        let group = ListenerGroup::new(emitter.clone(), map);

        assert_eq!(group.len(), 2);
        assert_eq!(emitter.listener_count("a"), 1);
        assert_eq!(emitter.listener_count("b"), 1);

        group.cleanup();
        assert_eq!(emitter.listener_count("a"), 0);
        assert_eq!(emitter.listener_count("b"), 0);
    }

    #[test]
    fn test_cleanup_leaves_foreign_listeners() {
        let emitter = Arc::new(Emitter::<i32>::new());
        let foreign = Listener::new(|_: &[i32]| {});
        emitter.on("a", foreign.clone());

        let group = ListenerGroup::new(emitter.clone(), ListenerMap::new().on("a", |_: &[i32]| {}));
        assert_eq!(emitter.listener_count("a"), 2);

        group.cleanup();
        assert_eq!(emitter.listeners("a"), vec![foreign]);
        assert_eq!(group.emitter().event_names(), vec![EventName::from("a")]);
    }
}
