//! Common type aliases.
//!
//! Listener closures and take-once slots show up in several modules of this
//! crate; the aliases below keep those signatures short and consistent.

use parking_lot::Mutex;

/// The closure type behind every event listener.
///
/// Receives the arguments of one emission, in order.
pub type ListenerFn<A> = dyn Fn(&[A]) + Send + Sync;

/// A predicate over a single event argument.
pub type PredicateFn<A> = dyn Fn(&A) -> bool + Send + Sync;

/// A mutex-protected optional value, typically taken exactly once.
///
/// Uses `parking_lot::Mutex`, which never poisons.
pub type Slot<T> = Mutex<Option<T>>;

/// Create a `Slot<T>` holding a value.
#[inline]
pub fn slot<T>(value: T) -> Slot<T> {
    Mutex::new(Some(value))
}

/// Create an empty `Slot<T>`.
#[inline]
pub fn empty_slot<T>() -> Slot<T> {
    Mutex::new(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_take_once() {
        let value: Slot<String> = slot("once".to_string());
        assert_eq!(value.lock().take().as_deref(), Some("once"));
        assert!(value.lock().take().is_none());

        let empty: Slot<String> = empty_slot();
        assert!(empty.lock().is_none());
    }
}
