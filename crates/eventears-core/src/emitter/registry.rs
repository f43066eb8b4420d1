//! Emitter implementation.
//!
//! Listeners are kept per event name in registration order. Dispatch takes a
//! snapshot of the listener list under the lock and releases it before any
//! callback runs, which gives the following semantics:
//! - a listener removed during an emission is still called in that round;
//! - a listener added during an emission is not called until the next one;
//! - listeners may call `on`/`off`/`emit` on the same emitter without deadlocking.

use parking_lot::Mutex;

use super::{EmitterConfig, EventEmitter, Listener};
use crate::event::EventName;

#[derive(Clone)]
struct Registration<A> {
    listener: Listener<A>,
    once: bool,
}

/// Listeners registered for one event name.
struct EventSlot<A> {
    name: EventName,
    registrations: Vec<Registration<A>>,
    /// Set once the leak warning has been logged for this event.
    warned: bool,
}

impl<A> EventSlot<A> {
    fn new(name: EventName) -> Self {
        Self {
            name,
            registrations: Vec::new(),
            warned: false,
        }
    }
}

/// Thread-safe synchronous event emitter.
///
/// `A` is the listener argument type. All methods take `&self`.
pub struct Emitter<A> {
    /// Event slots in first-registration order
    registry: Mutex<Vec<EventSlot<A>>>,
    config: EmitterConfig,
}

impl<A> Emitter<A> {
    /// Create a new emitter with default configuration
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Create a new emitter with custom configuration
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            registry: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Register `listener` for every future emission of `event`
    pub fn on(&self, event: impl Into<EventName>, listener: Listener<A>) -> &Self {
        self.add(event.into(), listener, false);
        self
    }

    /// Register `listener` for the next emission of `event` only
    ///
    /// The registration is removed before the listener is called.
    pub fn once(&self, event: impl Into<EventName>, listener: Listener<A>) -> &Self {
        self.add(event.into(), listener, true);
        self
    }

    /// Remove the most recently added registration of `listener` for `event`
    ///
    /// Returns true if a registration was found and removed.
    pub fn off(&self, event: impl Into<EventName>, listener: &Listener<A>) -> bool {
        let event = event.into();
        let mut registry = self.registry.lock();
        let Some(index) = registry.iter().position(|slot| slot.name == event) else {
            return false;
        };

        let slot = &mut registry[index];
        let Some(position) = slot
            .registrations
            .iter()
            .rposition(|r| r.listener.same_as(listener))
        else {
            return false;
        };

        slot.registrations.remove(position);
        let remaining = slot.registrations.len();
        if remaining == 0 {
            registry.remove(index);
        }
        tracing::debug!(event = %event, remaining, "Listener removed");
        true
    }

    /// Call every listener registered for `event` with `args`
    ///
    /// Returns true if the event had listeners.
    pub fn emit(&self, event: impl Into<EventName>, args: &[A]) -> bool {
        let event = event.into();
        let snapshot: Vec<Listener<A>> = {
            let mut registry = self.registry.lock();
            let Some(index) = registry.iter().position(|slot| slot.name == event) else {
                tracing::trace!(event = %event, "Emit without listeners");
                return false;
            };

            let slot = &mut registry[index];
            let snapshot = slot
                .registrations
                .iter()
                .map(|r| r.listener.clone())
                .collect();
            slot.registrations.retain(|r| !r.once);
            if slot.registrations.is_empty() {
                registry.remove(index);
            }
            snapshot
        };

        tracing::trace!(event = %event, listeners = snapshot.len(), "Emit");
        for listener in &snapshot {
            listener.call(args);
        }
        !snapshot.is_empty()
    }

    /// Number of listeners registered for `event`
    pub fn listener_count(&self, event: impl Into<EventName>) -> usize {
        let event = event.into();
        self.registry
            .lock()
            .iter()
            .find(|slot| slot.name == event)
            .map_or(0, |slot| slot.registrations.len())
    }

    /// Listeners registered for `event`, in call order
    pub fn listeners(&self, event: impl Into<EventName>) -> Vec<Listener<A>> {
        let event = event.into();
        self.registry
            .lock()
            .iter()
            .find(|slot| slot.name == event)
            .map(|slot| {
                slot.registrations
                    .iter()
                    .map(|r| r.listener.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Names of all events that currently have listeners
    pub fn event_names(&self) -> Vec<EventName> {
        self.registry
            .lock()
            .iter()
            .map(|slot| slot.name.clone())
            .collect()
    }

    /// Remove every listener for `event`, or for all events when `None`
    pub fn remove_all_listeners(&self, event: Option<&EventName>) {
        let mut registry = self.registry.lock();
        match event {
            Some(event) => registry.retain(|slot| slot.name != *event),
            None => registry.clear(),
        }
        tracing::debug!(event = ?event.map(ToString::to_string), "All listeners removed");
    }

    /// Whether the listener-leak warning has been logged for `event`
    ///
    /// Resets once the event has no listeners left.
    pub fn warned_for(&self, event: impl Into<EventName>) -> bool {
        let event = event.into();
        self.registry
            .lock()
            .iter()
            .any(|slot| slot.name == event && slot.warned)
    }

    /// Get the current configuration
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn add(&self, event: EventName, listener: Listener<A>, once: bool) {
        let mut registry = self.registry.lock();
        let index = match registry.iter().position(|slot| slot.name == event) {
            Some(index) => index,
            None => {
                registry.push(EventSlot::new(event));
                registry.len() - 1
            }
        };

        let slot = &mut registry[index];
        slot.registrations.push(Registration { listener, once });
        let count = slot.registrations.len();
        tracing::debug!(event = %slot.name, listeners = count, once, "Listener added");

        if !slot.warned && self.config.exceeds_limit(count) {
            slot.warned = true;
            tracing::warn!(
                event = %slot.name,
                listeners = count,
                max_listeners = self.config.max_listeners,
                "Possible listener leak: {} listeners added for {}",
                count,
                slot.name
            );
        }
    }
}

impl<A> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("events", &self.event_names())
            .field("config", &self.config)
            .finish()
    }
}

impl<A> EventEmitter<A> for Emitter<A> {
    fn subscribe(&self, event: &EventName, listener: Listener<A>) {
        self.on(event, listener);
    }

    fn unsubscribe(&self, event: &EventName, listener: &Listener<A>) {
        self.off(event, listener);
    }

    fn emit(&self, event: &EventName, args: &[A]) -> bool {
        Emitter::emit(self, event, args)
    }
}
