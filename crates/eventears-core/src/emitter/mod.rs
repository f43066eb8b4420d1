//! # Emitter Module
//!
//! The event-emitting object both helpers in this crate operate on.
//!
//! [`EventEmitter`] is the seam: anything that can subscribe, unsubscribe and
//! synchronously emit can be driven by [`ListenerGroup`](crate::ListenerGroup)
//! and [`promisify`](crate::promisify). [`Emitter`] is the implementation
//! shipped with the crate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use eventears_core::{Emitter, EventName, Listener, Payload};
//!
//! let emitter = Emitter::<Payload>::new();
//! let listener = Listener::new(|args: &[Payload]| println!("data: {:?}", args));
//! emitter.on("data", listener.clone());
//!
//! emitter.emit(&EventName::from("data"), &[Payload::from(1)]);
//!
//! emitter.off(&EventName::from("data"), &listener);
//! ```

mod config;
mod listener;
mod registry;

pub use config::*;
pub use listener::*;
pub use registry::*;

use crate::event::EventName;

/// An object that registers listeners for named events and dispatches to
/// them synchronously.
pub trait EventEmitter<A>: Send + Sync {
    /// Register `listener` for future emissions of `event`.
    fn subscribe(&self, event: &EventName, listener: Listener<A>);

    /// Remove a previously registered `listener` from `event`.
    ///
    /// Must be a no-op when the listener is not registered.
    fn unsubscribe(&self, event: &EventName, listener: &Listener<A>);

    /// Call every listener currently registered for `event` with `args`.
    ///
    /// Returns true if at least one listener was called.
    fn emit(&self, event: &EventName, args: &[A]) -> bool;
}
