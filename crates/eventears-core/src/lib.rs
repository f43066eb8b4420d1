//! # eventears Core
//!
//! Core types and helpers for working with event-emitting objects:
//! - a thread-safe synchronous [`Emitter`] and the [`EventEmitter`] trait it implements
//! - [`ListenerGroup`] for registering a batch of listeners and removing them together
//! - [`promisify`] / [`once`] for turning a single event occurrence into a future

pub mod adapter;
pub mod emitter;
pub mod error;
pub mod event;
pub mod group;
pub mod types;

pub use adapter::{
    once, promisify, CancelHandle, Deferred, ErrorDetector, Outcome, Rejection, Resolution,
};

pub use emitter::{Emitter, EmitterConfig, EventEmitter, Listener};

pub use error::{Error, Result};

pub use event::{ErrorLike, EventArg, EventFault, EventName, Payload, Symbol};

pub use group::{ListenerGroup, ListenerMap};

pub use types::{ListenerFn, PredicateFn, Slot};
