//! Event model
//!
//! Provides:
//! - [`EventName`]: string or symbol key identifying an event
//! - [`EventArg`] / [`ErrorLike`]: the capability traits listener arguments implement
//! - [`Payload`]: a ready-made argument type carrying JSON values or faults

mod name;
mod payload;

pub use name::*;
pub use payload::*;
