//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for listener closures and take-once slots.

pub mod aliases;

pub use aliases::*;
