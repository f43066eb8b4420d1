//! # eventears
//!
//! Helpers for event-emitting objects:
//! - **Listener groups**: register a batch of named listeners and remove them all at once
//! - **Single-shot event futures**: await the next occurrence of an event, optionally
//!   failing when a designated error event fires
//! - **Emitter**: a thread-safe synchronous emitter implementing the [`EventEmitter`] trait
//!
//! ## Architecture
//!
//! 1. **eventears-core** - Emitter, listener groups, single-shot adapter, errors
//! 2. **eventears** - Re-exports and logging setup

pub use eventears_core::{adapter, emitter, error, event, group, types};

pub use eventears_core::{
    listeners, once, promisify, CancelHandle, Deferred, Emitter, EmitterConfig, Error,
    ErrorDetector, ErrorLike, EventArg, EventEmitter, EventFault, EventName, Listener,
    ListenerGroup, ListenerMap, Outcome, Payload, Rejection, Resolution, Result, Symbol,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` otherwise
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
