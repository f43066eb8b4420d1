//! Emitter configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default per-event listener limit before a leak warning is logged.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Configuration for an [`Emitter`](super::Emitter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Listener count per event above which a warning is logged. 0 disables the check.
    pub max_listeners: usize,
    /// Whether exceeding `max_listeners` logs a warning at all.
    pub warn_on_overflow: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
            warn_on_overflow: true,
        }
    }
}

impl EmitterConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration with no listener limit
    pub fn unbounded() -> Self {
        Self {
            max_listeners: 0,
            ..Default::default()
        }
    }

    /// Check whether `count` listeners on one event should trigger a warning
    pub fn exceeds_limit(&self, count: usize) -> bool {
        self.warn_on_overflow && self.max_listeners > 0 && count > self.max_listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EmitterConfig::default();
        assert_eq!(config.max_listeners, 10);
        assert!(config.warn_on_overflow);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EmitterConfig::from_json(r#"{ "max_listeners": 3 }"#).expect("valid json");
        assert_eq!(config.max_listeners, 3);
        assert!(config.warn_on_overflow);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = EmitterConfig::from_json(r#"{ "max_listeners": -1 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_exceeds_limit() {
        let config = EmitterConfig::default();
        assert!(!config.exceeds_limit(10));
        assert!(config.exceeds_limit(11));
        assert!(!EmitterConfig::unbounded().exceeds_limit(1000));

        let quiet = EmitterConfig {
            warn_on_overflow: false,
            ..Default::default()
        };
        assert!(!quiet.exceeds_limit(11));
    }
}
