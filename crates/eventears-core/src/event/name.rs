//! Event names.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A unique event token.
///
/// Two symbols are equal only if one is a clone of the other, even when
/// their descriptions match.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: Uuid,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a new unique symbol with a description used for display only.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: Some(Arc::from(description.into())),
        }
    }

    /// Create a new unique symbol without a description.
    pub fn anonymous() -> Self {
        Self {
            id: Uuid::new_v4(),
            description: None,
        }
    }

    /// The symbol's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol({})", &self.id.to_string()[..8]),
        }
    }
}

/// Key identifying an event within one emitter's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
    /// A plain string name such as `"data"` or `"close"`.
    Named(Cow<'static, str>),
    /// A unique symbol token.
    Symbol(Symbol),
}

impl EventName {
    /// Event name from a static string, usable in constants.
    pub const fn from_static(name: &'static str) -> Self {
        EventName::Named(Cow::Borrowed(name))
    }

    /// The string name, or `None` for symbols.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EventName::Named(name) => Some(name.as_ref()),
            EventName::Symbol(_) => None,
        }
    }

    /// Check if this name is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, EventName::Symbol(_))
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventName::Named(name) => f.write_str(name),
            EventName::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl From<&'static str> for EventName {
    fn from(name: &'static str) -> Self {
        EventName::from_static(name)
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        EventName::Named(Cow::Owned(name))
    }
}

impl From<Symbol> for EventName {
    fn from(symbol: Symbol) -> Self {
        EventName::Symbol(symbol)
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_equality_ignores_ownership() {
        let borrowed = EventName::from("data");
        let owned = EventName::from("data".to_string());
        assert_eq!(borrowed, owned);
        assert_eq!(borrowed.as_str(), Some("data"));
        assert_eq!(borrowed.to_string(), "data");
    }

    #[test]
    fn test_symbols_are_unique() {
        let a = Symbol::new("ready");
        let b = Symbol::new("ready");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());

        let name = EventName::from(a.clone());
        assert!(name.is_symbol());
        assert_eq!(name.as_str(), None);
        assert_eq!(name, EventName::Symbol(a));
        assert_ne!(name, EventName::Symbol(b));
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new("ready").to_string(), "Symbol(ready)");
        assert!(Symbol::anonymous().to_string().starts_with("Symbol("));
    }
}
