//! Procedge Types - Core Query Types
//!
//! Query-side value types shared by every show-function deployment.
//!
//! @version 0.1.0
//! @author Procedge Development Team

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Wildcard
// =============================================================================

/// Query value meaning "all distinct-id entries, deduplicated to the latest
/// version of each".
pub const WILDCARD: &str = "*";

// =============================================================================
// Selector
// =============================================================================

/// Three-state value of one query parameter.
///
/// A parameter supplied as an empty string normalizes to `Unset`, so "not
/// provided" and "provided empty" steer navigation identically.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selector {
    /// Parameter absent (or empty); the schema node it binds to is skipped.
    #[default]
    Unset,
    /// `*` — select every distinct id, latest version of each.
    Wildcard,
    /// Select the entry with this id, latest version first.
    Specific(String),
}

impl Selector {
    /// Parse a raw query-string value.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            Self::Unset
        } else if raw == WILDCARD {
            Self::Wildcard
        } else {
            Self::Specific(raw.to_string())
        }
    }

    /// Parse an optional query-string value; `None` is `Unset`.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// True when the selector names a path to follow (wildcard or specific).
    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    /// The specific id, when one was supplied.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Self::Specific(id) => Some(id),
            _ => None,
        }
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, ""),
            Self::Wildcard => write!(f, "{}", WILDCARD),
            Self::Specific(id) => write!(f, "{}", id),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_states() {
        assert_eq!(Selector::parse(""), Selector::Unset);
        assert_eq!(Selector::parse("*"), Selector::Wildcard);
        assert_eq!(
            Selector::parse("f0d5fd00743b"),
            Selector::Specific("f0d5fd00743b".to_string())
        );
    }

    #[test]
    fn test_from_param() {
        assert_eq!(Selector::from_param(None), Selector::Unset);
        assert_eq!(Selector::from_param(Some("")), Selector::Unset);
        assert_eq!(Selector::from_param(Some("*")), Selector::Wildcard);
    }

    #[test]
    fn test_predicates() {
        assert!(Selector::Unset.is_unset());
        assert!(!Selector::Unset.is_set());
        assert!(Selector::Wildcard.is_wildcard());
        assert!(Selector::Wildcard.is_set());
        assert_eq!(Selector::parse("abc").as_id(), Some("abc"));
        assert_eq!(Selector::Wildcard.as_id(), None);
    }
}
