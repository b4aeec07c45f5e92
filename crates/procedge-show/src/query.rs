//! Procedge Query - Show Request Parameters
//!
//! The query half of a show request: an ordered set of parameter/selector
//! pairs. Insertion order is preserved because the response formatter names
//! the last supplied parameter when navigation comes up empty.
//!
//! @version 0.1.0
//! @author Procedge Development Team

use procedge_common::Selector;

// =============================================================================
// Show Query
// =============================================================================

/// Request parameters for one show invocation.
///
/// Any parameter name may be supplied — unrecognized ones never steer
/// navigation but can still be named by a not-found response, matching how
/// the request-serving layer passes query strings through verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowQuery {
    params: Vec<(String, Selector)>,
}

static UNSET: Selector = Selector::Unset;

impl ShowQuery {
    /// An empty query: selects the document itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw name/value pairs, e.g. a parsed query string.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut query = Self::new();
        for (name, raw) in pairs {
            query.insert(name, raw.as_ref());
        }
        query
    }

    /// Set a parameter from its raw string value. A repeated name keeps its
    /// original position but takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, raw: &str) {
        let name = name.into();
        let selector = Selector::parse(raw);
        match self.params.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = selector,
            None => self.params.push((name, selector)),
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, name: impl Into<String>, raw: &str) -> Self {
        self.insert(name, raw);
        self
    }

    /// Selector for a parameter; `Unset` when it was never supplied.
    pub fn get(&self, name: &str) -> &Selector {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
            .unwrap_or(&UNSET)
    }

    /// The last supplied parameter, in insertion order. Used to pick the
    /// name reported by a not-found response.
    pub fn last_supplied(&self) -> Option<(&str, &Selector)> {
        self.params.last().map(|(n, s)| (n.as_str(), s))
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
