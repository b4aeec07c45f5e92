//! Procedge Error - Unified Error Types
//!
//! Error handling for the projection layer. The show engine itself is pure
//! and total: malformed documents degrade to a not-found result or an empty
//! wildcard payload instead of failing, so the only error surfaced to
//! callers is `NotFound`, keyed on the query parameter that could not be
//! resolved.
//!
//! @version 0.1.0
//! @author Procedge Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Unified error type for projection operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EdgeError {
    /// The sub-object named by a query parameter does not exist in the
    /// document. `name` is the parameter that failed to resolve, or the
    /// deployment's top-level identifier when no parameter was supplied.
    #[error("{name}: not found")]
    NotFound { name: String },
}

// =============================================================================
// Type Aliases
// =============================================================================

/// Result type alias for projection operations.
pub type Result<T> = std::result::Result<T, EdgeError>;

// =============================================================================
// Error Classification
// =============================================================================

impl EdgeError {
    /// Create a not-found error for the given query parameter name.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// HTTP status code this error maps to in a response body.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
        }
    }

    /// The query parameter name this error reports.
    pub fn param_name(&self) -> &str {
        match self {
            Self::NotFound { name } => name,
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
    fn test_not_found_display() {
        let err = EdgeError::not_found("award_id");
        assert_eq!(err.to_string(), "award_id: not found");
        assert_eq!(err.param_name(), "award_id");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(EdgeError::not_found("lot_id").status_code(), 404);
    }
}
