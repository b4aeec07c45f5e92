//! Procedge Response - Uniform Show Responses
//!
//! Converts a navigation result plus the original query into the response
//! shape the listing API serves verbatim: `{"data": ...}` on success, or a
//! structured 404 naming the query parameter that could not be resolved.
//! The one recovered case: absence under a wildcard request is an empty
//! data sequence, not an error.
//!
//! @version 0.1.0
//! @author Procedge Development Team

use crate::query::ShowQuery;
use crate::scrub::clear_internal_fields;
use procedge_common::{EdgeError, Selector};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Content type of success bodies, kept as the upstream store serves it.
pub const SUCCESS_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Content type of error bodies.
pub const ERROR_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// Error Body
// =============================================================================

/// One entry of a structured error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub location: String,
    pub name: String,
    pub description: String,
}

/// Structured error body: `{"status":"error","errors":[...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub errors: Vec<ErrorEntry>,
}

impl From<&EdgeError> for ErrorBody {
    fn from(err: &EdgeError) -> Self {
        Self {
            status: "error".to_string(),
            errors: vec![ErrorEntry {
                location: "url".to_string(),
                name: err.param_name().to_string(),
                description: "Not found".to_string(),
            }],
        }
    }
}

// =============================================================================
// Show Response
// =============================================================================

/// The response payload of one show invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowResponse {
    pub code: u16,
    pub content_type: &'static str,
    pub body: Value,
}

impl ShowResponse {
    /// Success response wrapping an already-cleared payload.
    pub fn success(data: Value) -> Self {
        Self {
            code: 200,
            content_type: SUCCESS_CONTENT_TYPE,
            body: json!({ "data": data }),
        }
    }

    /// Error response for a failed resolution.
    pub fn from_error(err: &EdgeError) -> Self {
        Self {
            code: err.status_code(),
            content_type: ERROR_CONTENT_TYPE,
            body: serde_json::to_value(ErrorBody::from(err)).unwrap_or(Value::Null),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code < 400
    }

    /// Serialized body, as written to the wire.
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Build the final response from the navigator's result and the query.
///
/// A present value is cleared of storage-internal fields and wrapped as
/// `{"data": ...}`. An absent value consults the last supplied parameter:
/// wildcard means "all versions of something that does not exist", which is
/// an empty sequence rather than a failure; anything else is a 404 naming
/// that parameter, or `fallback_param` when the query was empty.
pub fn format_response(result: Option<Value>, query: &ShowQuery, fallback_param: &str) -> ShowResponse {
    let resolved: Result<Value, EdgeError> = match result {
        Some(value) => Ok(value),
        None => match query.last_supplied() {
            Some((_, Selector::Wildcard)) => Ok(Value::Array(Vec::new())),
            Some((name, _)) => Err(EdgeError::not_found(name)),
            None => Err(EdgeError::not_found(fallback_param)),
        },
    };

    match resolved {
        Ok(value) => ShowResponse::success(clear_internal_fields(value)),
        Err(err) => ShowResponse::from_error(&err),
    }
}

// =============================================================================
// Tests
// =============================================================================
