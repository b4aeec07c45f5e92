//! Procedge Scrub - Redaction and Field Clearing
//!
//! Output hygiene for show payloads: buyer-only attachment `url` redaction
//! and removal of storage-internal fields. Both transforms take ownership of
//! an already-copied value and return it filtered; the source document is
//! never touched.
//!
//! @version 0.1.0
//! @author Procedge Development Team

use serde_json::Value;

/// Confidentiality marker restricting an attachment `url` to the buyer.
pub const BUYER_ONLY: &str = "buyerOnly";

/// Storage-internal fields, never exposed in responses.
pub const INTERNAL_FIELDS: &[&str] = &["_id", "_rev", "_revisions", "doc_type"];

// =============================================================================
// Confidentiality Redaction
// =============================================================================

/// Remove `url` from a document/attachment marked buyer-only confidential.
/// Anything else passes through unchanged. Idempotent.
pub fn hide_confidential_url(mut doc: Value) -> Value {
    if let Some(obj) = doc.as_object_mut() {
        if obj.get("confidentiality").and_then(Value::as_str) == Some(BUYER_ONLY) {
            obj.remove("url");
        }
    }
    doc
}

// =============================================================================
// Field Clearing
// =============================================================================

/// Strip storage-internal fields from a success payload: the top-level
/// object, or each element when the payload is a sequence. All other fields
/// pass through unchanged.
pub fn clear_internal_fields(data: Value) -> Value {
    match data {
        Value::Array(items) => Value::Array(items.into_iter().map(clear_object).collect()),
        other => clear_object(other),
    }
}

fn clear_object(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        for field in INTERNAL_FIELDS {
            obj.remove(*field);
        }
    }
    value
}

// =============================================================================
// Tests
// =============================================================================
