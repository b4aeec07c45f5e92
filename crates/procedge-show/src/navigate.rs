//! Procedge Navigate - Schema-Driven Document Traversal
//!
//! Recursive walk of a deployment schema tree against a document. The query
//! steers descent: the first node in declaration order whose parameter is
//! populated selects the path, and the walk terminates at the resolved
//! target or signals absence for the whole navigation. It never yields a
//! partial result.
//!
//! @version 0.1.0
//! @author Procedge Development Team

use crate::query::ShowQuery;
use crate::schema::{SchemaNode, DOCUMENT_PARAM};
use crate::scrub::hide_confidential_url;
use crate::version::{latest_versions, resolve_version};
use procedge_common::Selector;
use serde_json::Value;

// =============================================================================
// Navigation
// =============================================================================

/// Walk `nodes` against `obj`, returning the selected value or `None` when
/// a specific id fails to resolve anywhere along the path.
///
/// For each node, in declaration order:
/// - a wildcard selector short-circuits to the deduplicated latest-version
///   set of that sub-collection;
/// - a specific id resolves to the latest version of the matching entry
///   (priors attached) and descent continues into it with the node's
///   children; no match makes the whole navigation absent;
/// - an unset selector skips to the next node.
///
/// When no node selector is populated, the `document_id` parameter selects
/// within the current object's `documents` sub-collection, with buyer-only
/// `url` redaction in redacting deployments; with `document_id` also unset,
/// the current object itself is the target.
pub fn navigate(obj: &Value, nodes: &[SchemaNode], query: &ShowQuery, redact: bool) -> Option<Value> {
    for node in nodes {
        match query.get(node.param) {
            Selector::Wildcard => {
                return Some(Value::Array(latest_versions(obj.get(node.collection))));
            }
            Selector::Specific(id) => {
                let child = resolve_version(obj.get(node.collection), id)?;
                return navigate(&child, node.children, query, redact);
            }
            Selector::Unset => {}
        }
    }

    match query.get(DOCUMENT_PARAM) {
        Selector::Wildcard => {
            let mut documents = latest_versions(obj.get("documents"));
            if redact {
                documents = documents.into_iter().map(hide_confidential_url).collect();
            }
            Some(Value::Array(documents))
        }
        Selector::Specific(id) => {
            let document = resolve_version(obj.get("documents"), id)?;
            Some(if redact {
                hide_confidential_url(document)
            } else {
                document
            })
        }
        Selector::Unset => Some(obj.clone()),
    }
}

// =============================================================================
// Tests
// =============================================================================
