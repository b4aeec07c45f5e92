//! Procedge Version - Duplicate-Version Resolution
//!
//! Sub-collection entries are versioned by repetition: several entries may
//! share an `id`, and the one with the greatest `dateModified` is current.
//! This module picks winners without mutating the input document.
//!
//! Key Features:
//! - Wildcard mode: one winner per distinct `id`, first-occurrence order
//! - Single-id mode: latest entry with priors attached as `previousVersions`
//! - Timestamp comparison by parsed instant; unparseable values never win
//!
//! @version 0.1.0
//! @author Procedge Development Team

use chrono::{DateTime, Utc};
use procedge_common::utils::parse_timestamp;
use serde_json::Value;
use std::collections::HashMap;

/// Field attached to a single-id winner carrying its superseded peers.
pub const PREVIOUS_VERSIONS: &str = "previousVersions";

// =============================================================================
// Timestamp Access
// =============================================================================

fn modified_at(item: &Value) -> Option<DateTime<Utc>> {
    let raw = item.get("dateModified").and_then(Value::as_str)?;
    let parsed = parse_timestamp(raw);
    if parsed.is_none() {
        tracing::warn!("unparseable dateModified: {:?}", raw);
    }
    parsed
}

/// True when `candidate` should replace `incumbent`: both timestamps parse
/// and the candidate's is strictly greater. Ties and unparseable values keep
/// the incumbent, so resolution is deterministic for a given input order.
fn supersedes(incumbent: Option<DateTime<Utc>>, candidate: Option<DateTime<Utc>>) -> bool {
    matches!((incumbent, candidate), (Some(a), Some(b)) if b > a)
}

// =============================================================================
// Wildcard Mode
// =============================================================================

/// Deduplicate a sub-collection to the latest version of each distinct `id`.
///
/// Output order is the first-occurrence order of each `id` in the input.
/// An absent, empty, or non-array input yields an empty result; entries
/// without a string `id` are ignored.
pub fn latest_versions(items: Option<&Value>) -> Vec<Value> {
    let Some(items) = items.and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut order: Vec<&str> = Vec::new();
    let mut winners: HashMap<&str, &Value> = HashMap::new();

    for item in items {
        let Some(id) = item.get("id").and_then(Value::as_str) else {
            continue;
        };
        match winners.get(id) {
            Some(incumbent) => {
                if supersedes(modified_at(incumbent), modified_at(item)) {
                    winners.insert(id, item);
                }
            }
            None => {
                order.push(id);
                winners.insert(id, item);
            }
        }
    }

    order.iter().map(|id| winners[id].clone()).collect()
}

// =============================================================================
// Single-Id Mode
// =============================================================================

/// Resolve one `id` within a sub-collection to its latest version.
///
/// All other entries with the same `id` are attached to the winner as
/// `previousVersions`, in reverse input order with the winner excluded.
/// Returns `None` when the input is absent or holds no matching entry.
pub fn resolve_version(items: Option<&Value>, id: &str) -> Option<Value> {
    let items = items.and_then(Value::as_array)?;

    let mut candidates: Vec<&Value> = items
        .iter()
        .rev()
        .filter(|item| item.get("id").and_then(Value::as_str) == Some(id))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let mut best = 0;
    for index in 1..candidates.len() {
        if supersedes(modified_at(candidates[best]), modified_at(candidates[index])) {
            best = index;
        }
    }

    let mut winner = candidates.remove(best).clone();
    if !candidates.is_empty() {
        let priors: Vec<Value> = candidates.into_iter().cloned().collect();
        if let Some(obj) = winner.as_object_mut() {
            obj.insert(PREVIOUS_VERSIONS.to_string(), Value::Array(priors));
        }
    }
    Some(winner)
}

// =============================================================================
// Tests
// =============================================================================
