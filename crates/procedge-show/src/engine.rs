//! Procedge Show Engine
//!
//! One engine, four deployment profiles. A profile pairs a schema tree with
//! the deployment's redaction policy and fallback identifier; the engine
//! runs navigation and formatting for one document/query pair. Invocations
//! are pure and independent: no shared state, nothing to cancel.
//!
//! @version 0.1.0
//! @author Procedge Development Team

use crate::navigate::navigate;
use crate::query::ShowQuery;
use crate::response::{format_response, ShowResponse};
use crate::schema::{SchemaNode, AUCTION_SCHEMA, CONTRACT_SCHEMA, PLAN_SCHEMA, TENDER_SCHEMA};
use serde_json::Value;

// =============================================================================
// Show Profile
// =============================================================================

/// Per-deployment configuration of the show engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowProfile {
    /// Deployment name, for logging.
    pub name: &'static str,
    /// Schema tree navigated against each document.
    pub schema: &'static [SchemaNode],
    /// Whether buyer-only attachment urls are hidden from output.
    pub redact_confidential: bool,
    /// Parameter named by a 404 when the query supplied nothing.
    pub fallback_param: &'static str,
}

/// Tender deployment: deep schema, confidential urls hidden.
pub const TENDERS: ShowProfile = ShowProfile {
    name: "tenders",
    schema: TENDER_SCHEMA,
    redact_confidential: true,
    fallback_param: "tender_id",
};

/// Auction deployment: deep schema, confidential urls hidden.
pub const AUCTIONS: ShowProfile = ShowProfile {
    name: "auctions",
    schema: AUCTION_SCHEMA,
    redact_confidential: true,
    fallback_param: "auction_id",
};

/// Contract deployment: documents only, no redaction step.
pub const CONTRACTS: ShowProfile = ShowProfile {
    name: "contracts",
    schema: CONTRACT_SCHEMA,
    redact_confidential: false,
    fallback_param: "contract_id",
};

/// Plan deployment: documents only, no redaction step.
pub const PLANS: ShowProfile = ShowProfile {
    name: "plans",
    schema: PLAN_SCHEMA,
    redact_confidential: false,
    fallback_param: "plan_id",
};

// =============================================================================
// Show Engine
// =============================================================================

/// The projection engine for one deployment.
#[derive(Debug, Clone, Copy)]
pub struct ShowEngine {
    profile: ShowProfile,
}

impl ShowEngine {
    /// Engine for the tender deployment.
    pub fn tenders() -> Self {
        Self::with_profile(TENDERS)
    }

    /// Engine for the auction deployment.
    pub fn auctions() -> Self {
        Self::with_profile(AUCTIONS)
    }

    /// Engine for the contract deployment.
    pub fn contracts() -> Self {
        Self::with_profile(CONTRACTS)
    }

    /// Engine for the plan deployment.
    pub fn plans() -> Self {
        Self::with_profile(PLANS)
    }

    /// Engine with a custom profile.
    pub fn with_profile(profile: ShowProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ShowProfile {
        &self.profile
    }

    /// Run one show invocation: navigate the document, then format the
    /// result. The store passes `None` when no document exists under the
    /// requested id; with an empty query that surfaces as a 404 naming the
    /// profile's fallback parameter. The document is read-only input; the
    /// response holds only freshly built values.
    pub fn show(&self, doc: Option<&Value>, query: &ShowQuery) -> ShowResponse {
        let result = doc.and_then(|doc| {
            navigate(doc, self.profile.schema, query, self.profile.redact_confidential)
        });
        tracing::debug!(
            "{} show: {} ({} query params)",
            self.profile.name,
            if result.is_some() { "resolved" } else { "absent" },
            query.len()
        );
        format_response(result, query, self.profile.fallback_param)
    }
}

// =============================================================================
// Tests
// =============================================================================
