//! Procedge Schema - Deployment Schema Descriptors
//!
//! Static trees mirroring each document type's nesting structure. Each node
//! names a sub-collection, the query parameter that selects within it, and
//! the child nodes reachable beneath it. Node declaration order is selection
//! priority: when a caller populates several parameters at once, the first
//! node in declaration order whose parameter is set wins. That is an
//! intentional positional precedence, not a validation error.
//!
//! @version 0.1.0
//! @author Procedge Development Team

// =============================================================================
// Schema Node
// =============================================================================

/// One node of a deployment schema tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaNode {
    /// Sub-collection key in the document (e.g. `awards`).
    pub collection: &'static str,
    /// Query parameter that selects within the sub-collection.
    pub param: &'static str,
    /// Nested sub-collections reachable once an entry is selected.
    pub children: &'static [SchemaNode],
}

/// Query parameter selecting a document/attachment at the current level.
/// Every deployment recognizes it, beneath any schema path.
pub const DOCUMENT_PARAM: &str = "document_id";

/// All query parameters a schema recognizes, in priority order, including
/// the trailing document selector.
pub fn schema_params(nodes: &'static [SchemaNode]) -> Vec<&'static str> {
    let mut params = Vec::new();
    collect_params(nodes, &mut params);
    params.push(DOCUMENT_PARAM);
    params
}

fn collect_params(nodes: &'static [SchemaNode], out: &mut Vec<&'static str>) {
    for node in nodes {
        out.push(node.param);
        collect_params(node.children, out);
    }
}

// =============================================================================
// Tender Schema
// =============================================================================

/// Schema tree for tender documents: up to four nesting levels counting the
/// document/attachment layer beneath any selected entry.
pub const TENDER_SCHEMA: &[SchemaNode] = &[
    SchemaNode {
        collection: "awards",
        param: "award_id",
        children: &[SchemaNode {
            collection: "complaints",
            param: "complaint_id",
            children: &[],
        }],
    },
    SchemaNode {
        collection: "bids",
        param: "bid_id",
        children: &[
            SchemaNode {
                collection: "eligibilityDocuments",
                param: "eligibility_document",
                children: &[],
            },
            SchemaNode {
                collection: "financialDocuments",
                param: "financial_document",
                children: &[],
            },
            SchemaNode {
                collection: "qualificationDocuments",
                param: "qualification_document",
                children: &[],
            },
        ],
    },
    SchemaNode {
        collection: "cancellations",
        param: "cancellation_id",
        children: &[],
    },
    SchemaNode {
        collection: "complaints",
        param: "complaint_id",
        children: &[],
    },
    SchemaNode {
        collection: "contracts",
        param: "contract_id",
        children: &[],
    },
    SchemaNode {
        collection: "lots",
        param: "lot_id",
        children: &[],
    },
    SchemaNode {
        collection: "qualifications",
        param: "qualification_id",
        children: &[SchemaNode {
            collection: "complaints",
            param: "q_complaint_id",
            children: &[],
        }],
    },
    SchemaNode {
        collection: "questions",
        param: "question_id",
        children: &[],
    },
];

// =============================================================================
// Auction Schema
// =============================================================================

/// Schema tree for auction documents. Same shape as tenders minus the
/// qualification phase and the per-class bid document collections.
pub const AUCTION_SCHEMA: &[SchemaNode] = &[
    SchemaNode {
        collection: "awards",
        param: "award_id",
        children: &[SchemaNode {
            collection: "complaints",
            param: "complaint_id",
            children: &[],
        }],
    },
    SchemaNode {
        collection: "bids",
        param: "bid_id",
        children: &[],
    },
    SchemaNode {
        collection: "cancellations",
        param: "cancellation_id",
        children: &[],
    },
    SchemaNode {
        collection: "complaints",
        param: "complaint_id",
        children: &[],
    },
    SchemaNode {
        collection: "contracts",
        param: "contract_id",
        children: &[],
    },
    SchemaNode {
        collection: "lots",
        param: "lot_id",
        children: &[],
    },
    SchemaNode {
        collection: "questions",
        param: "question_id",
        children: &[],
    },
];

// =============================================================================
// Flat Schemas
// =============================================================================

/// Contract documents nest nothing beyond their `documents` sub-collection.
pub const CONTRACT_SCHEMA: &[SchemaNode] = &[];

/// Plan documents nest nothing beyond their `documents` sub-collection.
pub const PLAN_SCHEMA: &[SchemaNode] = &[];

// =============================================================================
// Tests
// =============================================================================
