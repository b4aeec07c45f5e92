//! Procedge Show - Projection Engine
//!
//! The read-side "show" engine for procurement documents. Given an
//! already-fetched document and a query describing a path into its nested
//! structure, the engine locates the requested sub-object, resolves
//! duplicate versions by `dateModified`, strips confidential and
//! storage-internal fields, and produces a uniform success or not-found
//! response.
//!
//! Key Features:
//! - Schema-driven recursive navigation over nested sub-collections
//! - Duplicate-version resolution (latest wins, priors preserved)
//! - Confidentiality-based `url` redaction for buyer-only attachments
//! - Uniform response formatting keyed on the failing query parameter
//! - One engine, four deployment profiles (tenders, auctions, contracts,
//!   plans)
//!
//! @version 0.1.0
//! @author Procedge Development Team

pub mod engine;
pub mod navigate;
pub mod query;
pub mod response;
pub mod schema;
pub mod scrub;
pub mod version;

pub use engine::{ShowEngine, ShowProfile, AUCTIONS, CONTRACTS, PLANS, TENDERS};
pub use navigate::navigate;
pub use query::ShowQuery;
pub use response::{ErrorBody, ErrorEntry, ShowResponse};
pub use schema::{
    SchemaNode, AUCTION_SCHEMA, CONTRACT_SCHEMA, DOCUMENT_PARAM, PLAN_SCHEMA, TENDER_SCHEMA,
};
