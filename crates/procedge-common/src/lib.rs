//! Procedge Common - Shared Types and Utilities
//!
//! Foundational types, error handling, and utilities used across the
//! Procedge read-side projection layer. Provides the abstractions shared
//! by every show-function deployment (tenders, auctions, contracts, plans).
//!
//! Key Features:
//! - Unified error type with HTTP status mapping
//! - Three-state query selectors (unset / wildcard / specific id)
//! - Timestamp parsing for `dateModified` comparison
//!
//! @version 0.1.0
//! @author Procedge Development Team

pub mod error;
pub mod types;
pub mod utils;

pub use error::{EdgeError, Result};
pub use types::*;
