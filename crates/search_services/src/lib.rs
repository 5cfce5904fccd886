//! # Search Services
//!
//! This crate provides the search side of the trip planner: the request
//! contract with the external search provider, an HTTP implementation of
//! that contract, and the orchestrator that guarantees only the most
//! recently issued search is ever applied.

/// Request and error types for the search provider contract.
mod types;
pub use types::*;

/// Search provider trait and the issuance-ordered orchestrator.
mod orchestrator;
pub use orchestrator::*;

/// HTTP-backed search provider.
mod http_provider;
pub use http_provider::*;
