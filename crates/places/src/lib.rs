//! # Places
//!
//! This crate provides the domain model for the trip planner: place records
//! returned by the search provider, the candidate catalog backing the search
//! results list, and the selection set holding the places committed to a trip.

/// Types for places, trip categories, and map geometry.
mod types;
pub use types::*;

/// Candidate catalog holding the latest search results per place type.
mod catalog;
pub use catalog::*;

/// Selection set holding the places committed to a trip.
mod selection;
pub use selection::*;
