//! # Trip Planner
//!
//! This crate ties the trip planning core together: the candidate catalog,
//! the selection set, the map viewport controller, the search orchestrator,
//! and the session boundary, wired into the flows the sidebar and map UI
//! drive. Rendering stays outside; the planner exposes state reads and
//! returns scroll targets instead of touching any widget directly.

/// Sidebar navigation state: view mode, search text, scroll bookkeeping.
mod navigation;
pub use navigation::*;

/// Trip-request persistence collaborator contract.
mod trip_requests;
pub use trip_requests::*;

/// The planner composition root.
mod planner;
pub use planner::*;
