//! # Map Sync
//!
//! This crate keeps the external map widget synchronized with the trip
//! planner's candidate and selection state. It owns the widget handle behind
//! a conditional lifecycle, reconciles the displayed marker set against the
//! candidate list, and issues camera commands.

/// Map widget configuration, events, and lifecycle states.
mod types;
pub use types::*;

/// Contract implemented by the external map rendering surface.
mod surface;
pub use surface::*;

/// Controller reconciling markers and camera with planner state.
mod controller;
pub use controller::*;
