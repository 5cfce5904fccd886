//! # Session Services
//!
//! This crate provides the session collaborator for the trip planner: who is
//! signed in, and how to end the session. The planner treats the session as
//! an external boundary; on logout every client-side cache is cleared.

/// User and error types for session operations.
mod types;
pub use types::*;

/// Session client trait, HTTP implementation, and development mock.
mod service;
pub use service::*;
