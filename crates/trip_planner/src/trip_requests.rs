use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Trait for the trip-request persistence collaborator.
///
/// The planner never stores trip requests itself; it only needs to know
/// whether one is being edited (to gate searches and breadcrumbs) and to
/// ask for the edit to be abandoned when navigation leaves it.
pub trait TripRequestStore: Send + Sync {
    /// Whether a saved trip request is currently being edited.
    fn editing_trip_request(&self) -> bool;

    /// Abandons any in-progress trip-request edit.
    fn reset_selections(&self);
}

/// Mock trip-request store for development/testing
#[derive(Debug, Default)]
pub struct MockTripRequestStore {
    editing: AtomicBool,
    resets: AtomicUsize,
}

impl MockTripRequestStore {
    /// Creates a store with no edit in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a trip request as being edited (or not).
    pub fn set_editing(&self, editing: bool) {
        self.editing.store(editing, Ordering::SeqCst);
    }

    /// Number of times the edit was abandoned.
    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

impl TripRequestStore for MockTripRequestStore {
    fn editing_trip_request(&self) -> bool {
        self.editing.load(Ordering::SeqCst)
    }

    fn reset_selections(&self) {
        self.editing.store(false, Ordering::SeqCst);
        self.resets.fetch_add(1, Ordering::SeqCst);
    }
}
