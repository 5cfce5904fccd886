use std::collections::HashSet;

use tracing::debug;

use crate::types::Place;

/// The ordered list of places the user has committed to the trip, plus the
/// place currently shown in the detail view.
///
/// Insertion order is display order. The focused place is independent of
/// selection membership: focusing a card never adds it to the trip.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: Vec<Place>,
    focused: Option<Place>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `place` to the selection.
    ///
    /// Adding an id that is already selected is a no-op, not an error.
    /// Returns whether the place was newly added, so callers know if a
    /// marker removal is due.
    pub fn add_selected(&mut self, place: Place) -> bool {
        if self.is_selected(place.id) {
            debug!(id = place.id, "Place already selected, ignoring add");
            return false;
        }

        debug!(id = place.id, name = %place.name, "Adding place to trip");
        self.selected.push(place);
        true
    }

    /// Removes the place with `id` from the selection, returning it.
    ///
    /// An absent id is a no-op. The removed place is not reinserted into the
    /// catalog here; whether it reappears as a candidate depends on whether
    /// the latest search still contains it.
    pub fn remove_selected(&mut self, id: i64) -> Option<Place> {
        let index = self.selected.iter().position(|p| p.id == id)?;
        debug!(id, "Removing place from trip");
        Some(self.selected.remove(index))
    }

    /// Sets or clears the focused place for the detail view.
    ///
    /// Passing `None` signals "return to list"; the caller restores the
    /// remembered scroll offset and re-derives the full marker set.
    pub fn select_card(&mut self, place: Option<Place>) {
        self.focused = place;
    }

    /// The place currently shown in the detail view, if any.
    pub fn focused(&self) -> Option<&Place> {
        self.focused.as_ref()
    }

    /// Whether the place with `id` is part of the trip.
    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.iter().any(|p| p.id == id)
    }

    /// Ids of every selected place, for the catalog exclusion filter.
    pub fn selected_ids(&self) -> HashSet<i64> {
        self.selected.iter().map(|p| p.id).collect()
    }

    /// The selected places in insertion order.
    pub fn places(&self) -> &[Place] {
        &self.selected
    }

    /// Number of selected places.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drops the selection and any focused place.
    ///
    /// Used on logout and trip submission, where the client caches reset.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.focused = None;
    }
}
