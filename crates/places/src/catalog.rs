use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::{Place, PlaceType};

/// Latest search results for one place type.
#[derive(Debug, Clone, Default)]
struct TypedResults {
    places: Vec<Place>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Candidate catalog holding the most recent search results per place type.
///
/// The catalog stores results exactly as the provider returned them. A place
/// that has been committed to the trip is hidden from the candidate view
/// through [`PlaceCatalog::candidates_excluding`], never by removing it here;
/// this keeps deselection cheap while the catalog still holds the place.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    campgrounds: TypedResults,
    trailheads: TypedResults,
}

impl PlaceCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    fn results(&self, place_type: PlaceType) -> &TypedResults {
        match place_type {
            PlaceType::Campground => &self.campgrounds,
            PlaceType::Trailhead => &self.trailheads,
        }
    }

    fn results_mut(&mut self, place_type: PlaceType) -> &mut TypedResults {
        match place_type {
            PlaceType::Campground => &mut self.campgrounds,
            PlaceType::Trailhead => &mut self.trailheads,
        }
    }

    /// Replaces the candidate sequence for the given place type.
    ///
    /// An empty list is valid and clears the candidates (and therefore the
    /// markers, once the caller reconciles them).
    pub fn set_results(&mut self, place_type: PlaceType, places: Vec<Place>) {
        debug!(?place_type, count = places.len(), "Replacing catalog results");

        let results = self.results_mut(place_type);
        results.places = places;
        results.refreshed_at = Some(Utc::now());
    }

    /// The candidate sequence for `place_type` with the selected ids dropped.
    ///
    /// Pure read; enforces the mutual exclusion between catalog and selection
    /// without mutating either.
    pub fn candidates_excluding(
        &self,
        place_type: PlaceType,
        selected_ids: &HashSet<i64>,
    ) -> Vec<Place> {
        self.results(place_type)
            .places
            .iter()
            .filter(|place| !selected_ids.contains(&place.id))
            .cloned()
            .collect()
    }

    /// Looks up a place by id in the latest results for `place_type`.
    pub fn find(&self, place_type: PlaceType, id: i64) -> Option<&Place> {
        self.results(place_type).places.iter().find(|p| p.id == id)
    }

    /// When the results for `place_type` were last replaced.
    pub fn refreshed_at(&self, place_type: PlaceType) -> Option<DateTime<Utc>> {
        self.results(place_type).refreshed_at
    }

    /// Number of raw candidates held for `place_type`, before exclusion.
    pub fn len(&self, place_type: PlaceType) -> usize {
        self.results(place_type).places.len()
    }

    /// Whether no candidates are held for `place_type`.
    pub fn is_empty(&self, place_type: PlaceType) -> bool {
        self.results(place_type).places.is_empty()
    }

    /// Drops all results for both place types.
    ///
    /// Used on logout, where every client-side cache must be cleared.
    pub fn clear(&mut self) {
        self.campgrounds = TypedResults::default();
        self.trailheads = TypedResults::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: i64, place_type: PlaceType) -> Place {
        Place {
            id,
            place_type,
            sub_type: None,
            name: format!("Place {}", id),
            parent_name: None,
            district: None,
            legacy_id: None,
            subparent_id: None,
            latitude: 37.0,
            longitude: -119.0,
            description: None,
        }
    }

    #[test]
    fn set_results_replaces_previous_results() {
        let mut catalog = PlaceCatalog::new();
        catalog.set_results(
            PlaceType::Campground,
            vec![place(1, PlaceType::Campground)],
        );
        catalog.set_results(
            PlaceType::Campground,
            vec![place(2, PlaceType::Campground), place(3, PlaceType::Campground)],
        );

        assert_eq!(catalog.len(PlaceType::Campground), 2);
        assert!(catalog.find(PlaceType::Campground, 1).is_none());
        assert!(catalog.find(PlaceType::Campground, 2).is_some());
    }

    #[test]
    fn results_are_tracked_per_place_type() {
        let mut catalog = PlaceCatalog::new();
        catalog.set_results(
            PlaceType::Campground,
            vec![place(1, PlaceType::Campground)],
        );
        catalog.set_results(PlaceType::Trailhead, vec![place(1, PlaceType::Trailhead)]);

        assert_eq!(catalog.len(PlaceType::Campground), 1);
        assert_eq!(catalog.len(PlaceType::Trailhead), 1);

        catalog.set_results(PlaceType::Trailhead, vec![]);
        assert!(catalog.is_empty(PlaceType::Trailhead));
        assert_eq!(catalog.len(PlaceType::Campground), 1);
    }

    #[test]
    fn candidates_excluding_drops_selected_ids() {
        let mut catalog = PlaceCatalog::new();
        catalog.set_results(
            PlaceType::Campground,
            (1..=5).map(|id| place(id, PlaceType::Campground)).collect(),
        );

        let selected: HashSet<i64> = [2, 4].into_iter().collect();
        let candidates = catalog.candidates_excluding(PlaceType::Campground, &selected);

        let ids: Vec<i64> = candidates.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);

        // The exclusion filter never mutates the stored results.
        assert_eq!(catalog.len(PlaceType::Campground), 5);
    }

    #[test]
    fn candidates_excluding_with_no_selection_returns_everything() {
        let mut catalog = PlaceCatalog::new();
        catalog.set_results(
            PlaceType::Campground,
            (1..=3).map(|id| place(id, PlaceType::Campground)).collect(),
        );

        let candidates = catalog.candidates_excluding(PlaceType::Campground, &HashSet::new());
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn set_results_stamps_refresh_time() {
        let mut catalog = PlaceCatalog::new();
        assert!(catalog.refreshed_at(PlaceType::Campground).is_none());

        catalog.set_results(PlaceType::Campground, vec![]);
        assert!(catalog.refreshed_at(PlaceType::Campground).is_some());
    }

    #[test]
    fn clear_drops_both_place_types() {
        let mut catalog = PlaceCatalog::new();
        catalog.set_results(
            PlaceType::Campground,
            vec![place(1, PlaceType::Campground)],
        );
        catalog.set_results(PlaceType::Trailhead, vec![place(2, PlaceType::Trailhead)]);

        catalog.clear();

        assert!(catalog.is_empty(PlaceType::Campground));
        assert!(catalog.is_empty(PlaceType::Trailhead));
        assert!(catalog.refreshed_at(PlaceType::Campground).is_none());
    }
}
