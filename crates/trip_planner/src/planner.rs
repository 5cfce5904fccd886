use std::sync::Arc;

use map_sync::{MapConfig, MapEvent, MapSurfaceFactory, ViewportController};
use places::{Place, PlaceCatalog, PlaceType, SelectionSet, TripType};
use search_services::{SearchOrchestrator, SearchProvider};
use session_services::{CurrentUser, SessionClient, SessionError};
use tracing::{debug, info};

use crate::navigation::{Breadcrumb, DETAIL_VIEW_SCROLL_TOP, NavigationState, SidebarView};
use crate::trip_requests::TripRequestStore;

/// The trip planning core.
///
/// Owns the candidate catalog, the selection set, the viewport controller,
/// and the navigation state, and wires user input (search text, trip type,
/// card clicks, map drags, toggles) into the flows that keep all of them
/// consistent. The UI renders from the accessors and applies the scroll
/// targets the mutating calls return.
///
/// All flows are driven from a single UI task; methods take `&mut self` and
/// suspend only inside the search provider. Drivers that want several
/// searches in flight at once run the shared [`SearchOrchestrator`] directly
/// and feed each applied outcome through
/// [`TripPlanner::apply_search_results`] — the orchestrator's issuance
/// ordering guarantees stale outcomes come back as discards.
pub struct TripPlanner {
    catalog: PlaceCatalog,
    selection: SelectionSet,
    viewport: ViewportController,
    orchestrator: Arc<SearchOrchestrator>,
    session: Arc<dyn SessionClient>,
    trip_requests: Arc<dyn TripRequestStore>,
    nav: NavigationState,
}

impl TripPlanner {
    /// Creates a planner wired to the given collaborators.
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        map_factory: Arc<dyn MapSurfaceFactory>,
        session: Arc<dyn SessionClient>,
        trip_requests: Arc<dyn TripRequestStore>,
        map_config: Option<MapConfig>,
    ) -> Self {
        Self {
            catalog: PlaceCatalog::new(),
            selection: SelectionSet::new(),
            viewport: ViewportController::new(map_factory, map_config),
            orchestrator: Arc::new(SearchOrchestrator::new(provider)),
            session,
            trip_requests,
            nav: NavigationState::new(),
        }
    }

    /// The active place type, derived from the trip type.
    fn active_place_type(&self) -> PlaceType {
        self.nav.trip_type().place_type()
    }

    /// Candidate places for the active trip type: the latest results with
    /// everything already committed to the trip filtered out.
    pub fn candidates(&self) -> Vec<Place> {
        self.catalog
            .candidates_excluding(self.active_place_type(), &self.selection.selected_ids())
    }

    fn sync_markers(&mut self) {
        let candidates = self.candidates();
        self.viewport.update_map_markers(&candidates);
    }

    /// Runs a search for `text` under the active trip type and applies the
    /// outcome.
    ///
    /// The viewport bounds ride along only while `filter_on_map` is on (and
    /// a map is actually active). Empty text is a no-op beyond recording the
    /// text. A superseded response is discarded without touching any state.
    pub async fn handle_search(&mut self, text: &str) {
        self.nav.set_search_text(text);

        if text.trim().is_empty() {
            debug!("Skipping search with empty text");
            return;
        }

        let place_type = self.active_place_type();
        let bounds = if self.viewport.filter_on_map() {
            self.viewport.current_bounds()
        } else {
            None
        };

        let Some(results) = self.orchestrator.run_search(text, place_type, bounds).await else {
            return;
        };

        self.apply_search_results(place_type, results);
    }

    /// Writes applied search results into the catalog and reconciles the
    /// map: markers always, camera only when `reposition_map` is on.
    pub fn apply_search_results(&mut self, place_type: PlaceType, results: Vec<Place>) {
        self.catalog.set_results(place_type, results);

        if place_type != self.active_place_type() {
            return;
        }

        self.sync_markers();

        if self.viewport.reposition_map() {
            let candidates = self.candidates();
            self.viewport.fit_results(&candidates);
        }
    }

    /// Opens the detail view for the place with `id`.
    ///
    /// Looks the place up in the candidate catalog first, then in the
    /// selection (saved trips open their places too). Remembers
    /// `current_scroll` for the return trip, zooms the map onto the place,
    /// and returns the offset the sidebar should pin to. Unknown ids are a
    /// no-op returning `None`.
    pub fn open_card(&mut self, id: i64, current_scroll: f64) -> Option<f64> {
        let place_type = self.active_place_type();
        let place = self
            .catalog
            .find(place_type, id)
            .or_else(|| self.selection.places().iter().find(|p| p.id == id))?
            .clone();

        self.nav.remember_scroll(current_scroll);
        self.viewport.zoom_on_selected_card(&place);
        self.selection.select_card(Some(place));

        Some(DETAIL_VIEW_SCROLL_TOP)
    }

    /// Closes the detail view and returns the scroll offset to restore.
    ///
    /// Re-derives the marker set for the full candidate list, since the
    /// detail view may have changed what is selected.
    pub fn close_card(&mut self) -> f64 {
        self.selection.select_card(None);
        self.sync_markers();
        self.nav.scroll_offset()
    }

    /// Commits the focused place to the trip.
    ///
    /// The place's marker is removed on the fast path, the candidate view
    /// drops it through the exclusion filter, and the detail view closes.
    /// Returns the scroll offset to restore, or `None` when no card is
    /// focused.
    pub fn add_focused_to_trip(&mut self) -> Option<f64> {
        let place = self.selection.focused()?.clone();
        let id = place.id;

        if self.selection.add_selected(place) {
            self.viewport.remove_marker(id);
        }
        self.selection.select_card(None);
        self.sync_markers();

        Some(self.nav.scroll_offset())
    }

    /// Removes the place with `id` from the trip.
    ///
    /// Reinsertion into the candidates is best-effort: if the latest search
    /// still contains the place, dropping its id from the exclusion set
    /// brings it (and its marker) back; if the catalog has moved on, it
    /// stays gone.
    pub fn remove_selected(&mut self, id: i64) {
        if self.selection.remove_selected(id).is_some() {
            self.sync_markers();
        }
    }

    /// Handles an event from the map widget, re-running the current search
    /// when a drag or zoom finished while `filter_on_map` is on.
    pub async fn on_map_event(&mut self, event: MapEvent) {
        if self.viewport.handle_event(event) {
            let text = self.nav.search_text().to_string();
            self.handle_search(&text).await;
        }
    }

    /// Flips `filter_on_map`.
    ///
    /// Turning the filter on while a trip is being planned or edited re-runs
    /// the current search immediately, so the results reflect the filter
    /// without another user action.
    pub async fn toggle_map_filter(&mut self) {
        let filter_on = self.viewport.toggle_map_filter();

        let searching = self.trip_requests.editing_trip_request()
            || self.nav.sidebar_view() == SidebarView::PlanTrip;
        if filter_on && searching {
            let text = self.nav.search_text().to_string();
            self.handle_search(&text).await;
        }
    }

    /// Flips `reposition_map`, returning the new value.
    pub fn toggle_reposition(&mut self) -> bool {
        self.viewport.toggle_reposition()
    }

    /// Switches the active trip type and re-runs the current search for it.
    pub async fn set_trip_type(&mut self, trip_type: TripType) {
        if self.nav.trip_type() == trip_type {
            return;
        }
        self.nav.set_trip_type(trip_type);

        let text = self.nav.search_text().to_string();
        self.handle_search(&text).await;
    }

    /// Switches the sidebar view.
    ///
    /// Leaving a view exits any active detail view and abandons a
    /// trip-request edit in progress.
    pub fn set_sidebar_view(&mut self, view: SidebarView) {
        if self.nav.sidebar_view() == view {
            return;
        }

        self.nav.set_sidebar_view(view);
        if self.selection.focused().is_some() {
            self.selection.select_card(None);
        }
        self.trip_requests.reset_selections();
    }

    /// Reports whether a display surface wide enough for the map exists.
    pub fn set_surface_available(&mut self, available: bool) {
        self.viewport.set_surface_available(available);
    }

    /// Breadcrumb trail for the current view and editing state.
    pub fn breadcrumb_trail(&self) -> Vec<Breadcrumb> {
        self.nav
            .breadcrumb_trail(self.trip_requests.editing_trip_request())
    }

    /// The signed-in user, from the session collaborator.
    pub async fn current_user(&self) -> Result<Option<CurrentUser>, SessionError> {
        self.session.current_user().await
    }

    /// Ends the session and clears every client-side cache.
    ///
    /// This reset is a hard boundary: catalog, selection, markers, and
    /// navigation all return to their initial state, never partially.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        self.session.logout().await?;

        self.catalog.clear();
        self.selection.clear();
        self.nav.reset();
        self.sync_markers();

        info!("Cleared client caches after logout");
        Ok(())
    }

    /// The candidate catalog (latest raw search results).
    pub fn catalog(&self) -> &PlaceCatalog {
        &self.catalog
    }

    /// The places committed to the trip, and the focused card.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The viewport controller state (toggles, lifecycle, markers).
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    /// The sidebar navigation state.
    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// The shared search orchestrator, for drivers that overlap searches.
    pub fn orchestrator(&self) -> Arc<SearchOrchestrator> {
        self.orchestrator.clone()
    }
}
