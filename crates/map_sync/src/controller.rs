use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use places::{MapBounds, Place};
use tracing::{debug, info};

use crate::surface::{MapSurface, MapSurfaceFactory};
use crate::types::{MapConfig, MapEvent, SurfaceLifecycle};

/// Keeps the map widget's markers and camera consistent with the candidate
/// list, and owns the `filter_on_map` / `reposition_map` toggles.
///
/// The controller is the only component allowed to construct, destroy, or
/// command the widget. It never calls the search layer itself; viewport
/// events and toggle flips report back to the caller, which decides whether
/// a re-search is due.
pub struct ViewportController {
    factory: Arc<dyn MapSurfaceFactory>,
    config: MapConfig,
    surface: Option<Box<dyn MapSurface>>,
    lifecycle: SurfaceLifecycle,

    /// Ids of the markers currently displayed
    displayed: HashSet<i64>,

    filter_on_map: bool,
    reposition_map: bool,
}

impl ViewportController {
    /// Creates a controller with no surface; one is constructed once
    /// [`ViewportController::set_surface_available`] reports a wide-enough
    /// display surface.
    pub fn new(factory: Arc<dyn MapSurfaceFactory>, config: Option<MapConfig>) -> Self {
        Self {
            factory,
            config: config.unwrap_or_default(),
            surface: None,
            lifecycle: SurfaceLifecycle::Absent,
            displayed: HashSet::new(),
            filter_on_map: false,
            reposition_map: false,
        }
    }

    /// Reports whether a display surface wide enough to host the map exists.
    ///
    /// Idempotent in both directions: repeated width-change events construct
    /// at most one widget instance, and tearing down an absent surface does
    /// nothing. Losing the surface also forgets the displayed markers, since
    /// they died with the widget.
    pub fn set_surface_available(&mut self, available: bool) {
        match (available, self.lifecycle) {
            (true, SurfaceLifecycle::Absent) => {
                info!("Display surface mounted, constructing map widget");
                self.surface = Some(self.factory.create(&self.config));
                self.lifecycle = SurfaceLifecycle::Constructing;
            }
            (false, SurfaceLifecycle::Constructing | SurfaceLifecycle::Active) => {
                info!("Display surface lost, tearing down map widget");
                self.surface = None;
                self.displayed.clear();
                self.lifecycle = SurfaceLifecycle::Absent;
            }
            _ => {}
        }
    }

    /// Handles an event from the map widget.
    ///
    /// Returns `true` when the event should re-run the current search: a
    /// drag or zoom finished while `filter_on_map` is on. Load events
    /// complete construction and never trigger a search.
    pub fn handle_event(&mut self, event: MapEvent) -> bool {
        match event {
            MapEvent::Load => {
                if self.lifecycle == SurfaceLifecycle::Constructing {
                    debug!("Map widget finished loading");
                    self.lifecycle = SurfaceLifecycle::Active;
                }
                false
            }
            MapEvent::DragEnd | MapEvent::ZoomEnd => {
                self.lifecycle == SurfaceLifecycle::Active && self.filter_on_map
            }
        }
    }

    /// Sets the displayed marker set to exactly the ids in `places`.
    ///
    /// Markers not in the new set are removed, new ids are added, and ids
    /// present in both are left untouched, so unrelated updates cause no
    /// flicker. Calling this twice with the same list issues no widget
    /// commands the second time.
    pub fn update_map_markers(&mut self, places: &[Place]) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if self.lifecycle != SurfaceLifecycle::Active {
            return;
        }

        let desired: HashMap<i64, _> = places.iter().map(|p| (p.id, p.coordinates())).collect();

        let stale: Vec<i64> = self
            .displayed
            .iter()
            .filter(|id| !desired.contains_key(id))
            .copied()
            .collect();
        for id in &stale {
            surface.remove_marker(*id);
            self.displayed.remove(id);
        }

        let mut added = 0usize;
        for (id, coords) in &desired {
            if self.displayed.insert(*id) {
                surface.add_marker(*id, *coords);
                added += 1;
            }
        }

        debug!(
            removed = stale.len(),
            added,
            total = self.displayed.len(),
            "Reconciled map markers"
        );
    }

    /// Removes a single marker.
    ///
    /// Fast path for a selection change known to remove exactly one place;
    /// avoids a full reconcile. Unknown ids are ignored.
    pub fn remove_marker(&mut self, id: i64) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if self.displayed.remove(&id) {
            surface.remove_marker(id);
        }
    }

    /// Pans and zooms the camera to center on `place`.
    pub fn zoom_on_selected_card(&mut self, place: &Place) {
        if self.lifecycle != SurfaceLifecycle::Active {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.pan_zoom_to(place.coordinates());
        }
    }

    /// Moves the camera to fit every given place, when repositioning is on
    /// and there is anything to fit.
    pub fn fit_results(&mut self, places: &[Place]) {
        if self.lifecycle != SurfaceLifecycle::Active || places.is_empty() {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            let coords: Vec<_> = places.iter().map(|p| p.coordinates()).collect();
            surface.fit_bounds(&coords);
        }
    }

    /// Current viewport bounds, once the widget is active.
    pub fn current_bounds(&self) -> Option<MapBounds> {
        if self.lifecycle != SurfaceLifecycle::Active {
            return None;
        }
        self.surface.as_ref().map(|s| s.current_bounds())
    }

    /// Flips `filter_on_map`, returning the new value.
    pub fn toggle_map_filter(&mut self) -> bool {
        self.filter_on_map = !self.filter_on_map;
        debug!(filter_on_map = self.filter_on_map, "Toggled map filter");
        self.filter_on_map
    }

    /// Flips `reposition_map`, returning the new value.
    pub fn toggle_reposition(&mut self) -> bool {
        self.reposition_map = !self.reposition_map;
        debug!(reposition_map = self.reposition_map, "Toggled reposition");
        self.reposition_map
    }

    /// Whether searches are restricted to the current viewport bounds.
    pub fn filter_on_map(&self) -> bool {
        self.filter_on_map
    }

    /// Whether search results re-center the camera.
    pub fn reposition_map(&self) -> bool {
        self.reposition_map
    }

    /// Current lifecycle state of the surface.
    pub fn lifecycle(&self) -> SurfaceLifecycle {
        self.lifecycle
    }

    /// Ids of the markers currently displayed.
    pub fn displayed_markers(&self) -> &HashSet<i64> {
        &self.displayed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use places::{Coordinates, PlaceType};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum SurfaceCall {
        AddMarker(i64),
        RemoveMarker(i64),
        PanZoom,
        FitBounds(usize),
    }

    struct RecordingSurface {
        calls: Arc<Mutex<Vec<SurfaceCall>>>,
    }

    impl MapSurface for RecordingSurface {
        fn add_marker(&mut self, id: i64, _coords: Coordinates) {
            self.calls.lock().unwrap().push(SurfaceCall::AddMarker(id));
        }

        fn remove_marker(&mut self, id: i64) {
            self.calls.lock().unwrap().push(SurfaceCall::RemoveMarker(id));
        }

        fn pan_zoom_to(&mut self, _coords: Coordinates) {
            self.calls.lock().unwrap().push(SurfaceCall::PanZoom);
        }

        fn fit_bounds(&mut self, coords: &[Coordinates]) {
            self.calls
                .lock()
                .unwrap()
                .push(SurfaceCall::FitBounds(coords.len()));
        }

        fn current_bounds(&self) -> MapBounds {
            MapBounds {
                ne: Coordinates {
                    longitude: -118.0,
                    latitude: 38.0,
                },
                sw: Coordinates {
                    longitude: -120.0,
                    latitude: 36.0,
                },
            }
        }
    }

    struct RecordingFactory {
        calls: Arc<Mutex<Vec<SurfaceCall>>>,
        created: AtomicUsize,
    }

    impl RecordingFactory {
        fn new() -> (Arc<Self>, Arc<Mutex<Vec<SurfaceCall>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            let factory = Arc::new(Self {
                calls: calls.clone(),
                created: AtomicUsize::new(0),
            });
            (factory, calls)
        }
    }

    impl MapSurfaceFactory for RecordingFactory {
        fn create(&self, _config: &MapConfig) -> Box<dyn MapSurface> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Box::new(RecordingSurface {
                calls: self.calls.clone(),
            })
        }
    }

    fn place(id: i64) -> Place {
        Place {
            id,
            place_type: PlaceType::Campground,
            sub_type: None,
            name: format!("Place {}", id),
            parent_name: None,
            district: None,
            legacy_id: None,
            subparent_id: None,
            latitude: 37.0 + id as f64 * 0.01,
            longitude: -119.0,
            description: None,
        }
    }

    fn active_controller() -> (ViewportController, Arc<Mutex<Vec<SurfaceCall>>>) {
        let (factory, calls) = RecordingFactory::new();
        let mut controller = ViewportController::new(factory, None);
        controller.set_surface_available(true);
        controller.handle_event(MapEvent::Load);
        (controller, calls)
    }

    #[test]
    fn repeated_width_events_construct_one_widget() {
        let (factory, _calls) = RecordingFactory::new();
        let mut controller = ViewportController::new(factory.clone(), None);

        controller.set_surface_available(true);
        controller.set_surface_available(true);
        controller.set_surface_available(true);

        assert_eq!(factory.created.load(Ordering::SeqCst), 1);
        assert_eq!(controller.lifecycle(), SurfaceLifecycle::Constructing);
    }

    #[test]
    fn narrow_layout_never_constructs() {
        let (factory, _calls) = RecordingFactory::new();
        let mut controller = ViewportController::new(factory.clone(), None);

        controller.set_surface_available(false);

        assert_eq!(factory.created.load(Ordering::SeqCst), 0);
        assert_eq!(controller.lifecycle(), SurfaceLifecycle::Absent);
        assert!(controller.current_bounds().is_none());
    }

    #[test]
    fn shrinking_tears_down_and_forgets_markers() {
        let (mut controller, _calls) = active_controller();
        controller.update_map_markers(&[place(1), place(2)]);
        assert_eq!(controller.displayed_markers().len(), 2);

        controller.set_surface_available(false);

        assert_eq!(controller.lifecycle(), SurfaceLifecycle::Absent);
        assert!(controller.displayed_markers().is_empty());
    }

    #[test]
    fn load_completes_construction() {
        let (factory, _calls) = RecordingFactory::new();
        let mut controller = ViewportController::new(factory, None);
        controller.set_surface_available(true);

        assert_eq!(controller.lifecycle(), SurfaceLifecycle::Constructing);
        assert!(!controller.handle_event(MapEvent::Load));
        assert_eq!(controller.lifecycle(), SurfaceLifecycle::Active);
    }

    #[test]
    fn update_map_markers_is_idempotent() {
        let (mut controller, calls) = active_controller();
        let candidates = vec![place(1), place(2), place(3)];

        controller.update_map_markers(&candidates);
        let after_first = calls.lock().unwrap().len();
        assert_eq!(after_first, 3);

        controller.update_map_markers(&candidates);
        assert_eq!(calls.lock().unwrap().len(), after_first);
    }

    #[test]
    fn update_map_markers_diffs_against_displayed_set() {
        let (mut controller, calls) = active_controller();
        controller.update_map_markers(&[place(1), place(2), place(3)]);
        calls.lock().unwrap().clear();

        controller.update_map_markers(&[place(2), place(3), place(4)]);

        let recorded = calls.lock().unwrap().clone();
        assert_eq!(recorded.len(), 2);
        assert!(recorded.contains(&SurfaceCall::RemoveMarker(1)));
        assert!(recorded.contains(&SurfaceCall::AddMarker(4)));
    }

    #[test]
    fn remove_marker_fast_path() {
        let (mut controller, calls) = active_controller();
        controller.update_map_markers(&[place(1), place(2)]);
        calls.lock().unwrap().clear();

        controller.remove_marker(1);
        controller.remove_marker(99);

        let recorded = calls.lock().unwrap().clone();
        assert_eq!(recorded, vec![SurfaceCall::RemoveMarker(1)]);
        assert_eq!(controller.displayed_markers().len(), 1);
    }

    #[test]
    fn drag_triggers_search_only_with_filter_on() {
        let (mut controller, _calls) = active_controller();

        assert!(!controller.handle_event(MapEvent::DragEnd));

        controller.toggle_map_filter();
        assert!(controller.handle_event(MapEvent::DragEnd));
        assert!(controller.handle_event(MapEvent::ZoomEnd));

        controller.toggle_map_filter();
        assert!(!controller.handle_event(MapEvent::ZoomEnd));
    }

    #[test]
    fn events_before_load_never_trigger_search() {
        let (factory, _calls) = RecordingFactory::new();
        let mut controller = ViewportController::new(factory, None);
        controller.set_surface_available(true);
        controller.toggle_map_filter();

        assert!(!controller.handle_event(MapEvent::DragEnd));
    }

    #[test]
    fn fit_results_issues_one_fit_bounds() {
        let (mut controller, calls) = active_controller();

        controller.fit_results(&[place(1), place(2), place(3)]);

        let recorded = calls.lock().unwrap().clone();
        assert_eq!(recorded, vec![SurfaceCall::FitBounds(3)]);
    }

    #[test]
    fn fit_results_skips_empty_result_sets() {
        let (mut controller, calls) = active_controller();

        controller.fit_results(&[]);

        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn camera_commands_require_active_surface() {
        let (factory, calls) = RecordingFactory::new();
        let mut controller = ViewportController::new(factory, None);

        controller.zoom_on_selected_card(&place(1));
        controller.update_map_markers(&[place(1)]);
        controller.fit_results(&[place(1)]);

        assert!(calls.lock().unwrap().is_empty());
    }
}
