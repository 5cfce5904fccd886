use places::TripType;

/// View mode of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarView {
    /// Saved trips list (with trip-request editing underneath)
    MyTrips,
    /// Search-and-select flow for a new trip
    PlanTrip,
}

/// Breadcrumb entries shown above the trips sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breadcrumb {
    /// Root of the saved-trips view
    AllTrips,
    /// Active trip-request edit
    TripEdit,
}

/// Sidebar scroll offset a detail view is pinned to, leaving the back
/// button and card header visible.
pub const DETAIL_VIEW_SCROLL_TOP: f64 = 170.0;

/// Sidebar navigation state: view mode, search text, trip type, and the one
/// remembered scroll offset used when entering and leaving a detail view.
///
/// All of this is explicit state handed to event handlers by the planner;
/// nothing lives in module-level globals, so flows stay testable without a
/// live UI tree.
#[derive(Debug, Clone)]
pub struct NavigationState {
    sidebar_view: SidebarView,
    search_text: String,
    scroll_offset: f64,
    trip_type: TripType,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            sidebar_view: SidebarView::MyTrips,
            search_text: String::new(),
            scroll_offset: 0.0,
            trip_type: TripType::Camp,
        }
    }
}

impl NavigationState {
    /// Creates navigation state with the default view and trip type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sidebar view.
    pub fn sidebar_view(&self) -> SidebarView {
        self.sidebar_view
    }

    /// Switches the sidebar view.
    pub fn set_sidebar_view(&mut self, view: SidebarView) {
        self.sidebar_view = view;
    }

    /// The latest search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Records the latest search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// The active trip type.
    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    /// Switches the active trip type.
    pub fn set_trip_type(&mut self, trip_type: TripType) {
        self.trip_type = trip_type;
    }

    /// Remembers the sidebar scroll position before a detail view opens.
    pub fn remember_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// The remembered sidebar scroll position, restored when a detail view
    /// closes.
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Breadcrumb trail for the current view.
    ///
    /// The saved-trips view always starts at the root crumb and gains a
    /// second one while a trip request is being edited; the plan-trip view
    /// shows no trail.
    pub fn breadcrumb_trail(&self, editing_trip_request: bool) -> Vec<Breadcrumb> {
        match self.sidebar_view {
            SidebarView::MyTrips => {
                let mut trail = vec![Breadcrumb::AllTrips];
                if editing_trip_request {
                    trail.push(Breadcrumb::TripEdit);
                }
                trail
            }
            SidebarView::PlanTrip => Vec::new(),
        }
    }

    /// Resets navigation to its initial state (logout boundary).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
