use places::Coordinates;

/// Configuration for the map widget and its hosting rules.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Style identifier passed to the widget on construction
    pub style_id: String,

    /// Initial camera center
    pub center: Coordinates,

    /// Initial zoom level
    pub zoom: f64,

    /// Minimum viewport width (px) required to host a map surface;
    /// narrower layouts never construct one
    pub min_surface_width: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style_id: "mapbox://styles/mapbox/outdoors-v11".to_string(),
            center: Coordinates {
                longitude: -118.26,
                latitude: 36.6,
            },
            zoom: 7.0,
            min_surface_width: 700,
        }
    }
}

/// Events delivered by the map widget to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// The widget finished loading and is ready for commands
    Load,
    /// The user finished dragging the map
    DragEnd,
    /// The user finished zooming the map
    ZoomEnd,
}

/// Lifecycle of the map surface, driven by surface availability.
///
/// Transitions are `Absent -> Constructing` when a wide-enough display
/// surface mounts, `Constructing -> Active` on [`MapEvent::Load`], and back
/// to `Absent` when the surface goes away. All transitions are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceLifecycle {
    /// No surface exists (narrow layout, or nothing mounted yet)
    Absent,
    /// The widget instance exists but has not finished loading
    Constructing,
    /// The widget is loaded and accepts marker/camera commands
    Active,
}
