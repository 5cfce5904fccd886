use places::{Coordinates, MapBounds};

use crate::types::MapConfig;

/// Commands the controller issues against the external map widget.
///
/// Implementations wrap the actual rendering surface (a Mapbox handle, a
/// test recorder). Marker and camera calls are fire-and-forget; the widget's
/// internal rendering is not this crate's concern.
pub trait MapSurface: Send {
    /// Displays a marker for `id` at `coords`.
    fn add_marker(&mut self, id: i64, coords: Coordinates);

    /// Removes the marker for `id`, if displayed.
    fn remove_marker(&mut self, id: i64);

    /// Pans and zooms the camera to center on `coords`.
    fn pan_zoom_to(&mut self, coords: Coordinates);

    /// Moves the camera so that every coordinate is visible.
    fn fit_bounds(&mut self, coords: &[Coordinates]);

    /// Current viewport bounds of the widget.
    fn current_bounds(&self) -> MapBounds;
}

/// Constructs map surfaces once a display surface is available.
pub trait MapSurfaceFactory: Send + Sync {
    /// Creates a new widget instance with the given configuration.
    fn create(&self, config: &MapConfig) -> Box<dyn MapSurface>;
}
