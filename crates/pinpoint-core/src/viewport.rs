//! Map viewport and the active search marker.

use log::debug;
use parking_lot::Mutex;

use crate::models::{Coordinate, SearchResult};

/// Center shown before any search and after a reset.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(-15.788, -47.879);

/// Zoom shown before any search and after a reset.
pub const DEFAULT_ZOOM: u8 = 4;

/// Zoom used to frame a geocoded address.
pub const STREET_ZOOM: u8 = 16;

/// Deepest zoom level the tile source serves.
pub const MAX_ZOOM: u8 = 19;

/// What the map surface is showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Default)]
struct ViewState {
    viewport: Viewport,
    search_result: Option<SearchResult>,
}

/// Owner of the viewport and the active search result.
#[derive(Debug, Default)]
pub struct ViewportController {
    state: Mutex<ViewState>,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Viewport {
        self.state.lock().viewport
    }

    /// The search result marker currently shown, if any.
    pub fn search_result(&self) -> Option<SearchResult> {
        self.state.lock().search_result.clone()
    }

    /// Center the map on `center`. Zoom is capped at [`MAX_ZOOM`].
    pub fn move_to(&self, center: Coordinate, zoom: u8) {
        let zoom = zoom.min(MAX_ZOOM);
        debug!(
            "Viewport -> ({:.4}, {:.4}) z{zoom}",
            center.latitude, center.longitude
        );
        self.state.lock().viewport = Viewport { center, zoom };
    }

    /// Show a fresh search result, superseding any previous one, and frame it
    /// at street level.
    pub fn show_search_result(&self, result: SearchResult) {
        let center = result.coordinate;
        self.state.lock().search_result = Some(result);
        self.move_to(center, STREET_ZOOM);
    }

    /// Drop the search marker, keeping the viewport where it is.
    pub fn clear_search(&self) -> Option<SearchResult> {
        self.state.lock().search_result.take()
    }

    /// Return to the default center and zoom and drop the search marker.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.viewport = Viewport::default();
        state.search_result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copacabana() -> SearchResult {
        SearchResult::new(
            "Copacabana, Rio de Janeiro, Brasil",
            Coordinate::new(-22.97, -43.18),
        )
    }

    #[test]
    fn test_starts_at_default_view() {
        let controller = ViewportController::new();
        assert_eq!(controller.current(), Viewport::default());
        assert_eq!(controller.current().center, DEFAULT_CENTER);
        assert!(controller.search_result().is_none());
    }

    #[test]
    fn test_move_to_caps_zoom() {
        let controller = ViewportController::new();
        controller.move_to(Coordinate::new(1.0, 2.0), 30);
        assert_eq!(controller.current().zoom, MAX_ZOOM);
    }

    #[test]
    fn test_search_result_frames_at_street_level() {
        let controller = ViewportController::new();
        controller.show_search_result(copacabana());

        let view = controller.current();
        assert_eq!(view.center, Coordinate::new(-22.97, -43.18));
        assert_eq!(view.zoom, STREET_ZOOM);
        assert_eq!(controller.search_result(), Some(copacabana()));
    }

    #[test]
    fn test_clear_search_keeps_viewport() {
        let controller = ViewportController::new();
        controller.show_search_result(copacabana());

        assert_eq!(controller.clear_search(), Some(copacabana()));
        assert!(controller.search_result().is_none());
        assert_eq!(controller.current().zoom, STREET_ZOOM);
    }

    #[test]
    fn test_reset_restores_default_and_clears_search() {
        let controller = ViewportController::new();
        controller.show_search_result(copacabana());
        controller.reset();

        assert_eq!(controller.current(), Viewport::default());
        assert!(controller.search_result().is_none());
    }
}
