//! Viewport capture from the interactive map widget.
//!
//! ARCHITECTURE
//! ============
//! `MapView` is the read-only seam onto the widget. `leaflet` implements it
//! for the browser; tests implement it with fixed bounds.


pub mod leaflet;

use crate::net::types::{BoundingBoxRequest, RenderMode};

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Visible rectangle described by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub north_west: LatLng,
    pub south_east: LatLng,
}

/// What the capture step needs from a live map.
pub trait MapView {
    fn bounds(&self) -> LatLngBounds;
    fn zoom(&self) -> i32;
}

/// Convert a widget zoom (a JS number, possibly fractional) to a zoom level.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn zoom_level_from(zoom: f64) -> i32 {
    if zoom.is_finite() { zoom.round() as i32 } else { 0 }
}

/// Snapshot the map's current viewport together with the selected mode.
///
/// Corner order is taken as reported; nothing is validated or swapped.
pub fn capture_viewport(map: &impl MapView, render_mode: RenderMode) -> BoundingBoxRequest {
    let LatLngBounds { north_west, south_east } = map.bounds();
    BoundingBoxRequest {
        upper_left_lng: north_west.lng,
        upper_left_lat: north_west.lat,
        lower_right_lng: south_east.lng,
        lower_right_lat: south_east.lat,
        zoom_level: map.zoom(),
        render_mode,
    }
}

/// Capture from the page's map slot, if the map has been mounted.
///
/// An empty slot means Generate was clicked before mount; nothing is sent.
pub fn capture_from_slot(map: Option<&impl MapView>, render_mode: RenderMode) -> Option<BoundingBoxRequest> {
    let Some(map) = map else {
        log::warn!("generate clicked before the map was mounted");
        return None;
    };
    Some(capture_viewport(map, render_mode))
}
