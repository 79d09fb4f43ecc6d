//! Finds the lowest zoom at which the viewport fits inside the image.
//!
//! Zoom levels are compared through the web-map scale denominator:
//! `scale(z) = BASE_SCALE / 2^(z - 1)`. An image that measures `w` pixels at
//! the current zoom measures `w * scale(current) / scale(z)` pixels at `z`.

use crate::core::config::MinZoom;
use crate::core::constants::{BASE_SCALE, MAX_SEARCH_ZOOM, MIN_SEARCH_ZOOM};
use crate::core::geo::LatLngBounds;
use crate::traits::Projection;

/// Scale denominator at `zoom`
pub fn zoom_scale(zoom: i32) -> f64 {
    BASE_SCALE / 2_f64.powi(zoom - 1)
}

/// Factor by which pixel lengths measured at `current_zoom` grow at `zoom`
pub fn scale_ratio(current_zoom: i32, zoom: i32) -> f64 {
    zoom_scale(current_zoom) / zoom_scale(zoom)
}

/// Computes the minimum zoom for the map.
///
/// A fixed level is returned as is. Otherwise the image corners are
/// projected at `current_zoom` and levels `1..=30` are tried in order; the
/// first level at which the viewport fits inside the scaled image wins, and
/// 30 is returned when none does.
///
/// Returns `None`, meaning "enforce nothing this time", when the viewport
/// has no area yet or the projection is not available.
pub fn compute_min_zoom(
    config: MinZoom,
    viewport_size: (u32, u32),
    image: &LatLngBounds,
    projection: Option<&dyn Projection>,
    current_zoom: i32,
) -> Option<i32> {
    if let MinZoom::Fixed(level) = config {
        return Some(level);
    }

    let (width, height) = viewport_size;
    if width == 0 || height == 0 {
        return None;
    }
    let projection = projection?;

    let south_west = projection.to_pixel(&image.south_west);
    let north_east = projection.to_pixel(&image.north_east);
    let image_width = (south_west.x - north_east.x).abs();
    let image_height = (south_west.y - north_east.y).abs();

    let fits = |zoom: i32| {
        let ratio = scale_ratio(current_zoom, zoom);
        f64::from(width) <= image_width * ratio && f64::from(height) <= image_height * ratio
    };

    let min_zoom = (MIN_SEARCH_ZOOM..=MAX_SEARCH_ZOOM)
        .find(|&zoom| fits(zoom))
        .unwrap_or(MAX_SEARCH_ZOOM);

    Some(min_zoom)
}
