//! Pulls a viewport that has been panned past the image edges back inside.

use crate::core::geo::{LatLng, LatLngBounds, Point};
use crate::traits::Projection;
use serde::{Deserialize, Serialize};

/// Image edge that the viewport crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    North,
    South,
    East,
    West,
}

/// Result of a clamp that had to move the view
#[derive(Debug, Clone, PartialEq)]
pub struct ClampCorrection {
    /// New viewport center
    pub center: LatLng,
    /// East or west, whichever was corrected
    pub horizontal: Option<Edge>,
    /// North or south, whichever was corrected
    pub vertical: Option<Edge>,
    /// Pixel offset applied to the center, wiggle included
    pub shift: Point,
}

/// Computes a corrected center for a viewport that extends past `image`.
///
/// Returns `None` when the viewport already lies inside the image, so
/// applying the result repeatedly converges to a no-op.
pub fn reposition(
    viewport: &LatLngBounds,
    image: &LatLngBounds,
    center: LatLng,
    projection: &dyn Projection,
    wiggle: f64,
) -> Option<LatLng> {
    reposition_detailed(viewport, image, center, projection, wiggle).map(|c| c.center)
}

/// Like [`reposition`], but also reports which edges were corrected.
///
/// Each axis is corrected at most once: east takes priority over west and
/// north over south. The vertical correction is measured along the
/// longitude of the center produced by the horizontal one.
pub fn reposition_detailed(
    viewport: &LatLngBounds,
    image: &LatLngBounds,
    center: LatLng,
    projection: &dyn Projection,
    wiggle: f64,
) -> Option<ClampCorrection> {
    if image.contains_bounds(viewport) {
        return None;
    }

    let mut center = center;
    let mut shift = Point::default();

    let horizontal = if viewport.east() > image.east() {
        let overflow = horizontal_distance(projection, center.lat, image.east(), viewport.east());
        shift.x = -(overflow + wiggle);
        Some(Edge::East)
    } else if viewport.west() < image.west() {
        let overflow = horizontal_distance(projection, center.lat, viewport.west(), image.west());
        shift.x = overflow + wiggle;
        Some(Edge::West)
    } else {
        None
    };

    if horizontal.is_some() {
        center = offset_center(projection, center, Point::new(shift.x, 0.0));
    }

    let vertical = if viewport.north() > image.north() {
        let overflow = vertical_distance(projection, center.lng, viewport.north(), image.north());
        shift.y = overflow + wiggle;
        Some(Edge::North)
    } else if viewport.south() < image.south() {
        let overflow = vertical_distance(projection, center.lng, image.south(), viewport.south());
        shift.y = -(overflow + wiggle);
        Some(Edge::South)
    } else {
        None
    };

    if vertical.is_some() {
        center = offset_center(projection, center, Point::new(0.0, shift.y));
    }

    // NaN edges fail containment without tripping any single edge
    if horizontal.is_none() && vertical.is_none() {
        return None;
    }

    Some(ClampCorrection {
        center,
        horizontal,
        vertical,
        shift,
    })
}

/// Pixel distance from `west_lng` to `east_lng` along the parallel at `lat`
fn horizontal_distance(projection: &dyn Projection, lat: f64, west_lng: f64, east_lng: f64) -> f64 {
    projection.to_pixel(&LatLng::new(lat, east_lng)).x
        - projection.to_pixel(&LatLng::new(lat, west_lng)).x
}

/// Pixel distance from `north_lat` down to `south_lat` along the meridian at `lng`
fn vertical_distance(projection: &dyn Projection, lng: f64, north_lat: f64, south_lat: f64) -> f64 {
    projection.to_pixel(&LatLng::new(south_lat, lng)).y
        - projection.to_pixel(&LatLng::new(north_lat, lng)).y
}

fn offset_center(projection: &dyn Projection, center: LatLng, offset: Point) -> LatLng {
    let pixel = projection.to_pixel(&center).add(&offset);
    projection.to_geo(&pixel)
}
