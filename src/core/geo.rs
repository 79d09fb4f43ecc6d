use crate::core::constants::MAX_LATITUDE;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Clamps latitude to the range Web Mercator can represent
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// An axis-aligned rectangle of geographical coordinates.
///
/// Bounds built through [`LatLngBounds::try_new`] or
/// [`LatLngBounds::try_from_coords`] are guaranteed to have
/// `south <= north` and `west <= east`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Creates bounds without validating corner order.
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds, rejecting corners where min exceeds max on either axis.
    pub fn try_new(south_west: LatLng, north_east: LatLng) -> Result<Self> {
        let bounds = Self::new(south_west, north_east);
        if bounds.is_valid() {
            Ok(bounds)
        } else {
            Err(MapError::InvalidBounds {
                south: south_west.lat,
                west: south_west.lng,
                north: north_east.lat,
                east: north_east.lng,
            })
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Validating counterpart of [`LatLngBounds::from_coords`]
    pub fn try_from_coords(south: f64, west: f64, north: f64, east: f64) -> Result<Self> {
        Self::try_new(LatLng::new(south, west), LatLng::new(north, east))
    }

    pub fn south(&self) -> f64 {
        self.south_west.lat
    }

    pub fn west(&self) -> f64 {
        self.south_west.lng
    }

    pub fn north(&self) -> f64 {
        self.north_east.lat
    }

    pub fn east(&self) -> f64 {
        self.north_east.lng
    }

    /// Checks that min <= max on both axes and that no edge is NaN
    pub fn is_valid(&self) -> bool {
        self.south() <= self.north() && self.west() <= self.east()
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south()
            && point.lat <= self.north()
            && point.lng >= self.west()
            && point.lng <= self.east()
    }

    /// Checks if `other` lies entirely inside these bounds
    pub fn contains_bounds(&self, other: &LatLngBounds) -> bool {
        other.east() <= self.east()
            && other.north() <= self.north()
            && other.west() >= self.west()
            && other.south() >= self.south()
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south() + self.north()) / 2.0,
            (self.west() + self.east()) / 2.0,
        )
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(self.north() - self.south(), self.east() - self.west())
    }
}

/// `x` is longitude and `y` is latitude.
impl From<&LatLngBounds> for geo_types::Rect<f64> {
    fn from(bounds: &LatLngBounds) -> Self {
        geo_types::Rect::new(
            geo_types::coord! { x: bounds.west(), y: bounds.south() },
            geo_types::coord! { x: bounds.east(), y: bounds.north() },
        )
    }
}

/// `geo_types::Rect` normalizes its corners, so the result is always valid.
impl From<geo_types::Rect<f64>> for LatLngBounds {
    fn from(rect: geo_types::Rect<f64>) -> Self {
        let min = rect.min();
        let max = rect.max();
        LatLngBounds::from_coords(min.y, min.x, max.y, max.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.7128, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lng, -74.0060);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(40.0, -75.0, 41.0, -73.0);
        let point_inside = LatLng::new(40.5, -74.0);
        let point_outside = LatLng::new(42.0, -74.0);

        assert!(bounds.contains(&point_inside));
        assert!(!bounds.contains(&point_outside));
    }

    #[test]
    fn test_contains_bounds() {
        let outer = LatLngBounds::from_coords(-10.0, -10.0, 10.0, 10.0);
        let inner = LatLngBounds::from_coords(-5.0, -5.0, 5.0, 5.0);
        let spill = LatLngBounds::from_coords(-5.0, -5.0, 5.0, 12.0);

        assert!(outer.contains_bounds(&inner));
        assert!(outer.contains_bounds(&outer));
        assert!(!outer.contains_bounds(&spill));
    }

    #[test]
    fn test_try_new_rejects_inverted_axes() {
        assert!(LatLngBounds::try_from_coords(10.0, 0.0, -10.0, 5.0).is_err());
        assert!(LatLngBounds::try_from_coords(0.0, 5.0, 1.0, -5.0).is_err());

        let err = LatLngBounds::try_from_coords(10.0, 0.0, -10.0, 5.0).unwrap_err();
        assert!(matches!(err, MapError::InvalidBounds { south, .. } if south == 10.0));
    }

    #[test]
    fn test_degenerate_bounds_are_valid() {
        let line = LatLngBounds::try_from_coords(0.0, 0.0, 0.0, 10.0).unwrap();
        assert_eq!(line.span(), LatLng::new(0.0, 10.0));
    }

    #[test]
    fn test_geo_types_conversion() {
        let bounds = LatLngBounds::from_coords(-10.0, 20.0, 10.0, 40.0);
        let rect: geo_types::Rect<f64> = (&bounds).into();

        assert_eq!(rect.min().x, 20.0);
        assert_eq!(rect.max().y, 10.0);
        assert_eq!(LatLngBounds::from(rect), bounds);
    }
}
