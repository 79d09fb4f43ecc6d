//! Concrete [`Projection`] implementations

use crate::core::geo::{LatLng, Point};
use crate::core::viewport::Viewport;
use crate::traits::Projection;

/// Web Mercator projection frozen at one viewport state.
///
/// Pixel coordinates are container-relative: the viewport center maps to
/// the middle of the container.
#[derive(Debug, Clone, PartialEq)]
pub struct MercatorProjection {
    viewport: Viewport,
}

impl MercatorProjection {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn zoom(&self) -> i32 {
        self.viewport.zoom
    }
}

impl Projection for MercatorProjection {
    fn to_pixel(&self, lat_lng: &LatLng) -> Point {
        self.viewport.lat_lng_to_pixel(lat_lng)
    }

    fn to_geo(&self, point: &Point) -> LatLng {
        self.viewport.pixel_to_lat_lng(point)
    }
}

/// Plate carrée projection with a fixed number of pixels per degree.
///
/// `anchor` is placed at pixel `offset`; x grows eastwards and y grows
/// southwards, as on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProjection {
    pub pixels_per_degree: f64,
    pub anchor: LatLng,
    pub offset: Point,
}

impl LinearProjection {
    pub fn new(pixels_per_degree: f64) -> Self {
        Self {
            pixels_per_degree,
            anchor: LatLng::default(),
            offset: Point::default(),
        }
    }

    pub fn with_anchor(mut self, anchor: LatLng, offset: Point) -> Self {
        self.anchor = anchor;
        self.offset = offset;
        self
    }
}

impl Projection for LinearProjection {
    fn to_pixel(&self, lat_lng: &LatLng) -> Point {
        Point::new(
            self.offset.x + (lat_lng.lng - self.anchor.lng) * self.pixels_per_degree,
            self.offset.y + (self.anchor.lat - lat_lng.lat) * self.pixels_per_degree,
        )
    }

    fn to_geo(&self, point: &Point) -> LatLng {
        LatLng::new(
            self.anchor.lat - (point.y - self.offset.y) / self.pixels_per_degree,
            self.anchor.lng + (point.x - self.offset.x) / self.pixels_per_degree,
        )
    }
}
