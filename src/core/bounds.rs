use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Represents a bounding box in screen/pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Creates pixel bounds from the projected south-west and north-east
    /// corners of a geographic rectangle.
    ///
    /// Pixel y grows downwards, so the north-east corner supplies the top
    /// edge and the south-west corner the bottom edge.
    pub fn from_projected_corners(south_west: Point, north_east: Point) -> Self {
        Self::from_coords(south_west.x, north_east.y, north_east.x, south_west.y)
    }

    /// Left edge in pixels
    pub fn left(&self) -> f64 {
        self.min.x
    }

    /// Top edge in pixels
    pub fn top(&self) -> f64 {
        self.min.y
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }
}
