use crate::core::constants::WORLD_PIXEL_EXTENT;
use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Represents a bounding box in projected or pixel coordinates
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

    /// Creates bounds spanning two arbitrary corners
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::new(
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Point::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// The theoretical world extent at the reference zoom. Fixed, whatever
    /// scale function the CRS applies.
    pub fn world() -> Self {
        Self::from_coords(
            -WORLD_PIXEL_EXTENT,
            -WORLD_PIXEL_EXTENT,
            WORLD_PIXEL_EXTENT,
            WORLD_PIXEL_EXTENT,
        )
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the size as a Point
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_bounds_are_fixed() {
        let world = Bounds::world();
        assert_eq!(world.min, Point::new(-33554432.0, -33554432.0));
        assert_eq!(world.max, Point::new(33554432.0, 33554432.0));
        assert_eq!(world.center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_from_points_normalizes_corners() {
        let bounds = Bounds::from_points(Point::new(10.0, -5.0), Point::new(-2.0, 8.0));
        assert_eq!(bounds.min, Point::new(-2.0, -5.0));
        assert_eq!(bounds.max, Point::new(10.0, 8.0));
    }

    #[test]
    fn test_size_and_center() {
        let bounds = Bounds::from_coords(0.0, 0.0, 10.0, 4.0);
        assert_eq!(bounds.size(), Point::new(10.0, 4.0));
        assert_eq!(bounds.center(), Point::new(5.0, 2.0));
    }
}
