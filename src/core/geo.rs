use crate::core::constants::{MAX_ZOOM, MIN_TILE_ZOOM};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude, in
/// Baidu's native datum.
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

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Returns self, or `InvalidCoordinates` when outside the valid ranges.
    pub fn validated(self) -> Result<Self> {
        if self.lat.is_finite() && self.lng.is_finite() && self.is_valid() {
            Ok(self)
        } else {
            Err(MapError::InvalidCoordinates(format!(
                "lat {} lng {}",
                self.lat, self.lng
            )))
        }
    }

}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A point in projected, layer or container coordinates
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

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }

    pub fn divide(&self, scalar: f64) -> Point {
        Point::new(self.x / scalar, self.y / scalar)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn floor(&self) -> Point {
        Point::new(self.x.floor(), self.y.floor())
    }

    pub fn round(&self) -> Point {
        Point::new(self.x.round(), self.y.round())
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Integer pixel coordinate at a given zoom level.
///
/// All zoom levels share the zoom-18 lattice, so a pixel at zoom `z` stands
/// for a `2^(18-z)` square of projected units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Truncates toward zero, the integer conversion a bit shift applies.
impl From<Point> for PixelPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x as i64, point.y as i64)
    }
}

impl From<PixelPoint> for Point {
    fn from(pixel: PixelPoint) -> Self {
        Point::new(pixel.x as f64, pixel.y as f64)
    }
}

/// Tile coordinate in the host's grid: origin top-left, `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Checks if the tile is valid for the given zoom level
    pub fn is_valid(&self) -> bool {
        if self.z > MAX_ZOOM {
            return false;
        }
        let max_coord = 1u64 << self.z;
        (self.x as u64) < max_coord && (self.y as u64) < max_coord
    }
}

/// Tile coordinate in Baidu's grid: origin at the projection centre, `y`
/// grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaiduTileCoord {
    pub x: i64,
    pub y: i64,
    pub z: u8,
}

impl BaiduTileCoord {
    pub fn new(x: i64, y: i64, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Remaps a host tile onto Baidu's grid around the `2^(z-1)` centre line.
    pub fn from_tile(coord: &TileCoord) -> Result<Self> {
        if !(MIN_TILE_ZOOM..=MAX_ZOOM).contains(&coord.z) {
            return Err(MapError::InvalidZoom {
                zoom: coord.z,
                min: MIN_TILE_ZOOM,
                max: MAX_ZOOM,
            });
        }

        let offset = 1i64 << (coord.z - 1);
        Ok(Self::new(
            coord.x as i64 - offset,
            offset - coord.y as i64 - 1,
            coord.z,
        ))
    }

    /// Inverse of [`BaiduTileCoord::from_tile`]; `None` when off the host grid.
    pub fn to_tile(&self) -> Option<TileCoord> {
        if !(MIN_TILE_ZOOM..=MAX_ZOOM).contains(&self.z) {
            return None;
        }
        let offset = 1i64 << (self.z - 1);
        let x = u32::try_from(self.x.checked_add(offset)?).ok()?;
        let y = u32::try_from(offset.checked_sub(self.y)?.checked_sub(1)?).ok()?;
        let tile = TileCoord::new(x, y, self.z);
        tile.is_valid().then_some(tile)
    }
}
