//! Seams the host map engine plugs into
//!
//! A coordinate reference system and a map-geometry strategy are both passed
//! to the [`Viewport`](crate::core::viewport::Viewport) when it is built, so
//! nothing is registered globally and nothing is swapped at runtime.

use crate::{
    core::{
        bounds::Bounds,
        geo::{LatLng, Point},
    },
    Result,
};

/// Coordinate reference system interface
pub trait Crs: Send + Sync {
    /// Identifier advertised to the host
    fn code(&self) -> &str;

    /// Geographic coordinates to projected coordinates
    fn project(&self, lat_lng: &LatLng) -> Result<Point>;

    /// Projected coordinates to geographic coordinates
    fn unproject(&self, point: &Point) -> Result<LatLng>;

    /// Defines how the world scales with zoom
    fn scale(&self, zoom: u8) -> f64;

    /// Geographic coordinates to pixel coordinates at `zoom`
    fn lat_lng_to_point(&self, lat_lng: &LatLng, zoom: u8) -> Result<Point>;

    /// Pixel coordinates at `zoom` to geographic coordinates
    fn point_to_lat_lng(&self, point: &Point, zoom: u8) -> Result<LatLng>;

    /// Bounds of the world in pixel coordinates at `zoom`, `None` when infinite
    fn projected_bounds(&self, zoom: u8) -> Result<Option<Bounds>>;

    /// Whether the world has no edges
    fn infinite(&self) -> bool {
        false
    }
}

/// The three low-level geometry routines a map view consults while panning
/// and zooming.
pub trait MapGeometry: Send + Sync + std::fmt::Debug {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Pixel origin for a view centred on `projected_center`, given half the
    /// container size and the current map pane offset.
    fn pixel_origin(&self, projected_center: Point, view_half: Point, pane_pos: Point) -> Point;

    /// Layer point sitting under the middle of the container.
    fn center_layer_point(&self, view_half: Point, pane_pos: Point) -> Point;

    /// Final centre when zooming around a point, given the current centre and
    /// the centre the host computed.
    fn zoom_around_center(&self, center: LatLng, candidate: LatLng) -> LatLng;
}
