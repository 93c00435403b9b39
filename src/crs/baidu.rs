use super::projection::{BaiduSphericalMercator, MercatorOracle, SphericalMercator};
use super::transformation::BaiduTransformation;
use crate::core::{
    bounds::Bounds,
    constants::CRS_CODE,
    geo::{LatLng, PixelPoint, Point},
};
use crate::traits::Crs;
use crate::Result;

/// Coordinate reference system for Baidu tiles.
///
/// Advertises itself as `EPSG:3857` so hosts treat it as a web Mercator CRS,
/// although the pixel math is Baidu's own.
#[derive(Debug, Clone, Default)]
pub struct BaiduCrs<O = SphericalMercator> {
    projection: BaiduSphericalMercator<O>,
    transformation: BaiduTransformation,
    infinite: bool,
}

impl BaiduCrs {
    /// CRS backed by the local spherical Mercator oracle
    pub fn spherical() -> Self {
        Self::new(SphericalMercator)
    }
}

impl<O: MercatorOracle> BaiduCrs<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            projection: BaiduSphericalMercator::new(oracle),
            transformation: BaiduTransformation::new(),
            infinite: false,
        }
    }

    /// Drop the world edges; `projected_bounds` then returns `None`
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn projection(&self) -> &BaiduSphericalMercator<O> {
        &self.projection
    }

    pub fn transformation(&self) -> &BaiduTransformation {
        &self.transformation
    }

    /// Lat/lng to integer pixel at `zoom`
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng, zoom: u8) -> Result<PixelPoint> {
        let projected = self.projection.project(lat_lng)?;
        let pixel = self.transformation.to_pixel(&projected, zoom)?;
        log::trace!("{:?} -> {:?} at zoom {}", lat_lng, pixel, zoom);
        Ok(pixel)
    }

    /// Integer pixel at `zoom` to lat/lng
    pub fn pixel_to_lat_lng(&self, pixel: &PixelPoint, zoom: u8) -> Result<LatLng> {
        let projected = self.transformation.to_projected(pixel, zoom)?;
        self.projection.unproject(&projected)
    }
}

impl<O: MercatorOracle> Crs for BaiduCrs<O> {
    fn code(&self) -> &str {
        CRS_CODE
    }

    fn project(&self, lat_lng: &LatLng) -> Result<Point> {
        self.projection.project(lat_lng)
    }

    fn unproject(&self, point: &Point) -> Result<LatLng> {
        self.projection.unproject(point)
    }

    fn scale(&self, zoom: u8) -> f64 {
        self.transformation.scale(zoom)
    }

    fn lat_lng_to_point(&self, lat_lng: &LatLng, zoom: u8) -> Result<Point> {
        self.lat_lng_to_pixel(lat_lng, zoom).map(Point::from)
    }

    fn point_to_lat_lng(&self, point: &Point, zoom: u8) -> Result<LatLng> {
        self.pixel_to_lat_lng(&PixelPoint::from(*point), zoom)
    }

    fn projected_bounds(&self, zoom: u8) -> Result<Option<Bounds>> {
        if self.infinite {
            return Ok(None);
        }

        let world = self.projection.bounds();
        let min = self.transformation.to_pixel(&world.min, zoom)?;
        let max = self.transformation.to_pixel(&world.max, zoom)?;
        Ok(Some(Bounds::from_points(min.into(), max.into())))
    }

    fn infinite(&self) -> bool {
        self.infinite
    }
}
