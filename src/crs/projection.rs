use crate::core::{
    bounds::Bounds,
    geo::{LatLng, Point},
};
use crate::{MapError, Result};
use std::f64::consts::PI;
use std::sync::Arc;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// External Mercator service, the equivalent of Baidu's
/// `MercatorProjection`. Implementations own all the math.
pub trait MercatorOracle: Send + Sync {
    /// Longitude/latitude to a point on the projected plane
    fn lng_lat_to_point(&self, lat_lng: &LatLng) -> Result<Point>;

    /// Projected plane back to longitude/latitude
    fn point_to_lng_lat(&self, point: &Point) -> Result<LatLng>;
}

impl<O: MercatorOracle + ?Sized> MercatorOracle for Box<O> {
    fn lng_lat_to_point(&self, lat_lng: &LatLng) -> Result<Point> {
        (**self).lng_lat_to_point(lat_lng)
    }

    fn point_to_lng_lat(&self, point: &Point) -> Result<LatLng> {
        (**self).point_to_lng_lat(point)
    }
}

impl<O: MercatorOracle + ?Sized> MercatorOracle for Arc<O> {
    fn lng_lat_to_point(&self, lat_lng: &LatLng) -> Result<Point> {
        (**self).lng_lat_to_point(lat_lng)
    }

    fn point_to_lng_lat(&self, point: &Point) -> Result<LatLng> {
        (**self).point_to_lng_lat(point)
    }
}

/// Local spherical Mercator (EPSG:3857 formulas, metres on the plane).
///
/// Stands in for Baidu's service when it is not reachable from the host;
/// close to Baidu's plane but not identical to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalMercator;

impl MercatorOracle for SphericalMercator {
    fn lng_lat_to_point(&self, lat_lng: &LatLng) -> Result<Point> {
        let lat = lat_lng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;
        Ok(Point::new(x, y))
    }

    fn point_to_lng_lat(&self, point: &Point) -> Result<LatLng> {
        let lng = (point.x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        Ok(LatLng::new(lat, lng))
    }
}

/// Projection adapter for Baidu's spherical Mercator.
///
/// Only marshals arguments to the oracle and unwraps its answer. Every
/// failure, including a non-finite answer, surfaces as
/// [`MapError::ProjectionUnavailable`]; nothing is retried.
#[derive(Debug, Clone, Default)]
pub struct BaiduSphericalMercator<O = SphericalMercator> {
    oracle: O,
}

impl BaiduSphericalMercator {
    /// Adapter over the local [`SphericalMercator`] oracle
    pub fn spherical() -> Self {
        Self::new(SphericalMercator)
    }
}

impl<O: MercatorOracle> BaiduSphericalMercator<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Project lat/lng to a point on Baidu's plane
    pub fn project(&self, lat_lng: &LatLng) -> Result<Point> {
        let point = self
            .oracle
            .lng_lat_to_point(lat_lng)
            .map_err(unavailable)?;
        if !point.is_finite() {
            return Err(MapError::ProjectionUnavailable(format!(
                "oracle returned {:?} for {:?}",
                point, lat_lng
            )));
        }
        Ok(point)
    }

    /// Unproject a point on Baidu's plane to lat/lng
    pub fn unproject(&self, point: &Point) -> Result<LatLng> {
        let lat_lng = self
            .oracle
            .point_to_lng_lat(point)
            .map_err(unavailable)?;
        if !(lat_lng.lat.is_finite() && lat_lng.lng.is_finite()) {
            return Err(MapError::ProjectionUnavailable(format!(
                "oracle returned {:?} for {:?}",
                lat_lng, point
            )));
        }
        Ok(lat_lng)
    }

    /// Range of the projected plane
    pub fn bounds(&self) -> Bounds {
        Bounds::world()
    }
}

fn unavailable(err: MapError) -> MapError {
    match err {
        MapError::ProjectionUnavailable(_) => err,
        other => MapError::ProjectionUnavailable(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl MercatorOracle for Offline {
        fn lng_lat_to_point(&self, _lat_lng: &LatLng) -> Result<Point> {
            Err(MapError::InvalidConfig("oracle not loaded".to_string()))
        }

        fn point_to_lng_lat(&self, _point: &Point) -> Result<LatLng> {
            Ok(LatLng::new(f64::NAN, 0.0))
        }
    }

    #[test]
    fn test_spherical_mercator_origin() {
        let projection = BaiduSphericalMercator::spherical();
        let origin = projection.project(&LatLng::new(0.0, 0.0)).unwrap();
        assert!(origin.x.abs() < 1e-6);
        assert!(origin.y.abs() < 1e-6);

        let antimeridian = projection.project(&LatLng::new(0.0, 180.0)).unwrap();
        assert!((antimeridian.x - PI * EARTH_RADIUS).abs() < 1e-6);
    }

    #[test]
    fn test_project_unproject_inverse() {
        let projection = BaiduSphericalMercator::spherical();
        let beijing = LatLng::new(39.9042, 116.4074);
        let back = projection
            .unproject(&projection.project(&beijing).unwrap())
            .unwrap();
        assert!((back.lat - beijing.lat).abs() < 1e-9);
        assert!((back.lng - beijing.lng).abs() < 1e-9);
    }

    #[test]
    fn test_oracle_failure_is_projection_unavailable() {
        let projection = BaiduSphericalMercator::new(Offline);
        assert!(matches!(
            projection.project(&LatLng::new(30.0, 120.0)),
            Err(MapError::ProjectionUnavailable(_))
        ));
        assert!(matches!(
            projection.unproject(&Point::new(1.0, 1.0)),
            Err(MapError::ProjectionUnavailable(_))
        ));
    }

    #[test]
    fn test_bounds_are_world() {
        assert_eq!(BaiduSphericalMercator::spherical().bounds(), Bounds::world());
    }
}
