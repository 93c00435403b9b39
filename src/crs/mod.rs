//! Baidu coordinate reference system
//!
//! `projection` hands lat/lng to a Mercator oracle, `transformation` turns the
//! projected plane into zoom-level pixels, and `baidu` wires both behind the
//! [`Crs`](crate::traits::Crs) trait.

pub mod baidu;
pub mod projection;
pub mod transformation;

pub use baidu::BaiduCrs;
pub use projection::{BaiduSphericalMercator, MercatorOracle, SphericalMercator};
pub use transformation::BaiduTransformation;
