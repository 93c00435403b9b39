//! Prelude module for common maplet-baidu types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use maplet_baidu::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    builder::MapBuilder,
    config::{BaiduMapConfig, GeoconvConfig, GeometryMode},
    geo::{BaiduTileCoord, LatLng, PixelPoint, Point, TileCoord},
    geometry::{BaiduGeometry, StandardGeometry},
    viewport::Viewport,
};

pub use crate::crs::{
    baidu::BaiduCrs,
    projection::{BaiduSphericalMercator, MercatorOracle, SphericalMercator},
    transformation::BaiduTransformation,
};

pub use crate::layers::tile::{BaiduLayer, TileLayerOptions};

pub use crate::services::geoconv::{translate_point, CoordType, GeoconvClient, PointTranslator};

pub use crate::tiles::source::{BaiduTileSource, TileSource};

pub use crate::traits::{Crs, MapGeometry};

pub use crate::{MapError, Result};
