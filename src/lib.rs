//! # maplet-baidu
//!
//! Baidu Maps support for Leaflet-style map engines.
//!
//! Baidu serves its tiles on a grid whose origin sits at the centre of its own
//! Mercator plane, with `y` growing upwards. This crate supplies the pieces a
//! host engine needs to display them: a coordinate reference system advertised
//! as `EPSG:3857`, the zoom-18 bit-shift pixel transform, a tile URL builder
//! that remaps the host's top-left tile grid, and the geometry strategy used
//! for pane offsets while panning and zooming.

pub mod core;
pub mod crs;
pub mod layers;
pub mod prelude;
pub mod services;
pub mod tiles;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    bounds::Bounds,
    builder::MapBuilder,
    config::{BaiduMapConfig, GeometryMode},
    geo::{BaiduTileCoord, LatLng, PixelPoint, Point, TileCoord},
    geometry::{BaiduGeometry, StandardGeometry},
    viewport::Viewport,
};

pub use crs::{
    baidu::BaiduCrs,
    projection::{BaiduSphericalMercator, MercatorOracle, SphericalMercator},
    transformation::BaiduTransformation,
};

pub use layers::tile::{BaiduLayer, TileLayerOptions};

pub use services::geoconv::{
    translate_point, CoordType, GeoconvClient, PointTranslator, TranslateResponse,
};

#[cfg(feature = "tokio-runtime")]
pub use services::geoconv::translate_point_blocking;

pub use tiles::source::{BaiduTileSource, TileSource};

pub use traits::{Crs, MapGeometry};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The Mercator oracle or the translation service could not produce a point.
    #[error("Projection unavailable: {0}")]
    ProjectionUnavailable(String),

    /// Zoom outside the range served by the zoom-18 reference lattice.
    #[error("Invalid zoom {zoom}: supported range is {min}..={max}")]
    InvalidZoom { zoom: u8, min: u8, max: u8 },

    /// Reserved for host tile loaders; this crate never fetches tile images.
    #[error("Tile fetch failed: {0}")]
    TileFetch(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Initialise `env_logger` once; later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
