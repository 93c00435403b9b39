//! Map builder for fluent API configuration
//!
//! Collects the CRS oracle, geometry strategy and tile layer settings, then
//! produces a [`Viewport`] and a matching [`BaiduLayer`].

use crate::{
    core::{
        config::{BaiduMapConfig, GeometryMode},
        geo::{LatLng, Point},
        viewport::Viewport,
    },
    crs::{
        baidu::BaiduCrs,
        projection::{MercatorOracle, SphericalMercator},
    },
    layers::tile::{BaiduLayer, TileLayerOptions},
    Result,
};

/// Builder for creating and configuring a Baidu map view
pub struct MapBuilder {
    config: BaiduMapConfig,
    oracle: Box<dyn MercatorOracle>,
    center: LatLng,
    zoom: u8,
    size: Point,
}

impl MapBuilder {
    /// Create a new MapBuilder with default settings
    pub fn new() -> Self {
        Self::from_config(BaiduMapConfig::default())
    }

    /// Start from a loaded configuration
    pub fn from_config(config: BaiduMapConfig) -> Self {
        Self {
            config,
            oracle: Box::new(SphericalMercator),
            center: LatLng::default(),
            zoom: 10,
            size: Point::new(800.0, 600.0),
        }
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: LatLng, zoom: u8) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// Set the container size in pixels
    pub fn with_size(mut self, size: Point) -> Self {
        self.size = size;
        self
    }

    /// Use an external Mercator service instead of the local approximation
    pub fn with_oracle(mut self, oracle: Box<dyn MercatorOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    /// Select the pan/zoom geometry strategy
    pub fn with_geometry(mut self, mode: GeometryMode) -> Self {
        self.config.geometry = mode;
        self
    }

    /// Set the tile layer options
    pub fn with_tile_options(mut self, options: TileLayerOptions) -> Self {
        self.config.tile_layer = options;
        self
    }

    /// Set zoom limits
    pub fn with_zoom_limits(mut self, min_zoom: u8, max_zoom: u8) -> Self {
        self.config.min_zoom = min_zoom;
        self.config.max_zoom = max_zoom;
        self
    }

    /// Mark the CRS as edgeless
    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.config.infinite = infinite;
        self
    }

    pub fn config(&self) -> &BaiduMapConfig {
        &self.config
    }

    /// Build the viewport and the Baidu tile layer
    pub fn build(self) -> Result<(Viewport, BaiduLayer)> {
        self.config.validate()?;

        let crs = BaiduCrs::new(self.oracle).with_infinite(self.config.infinite);
        let mut viewport = Viewport::new(
            Box::new(crs),
            self.config.geometry.strategy(),
            self.center,
            self.zoom,
            self.size,
        )?;
        viewport.set_zoom_limits(self.config.min_zoom, self.config.max_zoom)?;

        let layer = BaiduLayer::with_options(
            "baidu".to_string(),
            "Baidu".to_string(),
            self.config.tile_layer,
        )?;

        log::debug!("built {:?}", viewport);
        Ok((viewport, layer))
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapError;

    #[test]
    fn test_builder_defaults() {
        let (viewport, layer) = MapBuilder::new()
            .with_center_and_zoom(LatLng::new(31.2304, 121.4737), 12)
            .build()
            .unwrap();

        assert_eq!(viewport.zoom(), 12);
        assert_eq!(viewport.geometry().name(), "standard");
        assert_eq!(viewport.min_zoom(), 3);
        assert_eq!(layer.options().subdomains.len(), 3);
    }

    #[test]
    fn test_builder_selects_geometry_once() {
        let (viewport, _) = MapBuilder::new()
            .with_geometry(GeometryMode::Baidu)
            .with_size(Point::new(1024.0, 768.0))
            .build()
            .unwrap();

        assert_eq!(viewport.geometry().name(), "baidu");
        assert_eq!(viewport.size(), Point::new(1024.0, 768.0));
    }

    #[test]
    fn test_builder_rejects_bad_limits() {
        let result = MapBuilder::new().with_zoom_limits(10, 19).build();
        assert!(matches!(result, Err(MapError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_infinite_crs() {
        let (viewport, _) = MapBuilder::new().with_infinite(true).build().unwrap();
        assert!(viewport.crs().projected_bounds(10).unwrap().is_none());
    }
}
