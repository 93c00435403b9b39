//! Configuration for the Baidu map stack
//!
//! Every section has a default matching the built-in constants, so a config
//! file only needs to name what it changes. The geometry strategy is chosen
//! here once and handed to the viewport at construction.

use crate::core::constants::{GEOCONV_ENDPOINT, MAX_ZOOM};
use crate::core::geometry::{BaiduGeometry, StandardGeometry};
use crate::layers::tile::TileLayerOptions;
use crate::services::geoconv::CoordType;
use crate::traits::MapGeometry;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which map geometry strategy the viewport uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryMode {
    /// Stock pane arithmetic; pairs with the y-down pixel space of `BaiduCrs`
    #[default]
    Standard,
    /// Vertical pane offset and zoom-around latitude delta inverted
    Baidu,
}

impl GeometryMode {
    pub fn strategy(&self) -> Box<dyn MapGeometry> {
        match self {
            Self::Standard => Box::new(StandardGeometry),
            Self::Baidu => Box::new(BaiduGeometry),
        }
    }
}

/// Point translation service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoconvConfig {
    pub endpoint: String,
    /// Baidu access key (`ak`)
    pub access_key: Option<String>,
    pub from: CoordType,
    pub to: CoordType,
}

impl Default for GeoconvConfig {
    fn default() -> Self {
        Self {
            endpoint: GEOCONV_ENDPOINT.to_string(),
            access_key: None,
            from: CoordType::Wgs84,
            to: CoordType::Bd09,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaiduMapConfig {
    pub tile_layer: TileLayerOptions,
    pub geometry: GeometryMode,
    /// Treat the world as edgeless (no projected bounds)
    pub infinite: bool,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub geoconv: GeoconvConfig,
}

impl Default for BaiduMapConfig {
    fn default() -> Self {
        Self {
            tile_layer: TileLayerOptions::default(),
            geometry: GeometryMode::default(),
            infinite: false,
            min_zoom: 3,
            max_zoom: MAX_ZOOM,
            geoconv: GeoconvConfig::default(),
        }
    }
}

impl BaiduMapConfig {
    /// Parses and validates a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("loading map config from {}", path.display());
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_zoom > MAX_ZOOM || self.min_zoom > self.max_zoom {
            return Err(MapError::InvalidConfig(format!(
                "zoom range {}..={} outside 0..={}",
                self.min_zoom, self.max_zoom, MAX_ZOOM
            )));
        }
        if self.geoconv.endpoint.is_empty() {
            return Err(MapError::InvalidConfig(
                "geoconv endpoint is empty".to_string(),
            ));
        }
        self.tile_layer.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = BaiduMapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.geometry, GeometryMode::Standard);
        assert_eq!(config.geoconv.from, CoordType::Wgs84);
        assert_eq!(config.geoconv.to, CoordType::Bd09);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BaiduMapConfig::from_json_str(
            r#"{ "geometry": "baidu", "max_zoom": 16, "geoconv": { "access_key": "abc" } }"#,
        )
        .unwrap();

        assert_eq!(config.geometry, GeometryMode::Baidu);
        assert_eq!(config.max_zoom, 16);
        assert_eq!(config.geoconv.access_key.as_deref(), Some("abc"));
        assert_eq!(config.geoconv.endpoint, GEOCONV_ENDPOINT);
        assert_eq!(config.tile_layer, TileLayerOptions::default());
        assert_eq!(config.geometry.strategy().name(), "baidu");
    }

    #[test]
    fn test_rejects_zoom_past_reference() {
        let err = BaiduMapConfig::from_json_str(r#"{ "max_zoom": 19 }"#).unwrap_err();
        assert!(matches!(err, MapError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = BaiduMapConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, MapError::Serialization(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = BaiduMapConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(BaiduMapConfig::from_json_str(&json).unwrap(), config);
    }
}
