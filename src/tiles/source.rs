use super::template;
use crate::core::constants::{BAIDU_SUBDOMAINS, BAIDU_TILE_URL};
use crate::core::geo::{BaiduTileCoord, TileCoord};
use crate::layers::tile::TileLayerOptions;
use crate::Result;
use std::collections::HashMap;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord` of the host grid.
    fn url(&self, coord: TileCoord) -> Result<String>;
}

/// Baidu tile server: remaps the host grid onto Baidu's centred, y-up grid
/// before filling the template.
#[derive(Debug, Clone)]
pub struct BaiduTileSource {
    template: String,
    subdomains: Vec<String>,
    params: HashMap<String, String>,
}

impl BaiduTileSource {
    pub fn new() -> Self {
        Self {
            template: BAIDU_TILE_URL.to_string(),
            subdomains: BAIDU_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
            params: HashMap::new(),
        }
    }

    pub fn from_options(options: &TileLayerOptions) -> Self {
        Self {
            template: options.url_template.clone(),
            subdomains: options.subdomains.clone(),
            params: options.params.clone(),
        }
    }

    /// Host name for a Baidu tile, rotating on `|x + y|`
    pub fn subdomain(&self, coord: &BaiduTileCoord) -> &str {
        if self.subdomains.is_empty() {
            return "";
        }
        let idx = ((coord.x + coord.y).unsigned_abs() % self.subdomains.len() as u64) as usize;
        &self.subdomains[idx]
    }

    /// URL for a tile already expressed in Baidu's grid
    pub fn baidu_url(&self, coord: &BaiduTileCoord) -> Result<String> {
        let mut values: HashMap<&str, String> = self
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();
        values.insert("s", self.subdomain(coord).to_string());
        values.insert("x", coord.x.to_string());
        values.insert("y", coord.y.to_string());
        values.insert("z", coord.z.to_string());

        template::render(&self.template, &values)
    }
}

impl Default for BaiduTileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for BaiduTileSource {
    fn url(&self, coord: TileCoord) -> Result<String> {
        let baidu = BaiduTileCoord::from_tile(&coord)?;
        let url = self.baidu_url(&baidu)?;
        log::debug!("tile {:?} -> {:?} {}", coord, baidu, url);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MapError;

    #[test]
    fn test_remapped_coords_in_url() {
        let url = BaiduTileSource::new().url(TileCoord::new(5, 3, 10)).unwrap();
        assert_eq!(
            url,
            "http://online2.map.bdimg.com/tile/?qt=tile&x=-507&y=508&z=10&styles=pl"
        );
    }

    #[test]
    fn test_subdomains_rotate() {
        let source = BaiduTileSource::new();
        let hosts: Vec<&str> = (0..3)
            .map(|x| source.subdomain(&BaiduTileCoord::new(x, 0, 5)))
            .collect();
        assert_eq!(hosts, vec!["online1", "online2", "online3"]);
        // Negative sums use their magnitude.
        assert_eq!(source.subdomain(&BaiduTileCoord::new(-4, 0, 5)), "online2");
    }

    #[test]
    fn test_custom_params_fill_template() {
        let mut options = TileLayerOptions::default();
        options.url_template =
            "http://{s}.map.bdimg.com/tile/?qt=tile&x={x}&y={y}&z={z}&styles={styles}".to_string();
        options.params.insert("styles".to_string(), "sl".to_string());

        let url = BaiduTileSource::from_options(&options)
            .url(TileCoord::new(0, 0, 1))
            .unwrap();
        assert!(url.ends_with("x=-1&y=0&z=1&styles=sl"));
    }

    #[test]
    fn test_rejects_zoom_past_reference() {
        let err = BaiduTileSource::new().url(TileCoord::new(0, 0, 19)).unwrap_err();
        assert!(matches!(err, MapError::InvalidZoom { zoom: 19, .. }));
    }
}
