use crate::{
    core::{
        bounds::Bounds,
        constants::{BAIDU_ATTRIBUTION, BAIDU_SUBDOMAINS, BAIDU_TILE_URL, MAX_ZOOM, MIN_TILE_ZOOM, TILE_SIZE},
        geo::{Point, TileCoord},
        viewport::Viewport,
    },
    tiles::source::{BaiduTileSource, TileSource},
    MapError, Result,
};
use std::collections::HashMap;

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TileLayerOptions {
    /// URL template for tiles; `{s}`, `{x}`, `{y}` and `{z}` are always available
    pub url_template: String,
    /// Available subdomains for load balancing
    pub subdomains: Vec<String>,
    /// Attribution text
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
    /// Extra template values, e.g. `styles`
    pub params: HashMap<String, String>,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: BAIDU_TILE_URL.to_string(),
            subdomains: BAIDU_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
            attribution: BAIDU_ATTRIBUTION.to_string(),
            tile_size: TILE_SIZE,
            max_zoom: MAX_ZOOM,
            min_zoom: MIN_TILE_ZOOM,
            params: HashMap::new(),
        }
    }
}

impl TileLayerOptions {
    pub fn validate(&self) -> Result<()> {
        if self.url_template.is_empty() {
            return Err(MapError::InvalidConfig("empty tile url template".to_string()));
        }
        if self.url_template.contains("{s}") && self.subdomains.is_empty() {
            return Err(MapError::InvalidConfig(
                "template uses {s} but no subdomains are configured".to_string(),
            ));
        }
        if self.tile_size == 0 {
            return Err(MapError::InvalidConfig("tile size must be positive".to_string()));
        }
        if self.min_zoom < MIN_TILE_ZOOM || self.max_zoom > MAX_ZOOM || self.min_zoom > self.max_zoom {
            return Err(MapError::InvalidConfig(format!(
                "tile zoom range {}..={} outside {}..={}",
                self.min_zoom, self.max_zoom, MIN_TILE_ZOOM, MAX_ZOOM
            )));
        }
        Ok(())
    }
}

/// A tile layer for Baidu maps
///
/// Works out which host-grid tiles cover the view, where each one is placed
/// relative to the level origin, and which Baidu URL serves it.
#[derive(Debug, Clone)]
pub struct BaiduLayer {
    id: String,
    name: String,
    options: TileLayerOptions,
    source: BaiduTileSource,
}

impl BaiduLayer {
    /// Create a new tile layer with default Baidu street tiles
    pub fn new(id: String, name: String) -> Self {
        let options = TileLayerOptions::default();
        let source = BaiduTileSource::from_options(&options);
        Self {
            id,
            name,
            options,
            source,
        }
    }

    /// Create a new tile layer with custom options
    pub fn with_options(id: String, name: String, options: TileLayerOptions) -> Result<Self> {
        options.validate()?;
        let source = BaiduTileSource::from_options(&options);
        Ok(Self {
            id,
            name,
            options,
            source,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn attribution(&self) -> &str {
        &self.options.attribution
    }

    pub fn source(&self) -> &BaiduTileSource {
        &self.source
    }

    /// URL for a tile of the host grid
    pub fn tile_url(&self, coord: TileCoord) -> Result<String> {
        self.source.url(coord)
    }

    /// Tile zoom used for a map zoom
    pub fn tile_zoom(&self, map_zoom: u8) -> u8 {
        map_zoom.clamp(self.options.min_zoom, self.options.max_zoom)
    }

    /// Pixel origin of a tile level: the map's pixel origin re-projected at
    /// `zoom`
    pub fn level_origin(&self, viewport: &Viewport, zoom: u8) -> Result<Point> {
        // Pixel round trips are lossy on the shared lattice.
        if zoom == viewport.zoom() {
            return Ok(viewport.pixel_origin());
        }
        let origin = viewport.unproject(&viewport.pixel_origin(), None)?;
        Ok(viewport.project(&origin, Some(zoom))?.round())
    }

    /// Layer position of a tile's top-left corner
    pub fn tile_position(&self, coord: &TileCoord, origin: &Point) -> Point {
        let tile_size = self.options.tile_size as f64;
        Point::new(coord.x as f64 * tile_size, coord.y as f64 * tile_size).subtract(origin)
    }

    /// Pixel bounds of the view at tile zoom `zoom`
    pub fn tiled_pixel_bounds(&self, viewport: &Viewport, zoom: u8) -> Result<Bounds> {
        let scale = viewport.zoom_scale(viewport.zoom(), zoom);
        let center = viewport.center()?;
        let pixel_center = viewport.project(&center, Some(zoom))?.floor();
        let half_size = viewport.size().divide(scale * 2.0);

        Ok(Bounds::new(
            pixel_center.subtract(&half_size),
            pixel_center.add(&half_size),
        ))
    }

    /// Inclusive tile index range covering `bounds`
    pub fn pixel_bounds_to_tile_range(&self, bounds: &Bounds) -> Bounds {
        let tile_size = self.options.tile_size as f64;
        Bounds::new(
            bounds.min.divide(tile_size).floor(),
            Point::new(
                (bounds.max.x / tile_size).ceil() - 1.0,
                (bounds.max.y / tile_size).ceil() - 1.0,
            ),
        )
    }

    /// Tiles covering the view, nearest to the centre first.
    ///
    /// Tiles outside the CRS world bounds are skipped; Baidu's CRS does not
    /// wrap longitudes.
    pub fn visible_tiles(&self, viewport: &Viewport) -> Result<Vec<TileCoord>> {
        let zoom = self.tile_zoom(viewport.zoom());
        let pixel_bounds = self.tiled_pixel_bounds(viewport, zoom)?;
        let range = self.pixel_bounds_to_tile_range(&pixel_bounds);
        let center = range.center();

        // Clip to the tile grid, then to the CRS world, before walking it.
        let last = ((1u64 << zoom) - 1) as f64;
        let mut min = Point::new(range.min.x.max(0.0), range.min.y.max(0.0));
        let mut max = Point::new(range.max.x.min(last), range.max.y.min(last));
        if let Some(global) = viewport.crs().projected_bounds(zoom)? {
            let global = self.pixel_bounds_to_tile_range(&global);
            min = Point::new(min.x.max(global.min.x), min.y.max(global.min.y));
            max = Point::new(max.x.min(global.max.x), max.y.min(global.max.y));
        }
        if !(min.x <= max.x && min.y <= max.y) {
            log::debug!("no visible tiles at zoom {}", zoom);
            return Ok(Vec::new());
        }

        let mut coords = Vec::new();
        for y in (min.y as u32)..=(max.y as u32) {
            for x in (min.x as u32)..=(max.x as u32) {
                coords.push(TileCoord::new(x, y, zoom));
            }
        }

        coords.sort_by(|a, b| {
            let da = Point::new(a.x as f64, a.y as f64).distance_to(&center);
            let db = Point::new(b.x as f64, b.y as f64).distance_to(&center);
            da.total_cmp(&db)
        });

        log::debug!("{} visible tiles at zoom {}", coords.len(), zoom);
        Ok(coords)
    }
}
