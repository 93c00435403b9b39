//! Core constants for the Baidu tile scheme and its zoom-18 reference lattice.
//! Keeping them in a single place makes the magic numbers easy to audit.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Reference zoom: projected coordinates are pixels at this level, and every
/// other level is reached by shifting `MAX_ZOOM - zoom` bits.
pub const MAX_ZOOM: u8 = 18;

/// Lowest zoom with an integral tile remap (`2^(z-1)` must be whole).
pub const MIN_TILE_ZOOM: u8 = 1;

/// Half-width of the world rectangle in projected units (2^25).
pub const WORLD_PIXEL_EXTENT: f64 = 33_554_432.0;

/// Identifier the CRS advertises to the host engine.
pub const CRS_CODE: &str = "EPSG:3857";

/// Default Baidu street tile template.
pub const BAIDU_TILE_URL: &str =
    "http://{s}.map.bdimg.com/tile/?qt=tile&x={x}&y={y}&z={z}&styles=pl";

/// Host names rotated through by [`BAIDU_TILE_URL`].
pub const BAIDU_SUBDOMAINS: [&str; 3] = ["online1", "online2", "online3"];

/// Attribution Baidu requires alongside its tiles.
pub const BAIDU_ATTRIBUTION: &str = "© 2014 Baidu - GS(2012)6003;- Data © NavInfo & CenNavi & DaoDaoTong";

/// Baidu's coordinate conversion REST endpoint.
pub const GEOCONV_ENDPOINT: &str = "https://api.map.baidu.com/geoconv/v1/";
