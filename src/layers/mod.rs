pub mod tile;

// Re-exports for convenience
pub use tile::{BaiduLayer, TileLayerOptions};
