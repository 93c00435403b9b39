pub mod source;
pub mod template;

// Re-exports for convenience
pub use source::{BaiduTileSource, TileSource};
