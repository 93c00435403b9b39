pub mod geoconv;

pub use geoconv::{translate_point, CoordType, GeoconvClient, PointTranslator, TranslateResponse};

#[cfg(feature = "tokio-runtime")]
pub use geoconv::translate_point_blocking;
