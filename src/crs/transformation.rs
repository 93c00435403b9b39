//! Projected plane ↔ zoom-level pixels
//!
//! Projected coordinates are pixels at [`MAX_ZOOM`]; lower zooms are reached
//! by arithmetic right shifts, so every level shares one integer lattice. The
//! pixel space is then moved to a top-left origin with `y` pointing down:
//! `x' = x + scale`, `y' = -y + scale`, where `scale = 256 * 2^(zoom - 1)`.

use crate::core::constants::MAX_ZOOM;
use crate::core::geo::{PixelPoint, Point};
use crate::{MapError, Result};

/// Number of bits separating `zoom` from the reference zoom
fn shift_for(zoom: u8) -> Result<u32> {
    if zoom > MAX_ZOOM {
        return Err(MapError::InvalidZoom {
            zoom,
            min: 0,
            max: MAX_ZOOM,
        });
    }
    Ok((MAX_ZOOM - zoom) as u32)
}

/// Reference-zoom value down to `zoom`: truncate, then `>> (18 - zoom)`.
pub fn shift_down(value: f64, zoom: u8) -> Result<i64> {
    let shift = shift_for(zoom)?;
    Ok((value as i64) >> shift)
}

/// Pixel value at `zoom` up to the reference zoom: `<< (18 - zoom)`.
///
/// Values whose high bits would be shifted out are `InvalidCoordinates`.
pub fn shift_up(value: i64, zoom: u8) -> Result<i64> {
    let shift = shift_for(zoom)?;
    value
        .checked_mul(1_i64 << shift)
        .ok_or_else(|| out_of_range(value, zoom))
}

fn out_of_range(value: i64, zoom: u8) -> MapError {
    MapError::InvalidCoordinates(format!("pixel {} out of range at zoom {}", value, zoom))
}

/// Baidu's pixel transformation with scale offset and Y-flip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaiduTransformation;

impl BaiduTransformation {
    pub const MAX_ZOOM: u8 = MAX_ZOOM;

    pub fn new() -> Self {
        Self
    }

    /// Half the world width in pixels at `zoom`
    pub fn scale(&self, zoom: u8) -> f64 {
        256.0 * 2_f64.powi(zoom as i32 - 1)
    }

    /// Projected point to pixel coordinate at `zoom`
    pub fn to_pixel(&self, point: &Point, zoom: u8) -> Result<PixelPoint> {
        let x = shift_down(point.x, zoom)?;
        let y = shift_down(point.y, zoom)?;
        let scale = self.scale(zoom) as i64;
        let px = x.checked_add(scale).ok_or_else(|| out_of_range(x, zoom))?;
        let py = scale.checked_sub(y).ok_or_else(|| out_of_range(y, zoom))?;
        Ok(PixelPoint::new(px, py))
    }

    /// Pixel coordinate at `zoom` back to a projected point.
    ///
    /// Exact only up to the `2^(18 - zoom)` quantum dropped by
    /// [`to_pixel`](Self::to_pixel).
    pub fn to_projected(&self, pixel: &PixelPoint, zoom: u8) -> Result<Point> {
        let scale = self.scale(zoom) as i64;
        let dx = pixel
            .x
            .checked_sub(scale)
            .ok_or_else(|| out_of_range(pixel.x, zoom))?;
        let dy = scale
            .checked_sub(pixel.y)
            .ok_or_else(|| out_of_range(pixel.y, zoom))?;
        let x = shift_up(dx, zoom)?;
        let y = shift_up(dy, zoom)?;
        Ok(Point::new(x as f64, y as f64))
    }
}
