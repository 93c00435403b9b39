//! Map geometry strategies
//!
//! `StandardGeometry` is the stock Leaflet arithmetic. `BaiduGeometry` is for
//! hosts that report the map pane offset with `y` growing upwards, as Baidu's
//! own tile grid does: it negates the vertical pane offset and inverts the
//! latitude delta of zoom-around-point moves.

use crate::core::geo::{LatLng, Point};
use crate::traits::MapGeometry;

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardGeometry;

impl MapGeometry for StandardGeometry {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn pixel_origin(&self, projected_center: Point, view_half: Point, pane_pos: Point) -> Point {
        projected_center
            .subtract(&view_half)
            .add(&pane_pos)
            .round()
    }

    fn center_layer_point(&self, view_half: Point, pane_pos: Point) -> Point {
        view_half.subtract(&pane_pos)
    }

    fn zoom_around_center(&self, _center: LatLng, candidate: LatLng) -> LatLng {
        candidate
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BaiduGeometry;

impl BaiduGeometry {
    fn flip_pane(pane_pos: Point) -> Point {
        Point::new(pane_pos.x, -pane_pos.y)
    }
}

impl MapGeometry for BaiduGeometry {
    fn name(&self) -> &'static str {
        "baidu"
    }

    fn pixel_origin(&self, projected_center: Point, view_half: Point, pane_pos: Point) -> Point {
        projected_center
            .subtract(&view_half)
            .add(&Self::flip_pane(pane_pos))
            .round()
    }

    fn center_layer_point(&self, view_half: Point, pane_pos: Point) -> Point {
        view_half.subtract(&Self::flip_pane(pane_pos))
    }

    fn zoom_around_center(&self, center: LatLng, candidate: LatLng) -> LatLng {
        LatLng::new(center.lat - (candidate.lat - center.lat), candidate.lng)
    }
}
