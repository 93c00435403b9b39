use crate::core::{
    bounds::Bounds,
    constants::MAX_ZOOM,
    geo::{LatLng, Point},
    geometry::StandardGeometry,
};
use crate::crs::baidu::BaiduCrs;
use crate::traits::{Crs, MapGeometry};
use crate::{MapError, Result};

/// Manages the current view of the map: zoom, container size, pixel origin and
/// map pane offset, with Leaflet's layer/container point conventions.
///
/// The CRS and the geometry strategy are fixed at construction.
pub struct Viewport {
    crs: Box<dyn Crs>,
    geometry: Box<dyn MapGeometry>,
    /// The current zoom level
    zoom: u8,
    /// The size of the viewport in pixels
    size: Point,
    /// The minimum allowed zoom level
    min_zoom: u8,
    /// The maximum allowed zoom level
    max_zoom: u8,
    /// Pixel coordinate of the layer origin at the current zoom
    pixel_origin: Point,
    /// Offset of the map pane, accumulated by panning
    pane_pos: Point,
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("crs", &self.crs.code())
            .field("geometry", &self.geometry.name())
            .field("zoom", &self.zoom)
            .field("size", &self.size)
            .field("pixel_origin", &self.pixel_origin)
            .field("pane_pos", &self.pane_pos)
            .finish()
    }
}

impl Viewport {
    /// Creates a new viewport centred on `center`
    pub fn new(
        crs: Box<dyn Crs>,
        geometry: Box<dyn MapGeometry>,
        center: LatLng,
        zoom: u8,
        size: Point,
    ) -> Result<Self> {
        let mut viewport = Self {
            crs,
            geometry,
            zoom: 0,
            size,
            min_zoom: 0,
            max_zoom: MAX_ZOOM,
            pixel_origin: Point::default(),
            pane_pos: Point::default(),
        };
        viewport.set_view(center, zoom)?;
        Ok(viewport)
    }

    /// Viewport over the spherical Baidu CRS with stock geometry
    pub fn baidu(center: LatLng, zoom: u8, size: Point) -> Result<Self> {
        Self::new(
            Box::new(BaiduCrs::spherical()),
            Box::new(StandardGeometry),
            center,
            zoom,
            size,
        )
    }

    pub fn crs(&self) -> &dyn Crs {
        self.crs.as_ref()
    }

    pub fn geometry(&self) -> &dyn MapGeometry {
        self.geometry.as_ref()
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn pixel_origin(&self) -> Point {
        self.pixel_origin
    }

    pub fn pane_pos(&self) -> Point {
        self.pane_pos
    }

    fn view_half(&self) -> Point {
        self.size.divide(2.0)
    }

    /// Rejects zooms past the reference level, clamps the rest to the limits
    fn resolve_zoom(&self, zoom: u8) -> Result<u8> {
        if zoom > MAX_ZOOM {
            return Err(MapError::InvalidZoom {
                zoom,
                min: 0,
                max: MAX_ZOOM,
            });
        }
        Ok(zoom.clamp(self.min_zoom, self.max_zoom))
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: u8, max_zoom: u8) -> Result<()> {
        if max_zoom > MAX_ZOOM || min_zoom > max_zoom {
            return Err(MapError::InvalidConfig(format!(
                "zoom limits {}..={} outside 0..={}",
                min_zoom, max_zoom, MAX_ZOOM
            )));
        }
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;

        let zoom = self.zoom.clamp(min_zoom, max_zoom);
        if zoom != self.zoom {
            let center = self.center()?;
            self.set_view(center, zoom)?;
        }
        Ok(())
    }

    /// Projects a LatLng to pixel coordinates at `zoom` (current zoom if `None`)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<u8>) -> Result<Point> {
        self.crs
            .lat_lng_to_point(lat_lng, zoom.unwrap_or(self.zoom))
    }

    /// Unprojects pixel coordinates at `zoom` (current zoom if `None`)
    pub fn unproject(&self, point: &Point, zoom: Option<u8>) -> Result<LatLng> {
        self.crs.point_to_lat_lng(point, zoom.unwrap_or(self.zoom))
    }

    /// Pixel scale between two zoom levels
    pub fn zoom_scale(&self, to_zoom: u8, from_zoom: u8) -> f64 {
        self.crs.scale(to_zoom) / self.crs.scale(from_zoom)
    }

    /// Recentres the view, resetting the pane offset and the pixel origin
    pub fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<()> {
        let zoom = self.resolve_zoom(zoom)?;
        let center = center.validated()?;
        let projected_center = self.crs.lat_lng_to_point(&center, zoom)?;

        self.zoom = zoom;
        self.pane_pos = Point::default();
        self.pixel_origin =
            self.geometry
                .pixel_origin(projected_center, self.view_half(), self.pane_pos);

        log::debug!(
            "set_view {:?} zoom {} pixel origin {:?} ({} geometry)",
            center,
            zoom,
            self.pixel_origin,
            self.geometry.name()
        );
        Ok(())
    }

    /// Converts LatLng to layer point (relative to pixel origin)
    pub fn lat_lng_to_layer_point(&self, lat_lng: &LatLng) -> Result<Point> {
        let projected = self.project(lat_lng, None)?;
        Ok(projected.round().subtract(&self.pixel_origin))
    }

    /// Converts layer point back to LatLng
    pub fn layer_point_to_lat_lng(&self, point: &Point) -> Result<LatLng> {
        self.unproject(&point.add(&self.pixel_origin), None)
    }

    /// Converts layer point to container point (screen coordinates)
    pub fn layer_point_to_container_point(&self, point: &Point) -> Point {
        point.add(&self.pane_pos)
    }

    /// Converts container point to layer point
    pub fn container_point_to_layer_point(&self, point: &Point) -> Point {
        point.subtract(&self.pane_pos)
    }

    /// Converts a geographical coordinate to container pixel coordinates
    pub fn lat_lng_to_container_point(&self, lat_lng: &LatLng) -> Result<Point> {
        let layer_point = self.lat_lng_to_layer_point(lat_lng)?;
        Ok(self.layer_point_to_container_point(&layer_point))
    }

    /// Converts container pixel coordinates back to geographical coordinates
    pub fn container_point_to_lat_lng(&self, point: &Point) -> Result<LatLng> {
        let layer_point = self.container_point_to_layer_point(point);
        self.layer_point_to_lat_lng(&layer_point)
    }

    /// Layer point under the middle of the container
    pub fn center_layer_point(&self) -> Point {
        self.geometry
            .center_layer_point(self.view_half(), self.pane_pos)
    }

    /// Geographical centre of the view
    pub fn center(&self) -> Result<LatLng> {
        self.layer_point_to_lat_lng(&self.center_layer_point())
    }

    /// Pans the map pane by `offset` pixels; positive `x` moves the view east
    pub fn pan_by(&mut self, offset: Point) {
        self.pane_pos = self.pane_pos.subtract(&offset);
    }

    /// Zooms while keeping `focus` under the same container point
    pub fn set_zoom_around(&mut self, focus: &LatLng, zoom: u8) -> Result<()> {
        let zoom = self.resolve_zoom(zoom)?;
        let scale = self.zoom_scale(zoom, self.zoom);
        let view_half = self.view_half();

        let container_point = self.lat_lng_to_container_point(focus)?;
        let center_offset = container_point
            .subtract(&view_half)
            .multiply(1.0 - 1.0 / scale);
        let candidate = self.container_point_to_lat_lng(&view_half.add(&center_offset))?;

        let new_center = self.geometry.zoom_around_center(self.center()?, candidate);
        self.set_view(new_center, zoom)
    }

    /// Same as [`set_zoom_around`](Self::set_zoom_around) for a container point
    pub fn set_zoom_around_point(&mut self, container_point: &Point, zoom: u8) -> Result<()> {
        let focus = self.container_point_to_lat_lng(container_point)?;
        self.set_zoom_around(&focus, zoom)
    }

    /// Pixel bounds of the visible area at the current zoom
    pub fn pixel_bounds(&self) -> Bounds {
        let top_left = self
            .pixel_origin
            .add(&self.center_layer_point())
            .subtract(&self.view_half());
        Bounds::new(top_left, top_left.add(&self.size))
    }
}
