use maplet_baidu::{Crs, GeometryMode, LatLng, MapBuilder, Point};

/// Walks a Baidu-backed view through a few moves without any UI
fn main() -> maplet_baidu::Result<()> {
    maplet_baidu::init_logging();

    println!("Baidu headless example");
    println!("======================");

    let (mut viewport, layer) = MapBuilder::new()
        .with_center_and_zoom(LatLng::new(39.9042, 116.4074), 12) // Beijing
        .with_size(Point::new(1024.0, 768.0))
        .with_geometry(GeometryMode::Standard)
        .build()?;

    println!("CRS: {}", viewport.crs().code());
    println!("Attribution: {}", layer.attribution());

    let print_tiles = |viewport: &maplet_baidu::Viewport| -> maplet_baidu::Result<()> {
        let center = viewport.center()?;
        println!(
            "\nCenter {:.4}, {:.4} at zoom {}",
            center.lat,
            center.lng,
            viewport.zoom()
        );
        let zoom = layer.tile_zoom(viewport.zoom());
        let origin = layer.level_origin(viewport, zoom)?;
        for coord in layer.visible_tiles(viewport)?.into_iter().take(4) {
            let position = layer.tile_position(&coord, &origin);
            println!(
                "  {}/{}/{} at ({:.0}, {:.0}) -> {}",
                coord.z,
                coord.x,
                coord.y,
                position.x,
                position.y,
                layer.tile_url(coord)?
            );
        }
        Ok(())
    };

    print_tiles(&viewport)?;

    println!("\nPanning 300px east and 200px south");
    viewport.pan_by(Point::new(300.0, 200.0));
    print_tiles(&viewport)?;

    println!("\nZooming in around the Forbidden City");
    viewport.set_zoom_around(&LatLng::new(39.9163, 116.3972), 15)?;
    print_tiles(&viewport)?;

    let shanghai = LatLng::new(31.2304, 121.4737);
    viewport.set_view(shanghai, 10)?;
    let container = viewport.lat_lng_to_container_point(&shanghai)?;
    println!(
        "\nShanghai sits at container point ({:.0}, {:.0})",
        container.x, container.y
    );
    print_tiles(&viewport)?;

    Ok(())
}
