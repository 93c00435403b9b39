use maplet_baidu::{
    BaiduLayer, BaiduTileCoord, BaiduTileSource, MapError, TileCoord, TileLayerOptions, TileSource,
};

#[test]
fn test_host_tile_maps_to_baidu_grid() {
    let baidu = BaiduTileCoord::from_tile(&TileCoord::new(5, 3, 10)).unwrap();
    assert_eq!((baidu.x, baidu.y, baidu.z), (-507, 508, 10));
    assert_eq!(baidu.to_tile(), Some(TileCoord::new(5, 3, 10)));
}

#[test]
fn test_url_carries_remapped_coordinates() {
    let layer = BaiduLayer::new("baidu".to_string(), "Baidu".to_string());
    let url = layer.tile_url(TileCoord::new(5, 3, 10)).unwrap();

    assert!(url.contains("x=-507"));
    assert!(url.contains("y=508"));
    assert!(url.contains("z=10"));
    assert!(url.contains("qt=tile"));
    assert!(url.contains("styles=pl"));
    assert!(url.starts_with("http://online"));
}

#[test]
fn test_grid_centre_tiles() {
    // The four tiles around the centre of zoom 1 sit at x in {-1, 0}, y in {-1, 0}.
    let expected = [
        ((0, 0), (-1, 0)),
        ((1, 0), (0, 0)),
        ((0, 1), (-1, -1)),
        ((1, 1), (0, -1)),
    ];
    for ((x, y), (bx, by)) in expected {
        let baidu = BaiduTileCoord::from_tile(&TileCoord::new(x, y, 1)).unwrap();
        assert_eq!((baidu.x, baidu.y), (bx, by));
    }
}

#[test]
fn test_zoom_out_of_range_is_invalid() {
    let source = BaiduTileSource::new();
    assert!(matches!(
        source.url(TileCoord::new(0, 0, 19)),
        Err(MapError::InvalidZoom { zoom: 19, .. })
    ));
    assert!(matches!(
        source.url(TileCoord::new(0, 0, 0)),
        Err(MapError::InvalidZoom { zoom: 0, .. })
    ));
}

#[test]
fn test_unknown_placeholder_is_template_error() {
    let options = TileLayerOptions {
        url_template: "http://{s}.map.bdimg.com/tile/?x={x}&y={y}&z={z}&udt={udt}".to_string(),
        ..TileLayerOptions::default()
    };
    let layer = BaiduLayer::with_options("baidu".into(), "Baidu".into(), options).unwrap();
    assert!(matches!(
        layer.tile_url(TileCoord::new(1, 1, 3)),
        Err(MapError::Template(_))
    ));
}

#[test]
fn test_custom_subdomains() {
    let options = TileLayerOptions {
        subdomains: vec!["maponline0".to_string()],
        ..TileLayerOptions::default()
    };
    let layer = BaiduLayer::with_options("baidu".into(), "Baidu".into(), options).unwrap();
    let url = layer.tile_url(TileCoord::new(5, 3, 10)).unwrap();
    assert!(url.starts_with("http://maponline0.map.bdimg.com/"));
}
