use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use maplet_baidu::{
    translate_point, BaiduCrs, BaiduLayer, BaiduMapConfig, BaiduTileCoord, CoordType, GeoconvClient,
    LatLng, PixelPoint, PointTranslator, TileCoord,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "baidu-tiles")]
#[command(about = "Inspect Baidu tile URLs, pixel transforms and point translation")]
struct Cli {
    /// JSON configuration file; built-in defaults are used when absent
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the Baidu URL serving a tile of the standard top-left grid
    TileUrl {
        x: u32,
        y: u32,
        z: u8,
        /// Extra template value, as `key=value`
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
    },
    /// Latitude/longitude to pixel coordinates at a zoom level
    Pixel {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        zoom: u8,
    },
    /// Pixel coordinates at a zoom level back to latitude/longitude
    Latlng {
        #[arg(allow_negative_numbers = true)]
        x: i64,
        #[arg(allow_negative_numbers = true)]
        y: i64,
        zoom: u8,
    },
    /// Translate a GPS point into Baidu's datum through the geoconv service
    Translate {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        /// Access key; overrides the configured one
        #[arg(long, env = "BAIDU_AK")]
        ak: Option<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<BaiduMapConfig> {
    let config = match path {
        Some(path) => BaiduMapConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => BaiduMapConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn parse_param(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => bail!("expected key=value, got {:?}", raw),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::TileUrl { x, y, z, params } => {
            for raw in &params {
                let (key, value) = parse_param(raw)?;
                config.tile_layer.params.insert(key, value);
            }
            let layer = BaiduLayer::with_options(
                "baidu".to_string(),
                "Baidu".to_string(),
                config.tile_layer,
            )?;
            let coord = TileCoord::new(x, y, z);
            let baidu = BaiduTileCoord::from_tile(&coord)?;
            println!("baidu tile: x={} y={} z={}", baidu.x, baidu.y, baidu.z);
            println!("{}", layer.tile_url(coord)?);
        }
        Command::Pixel { lat, lng, zoom } => {
            let crs = BaiduCrs::spherical().with_infinite(config.infinite);
            let lat_lng = LatLng::new(lat, lng).validated()?;
            let projected = crs.projection().project(&lat_lng)?;
            let pixel = crs.lat_lng_to_pixel(&lat_lng, zoom)?;
            println!("projected: {:.2}, {:.2}", projected.x, projected.y);
            println!("pixel: {}, {}", pixel.x, pixel.y);
        }
        Command::Latlng { x, y, zoom } => {
            let crs = BaiduCrs::spherical().with_infinite(config.infinite);
            let lat_lng = crs.pixel_to_lat_lng(&PixelPoint::new(x, y), zoom)?;
            println!("{:.6}, {:.6}", lat_lng.lat, lat_lng.lng);
        }
        Command::Translate { lat, lng, ak } => {
            if let Some(ak) = ak {
                config.geoconv.access_key = Some(ak);
            }
            let client = GeoconvClient::from_config(&config.geoconv)?;
            let point = LatLng::new(lat, lng).validated()?;

            let translated = if (config.geoconv.from, config.geoconv.to)
                == (CoordType::Wgs84, CoordType::Bd09)
            {
                translate_point(&client, point).await
            } else {
                let response = client
                    .translate(&[point], config.geoconv.from, config.geoconv.to)
                    .await?;
                response.into_points()?.into_iter().next()
            };

            match translated {
                Some(p) => println!("{:.6}, {:.6}", p.lat, p.lng),
                None => bail!("translation service did not return a point"),
            }
        }
    }

    Ok(())
}
