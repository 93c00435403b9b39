//! Baidu point translation service
//!
//! Converts points between datums through Baidu's `geoconv` endpoint. Calls
//! are single-shot: no retries, no timeout, no caching. A non-zero status is
//! an answer, not a crash; [`translate_point`] resolves it to `None`.

use crate::core::config::GeoconvConfig;
use crate::core::geo::LatLng;
use crate::{MapError, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Shared HTTP client so connection pools are reused across translations.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!("maplet-baidu/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
});

/// Datum codes understood by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordType {
    /// GPS latitude/longitude
    Wgs84,
    /// GPS metres on a Mercator plane
    Wgs84Mercator,
    /// Chinese national datum latitude/longitude
    Gcj02,
    Gcj02Mercator,
    /// Baidu latitude/longitude
    Bd09,
    /// Baidu Mercator metres
    Bd09Mercator,
}

impl CoordType {
    pub fn code(&self) -> u8 {
        match self {
            Self::Wgs84 => 1,
            Self::Wgs84Mercator => 2,
            Self::Gcj02 => 3,
            Self::Gcj02Mercator => 4,
            Self::Bd09 => 5,
            Self::Bd09Mercator => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Wgs84),
            2 => Some(Self::Wgs84Mercator),
            3 => Some(Self::Gcj02),
            4 => Some(Self::Gcj02Mercator),
            5 => Some(Self::Bd09),
            6 => Some(Self::Bd09Mercator),
            _ => None,
        }
    }
}

/// Status code plus translated points, as the service returned them
#[derive(Debug, Clone, PartialEq)]
pub struct TranslateResponse {
    pub status: i64,
    pub points: Vec<LatLng>,
}

impl TranslateResponse {
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Translated points, or `ProjectionUnavailable` for a non-zero status
    pub fn into_points(self) -> Result<Vec<LatLng>> {
        if !self.is_success() {
            return Err(MapError::ProjectionUnavailable(format!(
                "translation service returned status {}",
                self.status
            )));
        }
        Ok(self.points)
    }
}

/// Capability to translate a batch of points between datums
#[async_trait]
pub trait PointTranslator: Send + Sync {
    async fn translate(
        &self,
        points: &[LatLng],
        from: CoordType,
        to: CoordType,
    ) -> Result<TranslateResponse>;
}

/// Translates one GPS (WGS-84) point into Baidu's datum.
///
/// Resolves to `None` on a non-zero status, an empty answer or a transport
/// failure; the caller decides whether to skip the point.
pub async fn translate_point(translator: &dyn PointTranslator, point: LatLng) -> Option<LatLng> {
    match translator
        .translate(&[point], CoordType::Wgs84, CoordType::Bd09)
        .await
        .and_then(TranslateResponse::into_points)
    {
        Ok(points) => points.into_iter().next(),
        Err(e) => {
            log::warn!("translating {:?} failed: {}", point, e);
            None
        }
    }
}

/// Blocking form of [`translate_point`] for hosts without an async runtime.
///
/// Must not be called from inside a Tokio runtime.
#[cfg(feature = "tokio-runtime")]
pub fn translate_point_blocking(translator: &dyn PointTranslator, point: LatLng) -> Option<LatLng> {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::warn!("could not start a runtime for translation: {}", e);
            return None;
        }
    };
    runtime.block_on(translate_point(translator, point))
}

#[derive(Debug, Deserialize)]
struct GeoconvPoint {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct GeoconvBody {
    status: i64,
    #[serde(default)]
    result: Vec<GeoconvPoint>,
}

/// Decodes a `geoconv` JSON body; `x` is longitude, `y` latitude.
pub(crate) fn parse_response(body: &str) -> Result<TranslateResponse> {
    let body: GeoconvBody = serde_json::from_str(body)?;
    Ok(TranslateResponse {
        status: body.status,
        points: body
            .result
            .into_iter()
            .map(|p| LatLng::new(p.y, p.x))
            .collect(),
    })
}

/// `lng,lat;lng,lat` as the service expects
pub(crate) fn encode_coords(points: &[LatLng]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.lng, p.lat))
        .collect::<Vec<_>>()
        .join(";")
}

/// HTTP client for Baidu's `geoconv/v1` endpoint
#[derive(Debug, Clone)]
pub struct GeoconvClient {
    endpoint: String,
    access_key: String,
}

impl GeoconvClient {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    pub fn from_config(config: &GeoconvConfig) -> Result<Self> {
        let access_key = config.access_key.clone().ok_or_else(|| {
            MapError::InvalidConfig("geoconv access key is not set".to_string())
        })?;
        Ok(Self::new(config.endpoint.clone(), access_key))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET request for one batch, `coords/from/to/ak` in the query string
    fn request(
        &self,
        points: &[LatLng],
        from: CoordType,
        to: CoordType,
    ) -> reqwest::RequestBuilder {
        HTTP_CLIENT.get(&self.endpoint).query(&[
            ("coords", encode_coords(points)),
            ("from", from.code().to_string()),
            ("to", to.code().to_string()),
            ("ak", self.access_key.clone()),
        ])
    }
}

#[async_trait]
impl PointTranslator for GeoconvClient {
    async fn translate(
        &self,
        points: &[LatLng],
        from: CoordType,
        to: CoordType,
    ) -> Result<TranslateResponse> {
        if points.is_empty() {
            return Ok(TranslateResponse {
                status: 0,
                points: Vec::new(),
            });
        }

        log::debug!(
            "geoconv {} point(s) from {} to {}",
            points.len(),
            from.code(),
            to.code()
        );

        let response = self
            .request(points, from, to)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStatus(i64);

    #[async_trait]
    impl PointTranslator for FixedStatus {
        async fn translate(
            &self,
            points: &[LatLng],
            _from: CoordType,
            _to: CoordType,
        ) -> Result<TranslateResponse> {
            Ok(TranslateResponse {
                status: self.0,
                points: points
                    .iter()
                    .map(|p| LatLng::new(p.lat + 0.006, p.lng + 0.0065))
                    .collect(),
            })
        }
    }

    #[test]
    fn test_coord_type_codes() {
        assert_eq!(CoordType::Wgs84.code(), 1);
        assert_eq!(CoordType::Bd09.code(), 5);
        assert_eq!(CoordType::from_code(6), Some(CoordType::Bd09Mercator));
        assert_eq!(CoordType::from_code(7), None);
    }

    #[test]
    fn test_encode_coords_lng_first() {
        let coords = encode_coords(&[LatLng::new(29.5, 114.2), LatLng::new(30.0, 120.0)]);
        assert_eq!(coords, "114.2,29.5;120,30");
    }

    #[test]
    fn test_parse_success_body() {
        let response =
            parse_response(r#"{"status":0,"result":[{"x":114.2307,"y":29.5790}]}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.points, vec![LatLng::new(29.5790, 114.2307)]);
    }

    #[test]
    fn test_parse_error_body_without_result() {
        let response = parse_response(r#"{"status":24,"message":"param error"}"#).unwrap();
        assert_eq!(response.status, 24);
        assert!(matches!(
            response.into_points(),
            Err(MapError::ProjectionUnavailable(_))
        ));
    }

    #[test]
    fn test_client_requires_access_key() {
        let err = GeoconvClient::from_config(&GeoconvConfig::default()).unwrap_err();
        assert!(matches!(err, MapError::InvalidConfig(_)));
    }

    #[test]
    fn test_request_carries_query_pairs() {
        let client = GeoconvClient::new("https://api.example.com/geoconv/v1/", "secret");
        let request = client
            .request(
                &[LatLng::new(29.5, 114.2), LatLng::new(30.0, 120.0)],
                CoordType::Gcj02,
                CoordType::Bd09,
            )
            .build()
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        let url = request.url();
        assert_eq!(url.path(), "/geoconv/v1/");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("coords".to_string(), "114.2,29.5;120,30".to_string()),
                ("from".to_string(), "3".to_string()),
                ("to".to_string(), "5".to_string()),
                ("ak".to_string(), "secret".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_batch_skips_the_service() {
        // The endpoint is unroutable; an empty batch must not reach it.
        let client = GeoconvClient::new("http://127.0.0.1:9/geoconv/v1/", "secret");
        let response = client
            .translate(&[], CoordType::Wgs84, CoordType::Bd09)
            .await
            .unwrap();
        assert!(response.is_success());
        assert!(response.points.is_empty());
    }

    #[tokio::test]
    async fn test_translate_point_success() {
        let point = translate_point(&FixedStatus(0), LatLng::new(30.0, 120.0)).await;
        let point = point.unwrap();
        assert!((point.lat - 30.006).abs() < 1e-9);
        assert!((point.lng - 120.0065).abs() < 1e-9);
    }

    #[cfg(feature = "tokio-runtime")]
    #[test]
    fn test_translate_point_blocking() {
        let point = translate_point_blocking(&FixedStatus(0), LatLng::new(30.0, 120.0)).unwrap();
        assert!((point.lng - 120.0065).abs() < 1e-9);
        assert!(translate_point_blocking(&FixedStatus(2), LatLng::new(30.0, 120.0)).is_none());
    }

    #[tokio::test]
    async fn test_translate_point_non_zero_status_is_none() {
        assert!(translate_point(&FixedStatus(1), LatLng::new(30.0, 120.0))
            .await
            .is_none());
    }
}
