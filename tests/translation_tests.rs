use async_trait::async_trait;
use maplet_baidu::{
    translate_point, CoordType, LatLng, MapError, PointTranslator, Result, TranslateResponse,
};
use std::sync::Mutex;

/// Records every request and answers with a canned response
struct Recorder {
    status: i64,
    calls: Mutex<Vec<(Vec<LatLng>, CoordType, CoordType)>>,
}

impl Recorder {
    fn new(status: i64) -> Self {
        Self {
            status,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PointTranslator for Recorder {
    async fn translate(
        &self,
        points: &[LatLng],
        from: CoordType,
        to: CoordType,
    ) -> Result<TranslateResponse> {
        self.calls.lock().unwrap().push((points.to_vec(), from, to));
        Ok(TranslateResponse {
            status: self.status,
            points: points
                .iter()
                .map(|p| LatLng::new(p.lat + 0.0060, p.lng + 0.0065))
                .collect(),
        })
    }
}

struct Unreachable;

#[async_trait]
impl PointTranslator for Unreachable {
    async fn translate(
        &self,
        _points: &[LatLng],
        _from: CoordType,
        _to: CoordType,
    ) -> Result<TranslateResponse> {
        Err(MapError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

#[tokio::test]
async fn test_translate_point_requests_wgs84_to_bd09() {
    let recorder = Recorder::new(0);
    let point = LatLng::new(29.5790, 114.2307);

    let translated = translate_point(&recorder, point).await.unwrap();
    assert!((translated.lat - 29.5850).abs() < 1e-9);

    let calls = recorder.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, vec![point]);
    assert_eq!(calls[0].1, CoordType::Wgs84);
    assert_eq!(calls[0].2, CoordType::Bd09);
}

#[tokio::test]
async fn test_non_zero_status_resolves_to_none() {
    let recorder = Recorder::new(1);
    let translated = translate_point(&recorder, LatLng::new(30.0, 120.0)).await;
    assert!(translated.is_none());
    assert_eq!(recorder.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_transport_failure_resolves_to_none() {
    assert!(translate_point(&Unreachable, LatLng::new(30.0, 120.0))
        .await
        .is_none());
}

#[test]
fn test_non_zero_status_maps_to_projection_unavailable() {
    let response = TranslateResponse {
        status: 4,
        points: Vec::new(),
    };
    assert!(!response.is_success());
    assert!(matches!(
        response.into_points(),
        Err(MapError::ProjectionUnavailable(msg)) if msg.contains('4')
    ));
}
