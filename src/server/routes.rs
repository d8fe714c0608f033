//! HTTP API routes
//!
//! Defines the REST endpoints for the radius query surface. The two response
//! shapes run the same query path and differ only in wrapping and default
//! radius:
//!
//! - `GET /georesults/:region` - bare list, default radius 20 km
//! - `GET /v2/georesults/:region` - `{ results: [...] }`, default radius 10 km

use crate::error::Error;
use crate::server::state::AppState;
use crate::service::GeoResultsResponse;
use crate::store::GeoResult;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/georesults/:region", get(find_geo_results_handler))
        .route("/v2/georesults/:region", get(get_geo_results_handler))
        .route("/api/status", get(status_handler))
        .with_state(state)
}

/// Radius query parameters shared by both variants
#[derive(Debug, Deserialize)]
pub struct RadiusQueryParams {
    /// Center longitude
    pub lng: f64,
    /// Center latitude
    pub lat: f64,
    /// Radius in kilometers; each variant applies its own default
    #[serde(rename = "withinKm")]
    pub within_km: Option<f64>,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "INVALID_COORDINATES" | "INVALID_POINT" => StatusCode::BAD_REQUEST,
            "STORE_UNAVAILABLE" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::InvalidPoint(_) => "INVALID_POINT",
            Error::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Bare-list radius query (default 20 km)
///
/// GET /georesults/:region
async fn find_geo_results_handler(
    State(state): State<Arc<AppState>>,
    Path(region): Path<String>,
    Query(params): Query<RadiusQueryParams>,
) -> Result<Json<Vec<GeoResult>>, ApiError> {
    let results = state
        .service
        .find_within_radius(&region, params.lng, params.lat, params.within_km)
        .map_err(ApiError::from)?;

    Ok(Json(results))
}

/// Wrapped radius query (default 10 km)
///
/// GET /v2/georesults/:region
async fn get_geo_results_handler(
    State(state): State<Arc<AppState>>,
    Path(region): Path<String>,
    Query(params): Query<RadiusQueryParams>,
) -> Result<Json<GeoResultsResponse>, ApiError> {
    let response = state
        .service
        .get_within_radius(&region, params.lng, params.lat, params.within_km)
        .map_err(ApiError::from)?;

    Ok(Json(response))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Region keys loaded at startup
    pub regions: Vec<String>,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        regions: state.regions.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::service::GeoQueryService;
    use crate::store::memory::MemoryGeoStore;
    use crate::store::{GeoPoint, GeoStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        let store = MemoryGeoStore::new();
        store
            .insert(
                "CA",
                &[
                    GeoPoint::new("Ferry Building", -122.3937, 37.7955),
                    GeoPoint::new("Oakland", -122.2712, 37.8044),
                    GeoPoint::new("San Jose", -121.8863, 37.3382),
                ],
            )
            .unwrap();
        let service = GeoQueryService::new(Arc::new(store));
        Arc::new(AppState::new(
            Config::default(),
            service,
            vec!["CA".to_string()],
        ))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::body::Bytes) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    #[tokio::test]
    async fn test_find_endpoint_bare_list() {
        let app = create_router(create_test_state());

        let (status, body) =
            get(app, "/georesults/CA?lng=-122.4194&lat=37.7749&withinKm=100").await;

        assert_eq!(status, StatusCode::OK);
        let results: Vec<GeoResult> = serde_json::from_slice(&body).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ferry Building", "Oakland", "San Jose"]);
        for pair in results.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[tokio::test]
    async fn test_find_endpoint_default_radius() {
        let app = create_router(create_test_state());

        // No withinKm: default 20 km excludes San Jose
        let (status, body) = get(app, "/georesults/CA?lng=-122.4194&lat=37.7749").await;

        assert_eq!(status, StatusCode::OK);
        let results: Vec<GeoResult> = serde_json::from_slice(&body).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ferry Building", "Oakland"]);
    }

    #[tokio::test]
    async fn test_get_endpoint_wrapped_default_radius() {
        let app = create_router(create_test_state());

        // No withinKm: default 10 km only reaches the Ferry Building
        let (status, body) = get(app, "/v2/georesults/CA?lng=-122.4194&lat=37.7749").await;

        assert_eq!(status, StatusCode::OK);
        let wrapped: GeoResultsResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(wrapped.results.len(), 1);
        assert_eq!(wrapped.results[0].name, "Ferry Building");
    }

    #[tokio::test]
    async fn test_unknown_region_is_empty_list() {
        let app = create_router(create_test_state());

        let (status, body) = get(app, "/georesults/ZZ?lng=-122.4194&lat=37.7749").await;

        assert_eq!(status, StatusCode::OK);
        let results: Vec<GeoResult> = serde_json::from_slice(&body).unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_latitude_rejected() {
        let app = create_router(create_test_state());

        let (status, body) = get(app, "/georesults/CA?lng=-122.4194&lat=91.0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "INVALID_COORDINATES");
    }

    #[tokio::test]
    async fn test_missing_params_rejected() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/georesults/CA")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());

        let (status, body) = get(app, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        let status_body: StatusResponse = serde_json::from_slice(&body).unwrap();
        assert!(status_body.running);
        assert_eq!(status_body.regions, vec!["CA".to_string()]);
    }
}
