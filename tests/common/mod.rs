#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::StatusCode;
use mockall::mock;
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

use action_tracker::application::services::TrackService;
use action_tracker::infrastructure::geoip::{GeoLookup, GeoLookupResult, LocationInfo};
use action_tracker::state::AppState;

mock! {
    pub Geo {}

    #[async_trait]
    impl GeoLookup for Geo {
        async fn lookup(&self, ip: &str) -> GeoLookupResult;
    }
}

/// Canned location matching what the provider returns for 24.48.0.1.
pub fn montreal_location() -> LocationInfo {
    LocationInfo {
        longitude: Some(-73.5674),
        latitude: Some(45.5019),
        city: Some("Montreal".to_string()),
        region: Some("Quebec".to_string()),
        country: Some("Canada".to_string()),
        country_iso2: Some("CA".to_string()),
        continent: Some("North America".to_string()),
    }
}

pub fn success_result() -> GeoLookupResult {
    GeoLookupResult::success(&montreal_location(), Some("America/Toronto".to_string()))
}

/// Semantic failure the provider answers (over HTTP 200) for a malformed IP.
pub fn invalid_ip_result(ip: &str) -> GeoLookupResult {
    GeoLookupResult {
        status: StatusCode::BAD_REQUEST,
        payload: json!({"status": "fail", "message": "invalid query", "query": ip}),
        timezone: None,
    }
}

pub fn create_test_state(geo: Arc<dyn GeoLookup>) -> AppState {
    create_test_state_with_keys(geo, vec!["ip".to_string(), "resolution".to_string()])
}

pub fn create_test_state_with_keys(
    geo: Arc<dyn GeoLookup>,
    body_required_keys: Vec<String>,
) -> AppState {
    let accepted_actions: HashSet<String> = ["login", "logout", "buy", "review", "shopping-cart"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let track_service = Arc::new(TrackService::new(geo, accepted_actions, body_required_keys));
    AppState::new(track_service)
}
