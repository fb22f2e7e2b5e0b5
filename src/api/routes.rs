//! API route configuration.

use crate::api::handlers::track_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Tracking routes.
///
/// # Endpoints
///
/// - `POST /track/{action}` - Record a user action with geolocation enrichment
pub fn track_routes() -> Router<AppState> {
    Router::new().route("/track/{action}", post(track_handler))
}
