//! Handler for the action tracking endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Map, Value};

use crate::api::dto::track::TrackResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Records a user action and enriches it with geolocation data.
///
/// # Endpoint
///
/// `POST /track/{action}`
///
/// # Request Body
///
/// ```json
/// {
///   "ip": "24.48.0.1",
///   "resolution": "1920x1080"
/// }
/// ```
///
/// Additional body fields are accepted and ignored. The required keys are
/// configurable (`BODY_REQUIRED_KEYS`); `ip` must be a string.
///
/// # Response
///
/// ```json
/// {
///   "action": "login",
///   "info": { "ip": "24.48.0.1", "resolution": "1920x1080" },
///   "location": {
///     "longitude": -73.5674,
///     "latitude": 45.5019,
///     "city": "Montreal",
///     "region": "Quebec",
///     "country": "Canada",
///     "country_iso2": "CA",
///     "continent": "North America"
///   },
///   "action_date": "2026-08-27T09:15:04.123456-04:00"
/// }
/// ```
///
/// # Errors
///
/// - **400** with `{"errors": [...]}` listing every validation defect
///   (invalid action name, missing keys, wrong `ip` type), or carrying the
///   provider's raw reply when it rejected the IP itself
/// - **504 / 500** when the provider timed out or failed at transport level;
///   the lookup is attempted exactly once
pub async fn track_handler(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Json<TrackResponse>, AppError> {
    let response = state.track_service.track(action, body).await?;
    Ok(Json(response))
}
