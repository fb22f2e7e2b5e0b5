//! DTOs for the track endpoint.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;

/// Echo of the request fields the caller identified themselves with.
#[derive(Debug, Serialize)]
pub struct TrackInfo {
    pub ip: String,
    /// Passed through as-is; the client may send any JSON value here.
    pub resolution: Value,
}

/// Successful track response.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub action: String,
    pub info: TrackInfo,
    /// Normalized location mapping produced by the geolocation lookup.
    pub location: Value,
    /// Current instant in the timezone the lookup resolved, or `null` when
    /// the timezone was absent or unknown.
    pub action_date: Option<DateTime<Tz>>,
}

impl TrackResponse {
    /// Assembles the final response. Pure composition, no failure modes.
    pub fn compose(
        action: String,
        info: TrackInfo,
        location: Value,
        action_date: Option<DateTime<Tz>>,
    ) -> Self {
        Self {
            action,
            info,
            location,
            action_date,
        }
    }
}
