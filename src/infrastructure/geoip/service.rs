//! Geolocation lookup trait and result types.

use async_trait::async_trait;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Location data normalized from a successful provider reply.
///
/// All fields are optional because the provider may omit any of them; a
/// missing field serializes as `null` so the response shape stays stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub country_iso2: Option<String>,
    pub continent: Option<String>,
}

/// Uniform result of a single geolocation lookup.
///
/// Constructed fresh per outbound call; never cached or persisted. The
/// status follows the provider mapping: 200 with a normalized location
/// payload on success, 400 with the provider's raw reply on semantic
/// failure, 504 on timeout, 500 on any other transport or parse failure.
#[derive(Debug, Clone)]
pub struct GeoLookupResult {
    pub status: StatusCode,
    pub payload: Value,
    pub timezone: Option<String>,
}

impl GeoLookupResult {
    /// Successful lookup carrying a normalized location payload.
    pub fn success(location: &LocationInfo, timezone: Option<String>) -> Self {
        Self {
            status: StatusCode::OK,
            payload: serde_json::to_value(location).unwrap_or(Value::Null),
            timezone,
        }
    }

    /// The provider did not answer within the configured timeout.
    pub fn timeout() -> Self {
        Self {
            status: StatusCode::GATEWAY_TIMEOUT,
            payload: json!({"reason": "connection to external api timeout"}),
            timezone: None,
        }
    }

    /// Any other transport or parse failure.
    pub fn transport_failure(detail: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            payload: json!({"reason": format!("issues with external api - {detail}")}),
            timezone: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Trait for resolving an IP address to geolocation data.
///
/// This is the seam between the track pipeline and the external provider:
/// tests substitute a fake returning canned success/failure/timeout results
/// so no test depends on live network access.
///
/// # Implementations
///
/// - [`crate::infrastructure::geoip::IpApiClient`] - Production client for
///   an ip-api.com style provider
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// Performs exactly one lookup attempt for the given IP.
    ///
    /// Never errors: every outcome, including transport failure, is mapped
    /// into a [`GeoLookupResult`].
    async fn lookup(&self, ip: &str) -> GeoLookupResult;
}
