//! Production geolocation client for an ip-api.com style provider.

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::Value;
use std::time::Duration;

use super::service::{GeoLookup, GeoLookupResult, LocationInfo};
use crate::domain::continent::continent_for;

/// Client for `GET {base}/json/{ip}` lookups.
///
/// Issues exactly one attempt per lookup with a bounded timeout; no retry,
/// no backoff, no caching. The provider answers HTTP 200 even for
/// semantically invalid input (e.g. a malformed IP), so the reply's embedded
/// `status` field decides success, not the transport status code.
pub struct IpApiClient {
    http: reqwest::Client,
    base_url: String,
    /// Optional `?fields=a,b,c` projection forwarded to the provider.
    fields: Option<Vec<String>>,
}

impl IpApiClient {
    /// Creates a client with the given provider base URL and lookup timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            fields: None,
        })
    }

    /// Restricts provider replies to the given fields.
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    fn lookup_url(&self, ip: &str) -> String {
        let mut url = format!("{}/json/{ip}", self.base_url.trim_end_matches('/'));
        if let Some(fields) = &self.fields {
            url.push_str("?fields=");
            url.push_str(&fields.join(","));
        }
        url
    }
}

#[async_trait]
impl GeoLookup for IpApiClient {
    async fn lookup(&self, ip: &str) -> GeoLookupResult {
        let url = self.lookup_url(ip);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!(ip, "geolocation lookup timed out");
                return GeoLookupResult::timeout();
            }
            Err(e) => {
                tracing::warn!(ip, error = %e, "geolocation lookup failed");
                return GeoLookupResult::transport_failure(&e.to_string());
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(ip, %status, "geolocation provider returned non-200");
            return GeoLookupResult {
                status,
                payload: Value::Object(Default::default()),
                timezone: None,
            };
        }

        match response.json::<Value>().await {
            Ok(reply) => normalize_reply(reply),
            Err(e) if e.is_timeout() => GeoLookupResult::timeout(),
            Err(e) => GeoLookupResult::transport_failure(&e.to_string()),
        }
    }
}

/// Normalizes a transport-successful provider reply into a lookup result.
///
/// A reply whose embedded `status` is `"success"` becomes a 200 result with
/// the provider fields renamed into a [`LocationInfo`] mapping and the
/// continent resolved locally. Any other reply (e.g. `status: "fail"` for a
/// malformed IP) becomes a 400 result carrying the raw reply, with the
/// provider's timezone passed through when present.
fn normalize_reply(reply: Value) -> GeoLookupResult {
    let timezone = reply
        .get("timezone")
        .and_then(Value::as_str)
        .map(ToString::to_string);

    if reply.get("status").and_then(Value::as_str) != Some("success") {
        return GeoLookupResult {
            status: StatusCode::BAD_REQUEST,
            payload: reply,
            timezone,
        };
    }

    let str_field = |name: &str| {
        reply
            .get(name)
            .and_then(Value::as_str)
            .map(ToString::to_string)
    };

    let country_iso2 = str_field("countryCode");
    let location = LocationInfo {
        longitude: reply.get("lon").and_then(Value::as_f64),
        latitude: reply.get("lat").and_then(Value::as_f64),
        city: str_field("city"),
        region: str_field("regionName"),
        country: str_field("country"),
        continent: continent_for(country_iso2.as_deref()).map(ToString::to_string),
        country_iso2,
    };

    GeoLookupResult::success(&location, timezone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_success_reply() {
        let reply = json!({
            "status": "success",
            "country": "Canada",
            "countryCode": "CA",
            "regionName": "Quebec",
            "city": "Montreal",
            "lat": 45.5019,
            "lon": -73.5674,
            "timezone": "America/Toronto",
            "query": "24.48.0.1"
        });

        let result = normalize_reply(reply);

        assert_eq!(result.status, StatusCode::OK);
        assert_eq!(result.timezone.as_deref(), Some("America/Toronto"));
        assert_eq!(
            result.payload,
            json!({
                "longitude": -73.5674,
                "latitude": 45.5019,
                "city": "Montreal",
                "region": "Quebec",
                "country": "Canada",
                "country_iso2": "CA",
                "continent": "North America"
            })
        );
    }

    #[test]
    fn test_normalize_success_with_missing_fields() {
        let reply = json!({"status": "success", "countryCode": "XX"});

        let result = normalize_reply(reply);

        assert_eq!(result.status, StatusCode::OK);
        assert!(result.timezone.is_none());
        // Unknown country code degrades the continent field, nothing else.
        assert_eq!(result.payload["continent"], Value::Null);
        assert_eq!(result.payload["country_iso2"], "XX");
        assert_eq!(result.payload["city"], Value::Null);
    }

    #[test]
    fn test_normalize_embedded_failure_keeps_raw_reply() {
        let reply = json!({
            "status": "fail",
            "message": "invalid query",
            "query": "24.48.0."
        });

        let result = normalize_reply(reply.clone());

        assert_eq!(result.status, StatusCode::BAD_REQUEST);
        assert_eq!(result.payload, reply);
        assert!(result.timezone.is_none());
    }

    #[test]
    fn test_normalize_failure_passes_timezone_through() {
        let reply = json!({"status": "fail", "timezone": "Europe/Paris"});

        let result = normalize_reply(reply);

        assert_eq!(result.status, StatusCode::BAD_REQUEST);
        assert_eq!(result.timezone.as_deref(), Some("Europe/Paris"));
    }

    #[test]
    fn test_lookup_url_with_fields() {
        let client = IpApiClient::new("http://ip-api.com/", Duration::from_secs(1))
            .unwrap()
            .with_fields(vec!["status".to_string(), "city".to_string()]);

        assert_eq!(
            client.lookup_url("24.48.0.1"),
            "http://ip-api.com/json/24.48.0.1?fields=status,city"
        );
    }

    #[test]
    fn test_lookup_url_without_fields() {
        let client = IpApiClient::new("http://ip-api.com", Duration::from_secs(1)).unwrap();
        assert_eq!(client.lookup_url("24.48.0.1"), "http://ip-api.com/json/24.48.0.1");
    }
}
