//! Action tracking pipeline.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::api::dto::track::{TrackInfo, TrackResponse};
use crate::domain::action_date::action_date;
use crate::domain::validation::{ValidationError, validate_action, validate_body};
use crate::error::AppError;
use crate::infrastructure::geoip::GeoLookup;

/// Service orchestrating the track pipeline:
/// validate -> lookup -> enrich -> compose.
///
/// Holds only immutable configuration and the lookup client, so a single
/// instance is shared across all requests. Each invocation is a single
/// linear pass; no state survives the request.
pub struct TrackService {
    geo: Arc<dyn GeoLookup>,
    accepted_actions: HashSet<String>,
    body_required_keys: Vec<String>,
}

impl TrackService {
    /// Creates a new track service.
    pub fn new(
        geo: Arc<dyn GeoLookup>,
        accepted_actions: HashSet<String>,
        body_required_keys: Vec<String>,
    ) -> Self {
        Self {
            geo,
            accepted_actions,
            body_required_keys,
        }
    }

    /// Runs the full pipeline for one tracked action.
    ///
    /// Action-name and body validation both run before any short-circuit;
    /// every defect is accumulated into one list and returned as a single
    /// 400. A passing request triggers exactly one geolocation lookup whose
    /// non-200 outcome propagates verbatim.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] with all accumulated validation errors
    /// - [`AppError::MissingIp`] when the body carries no usable `ip` value
    ///   (only reachable when `ip` is not a configured required key)
    /// - [`AppError::Lookup`] with the provider-mapped status and payload
    pub async fn track(
        &self,
        action: String,
        body: Map<String, Value>,
    ) -> Result<TrackResponse, AppError> {
        let mut errors: Vec<ValidationError> = Vec::new();
        if let Some(error) = validate_action(&action, &self.accepted_actions) {
            errors.push(error);
        }
        errors.extend(validate_body(&body, &self.body_required_keys));

        if !errors.is_empty() {
            tracing::debug!(action, count = errors.len(), "request rejected by validation");
            return Err(AppError::validation(errors));
        }

        let Some(ip) = body.get("ip").and_then(Value::as_str) else {
            return Err(AppError::MissingIp);
        };

        let lookup = self.geo.lookup(ip).await;
        if !lookup.is_success() {
            return Err(AppError::lookup(lookup.status, lookup.payload));
        }

        let action_date = action_date(lookup.timezone.as_deref());
        let info = TrackInfo {
            ip: ip.to_string(),
            resolution: body.get("resolution").cloned().unwrap_or(Value::Null),
        };

        tracing::info!(action, ip, "action tracked");
        Ok(TrackResponse::compose(action, info, lookup.payload, action_date))
    }
}
