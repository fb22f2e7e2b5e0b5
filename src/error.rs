//! Application error type and HTTP error responses.
//!
//! Every failure path produces a structured `{"errors": [...]}` body; nothing
//! in the request pipeline is fatal to the process. Lookup failures propagate
//! the provider-mapped status code verbatim.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Error envelope returned on every failure path.
#[derive(Serialize)]
struct ErrorBody {
    errors: Vec<Value>,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The action name or the request body failed validation. Carries the
    /// full accumulated error list, never just the first failure.
    #[error("request validation failed")]
    Validation(Vec<ValidationError>),

    /// The body carried no usable `ip` value. Only reachable when the
    /// required-key set is reconfigured without `ip`.
    #[error("ip value was not provided")]
    MissingIp,

    /// The geolocation lookup did not succeed. Carries the provider-mapped
    /// status and the payload to surface to the caller.
    #[error("geolocation lookup failed with status {status}")]
    Lookup { status: StatusCode, payload: Value },
}

impl AppError {
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }

    pub fn lookup(status: StatusCode, payload: Value) -> Self {
        Self::Lookup { status, payload }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                errors
                    .iter()
                    .map(|e| serde_json::to_value(e).unwrap_or(Value::Null))
                    .collect(),
            ),
            AppError::MissingIp => (
                StatusCode::BAD_REQUEST,
                vec![json!("ip value was not provided")],
            ),
            AppError::Lookup { status, payload } => (status, vec![payload]),
        };

        (status, Json(ErrorBody { errors })).into_response()
    }
}
