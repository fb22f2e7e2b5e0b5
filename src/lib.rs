//! # Action Tracker
//!
//! A small HTTP service that records user actions (login, purchase, ...) and
//! enriches them with geolocation data resolved from the caller-supplied IP
//! address, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Request validation, continent resolution,
//!   and timezone-local timestamp computation
//! - **Application Layer** ([`application`]) - The track pipeline orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - External geolocation
//!   provider integration
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Request Flow
//!
//! ```text
//! POST /track/{action}
//!   -> validate action name + request body (all errors accumulated)
//!   -> look up the IP against the external geolocation provider
//!   -> compute the action timestamp in the resolved timezone
//!   -> respond with {action, info, location, action_date}
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; sensible defaults exist for everything
//! export LISTEN="0.0.0.0:3000"
//! export GEO_API_BASE_URL="http://ip-api.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::TrackService;
    pub use crate::domain::validation::ValidationError;
    pub use crate::error::AppError;
    pub use crate::infrastructure::geoip::{GeoLookup, GeoLookupResult, LocationInfo};
    pub use crate::state::AppState;
}
