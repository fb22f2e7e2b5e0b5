//! HTTP request handlers for API endpoints.

pub mod health;
pub mod track;

pub use health::health_handler;
pub use track::track_handler;
