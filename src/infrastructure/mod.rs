//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for outbound calls.
//!
//! # Modules
//!
//! - [`geoip`] - External IP geolocation provider integration

pub mod geoip;
