//! External IP geolocation provider integration.
//!
//! # Modules
//!
//! - [`service`] - The [`GeoLookup`] trait and its uniform lookup result
//! - [`ip_api`] - Production client for an ip-api.com style provider

pub mod ip_api;
pub mod service;

pub use ip_api::IpApiClient;
pub use service::{GeoLookup, GeoLookupResult, LocationInfo};
