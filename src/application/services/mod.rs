//! Business logic services for the application layer.

pub mod track_service;

pub use track_service::TrackService;
