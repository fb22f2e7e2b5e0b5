use std::sync::Arc;

use crate::application::services::TrackService;

/// Shared application state injected into all handlers.
///
/// Everything in here is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub track_service: Arc<TrackService>,
}

impl AppState {
    pub fn new(track_service: Arc<TrackService>) -> Self {
        Self { track_service }
    }
}
