//! HTTP server initialization and runtime setup.
//!
//! Wires the geolocation client, the track service, and the Axum server
//! lifecycle together from a validated [`Config`].

use crate::application::services::TrackService;
use crate::config::Config;
use crate::infrastructure::geoip::IpApiClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The outbound HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let geo = IpApiClient::new(
        config.geo_api_base_url.clone(),
        Duration::from_millis(config.geo_api_timeout_ms),
    )?;
    tracing::info!("Geolocation client ready ({})", config.geo_api_base_url);

    let track_service = Arc::new(TrackService::new(
        Arc::new(geo),
        config.accepted_actions.clone(),
        config.body_required_keys.clone(),
    ));

    let state = AppState::new(track_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
