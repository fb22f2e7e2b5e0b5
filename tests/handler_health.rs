mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;

use action_tracker::api::handlers::health_handler;
use common::MockGeo;

#[tokio::test]
async fn test_health_endpoint() {
    let state = common::create_test_state(Arc::new(MockGeo::new()));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
