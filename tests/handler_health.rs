mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use std::sync::Arc;

use common::{InMemoryCompanyRepository, InstantPlatform, TestStateBuilder};
use startup_dose::routes::router;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = TestServer::new(router(common::create_test_state())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_reports_capabilities() {
    let state = TestStateBuilder {
        platform: Some(Arc::new(InstantPlatform::default())),
        ..Default::default()
    }
    .build();
    let server = TestServer::new(router(state)).unwrap();

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert_eq!(json["capabilities"]["screenshots"], false);
    assert_eq!(json["capabilities"]["media_publishing"], true);
}

#[tokio::test]
async fn test_health_degraded_when_database_unavailable() {
    let state = TestStateBuilder {
        repository: Arc::new(InMemoryCompanyRepository::unavailable()),
        ..Default::default()
    }
    .build();
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(!json.to_string().contains("connection refused"));
}
