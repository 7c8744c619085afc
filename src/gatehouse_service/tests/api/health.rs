use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::Value;

use crate::helpers::{TEST_ORIGIN, TestApp};

#[tokio::test]
async fn health_reports_ok_with_a_timestamp() {
    let app = TestApp::new().await;

    let response = app.get_health().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let timestamp = body["timestamp"].as_str().expect("Missing timestamp");
    assert!(timestamp.ends_with('Z'));
    assert!(timestamp.parse::<DateTime<Utc>>().is_ok());
}

#[tokio::test]
async fn test_route_acknowledges() {
    let app = TestApp::new().await;

    let response = app.get_test().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Server is running");
}

#[tokio::test]
async fn health_ignores_body_and_headers() {
    let app = TestApp::new().await;

    for path in ["health", "test"] {
        let response = app
            .http_client
            .get(format!("{}/{path}", app.address))
            .header("content-type", "application/json")
            .header("authorization", "Bearer garbage")
            .body("{not json")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 200, "Failed for /{path}");
    }
}

#[tokio::test]
async fn allowed_origin_gets_credentialed_cors_headers() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .request(Method::OPTIONS, format!("{}/login", app.address))
        .header("origin", TEST_ORIGIN)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(TEST_ORIGIN)
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn other_origins_are_never_echoed() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/health", app.address))
        .header("origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    // The configured origin is echoed regardless, so the browser rejects the caller
    let allowed = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_ne!(allowed, Some("https://evil.example.com"));
}
