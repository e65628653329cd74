//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application router through the same [`build_app_router`]
//! the production binary uses, so tests exercise the full middleware
//! stack. Requests are driven with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use shipdesk_api::config::ServerConfig;
use shipdesk_api::router::build_app_router;
use shipdesk_api::state::AppState;
use shipdesk_core::delegate::ShippingMethodService;
use shipdesk_db::service::PgShippingMethodService;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        base_url: "https://shop.example.com".to_string(),
        base_uri: "/".to_string(),
        shop_id: 1,
        platform_version: "1.7.8".to_string(),
        override_file: None,
    }
}

/// Build the application with the production Postgres-backed delegate.
pub fn build_test_app(pool: PgPool) -> Router {
    let shipping = Arc::new(PgShippingMethodService::new(pool.clone()));
    build_test_app_with_service(pool, shipping)
}

/// Build the application with an injected delegate, for failure-path tests.
pub fn build_test_app_with_service(
    pool: PgPool,
    shipping: Arc<dyn ShippingMethodService>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        shipping,
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
