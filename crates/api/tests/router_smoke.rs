//! Router-level smoke tests exercising the full middleware stack without a
//! live database.
//!
//! The pool is created lazily and none of the routes under test run a
//! query, so these pass with no Postgres available.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use bobbi_api::auth::jwt::JwtConfig;
use bobbi_api::config::ServerConfig;
use bobbi_api::router::build_app_router;
use bobbi_api::state::AppState;

fn test_app() -> axum::Router {
    let config = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".into()],
        request_timeout_secs: 5,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".into(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    };

    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/bobbi_test_unused")
        .expect("lazy pool creation should not connect");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = body_json(response).await;
    assert_eq!(value["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn protected_route_with_garbage_token_is_unauthorized() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/projects")
                .header("authorization", "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_authorization_scheme_is_unauthorized() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/projects")
                .header("authorization", "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
