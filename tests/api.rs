//! Router-level tests that run without a live database: the pool is
//! constructed lazily, so anything short of an actual query works.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use moodtrack_api::auth::jwt;
use moodtrack_api::auth::rate_limit::RateLimitState;
use moodtrack_api::config::Config;
use moodtrack_api::services::sheets::SheetsClient;
use moodtrack_api::{router, AppState};

fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/unused".into(),
        host: "127.0.0.1".into(),
        port: 0,
        frontend_url: "http://localhost:3000".into(),
        jwt_secret: "integration-test-secret".into(),
        jwt_access_ttl_secs: 900,
        jwt_refresh_ttl_secs: 604800,
        sheets_api_base: "https://sheets.googleapis.com".into(),
        sheets_api_key: String::new(),
    }
}

fn test_app() -> (axum::Router, Arc<Config>) {
    let config = Arc::new(test_config());
    let db = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("lazy pool");
    let state = AppState {
        db,
        config: config.clone(),
        sheets: SheetsClient::new(&config),
        rate_limiter: RateLimitState::new(),
    };
    (router(state), config)
}

#[tokio::test]
async fn health_check_is_public() {
    let (app, _) = test_app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["service"], "moodtrack-api");
}

#[tokio::test]
async fn protected_route_requires_bearer_token() {
    let (app, _) = test_app();

    let response = app
        .oneshot(Request::get("/api/daily").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_token_is_rejected() {
    let (app, _) = test_app();

    let response = app
        .oneshot(
            Request::get("/api/me")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], 401);
}

#[tokio::test]
async fn refresh_token_cannot_be_used_as_access_token() {
    let (app, config) = test_app();

    let refresh = jwt::create_refresh_token(Uuid::new_v4(), "a@b.com", &config).unwrap();
    let response = app
        .oneshot(
            Request::get("/api/me")
                .header(header::AUTHORIZATION, format!("Bearer {refresh}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_scheme_prefix_is_rejected() {
    let (app, config) = test_app();

    let token = jwt::create_access_token(Uuid::new_v4(), "a@b.com", &config).unwrap();
    // Valid token, but not presented as a Bearer credential
    let response = app
        .oneshot(
            Request::get("/api/me")
                .header(header::AUTHORIZATION, token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
