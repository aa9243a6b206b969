use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod period;
pub mod repo;
pub mod scoring;
pub mod series;
pub mod services;

use auth::rate_limit::RateLimitState;
use config::Config;
use services::sheets::SheetsClient;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
    pub sheets: SheetsClient,
    pub rate_limiter: RateLimitState,
}

pub fn router(state: AppState) -> Router {
    // Auth routes with rate limiting
    let auth_routes = Router::new()
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/refresh", post(handlers::auth::refresh))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::rate_limit::rate_limit_auth,
        ));

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(auth_routes);

    let protected_routes = Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route("/api/auth/logout", post(handlers::auth::logout))
        // Profile
        .route("/api/profile", get(handlers::profile::get_profile))
        .route("/api/profile", put(handlers::profile::update_profile))
        // Period responses
        .route("/api/daily", get(handlers::daily::get_daily))
        .route("/api/daily", put(handlers::daily::save_daily))
        .route("/api/daily/series", get(handlers::daily::get_series))
        .route("/api/weekly", get(handlers::weekly::get_weekly))
        .route("/api/weekly", put(handlers::weekly::save_weekly))
        .route("/api/monthly", get(handlers::monthly::get_monthly))
        .route("/api/monthly", put(handlers::monthly::save_monthly))
        .route("/api/quarterly", get(handlers::quarterly::get_quarterly))
        .route("/api/quarterly", put(handlers::quarterly::save_quarterly))
        // Spreadsheet export
        .route("/api/sheets", get(handlers::sheets::list_sheets))
        .route("/api/create-sheet", post(handlers::sheets::create_sheet))
        .route("/api/delete-sheet", post(handlers::sheets::delete_sheet))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = vec![state
            .config
            .frontend_url
            .parse::<axum::http::HeaderValue>()
            .expect("FRONTEND_URL must be a valid origin")];
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
