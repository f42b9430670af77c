//! Route definitions for the Slim Mom HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(product_routes())
        .merge(diary_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: register, login, current, logout, verify, refresh.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/current", get(handlers::auth::current))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/verify/{token}", get(handlers::auth::verify_email))
        .route("/auth/verify", post(handlers::auth::resend_verification))
        .route("/auth/refresh", post(handlers::auth::refresh))
}

/// Profile endpoints (bearer).
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile/update", put(handlers::profile::update))
        .route("/profile/fetch", get(handlers::profile::fetch))
}

/// Public catalog endpoints.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products/blood-type/{blood_type}",
            get(handlers::product::blood_type_categories),
        )
        .route("/products/search", get(handlers::product::search))
}

/// Diary endpoints (bearer).
fn diary_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/diary",
            post(handlers::diary::add).get(handlers::diary::list),
        )
        .route("/diary/{id}", delete(handlers::diary::delete))
}

/// Health endpoint, no auth.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
