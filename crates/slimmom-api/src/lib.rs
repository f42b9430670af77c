//! # slimmom-api
//!
//! HTTP layer for the Slim Mom backend: the Axum router, shared
//! application state, request/response DTOs (camelCase wire format),
//! the `AuthUser` extractor, and the single `ApiError` to HTTP status
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
