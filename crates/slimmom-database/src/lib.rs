//! # slimmom-database
//!
//! Persistence layer for the Slim Mom backend: PostgreSQL connection pool
//! management, embedded migrations, and one repository per entity. All
//! repositories return [`slimmom_core::AppResult`] and never leak raw
//! `sqlx::Error` values upward.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
