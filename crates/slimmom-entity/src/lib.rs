//! # slimmom-entity
//!
//! Domain entity models for the Slim Mom backend. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod diary;
pub mod product;
pub mod profile;
pub mod session;
pub mod user;
