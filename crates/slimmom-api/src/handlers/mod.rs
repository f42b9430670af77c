//! HTTP handlers, one module per route group.

pub mod auth;
pub mod diary;
pub mod health;
pub mod product;
pub mod profile;
