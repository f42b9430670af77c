//! # slimmom-service
//!
//! Business logic for the Slim Mom backend: account lifecycle, nutrition
//! profiles, the food catalog, and the per-user food diary. Services sit
//! between the HTTP handlers and the repositories; all domain rules live
//! here.

pub mod account;
pub mod catalog;
pub mod diary;
pub mod profile;

pub use account::AccountService;
pub use catalog::CatalogService;
pub use diary::{DiaryRecordParams, DiaryService};
pub use profile::{ProfileParams, ProfileService, ProfileView};
