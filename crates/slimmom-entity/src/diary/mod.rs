//! Food diary entity.

pub mod model;

pub use model::{CreateDiaryRecord, DiaryRecord};
