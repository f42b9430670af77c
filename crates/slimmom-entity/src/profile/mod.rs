//! User nutrition profile entity and the daily-calorie derivation.

pub mod calories;
pub mod model;

pub use calories::daily_calorie_target;
pub use model::{Profile, UpsertProfile, BLOOD_TYPE_RANGE};
