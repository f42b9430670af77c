//! Food product catalog entity.

pub mod model;

pub use model::{Product, ProductFilter};
