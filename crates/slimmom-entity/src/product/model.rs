//! Product entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A food product in the catalog.
///
/// `blood_type_excluded` has five slots; slot 0 is unused so that slot `n`
/// answers "is this product not recommended for blood type `n`". The layout
/// mirrors the seed catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Product title.
    pub title: String,
    /// Category name.
    pub category: String,
    /// Reference portion weight in grams.
    pub weight: i32,
    /// Calories per reference portion.
    pub calories: i32,
    /// Per-blood-type exclusion flags (slot 0 unused).
    pub blood_type_excluded: Vec<bool>,
}

impl Product {
    /// Whether this product is flagged as not recommended for the given
    /// blood type (1..4). Out-of-range values are never excluded.
    pub fn excluded_for(&self, blood_type: i16) -> bool {
        usize::try_from(blood_type)
            .ok()
            .and_then(|n| self.blood_type_excluded.get(n).copied())
            .unwrap_or(false)
    }
}

/// Search filter over the product catalog.
///
/// Every field is optional; absent fields do not constrain the query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Exact portion weight match.
    pub weight: Option<i32>,
    /// Minimum calories (inclusive).
    pub min_calories: Option<i32>,
    /// Maximum calories (inclusive).
    pub max_calories: Option<i32>,
    /// Exclude products flagged for this blood type.
    pub blood_type: Option<i16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(flags: Vec<bool>) -> Product {
        Product {
            id: Uuid::new_v4(),
            title: "Buckwheat".to_string(),
            category: "cereals".to_string(),
            weight: 100,
            calories: 313,
            blood_type_excluded: flags,
        }
    }

    #[test]
    fn test_excluded_for_uses_slot_n() {
        let p = product(vec![false, true, false, false, true]);
        assert!(p.excluded_for(1));
        assert!(!p.excluded_for(2));
        assert!(!p.excluded_for(3));
        assert!(p.excluded_for(4));
    }

    #[test]
    fn test_excluded_for_out_of_range() {
        let p = product(vec![false, true, true, true, true]);
        assert!(!p.excluded_for(0));
        assert!(!p.excluded_for(5));
        assert!(!p.excluded_for(-1));
    }
}
