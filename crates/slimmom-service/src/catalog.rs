//! Read-only food catalog queries.

use slimmom_core::error::AppError;
use slimmom_core::result::AppResult;
use slimmom_database::repositories::ProductRepository;
use slimmom_entity::product::{Product, ProductFilter};
use slimmom_entity::profile::BLOOD_TYPE_RANGE;

/// Serves product catalog lookups.
#[derive(Debug, Clone)]
pub struct CatalogService {
    products: ProductRepository,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(products: ProductRepository) -> Self {
        Self { products }
    }

    /// Categories of products flagged as not recommended for a blood type.
    ///
    /// An empty list is a valid answer: it means nothing in the catalog is
    /// flagged for that type.
    pub async fn categories_for_blood_type(&self, blood_type: i16) -> AppResult<Vec<String>> {
        if !BLOOD_TYPE_RANGE.contains(&blood_type) {
            return Err(AppError::validation("Blood type must be between 1 and 4"));
        }
        self.products.find_excluded_categories(blood_type).await
    }

    /// Searches the catalog with the given filter combination.
    ///
    /// A query that matches nothing is reported as not-found rather than
    /// returning an empty list.
    pub async fn search(&self, filter: &ProductFilter) -> AppResult<Vec<Product>> {
        if let Some(blood_type) = filter.blood_type {
            if !BLOOD_TYPE_RANGE.contains(&blood_type) {
                return Err(AppError::validation("Blood type must be between 1 and 4"));
            }
        }

        let products = self.products.search(filter).await?;
        if products.is_empty() {
            return Err(AppError::not_found("No products found for this query"));
        }
        Ok(products)
    }
}
