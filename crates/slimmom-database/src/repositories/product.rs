//! Product catalog repository implementation.

use sqlx::{PgPool, QueryBuilder};

use slimmom_core::error::{AppError, ErrorKind};
use slimmom_core::result::AppResult;
use slimmom_entity::product::{Product, ProductFilter};

/// Repository for read-only product catalog queries.
///
/// The `blood_type_excluded` column is a five-slot `BOOLEAN[]`; SQL array
/// indexing is 1-based, so domain slot `n` lives at SQL index `n + 1`.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Distinct categories of products flagged as not recommended for the
    /// given blood type.
    pub async fn find_excluded_categories(&self, blood_type: i16) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM products \
             WHERE blood_type_excluded[$1::int + 1] = TRUE \
             ORDER BY category",
        )
        .bind(i32::from(blood_type))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query excluded categories", e)
        })
    }

    /// Search the catalog with an optional combination of filters.
    pub async fn search(&self, filter: &ProductFilter) -> AppResult<Vec<Product>> {
        let mut builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("SELECT * FROM products WHERE TRUE");

        if let Some(title) = &filter.title {
            builder.push(" AND title ILIKE ");
            builder.push_bind(format!("%{}%", escape_like(title)));
            builder.push(" ESCAPE '\\'");
        }
        if let Some(category) = &filter.category {
            builder.push(" AND category = ");
            builder.push_bind(category.clone());
        }
        if let Some(weight) = filter.weight {
            builder.push(" AND weight = ");
            builder.push_bind(weight);
        }
        if let Some(min) = filter.min_calories {
            builder.push(" AND calories >= ");
            builder.push_bind(min);
        }
        if let Some(max) = filter.max_calories {
            builder.push(" AND calories <= ");
            builder.push_bind(max);
        }
        if let Some(blood_type) = filter.blood_type {
            builder.push(" AND NOT blood_type_excluded[");
            builder.push_bind(i32::from(blood_type));
            builder.push(" + 1]");
        }

        builder.push(" ORDER BY title");

        builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search products", e))
    }
}

/// Escapes LIKE pattern metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passthrough() {
        assert_eq!(escape_like("buckwheat"), "buckwheat");
    }

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("100%_raw\\"), "100\\%\\_raw\\\\");
    }
}
