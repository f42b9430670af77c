//! Catalog handlers: blood-type categories and product search.

use axum::extract::{Path, Query, State};
use axum::Json;

use slimmom_entity::product::ProductFilter;

use crate::dto::request::ProductSearchQuery;
use crate::dto::response::ProductResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/products/blood-type/{n}
pub async fn blood_type_categories(
    State(state): State<AppState>,
    Path(blood_type): Path<i16>,
) -> Result<Json<Vec<String>>, ApiError> {
    let categories = state
        .catalog_service
        .categories_for_blood_type(blood_type)
        .await?;
    Ok(Json(categories))
}

/// GET /api/products/search
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<ProductSearchQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let filter = ProductFilter {
        title: query.title,
        category: query.category,
        weight: query.weight,
        min_calories: query.min_calories,
        max_calories: query.max_calories,
        blood_type: query.blood_type,
    };

    let products = state.catalog_service.search(&filter).await?;
    Ok(Json(products.iter().map(ProductResponse::from).collect()))
}
