//! Diary handlers: add, list by date, delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use slimmom_core::error::AppError;
use slimmom_service::DiaryRecordParams;

use crate::dto::request::{DiaryDateQuery, DiaryRequest};
use crate::dto::response::{DiaryRecordResponse, MessageResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/diary
pub async fn add(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<DiaryRequest>,
) -> Result<(StatusCode, Json<DiaryRecordResponse>), ApiError> {
    validate_request(&req)?;

    let record = state
        .diary_service
        .add_record(
            auth.id,
            DiaryRecordParams {
                date: req.date,
                title: req.title,
                grams: req.grams,
                calories: req.calories,
                calorie_intake: req.calorie_intake,
                category: req.category,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(DiaryRecordResponse::from(&record))))
}

/// GET /api/diary?date=YYYY-MM-DD
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DiaryDateQuery>,
) -> Result<Json<Vec<DiaryRecordResponse>>, ApiError> {
    let date = query
        .date
        .ok_or_else(|| AppError::validation("Query parameter 'date' is required"))?;

    let records = state.diary_service.records_for_date(auth.id, &date).await?;
    Ok(Json(records.iter().map(DiaryRecordResponse::from).collect()))
}

/// DELETE /api/diary/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(record_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.diary_service.delete_record(auth.id, record_id).await?;
    Ok(Json(MessageResponse {
        message: "Diary record deleted".to_string(),
    }))
}
