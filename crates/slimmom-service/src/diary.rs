//! Per-user food diary.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use tracing::debug;
use uuid::Uuid;

use slimmom_core::error::AppError;
use slimmom_core::result::AppResult;
use slimmom_database::repositories::DiaryRepository;
use slimmom_entity::diary::{CreateDiaryRecord, DiaryRecord};

/// Input for adding a diary record.
#[derive(Debug, Clone)]
pub struct DiaryRecordParams {
    /// When the food was consumed.
    pub date: DateTime<Utc>,
    /// Name of the consumed product.
    pub title: String,
    /// Consumed amount in grams.
    pub grams: f64,
    /// Calories for the consumed amount.
    pub calories: i32,
    /// Share of the daily calorie target this record represents.
    pub calorie_intake: f64,
    /// Category of the consumed product.
    pub category: String,
}

/// Manages per-user food diary records.
#[derive(Debug, Clone)]
pub struct DiaryService {
    diary: DiaryRepository,
}

impl DiaryService {
    /// Creates a new diary service.
    pub fn new(diary: DiaryRepository) -> Self {
        Self { diary }
    }

    /// Adds a consumed-food record to the user's diary.
    pub async fn add_record(
        &self,
        user_id: Uuid,
        params: DiaryRecordParams,
    ) -> AppResult<DiaryRecord> {
        if params.title.trim().is_empty() {
            return Err(AppError::validation("Product title is required"));
        }
        if params.grams <= 0.0 {
            return Err(AppError::validation("Grams must be positive"));
        }
        if params.calories < 0 {
            return Err(AppError::validation("Calories must not be negative"));
        }
        if params.calorie_intake < 0.0 {
            return Err(AppError::validation("Calorie intake must not be negative"));
        }
        if params.category.trim().is_empty() {
            return Err(AppError::validation("Product category is required"));
        }

        let record = self
            .diary
            .create(&CreateDiaryRecord {
                user_id,
                date: params.date,
                title: params.title.trim().to_string(),
                grams: params.grams,
                calories: params.calories,
                calorie_intake: params.calorie_intake,
                category: params.category.trim().to_string(),
            })
            .await?;

        debug!(user_id = %user_id, record_id = %record.id, "diary record added");
        Ok(record)
    }

    /// Lists the user's records for one calendar day (UTC).
    ///
    /// `date` is a `YYYY-MM-DD` string; anything else is a validation
    /// error. An empty day yields an empty list, not an error.
    pub async fn records_for_date(&self, user_id: Uuid, date: &str) -> AppResult<Vec<DiaryRecord>> {
        let day = date
            .parse::<NaiveDate>()
            .map_err(|_| AppError::validation("Date must be in YYYY-MM-DD format"))?;

        let (start, end) = day_window(day);
        self.diary.find_by_user_in_range(user_id, start, end).await
    }

    /// Deletes one of the user's records.
    ///
    /// Records belonging to other users are indistinguishable from missing
    /// ones.
    pub async fn delete_record(&self, user_id: Uuid, record_id: Uuid) -> AppResult<()> {
        if !self.diary.delete_owned(record_id, user_id).await? {
            return Err(AppError::not_found("Diary record not found"));
        }
        debug!(user_id = %user_id, record_id = %record_id, "diary record deleted");
        Ok(())
    }
}

/// The UTC half-open interval `[00:00, next day 00:00)` for a calendar day.
fn day_window(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_day_window_covers_whole_day() {
        let day = "2024-03-15".parse::<NaiveDate>().expect("date");
        let (start, end) = day_window(day);
        assert_eq!(start.to_rfc3339(), "2024-03-15T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-03-16T00:00:00+00:00");
        assert_eq!(start.hour(), 0);
        assert_eq!(end - start, Duration::days(1));
    }

    #[test]
    fn test_day_window_handles_month_boundary() {
        let day = "2024-01-31".parse::<NaiveDate>().expect("date");
        let (_, end) = day_window(day);
        assert_eq!(end.to_rfc3339(), "2024-02-01T00:00:00+00:00");
    }

    #[test]
    fn test_bad_date_string_rejected() {
        assert!("15-03-2024".parse::<NaiveDate>().is_err());
        assert!("2024-13-01".parse::<NaiveDate>().is_err());
        assert!("yesterday".parse::<NaiveDate>().is_err());
    }
}
