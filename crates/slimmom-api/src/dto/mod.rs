//! Request and response DTOs.
//!
//! The wire format is camelCase JSON; conversion happens here so the
//! domain types keep their snake_case fields.

pub mod request;
pub mod response;

use slimmom_core::error::AppError;
use slimmom_core::result::AppResult;
use validator::Validate;

/// Runs `validator` checks on a request body, mapping failures to a 400.
pub fn validate_request<T: Validate>(request: &T) -> AppResult<()> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
