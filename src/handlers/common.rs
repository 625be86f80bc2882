use crate::error::AppError;

/// Catch-all for unmapped paths: the JSON 404 envelope instead of a bare body
pub async fn resource_not_found() -> AppError {
    AppError::NotFound("Resource".to_string())
}
