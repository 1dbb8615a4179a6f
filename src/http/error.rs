//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Expected errors (400/404) carry a specific message; engine failures are
//! logged and answered with a generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Link pair already exists (400)
    DuplicateLink { recette_id: i64, ingredient_id: i64 },

    /// Missing or invalid credential (401)
    Unauthorized,

    /// Storage failure (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::DuplicateLink {
                recette_id,
                ingredient_id,
            } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "duplicate_link",
                    "message": format!(
                        "ingredient {} is already associated with recipe {}",
                        ingredient_id, recette_id
                    )
                }),
            ),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": "unauthorized",
                    "message": "missing or invalid credential"
                }),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::DuplicateLink {
                recette_id,
                ingredient_id,
            } => Self::DuplicateLink {
                recette_id,
                ingredient_id,
            },
            // ForeignKey and raw engine errors are both storage failures here
            other => Self::Database(other),
        }
    }
}
