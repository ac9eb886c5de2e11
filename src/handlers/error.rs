use crate::storage::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use strum_macros::AsRefStr;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, AsRefStr, ToSchema)]
#[strum(serialize_all = "snake_case")]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[schema(value_type = String)]
    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NotFound => Self::NotFound,
            _ => Self::Storage(value),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, error_type = %self.as_ref(), "AppError");

        match &self {
            // "not found" is a successful lookup with no record: 404, no body
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            // every operational failure surfaces once, with its own message
            AppError::Storage { .. } => {
                let body = Json(json!({
                    "message": self.to_string(),
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
