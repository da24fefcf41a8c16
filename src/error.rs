use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::storage::StoreError;

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    UsernameTaken,
    BadRequest(String),
    Store(StoreError),
    Internal(String),
    Unauthorized,
    Forbidden,
    UserNotFound,
    InvalidPassword,
    NotFound,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UsernameTaken => ApiError::UsernameTaken,
            // the token named a user that is gone
            StoreError::UnknownOwner(_) => ApiError::Forbidden,
            e @ StoreError::Db(_) => ApiError::Store(e),
        }
    }
}

fn body(
    status: StatusCode,
    error: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(ErrorBody {
            error,
            message: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::UsernameTaken => body(
                StatusCode::CONFLICT,
                "USERNAME_TAKEN",
                "Username already exists",
            ),
            ApiError::BadRequest(msg) => body(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Store(e) => {
                tracing::error!("storage error: {e}");
                body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error",
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error",
                )
            }
            ApiError::Unauthorized => {
                body(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Unauthorized")
            }
            ApiError::Forbidden => body(StatusCode::FORBIDDEN, "FORBIDDEN", "Forbidden"),
            ApiError::UserNotFound => {
                body(StatusCode::BAD_REQUEST, "USER_NOT_FOUND", "User not found")
            }
            ApiError::InvalidPassword => {
                body(StatusCode::BAD_REQUEST, "INVALID_PASSWORD", "Invalid password")
            }
            ApiError::NotFound => body(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found"),
        }
    }
}
