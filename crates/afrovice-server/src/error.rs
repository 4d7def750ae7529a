use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::sqlx::{self, error::ErrorKind};
use sea_orm::{DbErr, RuntimeErr};
use serde_json::json;
use thiserror::Error;

/// Error type returned by every handler.
///
/// Body-shape failures never reach this type: axum's `Json` extractor
/// rejects them (422 for missing or mistyped fields) before a handler runs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} already exists")]
    Conflict(&'static str),

    #[error("referenced row does not exist")]
    MissingReference,

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Classify a write error for `entity`, surfacing constraint violations
    /// as client errors instead of a generic 500.
    pub fn from_write(entity: &'static str, err: DbErr) -> Self {
        match constraint_kind(&err) {
            Some(ErrorKind::UniqueViolation) => Self::Conflict(entity),
            Some(ErrorKind::ForeignKeyViolation) => Self::MissingReference,
            _ => Self::Database(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::MissingReference => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Constraint class reported by the driver (SQLSTATE 23505 and 23503 on
/// Postgres), if `err` came from the database itself.
fn constraint_kind(err: &DbErr) -> Option<ErrorKind> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => Some(e.kind()),
        _ => None,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
