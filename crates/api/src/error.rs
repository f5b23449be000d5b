use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pets_core::error::CoreError;
use tera::Context;

use crate::views::{self, ViewError};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to render the `error.html` page with a
/// matching status code.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pets_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template failed to load or render.
    #[error(transparent)]
    View(#[from] ViewError),

    /// A bad request with a human-readable message, e.g. a path id that
    /// is not a number or a form that cannot be deserialized.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A write failed for a reason the user should see verbatim.
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// HTTP status and user-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Rendering errors ---
            AppError::View(err) => {
                tracing::error!(error = ?err, "View error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::OperationFailed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        error_page(status, &message)
    }
}

/// Render the generic error view.
///
/// Falls back to a plain-text body if the template itself is broken.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let mut context = Context::new();
    context.insert("status", &status.as_u16());
    context.insert("reason", status.canonical_reason().unwrap_or("Error"));
    context.insert("error_text", message);

    match views::render("error.html", &context) {
        Ok(page) => (status, page).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to render error page");
            (status, message.to_string()).into_response()
        }
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations map to 409 and keep the database's message.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) if pets_db::is_foreign_key_violation(err) => {
            (StatusCode::CONFLICT, db_err.message().to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}
