use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const MISSING_FIELDS: &str = "Name and at least one date are required.";
pub const MISSING_ID: &str = "Response ID is required for deletion.";
pub const NOT_FOUND: &str = "Response not found.";

/// Errors a handler can return. Each one renders as `{"message": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The store rejected a statement. `message` is what the client sees,
    /// `source` is only logged.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Builds a `map_err` adapter tagging a sqlx failure with a client message.
    pub fn storage(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage { message, source } = &self {
            tracing::error!(error = %source, "{message}");
        }
        let status = self.status();
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
