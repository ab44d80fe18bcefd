use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{resource} {key} not found")]
    NotFound { resource: &'static str, key: String },

    /// A create request whose entity did not end up stored.
    #[error("movie was not persisted")]
    NotPersisted,

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn movie_not_found(key: impl ToString) -> Self {
        Self::NotFound { resource: "movie", key: key.to_string() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::NotPersisted => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Other(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(_) | AppError::Other(_) => {
                tracing::error!(error = %self, "request failed");
            },
            AppError::NotPersisted => tracing::warn!("create did not persist movie"),
            AppError::NotFound { .. } => tracing::debug!(error = %self, "not found"),
        }

        let body = Json(json!({ "message": self.user_message() }));
        (self.status_code(), body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
