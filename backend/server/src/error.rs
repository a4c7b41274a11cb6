use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dataset::LookupError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please provide '{0}' parameter")]
    InvalidRequest(&'static str),

    #[error("Malformed query: {}", .0.body_text())]
    MalformedQuery(#[from] QueryRejection),

    #[error("Dish not found")]
    NotFound(#[from] LookupError),

    #[error("Page not found")]
    UnknownRoute,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidRequest { .. } | AppError::MalformedQuery { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } | AppError::UnknownRoute => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
