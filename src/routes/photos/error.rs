use crate::apod::ApodError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum PhotosError {
    #[error("{0}")]
    Upstream(#[from] ApodError),
}

impl IntoResponse for PhotosError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(e) => error!("APOD fetch failed: {e}"),
        }

        // Any upstream failure is a generic 500 carrying the underlying
        // message. No retry.
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
