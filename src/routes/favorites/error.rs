use crate::database::DbError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("{0}")]
    Database(#[from] DbError),
}

impl IntoResponse for FavoritesError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => error!("Favorite store query failed: {e}"),
        }

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
