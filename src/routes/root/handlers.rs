use axum::Json;
use serde_json::{Value, json};

/// Service banner, handy as a liveness probe.
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Service is up."),
    )
)]
pub async fn root() -> Json<Value> {
    Json(json!({ "service": "apod-favorites", "status": "ok" }))
}
