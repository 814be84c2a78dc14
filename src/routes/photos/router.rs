use crate::api_state::ApiContext;
use crate::routes::photos::handlers::list_photos;
use axum::{Router, routing::get};

pub fn photos_public_router() -> Router<ApiContext> {
    Router::new().route("/photos", get(list_photos))
}
