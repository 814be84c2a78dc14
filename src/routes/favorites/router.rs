use crate::api_state::ApiContext;
use crate::routes::favorites::handlers::{create_favorite, delete_favorite, list_favorites};
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn favorites_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/api/favorites", get(list_favorites).post(create_favorite))
        // Kept for clients that POST with the documented trailing slash;
        // axum does not redirect between the two.
        .route("/api/favorites/", post(create_favorite))
        .route("/api/favorites/{id}", delete(delete_favorite))
}
