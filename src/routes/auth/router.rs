use crate::api_state::ApiContext;
use crate::routes::auth::handlers::{signin, signup};
use axum::{Router, routing::post};

pub fn auth_public_router() -> Router<ApiContext> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}
