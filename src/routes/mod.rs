pub mod auth;
pub mod extract;
pub mod favorites;
pub mod photos;
pub mod root;

use crate::api_state::ApiContext;
use crate::routes::auth::middleware::ApiUser;
use crate::routes::auth::router::auth_public_router;
use crate::routes::favorites::router::favorites_protected_router;
use crate::routes::photos::router::photos_public_router;
use crate::routes::root::router::root_public_router;
use axum::Router;
use axum::middleware::from_extractor_with_state;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        auth::handlers::signup,
        auth::handlers::signin,
        photos::handlers::list_photos,
        favorites::handlers::list_favorites,
        favorites::handlers::create_favorite,
        favorites::handlers::delete_favorite,
    ),
    components(
        schemas(
            auth::interfaces::Credentials,
            auth::interfaces::TokenResponse,
            crate::apod::ApodEntry,
            crate::apod::MediaType,
            crate::database::Favorite,
            favorites::interfaces::CreateFavorite,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Token issuance"),
        (name = "Photos", description = "Upstream astronomy-photo catalog"),
        (name = "Favorites", description = "Per-user saved photos")
    )
)]
struct ApiDoc;

/// Adds bearer token security to the `OpenAPI` specification.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

// --- Router Construction ---
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .merge(public_routes())
        .merge(protected_routes(api_state.clone()))
        .with_state(api_state)
}

fn public_routes() -> Router<ApiContext> {
    Router::new()
        .merge(root_public_router())
        .merge(auth_public_router())
        .merge(photos_public_router())
}

/// Everything under `/api` requires a valid bearer token; the extractor
/// layer runs before any handler, so unauthenticated requests never reach
/// the store.
fn protected_routes(api_state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .merge(favorites_protected_router())
        .route_layer(from_extractor_with_state::<ApiUser, ApiContext>(api_state))
}
