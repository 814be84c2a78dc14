use crate::api_state::ApiContext;
use crate::database::app_user::User;
use crate::database::favorite::Favorite;
use crate::database::favorite_store::FavoriteStore;
use crate::routes::favorites::error::FavoritesError;
use crate::routes::favorites::interfaces::CreateFavorite;
use crate::routes::extract::JsonOrForm;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use tracing::info;

/// List the caller's favorites.
#[utoipa::path(
    get,
    path = "/api/favorites",
    tag = "Favorites",
    responses(
        (status = 200, description = "All favorites owned by the caller.", body = Vec<Favorite>),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 500, description = "A database error occurred."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_favorites(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
) -> Result<Json<Vec<Favorite>>, FavoritesError> {
    let favorites = FavoriteStore::list_for_owner(&context.pool, user.id).await?;
    Ok(Json(favorites))
}

/// Save a favorite for the caller.
///
/// Returns an array containing the created row, matching the shape of the
/// other favorites responses.
#[utoipa::path(
    post,
    path = "/api/favorites",
    tag = "Favorites",
    request_body = CreateFavorite,
    responses(
        (status = 200, description = "An array containing the created row.", body = Vec<Favorite>),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 500, description = "A database error occurred."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_favorite(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    JsonOrForm(payload): JsonOrForm<CreateFavorite>,
) -> Result<Json<Vec<Favorite>>, FavoritesError> {
    info!("Creating favorite '{}' for user {}", payload.title, user.id);
    let favorite = FavoriteStore::create(&context.pool, user.id, &payload).await?;
    Ok(Json(vec![favorite]))
}

/// Delete one of the caller's favorites.
///
/// An id that does not exist or is owned by someone else matches zero
/// rows; that still returns 200 with an empty array, not a 404.
#[utoipa::path(
    delete,
    path = "/api/favorites/{id}",
    tag = "Favorites",
    params(
        ("id" = i32, Path, description = "The id of the favorite to delete.")
    ),
    responses(
        (status = 200, description = "The deleted rows, possibly empty.", body = Vec<Favorite>),
        (status = 401, description = "Missing or invalid bearer token."),
        (status = 500, description = "A database error occurred."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_favorite(
    State(context): State<ApiContext>,
    Extension(user): Extension<User>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Favorite>>, FavoritesError> {
    let deleted = FavoriteStore::delete_for_owner(&context.pool, user.id, id).await?;
    Ok(Json(deleted))
}
