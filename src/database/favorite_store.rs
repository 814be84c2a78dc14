use crate::database::error::DbError;
use crate::database::favorite::Favorite;
use crate::routes::favorites::interfaces::CreateFavorite;
use sqlx::{Executor, Postgres};

/// All access to the `favorite` table.
///
/// Every statement here carries the `owner_id` predicate; handlers cannot
/// reach the table except through this store, so ownership scoping cannot
/// be forgotten per operation.
pub struct FavoriteStore;

impl FavoriteStore {
    /// Lists all favorites owned by `owner_id`, in insertion (id) order.
    pub async fn list_for_owner(
        executor: impl Executor<'_, Database = Postgres>,
        owner_id: i32,
    ) -> Result<Vec<Favorite>, DbError> {
        Ok(sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorite WHERE owner_id = $1 ORDER BY id",
        )
        .bind(owner_id)
        .fetch_all(executor)
        .await?)
    }

    /// Inserts a favorite for `owner_id`. Payload fields go in verbatim.
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        owner_id: i32,
        payload: &CreateFavorite,
    ) -> Result<Favorite, DbError> {
        Ok(sqlx::query_as::<_, Favorite>(
            r"
            INSERT INTO favorite (date, explanation, media_type, title, url, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            ",
        )
        .bind(&payload.date)
        .bind(&payload.explanation)
        .bind(&payload.media_type)
        .bind(&payload.title)
        .bind(&payload.url)
        .bind(owner_id)
        .fetch_one(executor)
        .await?)
    }

    /// Deletes the favorite matching `(owner_id, id)` and returns the
    /// deleted rows. A non-owned or nonexistent id matches zero rows and
    /// yields an empty vec; that is not an error.
    pub async fn delete_for_owner(
        executor: impl Executor<'_, Database = Postgres>,
        owner_id: i32,
        favorite_id: i32,
    ) -> Result<Vec<Favorite>, DbError> {
        Ok(sqlx::query_as::<_, Favorite>(
            "DELETE FROM favorite WHERE owner_id = $1 AND id = $2 RETURNING *",
        )
        .bind(owner_id)
        .bind(favorite_id)
        .fetch_all(executor)
        .await?)
    }
}
