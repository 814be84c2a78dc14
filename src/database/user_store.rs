use crate::database::app_user::{User, UserWithPassword};
use crate::database::error::DbError;
use sqlx::{Executor, Postgres};

pub struct UserStore;

impl UserStore {
    /// Creates a new user with an already-hashed password.
    pub async fn create(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, DbError> {
        Ok(sqlx::query_as::<_, User>(
            r"
            INSERT INTO app_user (email, password)
            VALUES ($1, $2)
            RETURNING id, created_at, email
            ",
        )
        .bind(email)
        .bind(hashed_password)
        .fetch_one(executor)
        .await?)
    }

    pub async fn find_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        user_id: i32,
    ) -> Result<Option<User>, DbError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT id, created_at, email FROM app_user WHERE id = $1")
                .bind(user_id)
                .fetch_optional(executor)
                .await?,
        )
    }

    /// Fetches the full row, including the password hash, for credential
    /// verification. Never expose the result to clients.
    pub async fn find_by_email_with_password(
        executor: impl Executor<'_, Database = Postgres>,
        email: &str,
    ) -> Result<Option<UserWithPassword>, DbError> {
        Ok(sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, email, password FROM app_user WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(executor)
        .await?)
    }
}
