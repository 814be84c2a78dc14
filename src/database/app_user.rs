use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A user record safe to send to clients. Note the absence of the
/// password hash.
#[derive(Debug, Serialize, FromRow, Clone, ToSchema)]
pub struct User {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub email: String,
}

/// Full user row, only used inside the auth service for credential checks.
#[derive(Debug, FromRow)]
pub struct UserWithPassword {
    pub id: i32,
    pub email: String,
    pub password: String,
}
