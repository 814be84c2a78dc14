use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A user-saved photo record.
///
/// `date`, `explanation`, `media_type`, `title` and `url` are stored
/// verbatim as supplied by the caller; only the columns' types are
/// enforced. `owner_id` always comes from the authenticated session.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub date: String,
    pub explanation: String,
    pub media_type: String,
    pub title: String,
    pub url: String,
    pub owner_id: i32,
}
