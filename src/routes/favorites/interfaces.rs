use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for creating a favorite. `owner_id` is deliberately absent: it is
/// always taken from the authenticated session, never from the caller.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFavorite {
    pub date: String,
    pub explanation: String,
    pub media_type: String,
    pub title: String,
    pub url: String,
}
