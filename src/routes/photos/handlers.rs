use crate::api_state::ApiContext;
use crate::apod::ApodEntry;
use crate::routes::photos::error::PhotosError;
use crate::routes::photos::service::filter_images;
use axum::{Json, extract::State};

/// List remote photos from the fixed upstream catalog window.
///
/// Public on purpose: this route lives outside the authenticated `/api`
/// prefix.
#[utoipa::path(
    get,
    path = "/photos",
    tag = "Photos",
    responses(
        (status = 200, description = "Catalog entries with media_type=image, in upstream order.", body = Vec<ApodEntry>),
        (status = 500, description = "The upstream fetch failed."),
    )
)]
pub async fn list_photos(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<ApodEntry>>, PhotosError> {
    let entries = context.apod_client.fetch_window().await?;
    Ok(Json(filter_images(entries)))
}
