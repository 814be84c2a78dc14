use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Media kind reported by the upstream catalog. Anything the upstream
/// invents beyond image/video lands in `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    Other,
}

impl MediaType {
    #[must_use]
    pub fn is_image(self) -> bool {
        matches!(self, Self::Image)
    }
}

/// One entry of the upstream astronomy-photo catalog.
///
/// Transient: fetched per request, never persisted. Upstream fields we
/// don't care about (hdurl, copyright, ...) are dropped on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApodEntry {
    pub date: String,
    pub explanation: String,
    pub media_type: MediaType,
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_deserializes_known_and_unknown_kinds() {
        let entry: ApodEntry = serde_json::from_value(serde_json::json!({
            "date": "2021-02-01",
            "explanation": "x",
            "media_type": "image",
            "title": "t",
            "url": "http://x",
            "hdurl": "http://ignored",
        }))
        .unwrap();
        assert_eq!(entry.media_type, MediaType::Image);
        assert!(entry.media_type.is_image());

        let video: MediaType = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(video, MediaType::Video);

        let weird: MediaType = serde_json::from_str("\"interactive\"").unwrap();
        assert_eq!(weird, MediaType::Other);
        assert!(!weird.is_image());
    }

    #[test]
    fn media_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MediaType::Image).unwrap(),
            "\"image\""
        );
    }
}
