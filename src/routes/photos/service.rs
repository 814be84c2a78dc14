use crate::apod::ApodEntry;

/// Retains only image entries, preserving upstream order.
#[must_use]
pub fn filter_images(entries: Vec<ApodEntry>) -> Vec<ApodEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.media_type.is_image())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::MediaType;

    fn entry(title: &str, media_type: MediaType) -> ApodEntry {
        ApodEntry {
            date: "2021-02-01".into(),
            explanation: "x".into(),
            media_type,
            title: title.into(),
            url: "http://example.com".into(),
        }
    }

    #[test]
    fn drops_videos_and_keeps_order() {
        let entries = vec![
            entry("a", MediaType::Image),
            entry("b", MediaType::Video),
            entry("c", MediaType::Image),
            entry("d", MediaType::Other),
        ];

        let filtered = filter_images(entries);
        let titles: Vec<_> = filtered.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn empty_catalog_stays_empty() {
        assert!(filter_images(vec![]).is_empty());
    }
}
