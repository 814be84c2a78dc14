use super::error::ApodError;
use super::interfaces::ApodEntry;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// The catalog window served by `GET /photos`. Intentionally fixed, not
/// caller-configurable.
pub const WINDOW_START: &str = "2021-02-01";
pub const WINDOW_END: &str = "2021-03-02";

/// Client for the upstream astronomy-photo catalog (NASA APOD).
///
/// One unconditional GET per call: no retry, no caching, no deadline
/// beyond what the underlying `reqwest::Client` applies.
#[derive(Clone)]
pub struct ApodClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl ApodClient {
    #[must_use]
    pub fn new(http_client: Client, base_url: Url, api_key: String) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    /// Fetches every catalog entry in the fixed date window.
    ///
    /// # Errors
    ///
    /// * `ApodError::Request` if the request cannot be sent or the body is
    ///   not the expected JSON shape.
    /// * `ApodError::Upstream` if the upstream answers with a non-2xx status.
    pub async fn fetch_window(&self) -> Result<Vec<ApodEntry>, ApodError> {
        debug!("Fetching APOD window {WINDOW_START}..{WINDOW_END}");
        let response = self
            .http_client
            .get(self.base_url.clone())
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("start_date", WINDOW_START),
                ("end_date", WINDOW_END),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApodError::Upstream { status, body });
        }

        let entries: Vec<ApodEntry> = response.json().await?;
        Ok(entries)
    }
}
