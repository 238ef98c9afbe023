//! HTTP client for the catalog page and the Steam Web API.

mod collect;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::catalog::{extract_catalog_entries, CatalogEntry};
use crate::error::ScraperError;
use crate::types::{AppListEntry, AppListResponse, RewardItemsPage, RewardItemsResponse};

/// HTTP client for the reward item queries and their inputs.
///
/// Non-2xx responses surface as [`ScraperError::UnexpectedStatus`] and
/// unparseable bodies as [`ScraperError::Deserialize`]. Nothing is retried:
/// batch collection drops failed requests, cursor collection fails whole.
pub struct RewardsClient {
    pub(super) client: Client,
    /// Maximum number of pages followed by [`RewardsClient::collect_cursor`].
    pub(super) max_pages: usize,
}

impl RewardsClient {
    /// Creates a `RewardsClient` with a per-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str, max_pages: usize) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, max_pages })
    }

    /// Fetches `url` and returns the body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScraperError::Http`] — network, TLS, or timeout failure.
    pub async fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "application/json,text/html;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches the catalog page and extracts its app options.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_text`] errors and
    /// [`ScraperError::InvalidSelector`] from extraction.
    pub async fn fetch_catalog(
        &self,
        url: &str,
        selector: &str,
    ) -> Result<Vec<CatalogEntry>, ScraperError> {
        let html = self.fetch_text(url).await?;
        extract_catalog_entries(&html, selector)
    }

    /// Fetches the full Steam app list.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_text`] errors; returns
    /// [`ScraperError::Deserialize`] if the body is not an app list.
    pub async fn fetch_app_list(&self, url: &str) -> Result<Vec<AppListEntry>, ScraperError> {
        let parsed: AppListResponse = self.get_json(url, "app list").await?;
        tracing::info!(apps = parsed.applist.apps.len(), "fetched app list");
        Ok(parsed.applist.apps)
    }

    /// Fetches one `QueryRewardItems` payload.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_text`] errors; returns
    /// [`ScraperError::Deserialize`] if the body is not a reward item response.
    pub async fn fetch_page(&self, url: &str) -> Result<RewardItemsPage, ScraperError> {
        let parsed: RewardItemsResponse = self.get_json(url, "reward items").await?;
        Ok(parsed.response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        what: &str,
    ) -> Result<T, ScraperError> {
        let body = self.fetch_text(url).await?;
        serde_json::from_str::<T>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("{what} from {url}"),
            source: e,
        })
    }
}
