//! Batch and cursor-following collection for `RewardsClient`.

use futures::future::join_all;
use pointshop_core::AppMap;

use crate::error::ScraperError;
use crate::normalize::{merge_page, normalize_batch};
use crate::pagination::{cursor_url, next_cursor};
use crate::planner::{AppIndex, BatchPlan};
use crate::types::RewardItemsPage;

use super::RewardsClient;

impl RewardsClient {
    /// Fetches every URL concurrently and returns the pages that succeeded.
    ///
    /// All requests are in flight at once with no concurrency cap. A failed
    /// request is logged and left out; it never affects the others. The
    /// surviving pages keep the order of `urls`.
    pub async fn fetch_batch(&self, urls: &[String]) -> Vec<RewardItemsPage> {
        tracing::info!(requests = urls.len(), "querying reward items");

        let results = join_all(urls.iter().map(|url| async move {
            (url, self.fetch_page(url).await)
        }))
        .await;

        let mut pages = Vec::with_capacity(results.len());
        let mut failed = 0usize;
        for (url, result) in results {
            match result {
                Ok(page) => pages.push(page),
                Err(e) => {
                    failed += 1;
                    tracing::error!(url = %url, error = %e, "reward item request failed, skipping");
                }
            }
        }

        if failed > 0 {
            tracing::warn!(
                failed,
                total = urls.len(),
                "some reward item requests failed; their apps are missing from the result"
            );
        }
        pages
    }

    /// Runs every request in `plan` and merges the results.
    pub async fn collect_batch(&self, plan: &BatchPlan) -> AppMap {
        let pages = self.fetch_batch(&plan.urls).await;
        normalize_batch(&pages, &plan.app)
    }

    /// Follows `next_cursor` from an empty cursor until a page comes back
    /// empty, folding each page into `acc`.
    ///
    /// Requests are strictly sequential since each cursor is only known
    /// once the previous page has arrived.
    ///
    /// **All-or-nothing semantics**: on any page failure the pages merged so
    /// far are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `base_url` is not an absolute
    /// URL. Propagates any error from [`Self::fetch_page`].
    /// Returns [`ScraperError::PaginationLimit`] if more than `max_pages`
    /// non-empty pages arrive. The empty page that ends the chain is not
    /// counted.
    pub async fn collect_cursor(
        &self,
        base_url: &str,
        index: &AppIndex,
        acc: AppMap,
    ) -> Result<AppMap, ScraperError> {
        reqwest::Url::parse(base_url).map_err(|e| ScraperError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let mut acc = acc;
        let mut cursor = String::new();
        let mut page_count = 0usize;

        loop {
            let page = self.fetch_page(&cursor_url(base_url, &cursor)).await?;
            if page.definitions.is_empty() {
                tracing::info!(pages = page_count, apps = acc.len(), "reached end of reward items");
                return Ok(acc);
            }

            // Only pages that carry items count toward the cap.
            page_count += 1;
            if page_count > self.max_pages {
                return Err(ScraperError::PaginationLimit {
                    base_url: base_url.to_owned(),
                    max_pages: self.max_pages,
                });
            }

            tracing::debug!(
                page = page_count,
                items = page.definitions.len(),
                total_count = page.total_count,
                "merging reward item page"
            );
            acc = merge_page(acc, &page, index);

            match next_cursor(&page) {
                Some(next) => cursor = next.to_owned(),
                None => {
                    tracing::warn!(page = page_count, "page has items but no next cursor, stopping");
                    return Ok(acc);
                }
            }
        }
    }
}
