//! Splits discovered apps into bounded `QueryRewardItems` request URLs.
//!
//! The rewards API accepts a list of apps through repeated
//! `appids[k]=<id>` query parameters. Very long lists are rejected by the
//! upstream, so identifiers are packed into batches of at most
//! `batch_limit` per URL. Alongside the URLs the planner records the display
//! name and canonical Points Shop URL of every accepted app, which the
//! normalizer later uses to label merged results.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use pointshop_core::AppId;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::category::points_shop_url;
use crate::pagination::append_query_param;
use crate::types::AppListEntry;

/// Name and canonical URL recorded for each accepted app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIndexEntry {
    pub name: String,
    pub points_shop_url: String,
}

pub type AppIndex = BTreeMap<AppId, AppIndexEntry>;

/// Output of [`plan`]: the app index plus one request URL per batch.
///
/// Serializes to the `config.json` layout (`{"app": {...}, "urls": [...]}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPlan {
    pub app: AppIndex,
    pub urls: Vec<String>,
}

/// Maps a raw catalog value to a canonical app identifier.
///
/// Returning `None` rejects the entry.
pub trait IdStrategy {
    fn canonical_id(&self, raw: &str) -> Option<AppId>;
}

/// Uses the raw value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl IdStrategy for Identity {
    fn canonical_id(&self, raw: &str) -> Option<AppId> {
        Some(AppId::new(raw))
    }
}

/// Pulls the identifier out of a composite slug with a regular expression.
///
/// The first capture group is used when the pattern has one, otherwise the
/// whole match.
#[derive(Debug, Clone)]
pub struct PatternId {
    pattern: Regex,
}

impl PatternId {
    /// # Errors
    ///
    /// Returns [`regex::Error`] if `pattern` does not compile.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// First run of ASCII digits, e.g. `"app-1435780#goty"` → `1435780`.
    #[must_use]
    pub fn digits() -> Self {
        Self {
            pattern: Regex::new(r"[0-9]+").expect("valid digits regex"),
        }
    }
}

impl IdStrategy for PatternId {
    fn canonical_id(&self, raw: &str) -> Option<AppId> {
        let caps = self.pattern.captures(raw)?;
        let found = caps.get(1).or_else(|| caps.get(0))?;
        Some(AppId::new(found.as_str()))
    }
}

impl<F> IdStrategy for F
where
    F: Fn(&str) -> Option<AppId>,
{
    fn canonical_id(&self, raw: &str) -> Option<AppId> {
        self(raw)
    }
}

/// Appends `community_item_classes[i]=<code>` for each code to `base_url`.
#[must_use]
pub fn with_item_classes(base_url: &str, item_classes: &[i32]) -> String {
    item_classes
        .iter()
        .enumerate()
        .fold(base_url.to_owned(), |url, (i, code)| {
            append_query_param(&url, &format!("community_item_classes[{i}]"), &code.to_string())
        })
}

/// Builds a [`BatchPlan`] from `(raw value, label)` pairs.
///
/// - Entries whose raw value is blank are skipped.
/// - `strategy` maps each raw value to an [`AppId`]; rejected values are skipped.
/// - The first entry for a given id wins; later duplicates (e.g. a "Game of
///   the Year" listing of the same app) are dropped along with their label.
/// - Each URL carries between 1 and `batch_limit` ids. No ids → no URLs.
#[must_use]
pub fn plan<I, R, L, S>(
    entries: I,
    base_url: &str,
    batch_limit: NonZeroUsize,
    strategy: &S,
) -> BatchPlan
where
    I: IntoIterator<Item = (R, L)>,
    R: AsRef<str>,
    L: AsRef<str>,
    S: IdStrategy + ?Sized,
{
    let limit = batch_limit.get();
    let mut app = AppIndex::new();
    let mut urls = Vec::new();
    let mut current = String::new();
    let mut in_batch = 0usize;

    for (raw, label) in entries {
        let raw = raw.as_ref().trim();
        if raw.is_empty() {
            continue;
        }

        let Some(id) = strategy.canonical_id(raw) else {
            tracing::debug!(raw, "no app id in catalog value — skipping");
            continue;
        };
        if app.contains_key(&id) {
            tracing::debug!(raw, appid = %id, "duplicate app id — keeping first entry");
            continue;
        }

        if in_batch == 0 {
            current = base_url.to_owned();
        }
        current = append_query_param(&current, &format!("appids[{in_batch}]"), id.as_str());
        in_batch += 1;

        let label = label.as_ref().trim();
        let name = if label.is_empty() {
            id.to_string()
        } else {
            label.to_owned()
        };
        let entry = AppIndexEntry {
            name,
            points_shop_url: points_shop_url(id.as_str()),
        };
        app.insert(id, entry);

        if in_batch == limit {
            urls.push(std::mem::take(&mut current));
            in_batch = 0;
            tracing::debug!(batch = urls.len(), limit, "filled request batch");
        }
    }

    if in_batch > 0 {
        urls.push(current);
    }

    tracing::info!(apps = app.len(), requests = urls.len(), "planned reward item queries");
    BatchPlan { app, urls }
}

/// Builds a [`BatchPlan`] from the `GetAppList` response.
///
/// Apps without a name are labelled with their id.
#[must_use]
pub fn plan_app_list(
    apps: &[AppListEntry],
    base_url: &str,
    batch_limit: NonZeroUsize,
) -> BatchPlan {
    let pairs = apps.iter().map(|a| (a.appid.to_string(), a.name.as_str()));
    plan(pairs, base_url, batch_limit, &Identity)
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
