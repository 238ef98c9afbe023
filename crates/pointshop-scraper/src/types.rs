//! Steam Web API response types.
//!
//! ## `QueryRewardItems`
//!
//! Every payload is wrapped in a `response` envelope carrying `count`,
//! `total_count`, an optional `next_cursor`, and an optional `definitions`
//! array. When a query matches nothing the API omits `definitions` entirely
//! rather than returning `[]`, so the field defaults to empty.
//!
//! `point_cost` usually arrives as a decimal string (`"1000"`) but a bare
//! number is accepted too; either way the text is kept verbatim. String
//! fields that come back as `null` read as empty. One odd item must not sink
//! the whole payload it arrived in.
//!
//! ## `GetAppList`
//!
//! `{ "applist": { "apps": [{ "appid": 440, "name": "Team Fortress 2" }] } }`.
//! Names may be empty for tools and delisted entries.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level envelope from `GET ILoyaltyRewardsService/QueryRewardItems/v1`.
#[derive(Debug, Deserialize)]
pub struct RewardItemsResponse {
    pub response: RewardItemsPage,
}

/// One page (or one batch) of reward item definitions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewardItemsPage {
    /// Number of definitions included in this payload.
    #[serde(default)]
    pub count: u64,

    /// Number of definitions matching the query across all pages.
    #[serde(default)]
    pub total_count: u64,

    /// Opaque token for the following page. Absent on some terminal pages.
    #[serde(default)]
    pub next_cursor: Option<String>,

    #[serde(default)]
    pub definitions: Vec<RewardItemDefinition>,
}

impl RewardItemsPage {
    /// Returns `true` when upstream reports more matches than it sent.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total_count > self.count
    }
}

/// A single Points Shop item definition.
#[derive(Debug, Clone, Deserialize)]
pub struct RewardItemDefinition {
    pub appid: u64,

    /// Category code, e.g. `11` for animated stickers. `None` when absent.
    #[serde(default)]
    pub community_item_class: Option<i32>,

    /// Cost in points as upstream wrote it.
    #[serde(default, deserialize_with = "string_or_number")]
    pub point_cost: String,

    #[serde(default)]
    pub community_item_data: Option<CommunityItemData>,
}

/// Display metadata nested inside a [`RewardItemDefinition`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunityItemData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub item_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub item_title: String,

    /// Image file name, e.g. `"f33d61a2ca4488fa7729c5a8c88421f8d0181288.png"`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub item_image_large: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub item_image_small: String,
}

/// Top-level envelope from `GET ISteamApps/GetAppList/v2`.
#[derive(Debug, Deserialize)]
pub struct AppListResponse {
    pub applist: AppList,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub apps: Vec<AppListEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppListEntry {
    pub appid: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `"1000"`, `1000`, or `null`, yielding the textual form.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
