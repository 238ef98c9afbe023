use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Steam application identifier, carried as its decimal string form.
///
/// The rewards API reports `appid` as an integer while the catalog page
/// exposes it as an attribute string; both collapse into this type so the
/// index and the normalized map share one key space.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// The merged lookup table handed to the static search page.
///
/// A `BTreeMap` keeps serialization order stable across runs.
pub type AppMap = BTreeMap<AppId, ApplicationRecord>;

/// One application and every Points Shop item observed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub appid: AppId,
    /// Display name from the catalog or app list; the appid itself when unknown.
    pub name: String,
    /// Canonical Points Shop page, e.g. `"https://store.steampowered.com/points/shop/app/440"`.
    pub points_shop_url: String,
    /// Items in arrival order. Sorting is left to the presentation layer.
    pub items: Vec<ItemRecord>,
}

impl ApplicationRecord {
    /// Creates a record with no items yet.
    #[must_use]
    pub fn new(appid: AppId, name: impl Into<String>, points_shop_url: impl Into<String>) -> Self {
        Self {
            appid,
            name: name.into(),
            points_shop_url: points_shop_url.into(),
            items: Vec::new(),
        }
    }

    /// Returns the number of items recorded for this application.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// A single Points Shop item definition, reshaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub name: String,
    /// Raw `community_item_class` code from the rewards API, if it sent one.
    pub item_class: Option<i32>,
    /// Point cost exactly as the API returns it, e.g. `"1000"`.
    pub cost: String,
    /// Human-readable category, e.g. `"Animated Sticker"`. Empty for unknown codes.
    pub item_type: String,
    /// Points Shop cluster page for this item's category.
    pub points_shop_url: String,
    /// Full-size image URL. Empty when the category carries no image.
    pub image_url: String,
}

/// Counts items across every record in `map`.
#[must_use]
pub fn total_items(map: &AppMap) -> usize {
    map.values().map(ApplicationRecord::item_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(name: &str) -> ItemRecord {
        ItemRecord {
            name: name.to_owned(),
            item_class: Some(4),
            cost: "100".to_owned(),
            item_type: "Emoticon".to_owned(),
            points_shop_url: "https://store.steampowered.com/points/shop/app/440/cluster/7"
                .to_owned(),
            image_url: String::new(),
        }
    }

    #[test]
    fn app_id_from_integer_uses_decimal_form() {
        assert_eq!(AppId::from(1_435_780).as_str(), "1435780");
    }

    #[test]
    fn app_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&AppId::from(440)).unwrap();
        assert_eq!(json, "\"440\"");
    }

    #[test]
    fn application_record_serializes_camel_case() {
        let mut record = ApplicationRecord::new(
            AppId::from(440),
            "Team Fortress 2",
            "https://store.steampowered.com/points/shop/app/440",
        );
        record.items.push(sample_item(":sticky:"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["pointsShopUrl"], "https://store.steampowered.com/points/shop/app/440");
        assert_eq!(value["items"][0]["itemType"], "Emoticon");
        assert_eq!(value["items"][0]["itemClass"], 4);
        assert_eq!(value["items"][0]["imageUrl"], "");
    }

    #[test]
    fn total_items_sums_all_records() {
        let mut map = AppMap::new();
        let mut a = ApplicationRecord::new(AppId::from(1), "A", "a");
        a.items.push(sample_item("one"));
        a.items.push(sample_item("two"));
        let mut b = ApplicationRecord::new(AppId::from(2), "B", "b");
        b.items.push(sample_item("three"));
        map.insert(a.appid.clone(), a);
        map.insert(b.appid.clone(), b);

        assert_eq!(total_items(&map), 3);
    }
}
