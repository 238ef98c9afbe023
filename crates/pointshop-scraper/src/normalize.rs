//! Normalization from raw reward item pages to the merged [`AppMap`].
//!
//! [`merge_page`] is the single fold step shared by both collection modes:
//! bounded batches fold every settled page through it, cursor chains fold
//! each page as it arrives. Category-derived fields come from
//! [`crate::category`].

use pointshop_core::{AppId, AppMap, ApplicationRecord, ItemRecord};

use crate::category::{derive, points_shop_url};
use crate::planner::AppIndex;
use crate::types::{RewardItemDefinition, RewardItemsPage};

/// Merges every item in `page` into `acc` and returns it.
///
/// Records are created on the first item seen for an app, named from
/// `index` when the app is listed there and after the app id otherwise.
/// Items are appended in page order; nothing is deduplicated.
#[must_use]
pub fn merge_page(mut acc: AppMap, page: &RewardItemsPage, index: &AppIndex) -> AppMap {
    for definition in &page.definitions {
        let appid = AppId::from(definition.appid);
        let record = acc
            .entry(appid.clone())
            .or_insert_with(|| new_record(&appid, index));
        let item = normalize_item(definition, &record.points_shop_url);
        record.items.push(item);
    }
    acc
}

/// Merges a set of independently fetched batch pages into a fresh map.
///
/// A page whose `total_count` exceeds its `count` was cut short upstream;
/// this is logged and the partial data is kept. No follow-up request is made.
#[must_use]
pub fn normalize_batch<'a, I>(pages: I, index: &AppIndex) -> AppMap
where
    I: IntoIterator<Item = &'a RewardItemsPage>,
{
    pages.into_iter().fold(AppMap::new(), |acc, page| {
        if page.is_truncated() {
            tracing::warn!(
                count = page.count,
                total_count = page.total_count,
                "reward item batch is paginated upstream — remaining items were not fetched"
            );
        }
        merge_page(acc, page, index)
    })
}

/// Reshapes one API definition into an [`ItemRecord`].
///
/// `app_url` is the owning app's canonical Points Shop URL.
#[must_use]
pub fn normalize_item(definition: &RewardItemDefinition, app_url: &str) -> ItemRecord {
    let appid = definition.appid.to_string();

    // `item_title` only when `item_name` is empty.
    let (name, image_file) = match &definition.community_item_data {
        Some(data) => {
            let name = if data.item_name.is_empty() {
                data.item_title.clone()
            } else {
                data.item_name.clone()
            };
            (name, data.item_image_large.as_str())
        }
        None => (String::new(), ""),
    };

    let derived = derive(
        definition.community_item_class,
        app_url,
        &appid,
        image_file,
    );

    ItemRecord {
        name,
        item_class: definition.community_item_class,
        cost: definition.point_cost.clone(),
        item_type: derived.item_type,
        points_shop_url: derived.points_shop_url,
        image_url: derived.image_url,
    }
}

fn new_record(appid: &AppId, index: &AppIndex) -> ApplicationRecord {
    if let Some(entry) = index.get(appid) {
        return ApplicationRecord::new(
            appid.clone(),
            entry.name.clone(),
            entry.points_shop_url.clone(),
        );
    }
    tracing::debug!(appid = %appid, "app not in index — naming record after its id");
    ApplicationRecord::new(
        appid.clone(),
        appid.to_string(),
        points_shop_url(appid.as_str()),
    )
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
