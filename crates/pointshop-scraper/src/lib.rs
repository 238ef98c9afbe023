pub mod catalog;
pub mod category;
pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod planner;
pub mod types;

pub use catalog::{extract_catalog_entries, CatalogEntry, DEFAULT_OPTION_SELECTOR};
pub use client::RewardsClient;
pub use error::ScraperError;
pub use normalize::{merge_page, normalize_batch, normalize_item};
pub use planner::{
    plan, plan_app_list, with_item_classes, AppIndex, AppIndexEntry, BatchPlan, IdStrategy,
    Identity, PatternId,
};
pub use types::{AppListEntry, RewardItemDefinition, RewardItemsPage};
