use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Runtime settings for the scrape → query → normalize → export pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Catalog page whose `<select>` options list candidate apps.
    pub catalog_url: String,
    /// `ISteamApps/GetAppList/v2` endpoint used by the cursor-following run.
    pub app_list_url: String,
    /// Base `QueryRewardItems` URL; identifiers and cursors are appended to it.
    pub rewards_url: String,
    /// `community_item_class` codes requested in batch mode. Empty means all.
    pub item_classes: Vec<i32>,
    pub batch_limit: NonZeroUsize,
    /// Upper bound on pages followed in cursor mode.
    pub max_pages: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Path of the saved batch plan.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.output_dir.join("config.json")
    }

    /// Path of the merged JSON lookup table.
    #[must_use]
    pub fn data_json_path(&self) -> PathBuf {
        self.output_dir.join("data.json")
    }

    /// Path of the script wrapper loaded by the search page.
    #[must_use]
    pub fn data_js_path(&self) -> PathBuf {
        self.output_dir.join("data.js")
    }
}
