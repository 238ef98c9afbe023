use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_CATALOG_URL: &str = "https://www.steamcardexchange.net/index.php?backgroundviewer";
const DEFAULT_APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";
const DEFAULT_REWARDS_URL: &str =
    "https://api.steampowered.com/ILoyaltyRewardsService/QueryRewardItems/v1/?count=1000";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive = |var: &str, default: &str| -> Result<NonZeroUsize, ConfigError> {
        or_default(var, default)
            .parse::<NonZeroUsize>()
            .map_err(|e| invalid(var, format!("{e} (must be at least 1)")))
    };

    let log_level = or_default("POINTSHOP_LOG_LEVEL", "info");
    let catalog_url = or_default("POINTSHOP_CATALOG_URL", DEFAULT_CATALOG_URL);
    let app_list_url = or_default("POINTSHOP_APP_LIST_URL", DEFAULT_APP_LIST_URL);
    let rewards_url = or_default("POINTSHOP_REWARDS_URL", DEFAULT_REWARDS_URL);

    let item_classes = parse_item_classes(&or_default("POINTSHOP_ITEM_CLASSES", "15,14,13,11,3"))
        .map_err(|reason| invalid("POINTSHOP_ITEM_CLASSES", reason))?;

    let batch_limit = parse_positive("POINTSHOP_BATCH_LIMIT", "400")?;
    let max_pages = parse_positive("POINTSHOP_MAX_PAGES", "500")?.get();
    let request_timeout_secs = parse_u64("POINTSHOP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("POINTSHOP_USER_AGENT", "pointshop/0.1 (points-shop-search)");
    let output_dir = PathBuf::from(or_default("POINTSHOP_OUTPUT_DIR", "./docs"));

    Ok(AppConfig {
        log_level,
        catalog_url,
        app_list_url,
        rewards_url,
        item_classes,
        batch_limit,
        max_pages,
        request_timeout_secs,
        user_agent,
        output_dir,
    })
}

/// Parse a comma-separated list of item class codes, e.g. `"15,14,3"`.
///
/// Blank segments are ignored, so an empty string yields an empty list.
fn parse_item_classes(raw: &str) -> Result<Vec<i32>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|e| format!("\"{s}\" is not an item class code: {e}"))
        })
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
