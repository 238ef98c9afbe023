//! Command handlers for the CLI.
//!
//! Batch collection tolerates individual request failures (they are logged
//! by the client and their apps are missing from the output). Cursor
//! collection is all-or-nothing: any failure aborts the run before the
//! lookup table is written.

use std::path::Path;

use anyhow::Context;
use pointshop_core::{total_items, AppConfig, AppMap};
use pointshop_scraper::{
    plan, plan_app_list, with_item_classes, BatchPlan, IdStrategy, Identity, PatternId,
    RewardsClient, DEFAULT_OPTION_SELECTOR,
};

use crate::output;

pub(crate) fn build_rewards_client(config: &AppConfig) -> anyhow::Result<RewardsClient> {
    RewardsClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_pages,
    )
    .map_err(|e| anyhow::anyhow!("failed to build rewards client: {e}"))
}

/// Identity mapping unless a pattern is given.
pub(crate) fn id_strategy(pattern: Option<&str>) -> anyhow::Result<Box<dyn IdStrategy>> {
    match pattern {
        Some(p) => {
            let strategy =
                PatternId::new(p).with_context(|| format!("invalid --id-pattern '{p}'"))?;
            Ok(Box::new(strategy))
        }
        None => Ok(Box::new(Identity)),
    }
}

/// Scrapes the catalog page and plans the batched queries.
async fn scrape_plan(
    client: &RewardsClient,
    config: &AppConfig,
    id_pattern: Option<&str>,
) -> anyhow::Result<BatchPlan> {
    let strategy = id_strategy(id_pattern)?;
    let entries = client
        .fetch_catalog(&config.catalog_url, DEFAULT_OPTION_SELECTOR)
        .await
        .with_context(|| format!("failed to fetch catalog {}", config.catalog_url))?;

    let base_url = with_item_classes(&config.rewards_url, &config.item_classes);
    Ok(plan(
        entries.iter().map(|e| (e.value.as_str(), e.label.as_str())),
        &base_url,
        config.batch_limit,
        strategy.as_ref(),
    ))
}

/// Writes `map` as `data.json` and `data.js` in the output directory.
pub(crate) fn write_app_map(config: &AppConfig, map: &AppMap) -> anyhow::Result<()> {
    let json = output::to_pretty_json(map)?;
    output::write_file(&config.data_json_path(), &json)?;
    output::write_file(&config.data_js_path(), &output::render_data_js(&json))?;
    Ok(())
}

fn summarize(map: &AppMap) {
    println!(
        "collected {} items across {} apps",
        total_items(map),
        map.len()
    );
}

/// `pointshop plan`
pub(crate) async fn run_plan(
    config: &AppConfig,
    output_path: Option<&Path>,
    id_pattern: Option<&str>,
) -> anyhow::Result<()> {
    let client = build_rewards_client(config)?;
    let batch = scrape_plan(&client, config, id_pattern).await?;

    let path = output_path.map_or_else(|| config.config_path(), Path::to_path_buf);
    output::write_json(&path, &batch)?;
    println!(
        "planned {} requests for {} apps -> {}",
        batch.urls.len(),
        batch.app.len(),
        path.display()
    );
    Ok(())
}

/// `pointshop collect`
pub(crate) async fn run_collect(
    config: &AppConfig,
    saved_plan: Option<&Path>,
    id_pattern: Option<&str>,
) -> anyhow::Result<()> {
    let client = build_rewards_client(config)?;

    let batch: BatchPlan = match saved_plan {
        Some(path) => {
            if id_pattern.is_some() {
                tracing::warn!("--id-pattern is ignored when --config is given");
            }
            output::read_json(path)?
        }
        None => {
            let batch = scrape_plan(&client, config, id_pattern).await?;
            output::write_json(&config.config_path(), &batch)?;
            batch
        }
    };

    if batch.urls.is_empty() {
        tracing::warn!("plan has no requests; writing an empty lookup table");
    }

    let map = client.collect_batch(&batch).await;
    write_app_map(config, &map)?;
    summarize(&map);
    Ok(())
}

/// `pointshop collect-all`
pub(crate) async fn run_collect_all(config: &AppConfig) -> anyhow::Result<()> {
    let client = build_rewards_client(config)?;

    let apps = client
        .fetch_app_list(&config.app_list_url)
        .await
        .with_context(|| format!("failed to fetch app list {}", config.app_list_url))?;
    let batch = plan_app_list(&apps, &config.rewards_url, config.batch_limit);
    output::write_json(&config.config_path(), &batch)?;

    let map = client
        .collect_cursor(&config.rewards_url, &batch.app, AppMap::new())
        .await
        .context("cursor collection failed; no lookup table was written")?;

    write_app_map(config, &map)?;
    summarize(&map);
    Ok(())
}

/// `pointshop export`
pub(crate) fn run_export(
    config: &AppConfig,
    input: Option<&Path>,
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    let input = input.map_or_else(|| config.data_json_path(), Path::to_path_buf);
    let output_path = output_path.map_or_else(|| config.data_js_path(), Path::to_path_buf);

    let map: AppMap = output::read_json(&input)?;
    let json = output::to_pretty_json(&map)?;
    output::write_file(&output_path, &output::render_data_js(&json))?;
    summarize(&map);
    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
