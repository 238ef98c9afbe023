use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod collect;
mod output;

#[derive(Debug, Parser)]
#[command(name = "pointshop")]
#[command(about = "Builds the Steam Points Shop search data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the catalog page and write the batched request plan
    Plan {
        /// Where to write the plan (defaults to `<output dir>/config.json`)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Regex used to pull the app id out of each catalog value
        #[arg(long)]
        id_pattern: Option<String>,
    },
    /// Run the batched queries and write `data.json` and `data.js`
    Collect {
        /// Reuse a saved plan instead of scraping the catalog page
        #[arg(long)]
        config: Option<PathBuf>,
        /// Regex used to pull the app id out of each catalog value
        #[arg(long)]
        id_pattern: Option<String>,
    },
    /// Follow the reward item cursor across every app in the Steam app list
    CollectAll,
    /// Wrap an existing `data.json` as the `data.js` script
    Export {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = pointshop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Plan { output, id_pattern }) => {
            collect::run_plan(&config, output.as_deref(), id_pattern.as_deref()).await?;
        }
        Some(Commands::Collect {
            config: saved,
            id_pattern,
        }) => {
            collect::run_collect(&config, saved.as_deref(), id_pattern.as_deref()).await?;
        }
        Some(Commands::CollectAll) => collect::run_collect_all(&config).await?,
        Some(Commands::Export { input, output }) => {
            collect::run_export(&config, input.as_deref(), output.as_deref())?;
        }
        None => println!("pointshop: run with --help to list commands"),
    }

    Ok(())
}
