mod analyze;
mod content;
mod library;
mod persona;
mod render;

use clap::{Parser, Subcommand};
use funnelscope_core::AppConfig;
use funnelscope_store::JsonFileStore;
use tracing_subscriber::EnvFilter;

use crate::analyze::{AnalyzeArgs, CompetitorArgs};
use crate::library::{KeysCommands, SavedCategory};
use crate::persona::PersonaCommands;

#[derive(Debug, Parser)]
#[command(name = "funnelscope")]
#[command(about = "Score marketing content by funnel stage, keywords, structure and persona fit")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze your own content
    Analyze(AnalyzeArgs),
    /// Analyze a competitor's content and derive strengths and opportunities
    Competitor(CompetitorArgs),
    /// Manage personas and score content against them
    Persona {
        #[command(subcommand)]
        command: PersonaCommands,
    },
    /// Show persona coverage per funnel stage and what to create next
    Gaps {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List saved analyses, newest first
    Saved {
        #[arg(value_enum)]
        category: SavedCategory,

        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,

        /// Print the saved records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe the three funnel stages
    Stages,
    /// Manage saved AI provider keys
    Keys {
        #[command(subcommand)]
        command: KeysCommands,
    },
}

/// Load config, install the log subscriber and point the store at the data
/// directory. Commands that need none of this skip it.
fn runtime() -> anyhow::Result<(AppConfig, JsonFileStore)> {
    let config = funnelscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let store = JsonFileStore::new(config.data_dir.clone());
    tracing::debug!(data_dir = %store.data_dir().display(), env = %config.env, "config loaded");
    Ok((config, store))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stages) => print!("{}", render::stages()?),
        Some(Commands::Analyze(args)) => {
            let (config, store) = runtime()?;
            analyze::run_analyze(&config, &store, args).await?;
        }
        Some(Commands::Competitor(args)) => {
            let (config, store) = runtime()?;
            analyze::run_competitor(&config, &store, args).await?;
        }
        Some(Commands::Persona { command }) => {
            let (config, store) = runtime()?;
            persona::run(&config, &store, command).await?;
        }
        Some(Commands::Gaps { json }) => {
            let (_, store) = runtime()?;
            library::run_gaps(&store, json)?;
        }
        Some(Commands::Saved {
            category,
            limit,
            json,
        }) => {
            let (_, store) = runtime()?;
            library::run_saved(&store, category, limit, json)?;
        }
        Some(Commands::Keys { command }) => {
            let (_, store) = runtime()?;
            library::run_keys(&store, command)?;
        }
        None => {
            let (_, store) = runtime()?;
            library::run_status(&store)?;
        }
    }

    Ok(())
}
