//! Persona library management and persona-fit analysis.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use funnelscope_analysis::PersonaAnalysis;
use funnelscope_core::{load_personas_file, AppConfig, AssetType, NewPersona};
use funnelscope_store::{
    add_personas, append, delete_persona, load_personas, Category, JsonFileStore,
};

use crate::content::{load_content, ContentArgs};
use crate::render;

/// Sub-commands available under `persona`.
#[derive(Debug, Subcommand)]
pub enum PersonaCommands {
    /// Create one persona
    Add {
        #[arg(long)]
        name: String,

        /// Role or job title
        #[arg(long)]
        role: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Pain point; repeatable
        #[arg(long = "pain-point")]
        pain_points: Vec<String>,

        /// Goal; repeatable
        #[arg(long = "goal")]
        goals: Vec<String>,
    },
    /// Bulk-import personas from a CSV, Excel (.xlsx/.xls) or YAML file
    Import {
        path: PathBuf,
    },
    /// List saved personas
    List {
        #[arg(long)]
        json: bool,
    },
    /// Delete a persona by id
    Delete {
        id: u32,
    },
    /// Score a content asset against one persona
    Analyze(PersonaAnalyzeArgs),
}

#[derive(Debug, Args)]
pub struct PersonaAnalyzeArgs {
    /// Persona id (see `persona list`)
    #[arg(long)]
    pub id: u32,

    /// Blog Post, Case Study, Solution Page, Webinar, One-Pager, White Paper or Other
    #[arg(long)]
    pub asset_type: AssetType,

    #[command(flatten)]
    pub content: ContentArgs,

    /// Append the analysis to saved persona analyses
    #[arg(long)]
    pub save: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

pub(crate) async fn run(
    config: &AppConfig,
    store: &JsonFileStore,
    command: PersonaCommands,
) -> anyhow::Result<()> {
    match command {
        PersonaCommands::Add {
            name,
            role,
            description,
            pain_points,
            goals,
        } => {
            let persona = NewPersona::from_form(
                &name,
                &role,
                &description,
                &pain_points.join("\n"),
                &goals.join("\n"),
            )?;
            let added = add_personas(store, vec![persona])?;
            for p in &added {
                println!("added persona {}: {} ({})", p.id, p.name, p.role);
            }
        }
        PersonaCommands::Import { path } => {
            let personas = load_personas_file(&path)?;
            if personas.is_empty() {
                anyhow::bail!("no personas found in {}", path.display());
            }
            let added = add_personas(store, personas)?;
            println!("imported {} personas from {}", added.len(), path.display());
        }
        PersonaCommands::List { json } => {
            let personas = load_personas(store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&personas)?);
            } else if personas.is_empty() {
                println!("no personas yet; add one with `persona add` or `persona import`");
            } else {
                for persona in &personas {
                    print!("{}", render::persona(persona)?);
                }
            }
        }
        PersonaCommands::Delete { id } => {
            if delete_persona(store, id)? {
                println!("deleted persona {id}");
            } else {
                anyhow::bail!("persona {id} not found");
            }
        }
        PersonaCommands::Analyze(args) => run_analyze(config, store, args).await?,
    }
    Ok(())
}

async fn run_analyze(
    config: &AppConfig,
    store: &JsonFileStore,
    args: PersonaAnalyzeArgs,
) -> anyhow::Result<()> {
    let persona = load_personas(store)?
        .into_iter()
        .find(|p| p.id == args.id)
        .ok_or_else(|| anyhow::anyhow!("persona {} not found", args.id))?;

    let source = args.content.into_source()?;
    let extracted = load_content(config, &source).await?;
    let analysis =
        PersonaAnalysis::run(&persona, args.asset_type, &extracted.source, &extracted.content);
    tracing::info!(
        persona = %persona.name,
        asset_type = %analysis.asset_type,
        stage = %analysis.funnel_stage,
        relevance = analysis.relevance.relevance_score,
        "persona analysis complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render::persona_analysis(&analysis)?);
    }

    if args.save {
        let total = append(store, Category::PersonaAnalyses, &analysis)?;
        eprintln!("saved persona analysis ({total} total)");
    }
    Ok(())
}
