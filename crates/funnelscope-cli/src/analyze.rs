//! `analyze` and `competitor` command handlers.

use clap::Args;
use funnelscope_analysis::{CompetitorAnalysis, ContentAnalysis};
use funnelscope_core::{AppConfig, Heading};
use funnelscope_extract::{AiAdvisor, ContentSource};
use funnelscope_store::{append, load_api_keys, Category, JsonFileStore};
use serde_json::json;

use crate::content::{clean_keywords, ensure_min_length, load_content, merge_headings, ContentArgs};
use crate::render;

/// Source label for competitor text pasted on the command line.
const COMPETITOR_TEXT_LABEL: &str = "Competitor Direct Input";

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Target keyword; repeat the flag or separate with commas
    #[arg(long = "keyword", value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Extra heading as "h2:Text"; repeatable
    #[arg(long = "heading")]
    pub headings: Vec<Heading>,

    /// Append the analysis to saved analyses
    #[arg(long)]
    pub save: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,

    /// Also ask the AI advisor to follow this instruction over the content
    #[arg(long)]
    pub ai: Option<String>,
}

#[derive(Debug, Args)]
pub struct CompetitorArgs {
    /// Competitor name
    #[arg(long)]
    pub name: String,

    #[command(flatten)]
    pub content: ContentArgs,

    /// Keyword to measure on the competitor page; repeat or comma-separate
    #[arg(long = "keyword", value_delimiter = ',')]
    pub keywords: Vec<String>,

    /// Extra heading as "h2:Text"; repeatable
    #[arg(long = "heading")]
    pub headings: Vec<Heading>,

    /// Append the analysis to saved competitor analyses
    #[arg(long)]
    pub save: bool,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run every analyzer over the user's own content.
///
/// # Errors
///
/// Returns an error if the content cannot be extracted, is shorter than the
/// configured minimum, or the analysis cannot be saved.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    store: &JsonFileStore,
    args: AnalyzeArgs,
) -> anyhow::Result<()> {
    let source = args.content.into_source()?;
    let extracted = load_content(config, &source).await?;
    ensure_min_length(&extracted.content, config.min_content_chars)?;

    let keywords = clean_keywords(args.keywords);
    let headings = merge_headings(extracted.headings, args.headings);
    let analysis = ContentAnalysis::run(&extracted.source, &extracted.content, &headings, &keywords);
    tracing::info!(
        source = %analysis.source,
        stage = %analysis.funnel_analysis.primary_stage,
        words = analysis.entity_analysis.total_words,
        "content analyzed"
    );

    let ai_insights = match args.ai {
        Some(prompt) => {
            let keys = load_api_keys(store)?;
            let advisor = AiAdvisor::from_config(config, keys.openai())?;
            Some(advisor.advise(&extracted.content, &prompt).await)
        }
        None => None,
    };

    if args.json {
        let value = match &ai_insights {
            Some(insights) => json!({ "analysis": analysis, "ai_insights": insights }),
            None => serde_json::to_value(&analysis)?,
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render::content_analysis(&analysis)?);
        if let Some(insights) = &ai_insights {
            print!("{}", render::ai_insights(insights));
        }
    }

    if args.save {
        let total = append(store, Category::Analyses, &analysis)?;
        eprintln!("saved analysis ({total} total)");
    }
    Ok(())
}

/// Analyze a competitor page and report strengths and opportunities.
///
/// # Errors
///
/// Returns an error if the name is blank, the content cannot be extracted or
/// is too short, or the analysis cannot be saved.
pub(crate) async fn run_competitor(
    config: &AppConfig,
    store: &JsonFileStore,
    args: CompetitorArgs,
) -> anyhow::Result<()> {
    let name = args.name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("competitor name must not be empty");
    }

    let source = args.content.into_source()?;
    let extracted = load_content(config, &source).await?;
    ensure_min_length(&extracted.content, config.min_content_chars)?;

    let label = match source {
        ContentSource::Text(_) => COMPETITOR_TEXT_LABEL.to_string(),
        _ => extracted.source.clone(),
    };
    let keywords = clean_keywords(args.keywords);
    let headings = merge_headings(extracted.headings, args.headings);
    let analysis = CompetitorAnalysis::run(&name, &label, &extracted.content, &headings, &keywords);
    tracing::info!(
        competitor = %analysis.competitor_name,
        stage = %analysis.funnel_analysis.primary_stage,
        "competitor analyzed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", render::competitor_analysis(&analysis)?);
    }

    if args.save {
        let total = append(store, Category::CompetitorAnalyses, &analysis)?;
        eprintln!("saved competitor analysis ({total} total)");
    }
    Ok(())
}
