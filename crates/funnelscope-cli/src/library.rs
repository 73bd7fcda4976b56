//! Saved data: listings, gap analysis, API keys and the status overview.

use clap::{Subcommand, ValueEnum};
use funnelscope_analysis::{analyze_gaps, CompetitorAnalysis, ContentAnalysis, PersonaAnalysis};
use funnelscope_store::{
    load_api_keys, load_list, load_personas, save_api_keys, Category, JsonFileStore,
};
use serde::Serialize;

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SavedCategory {
    /// Your own content analyses
    Analyses,
    /// Competitor analyses
    Competitor,
    /// Persona analyses
    Persona,
}

#[derive(Debug, Subcommand)]
pub enum KeysCommands {
    /// Save provider keys; omitted providers keep their current key
    Set {
        #[arg(long)]
        openai: Option<String>,

        #[arg(long)]
        gemini: Option<String>,

        #[arg(long)]
        claude: Option<String>,
    },
    /// Show which providers have a saved key
    Show,
}

/// Newest first, at most `limit` entries.
fn newest_first<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    items.reverse();
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

fn print_records<T: Serialize>(
    records: &[T],
    json: bool,
    summary: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else if records.is_empty() {
        println!("nothing saved yet");
    } else {
        for record in records {
            println!("{}", summary(record));
        }
    }
    Ok(())
}

pub(crate) fn run_saved(
    store: &JsonFileStore,
    category: SavedCategory,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    match category {
        SavedCategory::Analyses => {
            let items: Vec<ContentAnalysis> = load_list(store, Category::Analyses)?;
            print_records(&newest_first(items, limit), json, render::content_summary)
        }
        SavedCategory::Competitor => {
            let items: Vec<CompetitorAnalysis> = load_list(store, Category::CompetitorAnalyses)?;
            print_records(&newest_first(items, limit), json, render::competitor_summary)
        }
        SavedCategory::Persona => {
            let items: Vec<PersonaAnalysis> = load_list(store, Category::PersonaAnalyses)?;
            print_records(&newest_first(items, limit), json, render::persona_analysis_summary)
        }
    }
}

pub(crate) fn run_gaps(store: &JsonFileStore, json: bool) -> anyhow::Result<()> {
    let analyses: Vec<PersonaAnalysis> = load_list(store, Category::PersonaAnalyses)?;
    if analyses.is_empty() && !json {
        println!("no persona analyses yet; run `persona analyze --save` first");
        return Ok(());
    }

    let report = analyze_gaps(&analyses);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::gap_report(&report)?);
    }
    Ok(())
}

pub(crate) fn run_keys(store: &JsonFileStore, command: KeysCommands) -> anyhow::Result<()> {
    let mut keys = load_api_keys(store)?;
    match command {
        KeysCommands::Set {
            openai,
            gemini,
            claude,
        } => {
            if openai.is_none() && gemini.is_none() && claude.is_none() {
                anyhow::bail!("pass at least one of --openai, --gemini or --claude");
            }
            if let Some(k) = openai {
                keys.openai = k.trim().to_string();
            }
            if let Some(k) = gemini {
                keys.gemini = k.trim().to_string();
            }
            if let Some(k) = claude {
                keys.claude = k.trim().to_string();
            }
            save_api_keys(store, &keys)?;
            println!("API keys saved");
        }
        KeysCommands::Show => {
            let state = |k: &str| if k.trim().is_empty() { "not set" } else { "set" };
            println!("openai: {}", state(&keys.openai));
            println!("gemini: {}", state(&keys.gemini));
            println!("claude: {}", state(&keys.claude));
        }
    }
    Ok(())
}

/// Counts of everything saved so far.
pub(crate) fn run_status(store: &JsonFileStore) -> anyhow::Result<()> {
    let analyses: Vec<serde_json::Value> = load_list(store, Category::Analyses)?;
    let competitor: Vec<serde_json::Value> = load_list(store, Category::CompetitorAnalyses)?;
    let personas = load_personas(store)?;
    let persona_analyses: Vec<serde_json::Value> = load_list(store, Category::PersonaAnalyses)?;

    println!("data directory: {}", store.data_dir().display());
    println!("saved analyses: {}", analyses.len());
    println!("competitor analyses: {}", competitor.len());
    println!("personas: {}", personas.len());
    println!("persona analyses: {}", persona_analyses.len());
    println!("run `funnelscope --help` for commands");
    Ok(())
}
