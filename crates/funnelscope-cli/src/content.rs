//! Shared content-source arguments and loading.

use std::path::PathBuf;

use clap::Args;
use funnelscope_core::{AppConfig, Heading};
use funnelscope_extract::{ContentExtractor, ContentSource, ExtractedContent};

/// Exactly one content source per command.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ContentArgs {
    /// Fetch and analyze a web page
    #[arg(long)]
    pub url: Option<String>,

    /// Read a .txt or .md file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Analyze the given text as-is
    #[arg(long)]
    pub text: Option<String>,
}

impl ContentArgs {
    pub(crate) fn into_source(self) -> anyhow::Result<ContentSource> {
        match (self.url, self.file, self.text) {
            (Some(url), None, None) => Ok(ContentSource::Url(url)),
            (None, Some(path), None) => Ok(ContentSource::File(path)),
            (None, None, Some(text)) => Ok(ContentSource::Text(text)),
            _ => anyhow::bail!("exactly one of --url, --file or --text is required"),
        }
    }
}

/// Extract content, turning extraction failures into a user-facing error.
pub(crate) async fn load_content(
    config: &AppConfig,
    source: &ContentSource,
) -> anyhow::Result<ExtractedContent> {
    let extractor = ContentExtractor::from_config(config)?;
    extractor
        .extract_outcome(source)
        .await
        .into_result()
        .map_err(|error| anyhow::anyhow!("could not extract content: {error}"))
}

/// Content must be strictly longer than `min_chars` characters.
pub(crate) fn ensure_min_length(content: &str, min_chars: usize) -> anyhow::Result<()> {
    let chars = content.chars().count();
    if chars <= min_chars {
        anyhow::bail!(
            "content is too short to analyze ({chars} characters, more than {min_chars} required)"
        );
    }
    Ok(())
}

/// Extracted headings first, then any given on the command line.
pub(crate) fn merge_headings(extracted: Vec<Heading>, extra: Vec<Heading>) -> Vec<Heading> {
    let mut headings = extracted;
    headings.extend(extra.into_iter().filter(|h| !h.text.is_empty()));
    headings
}

/// Trim keywords and drop blanks; `--keyword "a, b"` and repeated flags both work.
pub(crate) fn clean_keywords(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}
