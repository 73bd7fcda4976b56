use std::path::{Path, PathBuf};
use std::time::Duration;

use funnelscope_core::{AppConfig, Heading};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::html::extract_html;
use crate::markdown::markdown_headings;

/// Label used for content pasted directly rather than fetched or read.
pub const DIRECT_TEXT_LABEL: &str = "Direct Text Input";

const TEXT_EXTENSIONS: [&str; 4] = ["txt", "text", "md", "markdown"];

/// Where a piece of content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Url(String),
    File(PathBuf),
    Text(String),
}

impl ContentSource {
    /// Human-readable origin stored alongside analyses.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ContentSource::Url(url) => url.clone(),
            ContentSource::File(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
            ContentSource::Text(_) => DIRECT_TEXT_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub content: String,
    pub headings: Vec<Heading>,
    pub source: String,
}

/// Result of an extraction as seen by callers that must not fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Success(ExtractedContent),
    Failure { error: String },
}

impl ExtractionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionOutcome::Success(_))
    }

    #[must_use]
    pub fn into_result(self) -> Result<ExtractedContent, String> {
        match self {
            ExtractionOutcome::Success(content) => Ok(content),
            ExtractionOutcome::Failure { error } => Err(error),
        }
    }
}

impl From<Result<ExtractedContent, ExtractError>> for ExtractionOutcome {
    fn from(result: Result<ExtractedContent, ExtractError>) -> Self {
        match result {
            Ok(content) => ExtractionOutcome::Success(content),
            Err(e) => ExtractionOutcome::Failure {
                error: e.to_string(),
            },
        }
    }
}

/// Reads content from text, local files and web pages.
pub struct ContentExtractor {
    client: Client,
}

impl ContentExtractor {
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ExtractError> {
        Self::new(config.fetch_timeout_secs, &config.user_agent)
    }

    /// Fetch a page and pull out its visible text and headings.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::Http`] on network failure or timeout.
    /// - [`ExtractError::UnexpectedStatus`] for any non-2xx response.
    /// - [`ExtractError::Empty`] if the page has no visible text.
    pub async fn fetch_url(&self, url: &str) -> Result<ExtractedContent, ExtractError> {
        tracing::info!(url, "fetching page");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "page fetch failed");
            return Err(ExtractError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let page = extract_html(&body);
        if page.text.is_empty() {
            return Err(ExtractError::Empty {
                source_label: url.to_string(),
            });
        }

        tracing::debug!(
            url,
            chars = page.text.chars().count(),
            headings = page.headings.len(),
            "page extracted"
        );
        Ok(ExtractedContent {
            content: page.text,
            headings: page.headings,
            source: url.to_string(),
        })
    }

    /// Read a plain-text or markdown file. Markdown `#` headings are kept as
    /// headings; the text itself is returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::UnsupportedFormat`] for anything but `.txt`/`.md`.
    /// - [`ExtractError::Io`] if the file cannot be read as UTF-8.
    /// - [`ExtractError::Empty`] if the file holds only whitespace.
    pub fn read_file(path: &Path) -> Result<ExtractedContent, ExtractError> {
        let path_str = path.display().to_string();
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| TEXT_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
        if !supported {
            return Err(ExtractError::UnsupportedFormat { path: path_str });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Err(ExtractError::Empty {
                source_label: path_str,
            });
        }

        tracing::debug!(path = %path_str, chars = content.chars().count(), "file read");
        Ok(ExtractedContent {
            headings: markdown_headings(&content),
            content,
            source: ContentSource::File(path.to_path_buf()).label(),
        })
    }

    /// Wrap pasted text. Pasted text carries no headings.
    #[must_use]
    pub fn from_text(text: &str) -> ExtractedContent {
        ExtractedContent {
            content: text.to_string(),
            headings: Vec::new(),
            source: DIRECT_TEXT_LABEL.to_string(),
        }
    }

    /// # Errors
    ///
    /// Propagates the error of whichever source is read.
    pub async fn extract(&self, source: &ContentSource) -> Result<ExtractedContent, ExtractError> {
        match source {
            ContentSource::Url(url) => self.fetch_url(url).await,
            ContentSource::File(path) => Self::read_file(path),
            ContentSource::Text(text) => Ok(Self::from_text(text)),
        }
    }

    /// Like [`Self::extract`], but failures come back as
    /// [`ExtractionOutcome::Failure`] carrying the error message.
    pub async fn extract_outcome(&self, source: &ContentSource) -> ExtractionOutcome {
        let result = self.extract(source).await;
        if let Err(e) = &result {
            tracing::warn!(source = %source.label(), error = %e, "extraction failed");
        }
        result.into()
    }
}
