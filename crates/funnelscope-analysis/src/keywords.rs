//! Keyword density analysis against a list of target keywords.

use serde::{Deserialize, Serialize};

use crate::text::{count_occurrences, word_count};

/// Densities below this percentage are `low`.
pub const LOW_DENSITY_PCT: f64 = 1.0;
/// Densities above this percentage are `high`.
pub const HIGH_DENSITY_PCT: f64 = 3.0;

pub(crate) const NO_KEYWORDS_MESSAGE: &str = "No target keywords provided";
pub(crate) const KEYWORDS_GOOD: &str = "Keyword optimization looks good! Maintain natural usage.";

/// Appended to every keyword report regardless of per-keyword status.
pub const GENERAL_SEO_SUGGESTIONS: [&str; 4] = [
    "Include target keywords in the first 100 words",
    "Use keywords in headings (H1, H2, H3)",
    "Add keywords to meta title and description",
    "Use semantic variations of your keywords",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordStatus {
    Low,
    Good,
    High,
}

impl KeywordStatus {
    /// Bucket a density percentage. Both boundaries (1% and 3%) are `Good`.
    #[must_use]
    pub fn from_density(density: f64) -> Self {
        if density < LOW_DENSITY_PCT {
            KeywordStatus::Low
        } else if density > HIGH_DENSITY_PCT {
            KeywordStatus::High
        } else {
            KeywordStatus::Good
        }
    }
}

impl std::fmt::Display for KeywordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordStatus::Low => write!(f, "low"),
            KeywordStatus::Good => write!(f, "good"),
            KeywordStatus::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub keyword: String,
    pub count: usize,
    /// Percentage of total words, rounded to two decimals.
    pub density: f64,
    pub status: KeywordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub optimized: bool,
    pub keyword_analysis: Vec<KeywordRecord>,
    pub suggestions: Vec<String>,
}

/// Outcome of keyword analysis. An empty keyword list is reported as
/// [`KeywordOptimization::NoKeywords`] rather than as a failing report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeywordOptimization {
    NoKeywords { message: String },
    Analyzed(KeywordReport),
}

impl KeywordOptimization {
    #[must_use]
    pub fn optimized(&self) -> bool {
        match self {
            KeywordOptimization::NoKeywords { .. } => false,
            KeywordOptimization::Analyzed(report) => report.optimized,
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&KeywordReport> {
        match self {
            KeywordOptimization::NoKeywords { .. } => None,
            KeywordOptimization::Analyzed(report) => Some(report),
        }
    }
}

/// Measure keyword density in `text` for each target keyword.
///
/// Counts are case-insensitive substring counts; density is
/// `100 * count / total_words`, or 0 for text without words.
#[must_use]
pub fn analyze_keyword_optimization<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
) -> KeywordOptimization {
    if keywords.is_empty() {
        tracing::debug!("no target keywords supplied");
        return KeywordOptimization::NoKeywords {
            message: NO_KEYWORDS_MESSAGE.to_string(),
        };
    }

    let lower = text.to_lowercase();
    let total_words = word_count(text);

    let keyword_analysis: Vec<KeywordRecord> = keywords
        .iter()
        .map(|kw| {
            let keyword = kw.as_ref();
            let count = count_occurrences(&lower, &keyword.to_lowercase());
            let density = density_pct(count, total_words);
            KeywordRecord {
                keyword: keyword.to_string(),
                count,
                density: round2(density),
                status: KeywordStatus::from_density(density),
            }
        })
        .collect();

    let mut suggestions: Vec<String> = keyword_analysis
        .iter()
        .filter_map(|kw| match kw.status {
            KeywordStatus::Low => Some(format!(
                "Increase usage of '{}' (current: {} times, {}%)",
                kw.keyword,
                kw.count,
                percent_label(kw.density)
            )),
            KeywordStatus::High => Some(format!(
                "Reduce usage of '{}' to avoid keyword stuffing (current: {} times, {}%)",
                kw.keyword,
                kw.count,
                percent_label(kw.density)
            )),
            KeywordStatus::Good => None,
        })
        .collect();

    if suggestions.is_empty() {
        suggestions.push(KEYWORDS_GOOD.to_string());
    }
    suggestions.extend(GENERAL_SEO_SUGGESTIONS.iter().map(ToString::to_string));

    let optimized = keyword_analysis
        .iter()
        .all(|kw| kw.status == KeywordStatus::Good);

    KeywordOptimization::Analyzed(KeywordReport {
        optimized,
        keyword_analysis,
        suggestions,
    })
}

#[allow(clippy::cast_precision_loss)]
fn density_pct(count: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    100.0 * count as f64 / total_words as f64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two decimals with trailing zeros dropped, keeping at least one: `4.0`,
/// `0.5`, `3.33`.
fn percent_label(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
