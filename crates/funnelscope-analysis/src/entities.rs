//! Structural statistics: word and sentence counts, URLs, emails and
//! numeric claims.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::word_count;

/// Maximum URL samples kept in [`EntityStats::urls`].
pub const MAX_URL_SAMPLES: usize = 10;
/// Maximum statistic samples kept in [`EntityStats::statistics`].
pub const MAX_STATISTIC_SAMPLES: usize = 20;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[A-Za-z0-9\-._~:/?#\[\]@!$&'()*+,;=]|%[0-9A-Fa-f]{2})+")
        .expect("valid regex")
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});
// Percentages, dollar amounts and multipliers: `42%`, `3.5%`, `$100`, `10x`.
static STATISTIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]+%|\b[0-9]+\.[0-9]+%|\$[0-9]+|[0-9]+x\b").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityStats {
    pub total_words: usize,
    pub total_sentences: usize,
    pub urls_count: usize,
    pub emails_count: usize,
    pub statistics_count: usize,
    /// First [`MAX_URL_SAMPLES`] URLs in order of appearance.
    pub urls: Vec<String>,
    /// First [`MAX_STATISTIC_SAMPLES`] statistic tokens in order of appearance.
    pub statistics: Vec<String>,
    pub avg_words_per_sentence: f64,
}

/// Extract entity statistics from raw text.
///
/// Counts are always the full match totals; only the sample lists are capped.
#[must_use]
pub fn extract_entities(text: &str) -> EntityStats {
    let (urls_count, urls) = count_and_sample(&URL_RE, text, MAX_URL_SAMPLES);
    let emails_count = EMAIL_RE.find_iter(text).count();
    let (statistics_count, statistics) =
        count_and_sample(&STATISTIC_RE, text, MAX_STATISTIC_SAMPLES);

    let total_words = word_count(text);
    let total_sentences = sentence_count(text);

    #[allow(clippy::cast_precision_loss)]
    let avg_words_per_sentence = total_words as f64 / total_sentences.max(1) as f64;

    EntityStats {
        total_words,
        total_sentences,
        urls_count,
        emails_count,
        statistics_count,
        urls,
        statistics,
        avg_words_per_sentence,
    }
}

fn count_and_sample(re: &Regex, text: &str, cap: usize) -> (usize, Vec<String>) {
    let mut count = 0;
    let mut samples = Vec::new();
    for m in re.find_iter(text) {
        count += 1;
        if samples.len() < cap {
            samples.push(m.as_str().to_string());
        }
    }
    (count, samples)
}

/// Segments between runs of `.`, `!` and `?` that contain non-whitespace.
fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}
