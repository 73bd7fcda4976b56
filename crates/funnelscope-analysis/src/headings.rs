//! Heading alignment: does heading vocabulary reappear in the body?
//!
//! The check is document-wide. A heading word counts as aligned if it
//! appears anywhere in the body, not only in the section under it.

use std::collections::HashSet;

use funnelscope_core::Heading;
use serde::{Deserialize, Serialize};

/// Average per-heading score needed for the content to count as aligned.
pub const ALIGNMENT_THRESHOLD: f64 = 3.0;
/// Fewer headings than this triggers the "add more sections" suggestion.
pub const MIN_HEADINGS: usize = 3;

pub(crate) const NO_HEADINGS_MESSAGE: &str = "No headings found in the content";
pub(crate) const ADD_HEADINGS_SUGGESTION: &str =
    "Add clear H1, H2, H3 headings to structure your content";
pub(crate) const MORE_SECTIONS_SUGGESTION: &str =
    "Add more headings to improve content structure (aim for 3-5 main sections)";
pub(crate) const REUSE_VOCABULARY_SUGGESTION: &str =
    "Ensure heading keywords appear in the content below each heading";
pub(crate) const STRUCTURE_GOOD: &str = "Content structure looks good!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingScore {
    pub heading: String,
    pub level: String,
    /// Distinct heading words found in the body.
    pub alignment_score: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingAlignmentResult {
    pub aligned: bool,
    /// Set only when no headings were supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub heading_analysis: Vec<HeadingScore>,
    /// `None` when there were no headings to score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    pub suggestions: Vec<String>,
}

/// Score how well `headings` are reflected in `text`.
///
/// With no headings the result is "not aligned" with a single suggestion to
/// add headings; nothing is scored.
#[must_use]
pub fn analyze_heading_alignment(text: &str, headings: &[Heading]) -> HeadingAlignmentResult {
    if headings.is_empty() {
        tracing::debug!("no headings supplied; skipping alignment scoring");
        return HeadingAlignmentResult {
            aligned: false,
            message: Some(NO_HEADINGS_MESSAGE.to_string()),
            heading_analysis: Vec::new(),
            average_score: None,
            suggestions: vec![ADD_HEADINGS_SUGGESTION.to_string()],
        };
    }

    let body = text.to_lowercase();
    let heading_analysis: Vec<HeadingScore> = headings
        .iter()
        .map(|h| HeadingScore {
            heading: h.text.clone(),
            level: h.level.clone(),
            alignment_score: heading_score(&h.text, &body),
        })
        .collect();

    let total: usize = heading_analysis.iter().map(|h| h.alignment_score).sum();
    #[allow(clippy::cast_precision_loss)]
    let average = total as f64 / heading_analysis.len() as f64;

    let mut suggestions = Vec::new();
    if headings.len() < MIN_HEADINGS {
        suggestions.push(MORE_SECTIONS_SUGGESTION.to_string());
    }
    if average < ALIGNMENT_THRESHOLD {
        suggestions.push(REUSE_VOCABULARY_SUGGESTION.to_string());
    }
    if suggestions.is_empty() {
        suggestions.push(STRUCTURE_GOOD.to_string());
    }

    HeadingAlignmentResult {
        aligned: average >= ALIGNMENT_THRESHOLD,
        message: None,
        heading_analysis,
        average_score: Some(average),
        suggestions,
    }
}

/// Distinct lowercased heading words that occur as substrings of `body`.
/// `body` must already be lowercased.
fn heading_score(heading: &str, body: &str) -> usize {
    let lower = heading.to_lowercase();
    lower
        .split_whitespace()
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|word| body.contains(word))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(text: &str) -> Heading {
        Heading::new("h2", text)
    }

    #[test]
    fn no_headings_returns_sentinel() {
        let result = analyze_heading_alignment("plenty of body text here", &[]);
        assert!(!result.aligned);
        assert_eq!(result.message.as_deref(), Some(NO_HEADINGS_MESSAGE));
        assert_eq!(result.suggestions, vec![ADD_HEADINGS_SUGGESTION]);
        assert!(result.heading_analysis.is_empty());
        assert!(result.average_score.is_none());
    }

    #[test]
    fn scores_count_distinct_words_found_anywhere_in_body() {
        let body = "Cloud costs keep rising. Budget planning helps. Teams save money.";
        let result = analyze_heading_alignment(body, &[h("Cloud Cloud budget teams unicorn")]);
        // cloud, budget, teams present; unicorn absent; duplicate cloud counted once
        assert_eq!(result.heading_analysis[0].alignment_score, 3);
        assert_eq!(result.heading_analysis[0].level, "h2");
    }

    #[test]
    fn well_aligned_structure_looks_good() {
        let body = "alpha beta gamma delta epsilon zeta eta theta iota";
        let headings = [
            h("alpha beta gamma"),
            h("delta epsilon zeta"),
            h("eta theta iota"),
        ];
        let result = analyze_heading_alignment(body, &headings);
        assert!(result.aligned);
        assert_eq!(result.average_score, Some(3.0));
        assert_eq!(result.suggestions, vec![STRUCTURE_GOOD]);
    }

    #[test]
    fn few_headings_and_low_alignment_fire_both_rules() {
        let result = analyze_heading_alignment("short body", &[h("Pricing plans")]);
        assert!(!result.aligned);
        assert_eq!(
            result.suggestions,
            vec![MORE_SECTIONS_SUGGESTION, REUSE_VOCABULARY_SUGGESTION]
        );
    }

    #[test]
    fn few_but_aligned_headings_only_suggest_more_sections() {
        let body = "one two three four";
        let result = analyze_heading_alignment(body, &[h("one two three four")]);
        assert!(result.aligned);
        assert_eq!(result.suggestions, vec![MORE_SECTIONS_SUGGESTION]);
    }

    #[test]
    fn many_unaligned_headings_only_suggest_vocabulary() {
        let headings = [h("x"), h("y"), h("z")];
        let result = analyze_heading_alignment("nothing relevant", &headings);
        assert!(!result.aligned);
        assert_eq!(result.suggestions, vec![REUSE_VOCABULARY_SUGGESTION]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = analyze_heading_alignment("ROI CALCULATOR", &[h("roi calculator")]);
        assert_eq!(result.heading_analysis[0].alignment_score, 2);
    }
}
