//! Persona relevance: how many of a persona's pain points and goals does a
//! piece of content touch?

use funnelscope_core::Persona;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaRelevanceResult {
    pub persona_id: u32,
    /// Matched pain points plus matched goals.
    pub relevance_score: usize,
    pub relevant_pain_points: Vec<String>,
    pub relevant_goals: Vec<String>,
    pub missing_pain_points: Vec<String>,
    pub missing_goals: Vec<String>,
    /// `100 * score / (pain points + goals)`, 0 when the persona declares none.
    pub relevance_pct: f64,
}

/// Score `text` against a persona's pain points and goals.
///
/// An entry is addressed when ANY of its whitespace tokens appears
/// (case-insensitively, as a substring) anywhere in the content. A single
/// shared word is enough.
#[must_use]
pub fn score_persona_relevance(text: &str, persona: &Persona) -> PersonaRelevanceResult {
    let content = text.to_lowercase();

    let (relevant_pain_points, missing_pain_points) =
        partition_addressed(&persona.pain_points, &content);
    let (relevant_goals, missing_goals) = partition_addressed(&persona.goals, &content);

    let relevance_score = relevant_pain_points.len() + relevant_goals.len();
    let declared = persona.pain_points.len() + persona.goals.len();

    #[allow(clippy::cast_precision_loss)]
    let relevance_pct = if declared == 0 {
        0.0
    } else {
        100.0 * relevance_score as f64 / declared as f64
    };

    PersonaRelevanceResult {
        persona_id: persona.id,
        relevance_score,
        relevant_pain_points,
        relevant_goals,
        missing_pain_points,
        missing_goals,
        relevance_pct,
    }
}

fn partition_addressed(entries: &[String], content: &str) -> (Vec<String>, Vec<String>) {
    entries
        .iter()
        .cloned()
        .partition(|entry| is_addressed(entry, content))
}

fn is_addressed(entry: &str, content: &str) -> bool {
    entry
        .split_whitespace()
        .any(|token| content.contains(&token.to_lowercase()))
}
