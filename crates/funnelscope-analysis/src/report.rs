//! Analysis snapshots: one per user-triggered analysis, persisted as-is.

use chrono::{DateTime, Utc};
use funnelscope_core::{AssetType, FunnelStage, Heading, Persona};
use serde::{Deserialize, Serialize};

use crate::entities::{extract_entities, EntityStats};
use crate::funnel::{classify_funnel_stage, FunnelScoreResult};
use crate::headings::{analyze_heading_alignment, HeadingAlignmentResult};
use crate::insights::{competitor_insights, CompetitorInsights};
use crate::keywords::{analyze_keyword_optimization, KeywordOptimization};
use crate::persona::{score_persona_relevance, PersonaRelevanceResult};
use crate::text::preview;

/// Characters of source text kept in each snapshot.
pub const PREVIEW_CHARS: usize = 500;

/// Full analysis of the user's own content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub content_preview: String,
    pub funnel_analysis: FunnelScoreResult,
    pub entity_analysis: EntityStats,
    pub heading_analysis: HeadingAlignmentResult,
    pub keyword_analysis: KeywordOptimization,
    pub target_keywords: Vec<String>,
}

impl ContentAnalysis {
    /// Run all four content analyzers over `text`.
    #[must_use]
    pub fn run(source: &str, text: &str, headings: &[Heading], keywords: &[String]) -> Self {
        Self {
            timestamp: Utc::now(),
            source: source.to_string(),
            content_preview: preview(text, PREVIEW_CHARS),
            funnel_analysis: classify_funnel_stage(text),
            entity_analysis: extract_entities(text),
            heading_analysis: analyze_heading_alignment(text, headings),
            keyword_analysis: analyze_keyword_optimization(text, keywords),
            target_keywords: keywords.to_vec(),
        }
    }
}

/// Analysis of a competitor's content with derived insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub timestamp: DateTime<Utc>,
    pub competitor_name: String,
    pub source: String,
    pub content_preview: String,
    pub funnel_analysis: FunnelScoreResult,
    pub entity_analysis: EntityStats,
    pub heading_analysis: HeadingAlignmentResult,
    pub keyword_analysis: KeywordOptimization,
    pub insights: CompetitorInsights,
}

impl CompetitorAnalysis {
    #[must_use]
    pub fn run(
        competitor_name: &str,
        source: &str,
        text: &str,
        headings: &[Heading],
        keywords: &[String],
    ) -> Self {
        let entity_analysis = extract_entities(text);
        let insights = competitor_insights(&entity_analysis, headings.len());
        Self {
            timestamp: Utc::now(),
            competitor_name: competitor_name.to_string(),
            source: source.to_string(),
            content_preview: preview(text, PREVIEW_CHARS),
            funnel_analysis: classify_funnel_stage(text),
            entity_analysis,
            heading_analysis: analyze_heading_alignment(text, headings),
            keyword_analysis: analyze_keyword_optimization(text, keywords),
            insights,
        }
    }
}

/// One content asset scored for one persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaAnalysis {
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the persona at analysis time.
    pub persona: Persona,
    pub asset_type: AssetType,
    pub asset_source: String,
    pub content_preview: String,
    pub funnel_stage: FunnelStage,
    pub funnel_analysis: FunnelScoreResult,
    pub entity_analysis: EntityStats,
    pub relevance: PersonaRelevanceResult,
}

impl PersonaAnalysis {
    #[must_use]
    pub fn run(persona: &Persona, asset_type: AssetType, asset_source: &str, text: &str) -> Self {
        let funnel_analysis = classify_funnel_stage(text);
        Self {
            timestamp: Utc::now(),
            persona: persona.clone(),
            asset_type,
            asset_source: asset_source.to_string(),
            content_preview: preview(text, PREVIEW_CHARS),
            funnel_stage: funnel_analysis.primary_stage,
            funnel_analysis,
            entity_analysis: extract_entities(text),
            relevance: score_persona_relevance(text, persona),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persona() -> Persona {
        Persona {
            id: 3,
            name: "Finance Fay".to_string(),
            role: "CFO".to_string(),
            description: String::new(),
            pain_points: vec!["unpredictable costs".to_string()],
            goals: vec!["prove roi".to_string()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn content_analysis_runs_every_analyzer() {
        let text = "What is SEO? A guide to basics. Visit https://example.com today.";
        let headings = [Heading::new("h1", "SEO guide")];
        let keywords = vec!["seo".to_string()];
        let analysis = ContentAnalysis::run("Direct Text Input", text, &headings, &keywords);

        assert_eq!(analysis.source, "Direct Text Input");
        assert_eq!(analysis.funnel_analysis.primary_stage, FunnelStage::Awareness);
        assert_eq!(analysis.entity_analysis.urls_count, 1);
        assert_eq!(analysis.heading_analysis.heading_analysis.len(), 1);
        assert!(analysis.keyword_analysis.report().is_some());
        assert_eq!(analysis.target_keywords, keywords);
    }

    #[test]
    fn preview_is_truncated() {
        let text = "word ".repeat(400);
        let analysis = ContentAnalysis::run("x", &text, &[], &[]);
        assert_eq!(analysis.content_preview.chars().count(), PREVIEW_CHARS);
        assert!(analysis.keyword_analysis.report().is_none());
    }

    #[test]
    fn competitor_analysis_carries_insights() {
        let analysis =
            CompetitorAnalysis::run("Rival Inc.", "Competitor Direct Input", "short text", &[], &[]);
        assert_eq!(analysis.competitor_name, "Rival Inc.");
        assert!(analysis
            .insights
            .opportunities
            .contains(&"Improve content structure".to_string()));
    }

    #[test]
    fn persona_analysis_records_stage_and_relevance() {
        let text = "Read this case study on ROI and pricing.";
        let analysis =
            PersonaAnalysis::run(&persona(), AssetType::CaseStudy, "Direct Text", text);
        assert_eq!(analysis.funnel_stage, FunnelStage::Decision);
        assert_eq!(analysis.relevance.relevance_score, 1);
        assert_eq!(analysis.relevance.relevant_goals, vec!["prove roi"]);
        assert_eq!(analysis.persona.id, 3);
    }

    #[test]
    fn snapshots_round_trip_through_json() {
        let analysis = PersonaAnalysis::run(&persona(), AssetType::Webinar, "u", "buy now");
        let json = serde_json::to_string(&analysis).unwrap();
        let back: PersonaAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
