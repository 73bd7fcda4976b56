//! Content classification and scoring engine.
//!
//! Deterministic text analytics over already-extracted content: funnel stage
//! classification, entity statistics, heading alignment, keyword density and
//! persona relevance. Every analyzer is a pure function of its inputs.
//! Bundles in [`report`] combine the analyzers into the snapshots that get
//! persisted, and [`gaps`] summarises persona coverage across funnel stages.

pub mod entities;
pub mod funnel;
pub mod gaps;
pub mod headings;
pub mod insights;
pub mod keywords;
pub mod persona;
pub mod report;

mod text;

pub use entities::{extract_entities, EntityStats};
pub use funnel::{classify_funnel_stage, FunnelScoreResult};
pub use gaps::{
    analyze_gaps, suggested_formats, GapReport, PersonaCoverage, Priority, Recommendation,
};
pub use headings::{analyze_heading_alignment, HeadingAlignmentResult, HeadingScore};
pub use insights::{competitor_insights, CompetitorInsights};
pub use keywords::{
    analyze_keyword_optimization, KeywordOptimization, KeywordRecord, KeywordReport,
    KeywordStatus,
};
pub use persona::{score_persona_relevance, PersonaRelevanceResult};
pub use report::{CompetitorAnalysis, ContentAnalysis, PersonaAnalysis};
