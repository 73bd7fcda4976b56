//! Persona x funnel stage coverage and the content gaps it reveals.

use std::collections::BTreeMap;

use funnelscope_core::{AssetType, FunnelStage};
use serde::{Deserialize, Serialize};

use crate::report::PersonaAnalysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
        }
    }
}

/// Assets analysed for one persona, grouped by classified funnel stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaCoverage {
    pub persona: String,
    /// Always holds an entry for every stage, possibly empty.
    pub stages: BTreeMap<FunnelStage, Vec<AssetType>>,
}

impl PersonaCoverage {
    fn new(persona: &str) -> Self {
        Self {
            persona: persona.to_string(),
            stages: FunnelStage::ALL.iter().map(|s| (*s, Vec::new())).collect(),
        }
    }

    #[must_use]
    pub fn assets(&self, stage: FunnelStage) -> &[AssetType] {
        self.stages.get(&stage).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn missing_stages(&self) -> Vec<FunnelStage> {
        FunnelStage::ALL
            .into_iter()
            .filter(|s| self.assets(*s).is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub persona: String,
    pub stage: FunnelStage,
    pub action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    /// One entry per persona name, in first-seen order.
    pub coverage: Vec<PersonaCoverage>,
    pub recommendations: Vec<Recommendation>,
}

impl GapReport {
    /// `true` when every persona has content in every stage.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Formats worth creating for a stage that has no content yet.
#[must_use]
pub fn suggested_formats(stage: FunnelStage) -> &'static str {
    match stage {
        FunnelStage::Awareness => "Blog posts, Educational content",
        FunnelStage::Consideration => "Webinars, Comparison guides",
        FunnelStage::Decision => "Case studies, ROI calculators",
    }
}

fn recommendation_for(stage: FunnelStage) -> (Priority, &'static str) {
    match stage {
        FunnelStage::Awareness => (
            Priority::High,
            "Create Awareness stage content (blog posts, educational resources)",
        ),
        FunnelStage::Decision => (
            Priority::High,
            "Create Decision stage content (case studies, testimonials)",
        ),
        FunnelStage::Consideration => (
            Priority::Medium,
            "Create Consideration stage content (webinars, comparison guides)",
        ),
    }
}

// Recommendation order within a persona: awareness, decision, consideration.
const RECOMMENDATION_ORDER: [FunnelStage; 3] = [
    FunnelStage::Awareness,
    FunnelStage::Decision,
    FunnelStage::Consideration,
];

/// Group saved persona analyses by persona name and stage, and recommend
/// content for every empty stage.
#[must_use]
pub fn analyze_gaps(analyses: &[PersonaAnalysis]) -> GapReport {
    let mut coverage: Vec<PersonaCoverage> = Vec::new();

    for analysis in analyses {
        let name = analysis.persona.name.as_str();
        let idx = if let Some(idx) = coverage.iter().position(|c| c.persona == name) {
            idx
        } else {
            coverage.push(PersonaCoverage::new(name));
            coverage.len() - 1
        };
        coverage[idx]
            .stages
            .entry(analysis.funnel_stage)
            .or_default()
            .push(analysis.asset_type);
    }

    let recommendations = coverage
        .iter()
        .flat_map(|c| {
            RECOMMENDATION_ORDER
                .into_iter()
                .filter(|stage| c.assets(*stage).is_empty())
                .map(|stage| {
                    let (priority, action) = recommendation_for(stage);
                    Recommendation {
                        priority,
                        persona: c.persona.clone(),
                        stage,
                        action: action.to_string(),
                    }
                })
        })
        .collect();

    GapReport {
        coverage,
        recommendations,
    }
}
