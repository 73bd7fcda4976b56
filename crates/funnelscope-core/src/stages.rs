//! Static funnel stage registry.
//!
//! The three stages and their trigger keywords are compiled in. Enumeration
//! order (awareness, consideration, decision) is significant: classifiers
//! break score ties in favour of the earlier stage.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunnelStage {
    Awareness,
    Consideration,
    Decision,
}

impl FunnelStage {
    /// All stages in enumeration (tie-break) order.
    pub const ALL: [FunnelStage; 3] = [
        FunnelStage::Awareness,
        FunnelStage::Consideration,
        FunnelStage::Decision,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FunnelStage::Awareness => "awareness",
            FunnelStage::Consideration => "consideration",
            FunnelStage::Decision => "decision",
        }
    }

    /// Static definition for this stage.
    #[must_use]
    pub fn definition(self) -> &'static FunnelStageDefinition {
        match self {
            FunnelStage::Awareness => &STAGE_DEFINITIONS[0],
            FunnelStage::Consideration => &STAGE_DEFINITIONS[1],
            FunnelStage::Decision => &STAGE_DEFINITIONS[2],
        }
    }
}

impl std::fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunnelStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "awareness" => Ok(FunnelStage::Awareness),
            "consideration" => Ok(FunnelStage::Consideration),
            "decision" => Ok(FunnelStage::Decision),
            other => Err(CoreError::InvalidStage(other.to_string())),
        }
    }
}

/// Display metadata and trigger keywords for one funnel stage.
#[derive(Debug, Serialize)]
pub struct FunnelStageDefinition {
    pub stage: FunnelStage,
    pub title: &'static str,
    pub description: &'static str,
    pub content_types: &'static [&'static str],
    pub intent_signals: &'static [&'static str],
    /// Lowercase, unique within the stage.
    pub keywords: &'static [&'static str],
}

pub const STAGE_DEFINITIONS: [FunnelStageDefinition; 3] = [
    FunnelStageDefinition {
        stage: FunnelStage::Awareness,
        title: "Awareness",
        description: "Top of funnel - Problem recognition and education",
        content_types: &["blog_post", "social_media", "infographic", "video", "podcast"],
        intent_signals: &["educational", "informational", "thought_leadership"],
        keywords: &[
            "what is",
            "how to",
            "guide",
            "introduction",
            "beginner",
            "basics",
            "overview",
            "understanding",
        ],
    },
    FunnelStageDefinition {
        stage: FunnelStage::Consideration,
        title: "Consideration",
        description: "Middle of funnel - Solution evaluation and comparison",
        content_types: &["whitepaper", "ebook", "webinar", "comparison_guide", "how_to"],
        intent_signals: &["evaluative", "comparative", "solution_focused"],
        keywords: &[
            "vs",
            "comparison",
            "best",
            "top",
            "review",
            "evaluate",
            "choose",
            "alternative",
            "solution",
        ],
    },
    FunnelStageDefinition {
        stage: FunnelStage::Decision,
        title: "Decision",
        description: "Bottom of funnel - Purchase decision and validation",
        content_types: &["case_study", "testimonial", "product_demo", "pricing", "roi_calculator"],
        intent_signals: &["transactional", "proof_seeking", "validation"],
        keywords: &[
            "pricing",
            "buy",
            "purchase",
            "demo",
            "trial",
            "case study",
            "testimonial",
            "roi",
            "results",
        ],
    },
];
