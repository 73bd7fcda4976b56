//! Keyword-frequency funnel stage classifier.

use std::collections::BTreeMap;

use funnelscope_core::{FunnelStage, FunnelStageDefinition, STAGE_DEFINITIONS};
use serde::{Deserialize, Serialize};

use crate::text::count_occurrences;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelScoreResult {
    pub primary_stage: FunnelStage,
    /// `primary / (sum of all scores + 1)`, always in `[0.0, 1.0)`.
    pub confidence: f64,
    /// Keyword occurrence totals per stage, keyed in enumeration order.
    pub scores: BTreeMap<FunnelStage, usize>,
}

impl FunnelScoreResult {
    #[must_use]
    pub fn score(&self, stage: FunnelStage) -> usize {
        self.scores.get(&stage).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn stage_info(&self) -> &'static FunnelStageDefinition {
        self.primary_stage.definition()
    }
}

/// Score `text` against every stage's trigger keywords and pick the best stage.
///
/// Each keyword contributes its substring occurrence count in the lowercased
/// text. Ties go to the stage that comes first in enumeration order, so empty
/// text classifies as awareness with zero confidence.
#[must_use]
pub fn classify_funnel_stage(text: &str) -> FunnelScoreResult {
    let lower = text.to_lowercase();

    let scores: BTreeMap<FunnelStage, usize> = STAGE_DEFINITIONS
        .iter()
        .map(|def| {
            let score = def
                .keywords
                .iter()
                .map(|kw| count_occurrences(&lower, kw))
                .sum();
            (def.stage, score)
        })
        .collect();

    let mut primary_stage = FunnelStage::ALL[0];
    let mut best = 0usize;
    for stage in FunnelStage::ALL {
        let score = scores.get(&stage).copied().unwrap_or(0);
        if score > best {
            best = score;
            primary_stage = stage;
        }
    }

    let total: usize = scores.values().sum();
    #[allow(clippy::cast_precision_loss)]
    let confidence = best as f64 / (total as f64 + 1.0);

    FunnelScoreResult {
        primary_stage,
        confidence,
        scores,
    }
}
