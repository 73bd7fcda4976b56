//! Strengths and opportunities for a piece of competitor content.

use serde::{Deserialize, Serialize};

use crate::entities::EntityStats;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorInsights {
    pub strengths: Vec<String>,
    pub opportunities: Vec<String>,
}

/// Derive competitive strengths and opportunities from entity statistics and
/// the number of headings the competitor page uses.
#[must_use]
pub fn competitor_insights(stats: &EntityStats, heading_count: usize) -> CompetitorInsights {
    let mut strengths = Vec::new();
    if stats.total_words > 1500 {
        strengths.push(format!(
            "Comprehensive content ({} words)",
            stats.total_words
        ));
    }
    if stats.statistics_count > 5 {
        strengths.push(format!(
            "Data-driven ({} statistics)",
            stats.statistics_count
        ));
    }
    if heading_count >= 5 {
        strengths.push(format!("Well-structured ({heading_count} headings)"));
    }

    let mut opportunities = Vec::new();
    if stats.total_words < 1000 {
        opportunities.push("Create more comprehensive content".to_string());
    }
    if stats.statistics_count < 3 {
        opportunities.push("Add more data and statistics".to_string());
    }
    if heading_count < 3 {
        opportunities.push("Improve content structure".to_string());
    }

    CompetitorInsights {
        strengths,
        opportunities,
    }
}
