//! Plain-text rendering of analysis results.

use std::fmt::{self, Write as _};

use funnelscope_analysis::{
    suggested_formats, CompetitorAnalysis, ContentAnalysis, EntityStats, FunnelScoreResult,
    GapReport, HeadingAlignmentResult, KeywordOptimization, PersonaAnalysis,
};
use funnelscope_core::{FunnelStage, Persona, STAGE_DEFINITIONS};

fn bullet(out: &mut String, items: &[String]) -> fmt::Result {
    for item in items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}

fn funnel(out: &mut String, result: &FunnelScoreResult) -> fmt::Result {
    let info = result.stage_info();
    writeln!(
        out,
        "Funnel stage: {} ({:.1}% confidence)",
        info.title,
        result.confidence * 100.0
    )?;
    writeln!(out, "  {}", info.description)?;
    writeln!(out, "  Typical content: {}", info.content_types.join(", "))?;
    writeln!(out, "  Intent signals: {}", info.intent_signals.join(", "))?;
    let scores: Vec<String> = FunnelStage::ALL
        .iter()
        .map(|s| format!("{s} {}", result.score(*s)))
        .collect();
    writeln!(out, "  Keyword hits: {}", scores.join(", "))
}

fn metrics(out: &mut String, stats: &EntityStats) -> fmt::Result {
    writeln!(out, "Content metrics:")?;
    writeln!(
        out,
        "  {} words, {} sentences ({:.1} words/sentence)",
        stats.total_words, stats.total_sentences, stats.avg_words_per_sentence
    )?;
    writeln!(
        out,
        "  {} URLs, {} emails, {} statistics",
        stats.urls_count, stats.emails_count, stats.statistics_count
    )?;
    if !stats.statistics.is_empty() {
        writeln!(out, "  Statistics found: {}", stats.statistics.join(", "))?;
    }
    Ok(())
}

fn headings(out: &mut String, result: &HeadingAlignmentResult) -> fmt::Result {
    if result.aligned {
        writeln!(out, "Headings: structure is well-aligned with the content")?;
    } else {
        writeln!(out, "Headings: structure needs improvement")?;
    }
    if let Some(message) = &result.message {
        writeln!(out, "  {message}")?;
    }
    for h in &result.heading_analysis {
        writeln!(
            out,
            "  {}: {} (alignment score {})",
            h.level.to_uppercase(),
            h.heading,
            h.alignment_score
        )?;
    }
    if let Some(avg) = result.average_score {
        writeln!(out, "  Average alignment: {avg:.1}")?;
    }
    bullet(out, &result.suggestions)
}

fn keywords(out: &mut String, result: &KeywordOptimization) -> fmt::Result {
    match result {
        KeywordOptimization::NoKeywords { message } => writeln!(out, "Keywords: {message}"),
        KeywordOptimization::Analyzed(report) => {
            if report.optimized {
                writeln!(out, "Keywords: well-optimized")?;
            } else {
                writeln!(out, "Keywords: optimization needs attention")?;
            }
            for k in &report.keyword_analysis {
                writeln!(
                    out,
                    "  {:<24} {:>4} hits  {:>5.2}%  {}",
                    k.keyword, k.count, k.density, k.status
                )?;
            }
            bullet(out, &report.suggestions)
        }
    }
}

pub(crate) fn content_analysis(analysis: &ContentAnalysis) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Source: {}", analysis.source)?;
    funnel(&mut out, &analysis.funnel_analysis)?;
    metrics(&mut out, &analysis.entity_analysis)?;
    headings(&mut out, &analysis.heading_analysis)?;
    keywords(&mut out, &analysis.keyword_analysis)?;
    Ok(out)
}

pub(crate) fn competitor_analysis(analysis: &CompetitorAnalysis) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Competitor: {} ({})",
        analysis.competitor_name, analysis.source
    )?;
    funnel(&mut out, &analysis.funnel_analysis)?;
    metrics(&mut out, &analysis.entity_analysis)?;
    headings(&mut out, &analysis.heading_analysis)?;
    keywords(&mut out, &analysis.keyword_analysis)?;

    writeln!(out, "Their strengths:")?;
    if analysis.insights.strengths.is_empty() {
        writeln!(out, "  (none stand out)")?;
    }
    bullet(&mut out, &analysis.insights.strengths)?;
    writeln!(out, "Your opportunities:")?;
    if analysis.insights.opportunities.is_empty() {
        writeln!(out, "  (none found)")?;
    }
    bullet(&mut out, &analysis.insights.opportunities)?;
    Ok(out)
}

pub(crate) fn persona(persona: &Persona) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "[{}] {} - {}", persona.id, persona.name, persona.role)?;
    if !persona.description.is_empty() {
        writeln!(out, "  {}", persona.description)?;
    }
    if !persona.pain_points.is_empty() {
        writeln!(out, "  Pain points: {}", persona.pain_points.join("; "))?;
    }
    if !persona.goals.is_empty() {
        writeln!(out, "  Goals: {}", persona.goals.join("; "))?;
    }
    Ok(out)
}

pub(crate) fn persona_analysis(analysis: &PersonaAnalysis) -> Result<String, fmt::Error> {
    let relevance = &analysis.relevance;
    let mut out = String::new();
    writeln!(
        out,
        "Persona: {} ({}) | Asset: {} | Source: {}",
        analysis.persona.name, analysis.persona.role, analysis.asset_type, analysis.asset_source
    )?;
    funnel(&mut out, &analysis.funnel_analysis)?;
    writeln!(
        out,
        "Relevance: {} matches ({:.0}%)",
        relevance.relevance_score, relevance.relevance_pct
    )?;
    writeln!(out, "Pain points addressed:")?;
    bullet(&mut out, &relevance.relevant_pain_points)?;
    writeln!(out, "Pain points missing:")?;
    bullet(&mut out, &relevance.missing_pain_points)?;
    writeln!(out, "Goals addressed:")?;
    bullet(&mut out, &relevance.relevant_goals)?;
    writeln!(out, "Goals missing:")?;
    bullet(&mut out, &relevance.missing_goals)?;
    Ok(out)
}

pub(crate) fn gap_report(report: &GapReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for coverage in &report.coverage {
        writeln!(out, "{}", coverage.persona)?;
        for stage in FunnelStage::ALL {
            let assets = coverage.assets(stage);
            let title = stage.definition().title;
            if assets.is_empty() {
                writeln!(
                    out,
                    "  {title}: no content (create: {})",
                    suggested_formats(stage)
                )?;
            } else {
                let names: Vec<String> = assets.iter().map(ToString::to_string).collect();
                writeln!(
                    out,
                    "  {title}: {} assets ({})",
                    assets.len(),
                    names.join(", ")
                )?;
            }
        }
    }
    if report.is_complete() {
        writeln!(out, "Every persona has content for every funnel stage.")?;
    } else {
        writeln!(out, "Priority recommendations:")?;
        for r in &report.recommendations {
            writeln!(out, "  [{}] {}: {}", r.priority, r.persona, r.action)?;
        }
    }
    Ok(out)
}

pub(crate) fn ai_insights(text: &str) -> String {
    format!("AI insights:\n{text}\n")
}

pub(crate) fn stages() -> Result<String, fmt::Error> {
    let mut out = String::new();
    for def in &STAGE_DEFINITIONS {
        writeln!(out, "{} - {}", def.title, def.description)?;
        writeln!(out, "  Content types: {}", def.content_types.join(", "))?;
        writeln!(out, "  Intent signals: {}", def.intent_signals.join(", "))?;
        writeln!(out, "  Keywords: {}", def.keywords.join(", "))?;
    }
    Ok(out)
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub(crate) fn content_summary(a: &ContentAnalysis) -> String {
    format!(
        "{}  {}  {} ({:.0}%)  {} words",
        a.timestamp.format(TIMESTAMP_FORMAT),
        a.source,
        a.funnel_analysis.primary_stage,
        a.funnel_analysis.confidence * 100.0,
        a.entity_analysis.total_words
    )
}

pub(crate) fn competitor_summary(a: &CompetitorAnalysis) -> String {
    format!(
        "{}  {}  {}  {}  {} words",
        a.timestamp.format(TIMESTAMP_FORMAT),
        a.competitor_name,
        a.source,
        a.funnel_analysis.primary_stage,
        a.entity_analysis.total_words
    )
}

pub(crate) fn persona_analysis_summary(a: &PersonaAnalysis) -> String {
    format!(
        "{}  {}  {}  {}  relevance {}",
        a.timestamp.format(TIMESTAMP_FORMAT),
        a.persona.name,
        a.asset_type,
        a.funnel_stage,
        a.relevance.relevance_score
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use funnelscope_analysis::analyze_gaps;
    use funnelscope_core::{AssetType, Heading};

    use super::*;

    fn persona_fixture() -> Persona {
        Persona {
            id: 7,
            name: "Ops Olivia".to_string(),
            role: "COO".to_string(),
            description: "Runs operations".to_string(),
            pain_points: vec!["manual reporting".to_string()],
            goals: vec!["faster close".to_string()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn content_analysis_mentions_every_section() {
        let analysis = ContentAnalysis::run(
            "Direct Text Input",
            "What is SEO? A guide to basics.",
            &[Heading::new("h2", "SEO basics")],
            &["seo".to_string()],
        );
        let text = content_analysis(&analysis).unwrap();
        assert!(text.contains("Funnel stage: Awareness"));
        assert!(text.contains("Content metrics:"));
        assert!(text.contains("H2: SEO basics"));
        assert!(text.contains("seo"));
    }

    #[test]
    fn missing_keywords_show_the_sentinel_message() {
        let analysis = ContentAnalysis::run("x", "plain words here", &[], &[]);
        let text = content_analysis(&analysis).unwrap();
        assert!(text.contains("Keywords: No target keywords"));
    }

    #[test]
    fn gap_report_lists_recommendations() {
        let analysis =
            PersonaAnalysis::run(&persona_fixture(), AssetType::Webinar, "t", "comparison");
        let text = gap_report(&analyze_gaps(&[analysis])).unwrap();
        assert!(text.contains("Consideration: 1 assets (Webinar)"));
        assert!(text.contains("Awareness: no content (create: Blog posts, Educational content)"));
        assert!(text.contains("[High] Ops Olivia: Create Awareness stage content"));
    }

    #[test]
    fn persona_line_includes_id_and_role() {
        let text = persona(&persona_fixture()).unwrap();
        assert!(text.starts_with("[7] Ops Olivia - COO"));
        assert!(text.contains("Pain points: manual reporting"));
    }

    #[test]
    fn stages_lists_all_three() {
        let text = stages().unwrap();
        assert!(text.contains("Awareness"));
        assert!(text.contains("Consideration"));
        assert!(text.contains("Decision"));
    }
}
