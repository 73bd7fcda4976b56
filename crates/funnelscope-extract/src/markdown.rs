//! ATX heading detection for plain-text and markdown files.

use funnelscope_core::Heading;

/// Collect `#`-style headings in document order. `## Setup` becomes an `h2`.
///
/// Lines inside fenced code blocks are ignored.
#[must_use]
pub fn markdown_headings(text: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut in_fence = false;

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(heading) = parse_atx(trimmed) {
            headings.push(heading);
        }
    }

    headings
}

fn parse_atx(line: &str) -> Option<Heading> {
    let depth = line.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&depth) {
        return None;
    }
    let rest = &line[depth..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }
    let text = rest.trim().trim_end_matches('#').trim();
    if text.is_empty() {
        return None;
    }
    Some(Heading::new(format!("h{depth}"), text))
}
