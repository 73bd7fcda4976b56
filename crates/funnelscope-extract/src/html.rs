//! Regex-based HTML text and heading extraction.
//!
//! Page chrome (`script`, `style`, `nav`, `header`, `footer`) and comments are
//! dropped before anything is read, so headings inside a site header never
//! reach the analyzers.

use std::sync::LazyLock;

use funnelscope_core::Heading;
use regex::Regex;

const CHROME_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

// The regex crate has no backreferences, so each closing tag gets its own pattern.
static CHROME_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CHROME_TAGS
        .iter()
        .map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).expect("valid regex"))
        .collect()
});
static HEADING_RES: LazyLock<Vec<(String, Regex)>> = LazyLock::new(|| {
    (1..=6)
        .map(|n| {
            let re = Regex::new(&format!(r"(?is)<h{n}\b[^>]*>(.*?)</h{n}\s*>")).expect("valid regex");
            (format!("h{n}"), re)
        })
        .collect()
});
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:p|div|br|li|ul|ol|tr|td|th|table|section|article|main|aside|blockquote|h[1-6])\b[^>]*>",
    )
    .expect("valid regex")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(?:x([0-9A-Fa-f]+)|([0-9]+));").expect("valid regex"));

/// Text and headings read from one HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlContent {
    pub text: String,
    pub headings: Vec<Heading>,
}

/// Extract visible text and headings from `html`.
///
/// Headings are grouped by level: every `h1` in document order, then every
/// `h2`, and so on. Empty headings are skipped.
#[must_use]
pub fn extract_html(html: &str) -> HtmlContent {
    let body = strip_chrome(html);

    let headings = HEADING_RES
        .iter()
        .flat_map(|(level, re)| {
            re.captures_iter(&body)
                .filter_map(|cap| cap.get(1))
                .map(|m| clean_text(&TAG_RE.replace_all(m.as_str(), " ")))
                .filter(|text| !text.is_empty())
                .map(|text| Heading::new(level.as_str(), text))
                .collect::<Vec<_>>()
        })
        .collect();

    let spaced = BLOCK_TAG_RE.replace_all(&body, " ");
    let text = clean_text(&TAG_RE.replace_all(&spaced, ""));

    HtmlContent { text, headings }
}

fn strip_chrome(html: &str) -> String {
    let mut body = COMMENT_RE.replace_all(html, "").into_owned();
    for re in CHROME_RES.iter() {
        body = re.replace_all(&body, " ").into_owned();
    }
    body
}

/// Decode entities and collapse all whitespace runs to single spaces.
pub(crate) fn clean_text(raw: &str) -> String {
    decode_entities(raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(raw: &str) -> String {
    let named = raw
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&rsquo;", "\u{2019}")
        .replace("&lsquo;", "\u{2018}")
        .replace("&ldquo;", "\u{201c}")
        .replace("&rdquo;", "\u{201d}")
        .replace("&mdash;", "\u{2014}")
        .replace("&ndash;", "\u{2013}");

    let numeric = NUMERIC_ENTITY_RE.replace_all(&named, |cap: &regex::Captures<'_>| {
        let code = match (cap.get(1), cap.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            (None, None) => None,
        };
        code.and_then(char::from_u32)
            .map_or_else(|| cap[0].to_string(), |c| c.to_string())
    });

    // `&amp;` last so "&amp;lt;" stays a literal "&lt;".
    numeric.replace("&amp;", "&")
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
