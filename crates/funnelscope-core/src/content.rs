use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// A section heading as supplied by a content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading depth name, e.g. `h2` or `Heading 1`.
    pub level: String,
    pub text: String,
}

impl Heading {
    #[must_use]
    pub fn new(level: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            text: text.into(),
        }
    }
}

/// Parses `"h2:Some heading"`. A value without a level prefix becomes `h2`.
impl FromStr for Heading {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((level, text)) = s.split_once(':') {
            let level = level.trim().to_lowercase();
            let is_level = level.len() == 2
                && level.starts_with('h')
                && level[1..].chars().all(|c| ('1'..='6').contains(&c));
            if is_level {
                return Ok(Heading::new(level, text.trim()));
            }
        }
        Ok(Heading::new("h2", s.trim()))
    }
}

/// Kind of marketing asset a persona analysis was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    #[serde(rename = "Blog Post")]
    BlogPost,
    #[serde(rename = "Case Study")]
    CaseStudy,
    #[serde(rename = "Solution Page")]
    SolutionPage,
    Webinar,
    #[serde(rename = "One-Pager")]
    OnePager,
    #[serde(rename = "White Paper")]
    WhitePaper,
    Other,
}

impl AssetType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AssetType::BlogPost => "Blog Post",
            AssetType::CaseStudy => "Case Study",
            AssetType::SolutionPage => "Solution Page",
            AssetType::Webinar => "Webinar",
            AssetType::OnePager => "One-Pager",
            AssetType::WhitePaper => "White Paper",
            AssetType::Other => "Other",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the display label or a kebab/snake-case form
/// (`"Case Study"`, `"case-study"`, `"case_study"`).
impl FromStr for AssetType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "blogpost" => Ok(AssetType::BlogPost),
            "casestudy" => Ok(AssetType::CaseStudy),
            "solutionpage" => Ok(AssetType::SolutionPage),
            "webinar" => Ok(AssetType::Webinar),
            "onepager" => Ok(AssetType::OnePager),
            "whitepaper" => Ok(AssetType::WhitePaper),
            "other" => Ok(AssetType::Other),
            _ => Err(CoreError::InvalidAssetType(s.to_string())),
        }
    }
}
