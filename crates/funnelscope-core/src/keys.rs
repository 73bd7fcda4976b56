use serde::{Deserialize, Serialize};

/// Provider API keys saved by the user. Empty strings mean "not configured".
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeys {
    #[serde(default)]
    pub openai: String,
    #[serde(default)]
    pub gemini: String,
    #[serde(default)]
    pub claude: String,
}

impl ApiKeys {
    /// The `OpenAI` key, if one has been saved.
    #[must_use]
    pub fn openai(&self) -> Option<&str> {
        non_empty(&self.openai)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |s: &str| if s.is_empty() { "" } else { "[redacted]" };
        f.debug_struct("ApiKeys")
            .field("openai", &redact(&self.openai))
            .field("gemini", &redact(&self.gemini))
            .field("claude", &redact(&self.claude))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_openai_key_is_none() {
        let keys = ApiKeys {
            openai: "   ".to_string(),
            ..ApiKeys::default()
        };
        assert!(keys.openai().is_none());
    }

    #[test]
    fn debug_redacts_keys() {
        let keys = ApiKeys {
            openai: "sk-secret".to_string(),
            ..ApiKeys::default()
        };
        let rendered = format!("{keys:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let keys: ApiKeys = serde_json::from_str(r#"{"openai":"k"}"#).unwrap();
        assert_eq!(keys.openai(), Some("k"));
        assert!(keys.gemini.is_empty());
    }
}
