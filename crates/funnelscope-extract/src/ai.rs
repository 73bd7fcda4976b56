//! Optional generative AI advice over a piece of content.

use std::time::Duration;

use funnelscope_core::AppConfig;
use reqwest::Client;
use serde_json::{json, Value};

use crate::error::ExtractError;

/// Characters of content forwarded to the model.
pub const AI_CONTENT_CHARS: usize = 4000;
pub const MAX_TOKENS: u32 = 1000;
pub const SYSTEM_PROMPT: &str = "You are a content marketing expert analyzing content for funnel stages, optimization, and improvements.";
/// Returned instead of calling out when no key is configured.
pub const FALLBACK_MESSAGE: &str =
    "Advanced AI analysis requires API key configuration. Basic analysis completed.";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for an OpenAI-compatible `chat/completions` endpoint.
pub struct AiAdvisor {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl AiAdvisor {
    /// `api_key` of `None` (or blank) puts the advisor in fallback mode.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build from config, falling back to `saved_key` when the environment
    /// provides no key.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig, saved_key: Option<&str>) -> Result<Self, ExtractError> {
        let api_key = config
            .openai_api_key
            .clone()
            .or_else(|| saved_key.map(ToString::to_string));
        Self::new(api_key, config.ai_model.clone(), config.ai_base_url.clone())
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the model to follow `prompt` over the first [`AI_CONTENT_CHARS`]
    /// characters of `content`.
    ///
    /// Never fails: without a key this returns [`FALLBACK_MESSAGE`], and any
    /// request failure comes back as `"API Error: ..."`.
    pub async fn advise(&self, content: &str, prompt: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("no AI key configured, returning fallback");
            return FALLBACK_MESSAGE.to_string();
        };

        match self.request(api_key, content, prompt).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, model = %self.model, "AI request failed");
                format!("API Error: {e}")
            }
        }
    }

    async fn request(
        &self,
        api_key: &str,
        content: &str,
        prompt: &str,
    ) -> Result<String, ExtractError> {
        let url = format!("{}/chat/completions", self.base_url);
        let excerpt: String = content.chars().take(AI_CONTENT_CHARS).collect();
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": format!("{prompt}\n\nContent:\n{excerpt}") }
            ],
            "max_tokens": MAX_TOKENS
        });

        tracing::info!(model = %self.model, chars = excerpt.chars().count(), "requesting AI analysis");
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let payload: Value = response.json().await?;
        payload
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| ExtractError::MalformedResponse {
                url,
                reason: "missing choices[0].message.content".to_string(),
            })
    }
}
