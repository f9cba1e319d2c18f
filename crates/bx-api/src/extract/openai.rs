//! OpenAI chat-completions extraction oracle.
//!
//! Asks the model to normalize free-form belt queries into the same JSON
//! shape the grammar parser produces. The model is told NOT to convert
//! inch lengths — unit normalization happens exactly once, downstream.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::time::timeout;

use bx_query::ExtractionFields;

use super::ExtractionOracle;
use crate::config::OracleConfig;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "Ты помощник по нормализации запросов о ремнях. Верни JSON с полями: \
kind ('vbelt'|'synchronous'|'unknown'), length_mm (число или null), \
profile (строка или null), width_mm (число или null). \
Если длина в дюймах (классика A/B/C/D/E), не конвертируй (оставь число как есть), \
конвертацию сделает приложение. Не добавляй лишних полей.";

/// Extraction oracle backed by the OpenAI chat completions API.
pub struct OpenAiOracle {
    client: reqwest::Client,
    config: OracleConfig,
    api_key: String,
}

impl OpenAiOracle {
    /// Create a new oracle; fails if the config carries no API key.
    pub fn new(config: OracleConfig) -> anyhow::Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("OpenAI oracle requires an API key"))?;
        Ok(Self {
            client: reqwest::Client::new(),
            config,
            api_key,
        })
    }

    /// Call the chat completions API and parse the response.
    async fn call_chat(&self, text: &str) -> anyhow::Result<Option<ExtractionFields>> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": format!("Текст пользователя: {text}\nОтветь только JSON.") },
            ],
            "temperature": 0,
            "max_tokens": self.config.max_tokens,
            "response_format": { "type": "json_object" },
        });

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let chat: ChatResponse = response.json().await?;
        let Some(content) = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
        else {
            return Ok(None);
        };

        let json_str = extract_json(&content);
        let fields: ExtractionFields = serde_json::from_str(json_str)
            .map_err(|e| anyhow::anyhow!("failed to parse oracle JSON: {e} — raw: {content}"))?;
        Ok(Some(fields))
    }
}

#[async_trait]
impl ExtractionOracle for OpenAiOracle {
    async fn extract(&self, text: &str) -> Option<ExtractionFields> {
        let result = timeout(self.config.timeout, self.call_chat(text)).await;

        match result {
            Ok(Ok(Some(fields))) => Some(fields),
            Ok(Ok(None)) => {
                tracing::debug!("oracle returned no content for: {text}");
                None
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "oracle extraction failed");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.config.timeout.as_secs(),
                    "oracle extraction timed out"
                );
                None
            }
        }
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// Expected JSON shape from the chat completions API.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Extract JSON from model output that may be wrapped in markdown code
/// blocks or surrounded by prose.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    // Try ```json ... ``` first
    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    // Try ``` ... ```
    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    // First-brace to last-brace slice, else the raw text.
    if !trimmed.starts_with('{')
        && let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}'))
        && end > start
    {
        return &trimmed[start..=end];
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_json_raw() {
        let input = r#"{"kind": "vbelt", "length_mm": 85, "profile": "B", "width_mm": null}"#;
        assert_eq!(extract_json(input), input);
    }

    #[test]
    fn extract_json_markdown_json_block() {
        let input = "```json\n{\"kind\": \"vbelt\"}\n```";
        assert_eq!(extract_json(input), "{\"kind\": \"vbelt\"}");
    }

    #[test]
    fn extract_json_markdown_plain_block() {
        let input = "```\n{\"kind\": \"synchronous\"}\n```";
        assert_eq!(extract_json(input), "{\"kind\": \"synchronous\"}");
    }

    #[test]
    fn extract_json_with_surrounding_prose() {
        let input = "Вот результат: {\"kind\": \"vbelt\", \"profile\": \"B\"} — готово.";
        assert_eq!(extract_json(input), "{\"kind\": \"vbelt\", \"profile\": \"B\"}");
    }

    #[test]
    fn oracle_without_key_fails_construction() {
        assert!(OpenAiOracle::new(OracleConfig::default()).is_err());
    }

    #[test]
    fn chat_response_deserializes() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"{\"kind\":\"vbelt\"}"}}]}"#;
        let chat: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            chat.choices[0].message.content.as_deref(),
            Some("{\"kind\":\"vbelt\"}")
        );
    }

    #[test]
    fn chat_response_tolerates_null_content() {
        let json = r#"{"choices":[{"message":{"content":null}}]}"#;
        let chat: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(chat.choices[0].message.content.is_none());
    }
}
