//! LLM service - capability layer
//!
//! Key-rotation wrapper over `LlmClient`: shuffle the available keys and
//! walk them until one call succeeds. Per-key failures are logged and
//! swallowed; the caller only sees an error once every key has failed.
//! There is no backoff and no second pass, a key gets exactly one try.

use rand::seq::SliceRandom;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::clients::LlmClient;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::settings::SystemSettings;

/// LLM generation service with key rotation
pub struct LlmService {
    keys: Vec<String>,
    api_base: String,
    model_name: String,
    custom_instruction: Option<String>,
}

impl LlmService {
    pub fn new(config: &Config, settings: &SystemSettings) -> Self {
        Self {
            keys: settings.available_keys(),
            api_base: config.llm_api_base_url.clone(),
            model_name: settings.model_name(&config.ai_model),
            custom_instruction: settings
                .ai_instruction
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.to_string()),
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// The admin's standing instruction, already formatted for prompts.
    pub fn custom_instruction(&self) -> Option<String> {
        self.custom_instruction
            .as_ref()
            .map(|i| format!("IMPORTANT INSTRUCTION: {}", i))
    }

    /// Free-text generation with key rotation.
    pub async fn generate_text(&self, prompt: &str, system: Option<&str>) -> Result<String> {
        self.execute_with_rotation(prompt, system, false).await
    }

    /// JSON generation with key rotation: the response is cleaned of fences
    /// and prose before being parsed into `T`.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<T> {
        let text = self.execute_with_rotation(prompt, system, true).await?;
        let cleaned = clean_json(&text);
        Ok(serde_json::from_str(&cleaned)?)
    }

    async fn execute_with_rotation(
        &self,
        prompt: &str,
        system: Option<&str>,
        json_mode: bool,
    ) -> Result<String> {
        if self.keys.is_empty() {
            return Err(AppError::NoApiKeys);
        }

        let mut keys = self.keys.clone();
        keys.shuffle(&mut rand::thread_rng());

        debug!("rotating over {} keys, model: {}", keys.len(), self.model_name);

        let mut last_error: Option<anyhow::Error> = None;

        for key in &keys {
            let client = LlmClient::new(key, &self.api_base, &self.model_name);
            match client.chat(prompt, system, json_mode).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    // Quota and transient errors look the same from here, so
                    // every failure just moves on to the next key.
                    warn!("key {} failed: {}", mask_key(key), e);
                    last_error = Some(e);
                }
            }
        }

        Err(AppError::AllKeysFailed {
            tried: keys.len(),
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

/// Strip markdown fences and any prose around the first JSON object/array.
///
/// Models in JSON mode still occasionally wrap their output in ```json
/// fences or lead with a sentence; this recovers the payload.
pub fn clean_json(text: &str) -> String {
    let mut raw = text.replace("```json", "").replace("```", "");
    raw = raw.trim().to_string();

    if raw.starts_with('{') || raw.starts_with('[') {
        return raw;
    }

    let start_object = raw.find('{');
    let start_array = raw.find('[');

    match (start_object, start_array) {
        (Some(o), a) if a.map_or(true, |a| o < a) => {
            raw = raw[o..].to_string();
            if let Some(end) = raw.rfind('}') {
                raw.truncate(end + 1);
            }
        }
        (_, Some(a)) => {
            raw = raw[a..].to_string();
            if let Some(end) = raw.rfind(']') {
                raw.truncate(end + 1);
            }
        }
        _ => {}
    }

    raw
}

/// Keys never appear whole in logs.
fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(5).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::McqItem;

    fn service_with_keys(keys: Vec<String>) -> LlmService {
        LlmService {
            keys,
            api_base: "http://127.0.0.1:9".to_string(),
            model_name: "test-model".to_string(),
            custom_instruction: None,
        }
    }

    #[test]
    fn clean_json_strips_fences() {
        let text = "```json\n{\"title\": \"Light\"}\n```";
        assert_eq!(clean_json(text), "{\"title\": \"Light\"}");
    }

    #[test]
    fn clean_json_drops_preamble_before_object() {
        let text = "Here is your JSON:\n{\"title\": \"Light\"}\nHope that helps!";
        assert_eq!(clean_json(text), "{\"title\": \"Light\"}");
    }

    #[test]
    fn clean_json_drops_preamble_before_array() {
        let text = "Sure thing: [1, 2, 3] done";
        assert_eq!(clean_json(text), "[1, 2, 3]");
    }

    #[test]
    fn clean_json_prefers_earlier_start() {
        // The object opens before the array does, so the object wins.
        let text = "noise {\"items\": [1, 2]} trailing";
        assert_eq!(clean_json(text), "{\"items\": [1, 2]}");
    }

    #[test]
    fn cleaned_mcq_array_parses() {
        let text = r#"```json
        [{"question": "2+2?", "options": ["3", "4", "5", "6"], "correctAnswer": 1, "explanation": ""}]
        ```"#;
        let items: Vec<McqItem> = serde_json::from_str(&clean_json(text)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].correct_answer, 1);
    }

    #[test]
    fn mask_key_short_and_long() {
        assert_eq!(mask_key("AIzaSyExample"), "AIzaS...");
        assert_eq!(mask_key("ab"), "ab...");
    }

    #[tokio::test]
    async fn no_keys_is_a_distinct_error() {
        let service = service_with_keys(vec![]);
        let result = service.generate_text("hello", None).await;
        assert!(matches!(result, Err(AppError::NoApiKeys)));
    }

    #[tokio::test]
    async fn all_failing_keys_surface_last_error() {
        // Port 9 (discard) is not listening, every key fails fast.
        let service = service_with_keys(vec!["key-a".to_string(), "key-b".to_string()]);
        let result = service.generate_text("hello", None).await;
        match result {
            Err(AppError::AllKeysFailed { tried, .. }) => assert_eq!(tried, 2),
            other => panic!("expected AllKeysFailed, got {:?}", other.map(|_| ())),
        }
    }
}
