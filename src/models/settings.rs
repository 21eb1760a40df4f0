//! System settings
//!
//! The desktop analog of the app's persisted settings blob: API keys, model
//! override and a custom instruction, stored as a small TOML file next to
//! the binary. A missing file is not an error, it just means defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, Result};

/// Placeholder key some build pipelines inject, never a real credential.
const BUILD_DUMMY_KEY: &str = "DUMMY_KEY_FOR_BUILD";

/// Persisted settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemSettings {
    /// Raw key entries; a single entry may hold several keys pasted in bulk,
    /// separated by commas or newlines
    #[serde(default)]
    pub api_keys: Vec<String>,
    /// Model override, falls back to the configured default
    #[serde(default)]
    pub ai_model: Option<String>,
    /// Extra instruction prepended to generation prompts
    #[serde(default)]
    pub ai_instruction: Option<String>,
}

impl SystemSettings {
    /// Load settings from a TOML file.
    ///
    /// A missing file yields defaults; a present but unparsable file is an
    /// error, since silently dropping the user's keys would be worse.
    pub async fn load(path: &str) -> Result<Self> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("settings file {} not found, using defaults", path);
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::Settings {
                    path: path.to_string(),
                    message: e.to_string(),
                })
            }
        };

        toml::from_str(&content).map_err(|e| AppError::Settings {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// All usable keys: settings entries split and de-duplicated, plus the
    /// `API_KEY` environment variable when it is set and not a build dummy.
    pub fn available_keys(&self) -> Vec<String> {
        let env_key = std::env::var("API_KEY").ok();
        collect_keys(&self.api_keys, env_key.as_deref())
    }

    /// Effective model name, settings override first.
    pub fn model_name(&self, default: &str) -> String {
        self.ai_model
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(default)
            .to_string()
    }
}

/// Split bulk-pasted entries on commas/newlines, trim, drop empties and
/// de-duplicate while keeping first-seen order.
fn collect_keys(entries: &[String], env_key: Option<&str>) -> Vec<String> {
    let mut keys = Vec::new();
    let mut seen = std::collections::HashSet::new();

    let mut push = |key: &str| {
        let key = key.trim();
        if !key.is_empty() && seen.insert(key.to_string()) {
            keys.push(key.to_string());
        }
    };

    for entry in entries {
        for part in entry.split(['\n', ',']) {
            push(part);
        }
    }

    if let Some(env_key) = env_key {
        if env_key != BUILD_DUMMY_KEY {
            push(env_key);
        }
    }

    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_pasted_keys_are_split() {
        let entries = vec!["key-a, key-b\nkey-c".to_string(), "key-d".to_string()];
        let keys = collect_keys(&entries, None);
        assert_eq!(keys, vec!["key-a", "key-b", "key-c", "key-d"]);
    }

    #[test]
    fn duplicates_and_blanks_are_dropped() {
        let entries = vec!["key-a,,key-a".to_string(), "  ".to_string()];
        let keys = collect_keys(&entries, Some("key-a"));
        assert_eq!(keys, vec!["key-a"]);
    }

    #[test]
    fn env_key_is_appended_unless_dummy() {
        let entries = vec!["key-a".to_string()];
        assert_eq!(
            collect_keys(&entries, Some("key-env")),
            vec!["key-a", "key-env"]
        );
        assert_eq!(collect_keys(&entries, Some(BUILD_DUMMY_KEY)), vec!["key-a"]);
    }

    #[test]
    fn model_name_override() {
        let mut settings = SystemSettings::default();
        assert_eq!(settings.model_name("gemini-1.5-flash"), "gemini-1.5-flash");

        settings.ai_model = Some("gemini-1.5-pro".to_string());
        assert_eq!(settings.model_name("gemini-1.5-flash"), "gemini-1.5-pro");

        settings.ai_model = Some("  ".to_string());
        assert_eq!(settings.model_name("gemini-1.5-flash"), "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn missing_settings_file_yields_defaults() {
        let settings = SystemSettings::load("definitely-not-here.toml")
            .await
            .unwrap();
        assert!(settings.api_keys.is_empty());
        assert!(settings.ai_model.is_none());
    }

    #[tokio::test]
    async fn settings_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        tokio::fs::write(
            &path,
            r#"
api_keys = ["key-a", "key-b,key-c"]
ai_model = "gemini-1.5-pro"
ai_instruction = "Prefer NCERT terminology."
"#,
        )
        .await
        .unwrap();

        let settings = SystemSettings::load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(collect_keys(&settings.api_keys, None).len(), 3);
        assert_eq!(settings.ai_model.as_deref(), Some("gemini-1.5-pro"));
        assert!(settings.ai_instruction.is_some());
    }
}
