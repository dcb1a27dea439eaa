// ABOUTME: Settings - environment-driven configuration for clients and runs.
// ABOUTME: Reads OPENAI_* and SCRIBE_* variables with defaults and validation.

use crate::error::ConfigError;
use crate::llm::OPENAI_DEFAULT_BASE_URL;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "SCRIBE_MODEL";
pub const ENV_MAX_TURNS: &str = "SCRIBE_MAX_TURNS";

/// Turn limit applied when none is configured.
pub const DEFAULT_MAX_TURNS: usize = 10;

/// Runtime settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// API key for the model backend.
    pub api_key: String,

    /// Root URL of an OpenAI-compatible API.
    pub base_url: String,

    /// Overrides the model named by the agent, when set.
    pub model: Option<String>,

    /// Maximum model turns per run.
    pub max_turns: usize,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key =
            non_empty(ENV_API_KEY).ok_or_else(|| ConfigError::Missing(ENV_API_KEY.to_string()))?;

        let base_url =
            non_empty(ENV_BASE_URL).unwrap_or_else(|| OPENAI_DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: ENV_BASE_URL.to_string(),
                reason: format!("expected an http(s) URL, got '{}'", base_url),
            });
        }

        let max_turns = match non_empty(ENV_MAX_TURNS) {
            None => DEFAULT_MAX_TURNS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: ENV_MAX_TURNS.to_string(),
                        reason: format!("expected a positive integer, got '{}'", raw),
                    });
                }
            },
        };

        Ok(Self {
            api_key,
            base_url,
            model: non_empty(ENV_MODEL),
            max_turns,
        })
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_turns", &self.max_turns)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[(ENV_API_KEY, "sk-test")])).unwrap();
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.base_url, "https://api.openai.com/v1");
        assert_eq!(settings.model, None);
        assert_eq!(settings.max_turns, DEFAULT_MAX_TURNS);
    }

    #[test]
    fn test_missing_api_key() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ref k) if k == ENV_API_KEY));

        let blank = Settings::from_lookup(lookup(&[(ENV_API_KEY, "  ")])).unwrap_err();
        assert!(matches!(blank, ConfigError::Missing(_)));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_API_KEY, "sk-test"),
            (ENV_BASE_URL, "http://localhost:11434/v1"),
            (ENV_MODEL, "gpt-4o"),
            (ENV_MAX_TURNS, "3"),
        ]))
        .unwrap();

        assert_eq!(settings.base_url, "http://localhost:11434/v1");
        assert_eq!(settings.model.as_deref(), Some("gpt-4o"));
        assert_eq!(settings.max_turns, 3);
    }

    #[test]
    fn test_invalid_max_turns() {
        for raw in ["0", "-1", "ten"] {
            let err = Settings::from_lookup(lookup(&[(ENV_API_KEY, "sk"), (ENV_MAX_TURNS, raw)]))
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { ref key, .. } if key == ENV_MAX_TURNS),
                "raw {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Settings::from_lookup(lookup(&[(ENV_API_KEY, "sk"), (ENV_BASE_URL, "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = Settings::from_lookup(lookup(&[(ENV_API_KEY, "sk-secret")])).unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
