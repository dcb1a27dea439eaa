// ABOUTME: Agent definition - name, instructions, model, tools and output type.
// ABOUTME: A declarative descriptor consumed by the Runner.

use crate::config::Settings;
use crate::error::ConfigError;
use crate::tool::Registry;

/// Model used when an agent does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// Shape the agent's final answer must take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Plain text, returned as-is.
    #[default]
    Text,
    /// A JSON document; the runner rejects anything that does not parse.
    Json,
}

/// Definition of an agent.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Identifying label.
    pub name: String,

    /// System prompt for the model.
    pub instructions: String,

    /// Model identifier passed to the backend.
    pub model: String,

    /// Tools this agent is allowed to call.
    pub tools: Registry,

    /// Declared type of the final output.
    pub output_type: OutputType,

    /// Maximum model turns before the run is abandoned.
    pub max_turns: usize,

    /// Token budget per model call.
    pub max_tokens: u32,

    /// Sampling temperature, if overridden.
    pub temperature: Option<f64>,
}

impl Agent {
    /// Create a new agent with no tools.
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model: DEFAULT_MODEL.to_string(),
            tools: Registry::new(),
            output_type: OutputType::Text,
            max_turns: 10,
            max_tokens: 4096,
            temperature: None,
        }
    }

    /// Set the model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the tool registry.
    pub fn tools(mut self, tools: Registry) -> Self {
        self.tools = tools;
        self
    }

    /// Set the output type.
    pub fn output_type(mut self, output_type: OutputType) -> Self {
        self.output_type = output_type;
        self
    }

    /// Set maximum turns.
    pub fn max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Set the per-call token budget.
    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Apply model and turn-limit overrides from settings.
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        if let Some(model) = &settings.model {
            self.model = model.clone();
        }
        self.max_turns = settings.max_turns;
        self
    }

    /// Check that the definition can be sent to a model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, reason: &str| ConfigError::Invalid {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        if self.instructions.trim().is_empty() {
            return Err(invalid("instructions", "must not be empty"));
        }
        if self.model.is_empty() || self.model.chars().any(char::is_whitespace) {
            return Err(invalid("model", "must be a non-empty identifier without spaces"));
        }
        if self.max_turns == 0 {
            return Err(invalid("max_turns", "must be at least 1"));
        }
        if self.max_tokens == 0 {
            return Err(invalid("max_tokens", "must be at least 1"));
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(invalid("temperature", "must be between 0 and 2"));
            }
        }
        Ok(())
    }
}
