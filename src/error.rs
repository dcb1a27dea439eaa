// ABOUTME: Defines all error types for the scribe library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under ScribeError.

/// Top-level error type for the scribe library.
#[derive(Debug, thiserror::Error)]
pub enum ScribeError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Run error: {0}")]
    Run(#[from] RunError),
}

/// Errors from LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors from tool operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}

/// Errors from reading settings or validating an agent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(String),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Errors from running an agent.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("invalid agent configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("agent exceeded max turns ({0})")]
    MaxTurnsExceeded(usize),

    #[error("final output does not match the declared output type: {0}")]
    InvalidOutput(String),
}
