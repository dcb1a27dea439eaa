// ABOUTME: Defines the ToolResult type - the string payload handed back to
// ABOUTME: the model after a tool call, with its error state.

use serde::Serialize;

/// Result of a tool execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// The output content sent back to the model.
    pub content: String,

    /// Whether this result represents an error.
    pub is_error: bool,
}

impl ToolResult {
    /// Serialize a structured value as the result content.
    pub fn json(value: &impl Serialize, is_error: bool) -> Result<Self, serde_json::Error> {
        Ok(Self {
            content: serde_json::to_string(value)?,
            is_error,
        })
    }

    /// Create an error result from a plain message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
        }
    }
}
