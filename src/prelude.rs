// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use scribe::prelude::*;` to get started quickly.

pub use crate::agent::{
    Agent, OutputType, RunResult, Runner, ToolCallRecord, summary_agent, summary_agent_with_tools,
};
pub use crate::config::Settings;
pub use crate::error::{ConfigError, LlmError, RunError, ScribeError, ToolError};
pub use crate::llm::{
    ContentBlock, LlmClient, Message, OpenAIClient, Request, Response, Role, ScriptedClient,
    StopReason, ToolDefinition, Usage,
};
pub use crate::tool::{FunctionTool, Registry, Tool, ToolOutput, ToolResult};
pub use crate::tools::{WordCountResult, count_words, count_words_tool};
pub use crate::trace::Trace;
