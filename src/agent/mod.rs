// ABOUTME: Agent module - agent definitions, presets, and the Runner.
// ABOUTME: Provides the async entry point that turns input text into an answer.

mod definition;
pub mod presets;
mod runner;

pub use definition::{Agent, DEFAULT_MODEL, OutputType};
pub use presets::{summary_agent, summary_agent_with_tools};
pub use runner::{RunResult, Runner, ToolCallRecord};
