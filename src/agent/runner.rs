// ABOUTME: Runner - executes the think-act loop for an agent against one input.
// ABOUTME: Handles tool dispatch, conversation history, and result aggregation.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::definition::{Agent, OutputType};
use crate::error::{RunError, ToolError};
use crate::llm::{ContentBlock, LlmClient, Message, Request, Role, StopReason, Usage};

/// One tool invocation made during a run.
#[derive(Debug, Clone)]
pub struct ToolCallRecord {
    pub tool_name: String,
    pub input: serde_json::Value,
    pub output: String,
    pub is_error: bool,
}

/// Result of running an agent.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Unique identifier for this run.
    pub run_id: String,

    /// Name of the agent that produced the result.
    pub agent_name: String,

    /// Final answer from the agent.
    pub final_output: String,

    /// Every tool call made, in order.
    pub tool_calls: Vec<ToolCallRecord>,

    /// Token usage summed across all model calls.
    pub usage: Usage,

    /// Number of model turns taken.
    pub turns: usize,
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.final_output)
    }
}

/// Runs agents against a model backend.
pub struct Runner {
    client: Arc<dyn LlmClient>,
}

impl Runner {
    /// Create a runner backed by `client`.
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Run `agent` on `input` and return its final output.
    pub async fn run(&self, agent: &Agent, input: &str) -> Result<RunResult, RunError> {
        agent.validate()?;

        let run_id = Uuid::new_v4().to_string();
        let tool_definitions = agent.tools.to_definitions().await;
        let mut messages = vec![Message::user(input)];
        let mut tool_calls = Vec::new();
        let mut usage = Usage::default();

        debug!(
            run_id = %run_id,
            agent = %agent.name,
            model = %agent.model,
            tools = tool_definitions.len(),
            "Agent run started"
        );

        for turn in 1..=agent.max_turns {
            let mut request = Request::new(&agent.model)
                .system(&agent.instructions)
                .messages(messages.clone())
                .tools(tool_definitions.clone())
                .max_tokens(agent.max_tokens);
            if let Some(temperature) = agent.temperature {
                request = request.temperature(temperature);
            }

            debug!(run_id = %run_id, turn, "Calling model");
            let response = self.client.create_message(&request).await?;
            usage.add(&response.usage);

            if !response.has_tool_use() {
                let final_output = response.text();
                if response.stop_reason == StopReason::MaxTokens {
                    warn!(
                        run_id = %run_id,
                        max_tokens = agent.max_tokens,
                        "Final output was cut off at the token limit"
                    );
                }
                if agent.output_type == OutputType::Json
                    && let Err(e) = serde_json::from_str::<serde_json::Value>(&final_output)
                {
                    return Err(RunError::InvalidOutput(e.to_string()));
                }

                info!(
                    run_id = %run_id,
                    agent = %agent.name,
                    turns = turn,
                    tool_calls = tool_calls.len(),
                    input_tokens = usage.input_tokens,
                    output_tokens = usage.output_tokens,
                    "Agent run finished"
                );

                return Ok(RunResult {
                    run_id,
                    agent_name: agent.name.clone(),
                    final_output,
                    tool_calls,
                    usage,
                    turns: turn,
                });
            }

            messages.push(Message {
                role: Role::Assistant,
                content: response.content.clone(),
            });

            let mut results = Vec::new();
            for block in &response.content {
                if let ContentBlock::ToolUse { id, name, input } = block {
                    let record = self.call_tool(agent, name, input).await;
                    debug!(
                        run_id = %run_id,
                        tool = %name,
                        is_error = record.is_error,
                        "Tool call finished"
                    );

                    results.push(if record.is_error {
                        ContentBlock::tool_error(id, &record.output)
                    } else {
                        ContentBlock::tool_result(id, &record.output)
                    });
                    tool_calls.push(record);
                }
            }

            messages.push(Message::tool_results(results));
        }

        warn!(run_id = %run_id, max_turns = agent.max_turns, "Agent ran out of turns");
        Err(RunError::MaxTurnsExceeded(agent.max_turns))
    }

    async fn call_tool(
        &self,
        agent: &Agent,
        name: &str,
        input: &serde_json::Value,
    ) -> ToolCallRecord {
        let (output, is_error) = match agent.tools.get(name).await {
            Some(tool) => match tool.execute(input.clone()).await {
                Ok(result) => (result.content, result.is_error),
                Err(e) => (ToolError::Execution(e).to_string(), true),
            },
            None => (ToolError::NotFound(name.to_string()).to_string(), true),
        };

        ToolCallRecord {
            tool_name: name.to_string(),
            input: input.clone(),
            output,
            is_error,
        }
    }
}
