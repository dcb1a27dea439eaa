// ABOUTME: Ready-made agent definitions.
// ABOUTME: The summary agent counts words, then summarises in one sentence.

use super::definition::{Agent, OutputType};
use crate::tool::Registry;
use crate::tools::count_words_tool;

pub const SUMMARY_AGENT_NAME: &str = "Summary Agent";

pub const SUMMARY_AGENT_MODEL: &str = "gpt-4.1-mini";

pub const SUMMARY_AGENT_INSTRUCTIONS: &str = "You are a helpful assistant. \
     Use the count_words tool to get the word count of the input. \
     Then, summarize the input in one sentence. \
     Include the word count in the final response.";

/// The summary agent, allowed to call exactly the tools in `tools`.
pub fn summary_agent(tools: Registry) -> Agent {
    Agent::new(SUMMARY_AGENT_NAME, SUMMARY_AGENT_INSTRUCTIONS)
        .model(SUMMARY_AGENT_MODEL)
        .tools(tools)
        .output_type(OutputType::Text)
}

/// The summary agent with its word counter already registered.
pub async fn summary_agent_with_tools() -> Agent {
    let tools = Registry::new();
    tools.register(count_words_tool()).await;
    summary_agent(tools)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_agent() {
        let agent = summary_agent_with_tools().await;

        assert_eq!(agent.name, "Summary Agent");
        assert_eq!(agent.model, "gpt-4.1-mini");
        assert_eq!(agent.output_type, OutputType::Text);
        assert!(agent.instructions.contains("count_words"));
        assert!(agent.instructions.contains("one sentence"));
        assert_eq!(agent.tools.list().await, vec!["count_words"]);
        assert!(agent.validate().is_ok());
    }

    #[test]
    fn test_instructions_text() {
        assert_eq!(
            SUMMARY_AGENT_INSTRUCTIONS,
            "You are a helpful assistant. Use the count_words tool to get the word count of the input. \
             Then, summarize the input in one sentence. Include the word count in the final response."
        );
    }
}
