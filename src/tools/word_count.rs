// ABOUTME: WordCounter - counts whitespace-delimited words in a string.
// ABOUTME: Exposed to agents as the `count_words` function tool.

use serde::{Deserialize, Serialize};

use crate::tool::{FunctionTool, Tool, ToolOutput};

/// Name the model uses to call the word counter.
pub const COUNT_WORDS_TOOL: &str = "count_words";

/// Message carried by every successful count.
pub const WORD_COUNT_SUCCESS: &str = "Word count successful";

/// Structured result of counting words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCountResult {
    pub word_count: usize,
    pub success: bool,
    pub message: String,
}

impl WordCountResult {
    /// A successful count.
    pub fn counted(word_count: usize) -> Self {
        Self {
            word_count,
            success: true,
            message: WORD_COUNT_SUCCESS.to_string(),
        }
    }

    /// A failed count. The count is always zero.
    pub fn failed(description: impl std::fmt::Display) -> Self {
        Self {
            word_count: 0,
            success: false,
            message: format!("Error: {}", description),
        }
    }
}

impl ToolOutput for WordCountResult {
    fn from_fault(error: &anyhow::Error) -> Self {
        Self::failed(error)
    }

    fn is_success(&self) -> bool {
        self.success
    }
}

/// Arguments accepted by the `count_words` tool.
#[derive(Debug, Deserialize)]
pub struct CountWordsArgs {
    pub input: String,
}

/// Count the number of words in `input`.
///
/// Leading and trailing whitespace is ignored and runs of whitespace count as
/// a single separator, so empty or blank input counts as zero words. The
/// ASCII information separators (U+001C to U+001F) split words too. Faults
/// never escape: they come back as a failed `WordCountResult`.
pub fn count_words(input: &str) -> WordCountResult {
    match tokenize(input) {
        Ok(words) => WordCountResult::counted(words),
        Err(e) => WordCountResult::failed(e),
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn tokenize(input: &str) -> Result<usize, anyhow::Error> {
    Ok(input.split(is_separator).filter(|t| !t.is_empty()).count())
}

/// Build the `count_words` tool for registration with an agent.
pub fn count_words_tool() -> impl Tool {
    FunctionTool::new(
        COUNT_WORDS_TOOL,
        "Count the number of words in the input string. \
         The input will usually come from the user or from another tool.",
        serde_json::json!({
            "type": "object",
            "properties": {
                "input": {
                    "type": "string",
                    "description": "The text whose words should be counted"
                }
            },
            "required": ["input"]
        }),
        |args: CountWordsArgs| Ok(count_words(&args.input)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Generative AI has the potential to transform how organizations automate work, \
                          extract insights, and interact with data. It can also boost productivity.";

    #[test]
    fn test_two_words() {
        let result = count_words("hello world");
        assert_eq!(result.word_count, 2);
        assert!(result.success);
        assert_eq!(result.message, "Word count successful");
    }

    #[test]
    fn test_empty_and_blank() {
        for input in ["", "   ", "\t\n  \r\n"] {
            let result = count_words(input);
            assert_eq!(result, WordCountResult::counted(0), "input {:?}", input);
        }
    }

    #[test]
    fn test_irregular_spacing() {
        assert_eq!(count_words("one  two   three").word_count, 3);
        assert_eq!(count_words("  padded\tand\nnewlined  ").word_count, 3);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        assert_eq!(count_words("well, well... well!").word_count, 3);
    }

    #[test]
    fn test_sample_word_count() {
        assert_eq!(count_words(SAMPLE).word_count, 22);
    }

    #[test]
    fn test_unicode_and_control_separators() {
        let cases = [
            ("a", 1),
            (" a b ", 2),
            ("a\u{00A0}b", 2),
            ("a\u{85}b", 2),
            ("a\u{3000}b\u{2028}c", 3),
            ("a\u{1f}b", 2),
            ("a\u{1f}b\u{1c}c", 3),
            ("\u{1d}\u{1e}", 0),
            ("x  y\tz\n", 3),
            ("a\u{0b}b\u{0c}c", 3),
            ("zero\u{200B}width", 1),
        ];
        for (input, expected) in cases {
            assert_eq!(count_words(input).word_count, expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(count_words(SAMPLE), count_words(SAMPLE));
    }

    #[test]
    fn test_failed_shape() {
        let result = WordCountResult::failed("bad input");
        assert_eq!(result.word_count, 0);
        assert!(!result.success);
        assert_eq!(result.message, "Error: bad input");
    }

    #[test]
    fn test_serialized_fields() {
        let json = serde_json::to_value(count_words("hello world")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word_count": 2,
                "success": true,
                "message": "Word count successful"
            })
        );
    }

    #[tokio::test]
    async fn test_tool_counts_words() {
        let tool = count_words_tool();
        assert_eq!(tool.name(), "count_words");

        let result = tool
            .execute(serde_json::json!({"input": "hello world"}))
            .await
            .unwrap();
        assert!(!result.is_error);

        let parsed: WordCountResult = serde_json::from_str(&result.content).unwrap();
        assert_eq!(parsed, WordCountResult::counted(2));
    }

    #[tokio::test]
    async fn test_tool_missing_input_is_reported_not_raised() {
        let result = count_words_tool()
            .execute(serde_json::json!({"text": "hello"}))
            .await
            .unwrap();
        assert!(result.is_error);

        let parsed: WordCountResult = serde_json::from_str(&result.content).unwrap();
        assert_eq!(parsed.word_count, 0);
        assert!(!parsed.success);
        assert!(parsed.message.starts_with("Error: "));
        assert!(parsed.message.contains("input"));
    }

    #[tokio::test]
    async fn test_tool_non_string_input_is_reported_not_raised() {
        let result = count_words_tool()
            .execute(serde_json::json!({"input": 42}))
            .await
            .unwrap();
        assert!(result.is_error);

        let parsed: WordCountResult = serde_json::from_str(&result.content).unwrap();
        assert!(!parsed.success);
    }
}
