// ABOUTME: Built-in tools for agents.
// ABOUTME: Currently the word counter used by the summary agent.

mod word_count;

pub use word_count::{
    COUNT_WORDS_TOOL, CountWordsArgs, WORD_COUNT_SUCCESS, WordCountResult, count_words,
    count_words_tool,
};
