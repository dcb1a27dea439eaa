// ABOUTME: Root module for scribe - a word-count tool wired into an LLM agent.
// ABOUTME: Re-exports all public types from submodules.

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod prelude;
pub mod tool;
pub mod tools;
pub mod trace;

#[cfg(test)]
mod log_capture;

pub use error::ScribeError;
