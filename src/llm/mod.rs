// ABOUTME: LLM module - client abstraction for language model providers.
// ABOUTME: Defines types, the client trait, and the OpenAI and scripted clients.

mod client;
mod openai;
mod scripted;
mod types;

pub use client::*;
pub use openai::*;
pub use scripted::*;
pub use types::*;
