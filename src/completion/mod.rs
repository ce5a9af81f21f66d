// file: src/completion/mod.rs
// description: completion backend abstraction for the originality check
// reference: https://docs.rs/async-trait

pub mod openai;

pub use openai::OpenAiClient;

use crate::error::Result;
use async_trait::async_trait;

/// A chat-style completion backend: given system and user messages, returns
/// generated natural-language text. Injected into handlers so tests can
/// substitute a double for the hosted API.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
