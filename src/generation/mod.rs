pub mod openai;

use crate::error::CompletionError;
use std::future::Future;

pub use openai::OpenAiClient;

/// Single-turn text completion against a generation service.
///
/// Implementations own the transport only; callers own prompt construction
/// and interpretation of the returned text.
pub trait CompletionClient {
    fn complete(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}
