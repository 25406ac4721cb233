use crate::error::LlmError;
use std::future::Future;
use std::pin::Pin;

pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "openrouter").
    fn name(&self) -> &str;

    /// Whether a credential is configured. Calls without one fail with
    /// [`LlmError::MissingCredential`] before touching the network.
    fn has_credential(&self) -> bool;

    /// One system + user exchange, returning the assistant text.
    fn chat_with_system<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        message: &'a str,
        model: &'a str,
        max_tokens: u32,
        temperature: f64,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}
