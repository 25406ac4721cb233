use super::openai::{
    compat as openai_compat,
    types::{ChatRequest, ChatResponse},
};
use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::llm::{build_provider_client_with_timeout, traits::Provider};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

const PROVIDER_NAME: &str = "OpenRouter";

pub struct OpenRouterProvider {
    /// Pre-computed `"Bearer <key>"` header value (avoids `format!` per request).
    cached_auth_header: Option<String>,
    chat_completions_url: String,
    /// `HTTP-Referer` and `X-Title` identify the application to OpenRouter.
    extra_headers: Vec<(&'static str, String)>,
    client: Client,
}

impl OpenRouterProvider {
    pub fn new(api_key: Option<&str>, config: &LlmConfig) -> Self {
        Self {
            cached_auth_header: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(|k| format!("Bearer {k}")),
            chat_completions_url: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            extra_headers: vec![
                ("HTTP-Referer", config.app_url.clone()),
                ("X-Title", config.app_title.clone()),
            ],
            client: build_provider_client_with_timeout(config.timeout_secs),
        }
    }

    fn build_request(
        system_prompt: Option<&str>,
        message: &str,
        model: &str,
        max_tokens: u32,
        temperature: f64,
    ) -> ChatRequest {
        openai_compat::build_request(system_prompt, message, model, max_tokens, temperature)
    }

    fn extract_text(chat_response: &ChatResponse) -> Result<String, LlmError> {
        openai_compat::extract_text(chat_response, PROVIDER_NAME)
    }

    async fn call_api(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        openai_compat::send_chat_completions_json(
            &self.client,
            self.cached_auth_header.as_ref(),
            request,
            openai_compat::ChatCompletionsEndpoint {
                provider_name: PROVIDER_NAME,
                url: &self.chat_completions_url,
                extra_headers: &self.extra_headers,
            },
        )
        .await
    }
}

impl Provider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    fn has_credential(&self) -> bool {
        self.cached_auth_header.is_some()
    }

    fn chat_with_system<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        message: &'a str,
        model: &'a str,
        max_tokens: u32,
        temperature: f64,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(async move {
            let request =
                Self::build_request(system_prompt, message, model, max_tokens, temperature);
            let chat_response = self.call_api(&request).await?;
            Self::extract_text(&chat_response)
        })
    }
}
