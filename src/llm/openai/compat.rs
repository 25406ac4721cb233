use super::types::{ChatRequest, ChatResponse, Message};
use crate::error::LlmError;
use crate::llm::sanitize_api_error;

pub(in crate::llm) fn build_request(
    system_prompt: Option<&str>,
    message: &str,
    model: &str,
    max_tokens: u32,
    temperature: f64,
) -> ChatRequest {
    let capacity = if system_prompt.is_some() { 2 } else { 1 };
    let mut messages = Vec::with_capacity(capacity);

    if let Some(sys) = system_prompt {
        messages.push(Message {
            role: "system",
            content: sys.to_string(),
        });
    }

    messages.push(Message {
        role: "user",
        content: message.to_string(),
    });

    ChatRequest {
        model: model.to_string(),
        messages,
        temperature,
        max_tokens,
    }
}

/// First choice's message content. Anything else is a malformed response.
pub(in crate::llm) fn extract_text(
    chat_response: &ChatResponse,
    provider_name: &str,
) -> Result<String, LlmError> {
    let choice = chat_response
        .choices
        .first()
        .ok_or_else(|| malformed(provider_name, "response has no choices"))?;

    if let Some(reason) = choice.finish_reason.as_deref()
        && reason == "length"
    {
        tracing::warn!(provider = provider_name, "completion hit the max_tokens limit");
    }

    choice
        .message
        .as_ref()
        .and_then(|m| m.content.clone())
        .ok_or_else(|| malformed(provider_name, "first choice has no message content"))
}

fn malformed(provider_name: &str, message: impl Into<String>) -> LlmError {
    LlmError::MalformedResponse {
        provider: provider_name.to_string(),
        message: message.into(),
    }
}

pub(in crate::llm) struct ChatCompletionsEndpoint<'a> {
    pub(in crate::llm) provider_name: &'a str,
    pub(in crate::llm) url: &'a str,
    pub(in crate::llm) extra_headers: &'a [(&'static str, String)],
}

pub(in crate::llm) async fn send_chat_completions_json(
    client: &reqwest::Client,
    cached_auth_header: Option<&String>,
    request: &ChatRequest,
    endpoint: ChatCompletionsEndpoint<'_>,
) -> Result<ChatResponse, LlmError> {
    let provider_name = endpoint.provider_name;
    let auth_header = cached_auth_header.ok_or_else(|| LlmError::MissingCredential {
        provider: provider_name.to_string(),
    })?;

    let mut request_builder = client
        .post(endpoint.url)
        .header("Authorization", auth_header)
        .json(request);

    for (name, value) in endpoint.extra_headers {
        request_builder = request_builder.header(*name, value.as_str());
    }

    let response = request_builder
        .send()
        .await
        .map_err(|error| LlmError::Request {
            provider: provider_name.to_string(),
            message: sanitize_api_error(&error.to_string()),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read provider error body>".to_string());
        tracing::error!(
            provider = provider_name,
            status = status.as_u16(),
            body = %sanitize_api_error(&body),
            "chat completion request rejected"
        );
        return Err(LlmError::Status {
            provider: provider_name.to_string(),
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        });
    }

    let chat_response: ChatResponse = response
        .json()
        .await
        .map_err(|error| malformed(provider_name, format!("JSON decode failed: {error}")))?;

    if let Some(usage) = &chat_response.usage {
        tracing::debug!(
            provider = provider_name,
            model = chat_response.model.as_deref().unwrap_or("unknown"),
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "chat completion usage"
        );
    }

    Ok(chat_response)
}
