//! OpenAI-compatible chat-completions wire format, shared by providers that speak it.

pub(in crate::llm) mod compat;
pub(in crate::llm) mod types;
