use serde::{Deserialize, Serialize};

/// Inference endpoint settings. The endpoint speaks the OpenAI
/// chat-completions wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL; `/chat/completions` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent as `HTTP-Referer`.
    #[serde(default = "default_app_url")]
    pub app_url: String,
    /// Sent as `X-Title`.
    #[serde(default = "default_app_title")]
    pub app_title: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".into()
}

fn default_app_url() -> String {
    "http://localhost:3000".into()
}

fn default_app_title() -> String {
    "Referent App".into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_url: default_app_url(),
            app_title: default_app_title(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
