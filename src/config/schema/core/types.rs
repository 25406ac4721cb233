use super::super::{ExtractConfig, FetchConfig, GatewayConfig, LlmConfig, ObservabilityConfig};
use crate::error::ConfigError;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home or `--config`, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Inference endpoint credential
    pub api_key: Option<String>,
    /// Locale for user-facing messages ("ru" | "en")
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_locale() -> String {
    "ru".into()
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".referent").join("config.toml"),
            api_key: None,
            locale: default_locale(),
            llm: LlmConfig::default(),
            fetch: FetchConfig::default(),
            extract: ExtractConfig::default(),
            gateway: GatewayConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::Validation(format!(
                "llm.temperature must be within 0.0..=2.0, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "llm.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.gateway.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "gateway.request_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.extract.min_content_chars == 0 {
            return Err(ConfigError::Validation(
                "extract.min_content_chars must be greater than 0".into(),
            ));
        }

        match url::Url::parse(&self.llm.base_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
            Ok(parsed) => Err(ConfigError::Validation(format!(
                "llm.base_url must use http or https, got {}",
                parsed.scheme()
            ))),
            Err(error) => Err(ConfigError::Validation(format!(
                "llm.base_url is not a valid URL: {error}"
            ))),
        }
    }
}
