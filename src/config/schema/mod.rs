mod article;
mod core;
mod gateway;
mod llm;
mod observability;

pub use article::{DEFAULT_USER_AGENT, ExtractConfig, FetchConfig};
pub use self::core::Config;
pub use gateway::GatewayConfig;
pub use llm::LlmConfig;
pub use observability::ObservabilityConfig;
