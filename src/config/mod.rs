pub mod schema;

pub use schema::{
    Config, DEFAULT_USER_AGENT, ExtractConfig, FetchConfig, GatewayConfig, LlmConfig,
    ObservabilityConfig,
};
