use reqwest::Client;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client for inference endpoints. Falls back to a default client
/// if the configured builder cannot be constructed.
pub fn build_provider_client_with_timeout(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to build provider HTTP client, using defaults");
            Client::new()
        })
}
