use super::normalizer::NormalizedUrl;
use super::types::FetchedPage;
use crate::config::FetchConfig;
use crate::error::FetchError;
use anyhow::{Context, Result};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, redirect::Policy};
use std::time::Duration;

/// Navigation headers a desktop browser sends for a top-level page load.
/// `Accept-Encoding` is left to the client so it can decode what it asks for.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(header::DNT, HeaderValue::from_static("1"));
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("document"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("navigate"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("none"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-user"),
        HeaderValue::from_static("?1"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("max-age=0"),
    );
    headers
}

/// Render an error with its `source()` chain; reqwest keeps the useful part
/// (DNS, TLS, timeout) in the sources.
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Downloads article pages. Holds one pooled client; cheap to share behind `Arc`.
pub struct ArticleFetcher {
    client: Client,
}

impl ArticleFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .user_agent(config.user_agent.as_str())
            .redirect(Policy::limited(config.max_redirects))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build article HTTP client")?;
        Ok(Self { client })
    }

    /// GET the page and return its body. Non-2xx statuses and transport
    /// failures are reported separately.
    pub async fn fetch(&self, url: &NormalizedUrl) -> Result<FetchedPage, FetchError> {
        tracing::debug!(url = %url, "fetching article");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: error_chain(&e),
            })?;

        let status = response.status();
        let final_url = response.url().clone();

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown error");
            tracing::warn!(
                url = %url,
                final_url = %final_url,
                status = status.as_u16(),
                "article fetch rejected"
            );
            return Err(FetchError::Status {
                url: final_url.to_string(),
                status: status.as_u16(),
                status_text: status_text.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Network {
            url: final_url.to_string(),
            message: error_chain(&e),
        })?;

        tracing::debug!(
            url = %final_url,
            status = status.as_u16(),
            bytes = body.len(),
            "article fetched"
        );

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            body,
        })
    }
}
