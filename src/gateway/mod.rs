//! Axum-based HTTP gateway exposing the extract and generate operations.
//!
//! - Request body size limit (default 2 MiB)
//! - Request timeout covering fetch and generation (default 180s); the
//!   in-flight upstream call is dropped when it fires
//! - Permissive CORS so a browser front end can call it from another origin

mod handlers;

use handlers::{handle_generate, handle_health, handle_parse};

use crate::config::{Config, GatewayConfig};
use crate::pipeline::Pipeline;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    /// Locale for error messages
    pub locale: Arc<str>,
    /// Add the internal error chain as `details` in error payloads
    pub expose_error_details: bool,
}

/// Build the router with its middleware stack. Split out so tests can drive
/// it with an injected pipeline.
pub fn build_router(state: AppState, gateway: &GatewayConfig) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/parse", post(handle_parse))
        .route("/api/generate", post(handle_generate))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(gateway.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(gateway.request_timeout_secs),
        ))
        .layer(CorsLayer::permissive())
}

/// Run the HTTP gateway on `host:port`.
pub async fn run_gateway(host: &str, port: u16, config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("Invalid gateway address {host}:{port}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind gateway to {addr}"))?;

    run_gateway_with_listener(host, listener, config).await
}

/// Run the HTTP gateway from a pre-bound listener.
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Config,
) -> Result<()> {
    let pipeline = Arc::new(Pipeline::from_config(&config)?);
    let locale = config.resolved_locale();
    let actual_port = listener.local_addr()?.port();
    let display_addr = format!("{host}:{actual_port}");

    println!("◆ {}", t!("gateway.listening", locale = locale.as_str(), addr = &display_addr));
    println!("  {}", t!("gateway.route_health", locale = locale.as_str()));
    println!("  {}", t!("gateway.route_parse", locale = locale.as_str()));
    println!("  {}", t!("gateway.route_generate", locale = locale.as_str()));
    if !pipeline.provider().has_credential() {
        println!("  ! {}", t!("gateway.credential_missing", locale = locale.as_str()));
    }
    println!("  {}\n", t!("gateway.stop_hint", locale = locale.as_str()));

    tracing::info!(
        addr = %display_addr,
        locale = %locale,
        expose_error_details = config.gateway.expose_error_details,
        "gateway started"
    );

    let state = AppState {
        pipeline,
        locale: Arc::from(locale),
        expose_error_details: config.gateway.expose_error_details,
    };
    let app = build_router(state, &config.gateway);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl+C; shutdown only by abort");
        std::future::pending::<()>().await;
    }
}
