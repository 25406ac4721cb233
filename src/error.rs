use thiserror::Error;

mod classify;

pub use classify::{ErrorCategory, ErrorKind, ErrorReport, FetchStatusTag};

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Referent.
///
/// Each pipeline stage defines its own error variant. Callers that need a
/// stable, user-facing answer go through [`ReferentError::classify`] instead
/// of matching on these directly.
#[derive(Debug, Error)]
pub enum ReferentError {
    // ── Request input ───────────────────────────────────────────────────
    #[error("input: {0}")]
    Input(#[from] InputError),

    // ── Article fetch ───────────────────────────────────────────────────
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    // ── Content extraction ──────────────────────────────────────────────
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Prompt / Template ───────────────────────────────────────────────
    #[error("prompt: {0}")]
    Prompt(#[from] PromptError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Input errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum InputError {
    #[error("url is required")]
    MissingUrl,

    #[error("missing required field(s): {0}")]
    MissingFields(String),

    #[error("invalid url {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("unknown action {0:?}")]
    InvalidAction(String),

    #[error("unreadable request body: {0}")]
    InvalidBody(String),
}

// ─── Fetch errors ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} responded {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },
}

// ─── Extraction errors ───────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("article content was not found")]
    Empty,
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider {provider} API key not set")]
    MissingCredential { provider: String },

    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("provider {provider} responded {status} {status_text}")]
    Status {
        provider: String,
        status: u16,
        status_text: String,
    },

    #[error("provider {provider} returned an unusable response: {message}")]
    MalformedResponse { provider: String, message: String },
}

// ─── Prompt / Template errors ───────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("template render failed: {0}")]
    Render(String),

    #[error("template not found: {0}")]
    NotFound(String),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, ReferentError>;
