use crate::error::InputError;
use std::fmt;
use url::Url;

/// An absolute `http`/`https` URL. Only [`normalize_url`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl(Url);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input
        .get(..8)
        .unwrap_or(input)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Trim, default the scheme to `https://`, then parse strictly.
pub fn normalize_url(input: &str) -> Result<NormalizedUrl, InputError> {
    let trimmed = input.trim();
    let invalid = |reason: String| InputError::InvalidUrl {
        input: trimmed.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("empty".into()));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    // `candidate` always starts with http(s), and the parser rejects those
    // without a host.
    Url::parse(&candidate)
        .map(NormalizedUrl)
        .map_err(|e| invalid(e.to_string()))
}
