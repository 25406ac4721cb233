use super::{FetchError, InputError, LlmError, ReferentError};
use crate::llm::scrub_secret_patterns;

/// Stable, externally visible error kinds. The string form is what clients
/// receive as `errorName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum ErrorKind {
    InvalidUrl,
    MissingFields,
    NetworkError,
    FetchFailed,
    ExtractionEmpty,
    InvalidAction,
    MissingCredential,
    GenerationFailed,
    MalformedResponse,
    Unexpected,
}

/// Refinement of a failed article fetch, used to pick the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatusTag {
    Forbidden,
    NotFound,
    ServerError,
    Other,
}

impl FetchStatusTag {
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => Self::Forbidden,
            404 => Self::NotFound,
            s if s >= 500 => Self::ServerError,
            _ => Self::Other,
        }
    }
}

/// Coarse message category shown to end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request itself was wrong: bad URL, missing fields, unknown action.
    InvalidRequest,
    /// The article at the link could not be loaded.
    ArticleUnavailable,
    /// The article loaded but yielded no usable text.
    ContentUnavailable,
    /// Misconfiguration or a failure of the AI backend.
    ProcessingFailed,
}

/// Everything a surface needs to answer a failed request.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub category: ErrorCategory,
    /// HTTP-equivalent status.
    pub status: u16,
    pub fetch_tag: Option<FetchStatusTag>,
    /// Localized, non-technical message.
    pub message: String,
    /// Internal detail with secrets scrubbed. For logs and dev-mode payloads only.
    pub detail: String,
}

impl ReferentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(
                InputError::MissingUrl | InputError::MissingFields(_) | InputError::InvalidBody(_),
            ) => ErrorKind::MissingFields,
            Self::Input(InputError::InvalidUrl { .. }) => ErrorKind::InvalidUrl,
            Self::Input(InputError::InvalidAction(_)) => ErrorKind::InvalidAction,
            Self::Fetch(FetchError::Network { .. }) | Self::Llm(LlmError::Request { .. }) => {
                ErrorKind::NetworkError
            }
            Self::Fetch(FetchError::Status { .. }) => ErrorKind::FetchFailed,
            Self::Extraction(_) => ErrorKind::ExtractionEmpty,
            Self::Llm(LlmError::MissingCredential { .. }) => ErrorKind::MissingCredential,
            Self::Llm(LlmError::Status { .. }) => ErrorKind::GenerationFailed,
            Self::Llm(LlmError::MalformedResponse { .. }) => ErrorKind::MalformedResponse,
            Self::Prompt(_) | Self::Config(_) | Self::Other(_) => ErrorKind::Unexpected,
        }
    }

    /// HTTP-equivalent status. Upstream statuses are mirrored as-is.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Fetch(FetchError::Status { status, .. })
            | Self::Llm(LlmError::Status { status, .. }) => *status,
            _ => match self.kind() {
                ErrorKind::InvalidUrl | ErrorKind::MissingFields | ErrorKind::InvalidAction => 400,
                ErrorKind::ExtractionEmpty => 422,
                ErrorKind::NetworkError => 502,
                _ => 500,
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            ErrorKind::InvalidUrl | ErrorKind::MissingFields | ErrorKind::InvalidAction => {
                ErrorCategory::InvalidRequest
            }
            ErrorKind::FetchFailed => ErrorCategory::ArticleUnavailable,
            ErrorKind::NetworkError => match self {
                Self::Fetch(_) => ErrorCategory::ArticleUnavailable,
                _ => ErrorCategory::ProcessingFailed,
            },
            ErrorKind::ExtractionEmpty => ErrorCategory::ContentUnavailable,
            ErrorKind::MissingCredential
            | ErrorKind::GenerationFailed
            | ErrorKind::MalformedResponse
            | ErrorKind::Unexpected => ErrorCategory::ProcessingFailed,
        }
    }

    /// Map this error into a stable report with a message in `locale`.
    pub fn classify(&self, locale: &str) -> ErrorReport {
        let fetch_tag = match self {
            Self::Fetch(FetchError::Status { status, .. }) => {
                Some(FetchStatusTag::from_status(*status))
            }
            _ => None,
        };

        ErrorReport {
            kind: self.kind(),
            category: self.category(),
            status: self.status_code(),
            fetch_tag,
            message: self.user_message(locale, fetch_tag),
            detail: scrub_secret_patterns(&format!("{self:#}")).into_owned(),
        }
    }

    fn user_message(&self, locale: &str, fetch_tag: Option<FetchStatusTag>) -> String {
        match self {
            Self::Input(InputError::MissingUrl) => t!("errors.missing_url", locale = locale),
            Self::Input(InputError::MissingFields(_)) => {
                t!("errors.missing_fields", locale = locale)
            }
            Self::Input(InputError::InvalidUrl { .. }) => t!("errors.invalid_url", locale = locale),
            Self::Input(InputError::InvalidBody(_)) => t!("errors.invalid_body", locale = locale),
            Self::Input(InputError::InvalidAction(_)) => {
                t!("errors.invalid_action", locale = locale)
            }
            Self::Fetch(FetchError::Status { status, .. }) => {
                let base = t!("errors.load_failed", locale = locale, status = status);
                let hint = match fetch_tag {
                    Some(FetchStatusTag::Forbidden) => {
                        Some(t!("errors.access_blocked", locale = locale))
                    }
                    Some(FetchStatusTag::NotFound) => {
                        Some(t!("errors.page_not_found", locale = locale))
                    }
                    Some(FetchStatusTag::ServerError) => {
                        Some(t!("errors.upstream_server", locale = locale))
                    }
                    Some(FetchStatusTag::Other) | None => None,
                };
                return match hint {
                    Some(hint) => format!("{base} {hint}"),
                    None => base.into_owned(),
                };
            }
            Self::Fetch(FetchError::Network { .. }) => t!("errors.network", locale = locale),
            Self::Extraction(_) => t!("errors.extraction_empty", locale = locale),
            Self::Llm(LlmError::MissingCredential { .. }) => {
                t!("errors.missing_credential", locale = locale)
            }
            Self::Llm(LlmError::Status { status_text, .. }) => t!(
                "errors.generation_failed",
                locale = locale,
                status_text = status_text
            ),
            Self::Llm(LlmError::Request { .. } | LlmError::MalformedResponse { .. })
            | Self::Prompt(_)
            | Self::Config(_)
            | Self::Other(_) => t!("errors.processing", locale = locale),
        }
        .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;

    fn fetch_status(status: u16) -> ReferentError {
        ReferentError::Fetch(FetchError::Status {
            url: "https://example.com/".into(),
            status,
            status_text: "x".into(),
        })
    }

    #[test]
    fn forbidden_fetch_keeps_status_and_says_blocked() {
        let report = fetch_status(403).classify("en");
        assert_eq!(report.kind, ErrorKind::FetchFailed);
        assert_eq!(report.status, 403);
        assert_eq!(report.fetch_tag, Some(FetchStatusTag::Forbidden));
        assert_eq!(report.category, ErrorCategory::ArticleUnavailable);
        assert!(report.message.contains("blocks automated requests"));
    }

    #[test]
    fn forbidden_fetch_message_in_russian() {
        let report = fetch_status(403).classify("ru");
        assert!(report.message.contains("Сайт блокирует запросы"));
    }

    #[test]
    fn fetch_tags_follow_status() {
        assert_eq!(FetchStatusTag::from_status(404), FetchStatusTag::NotFound);
        assert_eq!(FetchStatusTag::from_status(500), FetchStatusTag::ServerError);
        assert_eq!(FetchStatusTag::from_status(503), FetchStatusTag::ServerError);
        assert_eq!(FetchStatusTag::from_status(410), FetchStatusTag::Other);
    }

    #[test]
    fn untagged_fetch_failure_has_no_hint() {
        let report = fetch_status(410).classify("en");
        assert_eq!(report.status, 410);
        assert!(report.message.contains("410"));
        assert!(!report.message.contains("blocks"));
    }

    #[test]
    fn input_errors_are_bad_requests() {
        let cases = [
            ReferentError::Input(InputError::MissingUrl),
            ReferentError::Input(InputError::MissingFields("content".into())),
            ReferentError::Input(InputError::InvalidAction("bogus".into())),
            ReferentError::Input(InputError::InvalidBody("expected value".into())),
            ReferentError::Input(InputError::InvalidUrl {
                input: String::new(),
                reason: "empty".into(),
            }),
        ];
        for err in cases {
            assert_eq!(err.status_code(), 400, "{err}");
            assert_eq!(err.category(), ErrorCategory::InvalidRequest);
        }
    }

    #[test]
    fn generation_status_is_proxied() {
        let err = ReferentError::Llm(LlmError::Status {
            provider: "OpenRouter".into(),
            status: 429,
            status_text: "Too Many Requests".into(),
        });
        let report = err.classify("en");
        assert_eq!(report.kind, ErrorKind::GenerationFailed);
        assert_eq!(report.status, 429);
        assert!(report.message.contains("Too Many Requests"));
    }

    #[test]
    fn remaining_kinds_map_to_server_side_statuses() {
        let empty: ReferentError = ExtractionError::Empty.into();
        assert_eq!(empty.status_code(), 422);
        assert_eq!(empty.category(), ErrorCategory::ContentUnavailable);

        let missing = ReferentError::Llm(LlmError::MissingCredential {
            provider: "OpenRouter".into(),
        });
        assert_eq!(missing.kind(), ErrorKind::MissingCredential);
        assert_eq!(missing.status_code(), 500);

        let network = ReferentError::Fetch(FetchError::Network {
            url: "https://example.com/".into(),
            message: "dns".into(),
        });
        assert_eq!(network.status_code(), 502);
        assert_eq!(network.category(), ErrorCategory::ArticleUnavailable);

        let other: ReferentError = anyhow::anyhow!("boom").into();
        assert_eq!(other.kind(), ErrorKind::Unexpected);
        assert_eq!(other.status_code(), 500);
    }

    #[test]
    fn error_name_is_the_kind() {
        let name: &'static str = ErrorKind::MalformedResponse.into();
        assert_eq!(name, "MalformedResponse");
        assert_eq!(ErrorKind::FetchFailed.to_string(), "FetchFailed");
    }

    #[test]
    fn detail_is_scrubbed() {
        let err = ReferentError::Llm(LlmError::Request {
            provider: "OpenRouter".into(),
            message: "rejected key sk-or-v1-abcdef0123456789".into(),
        });
        let report = err.classify("en");
        assert!(!report.detail.contains("abcdef0123456789"));
        assert!(report.detail.contains("[REDACTED]"));
    }
}
