use crate::error::{InputError, ReferentError};
use crate::pipeline::GenerationRequest;
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use super::AppState;

/// `POST /api/parse` body. Fields are optional so a missing or `null` value
/// is reported as a missing field rather than a decode failure.
#[derive(Debug, Deserialize)]
pub(super) struct ParseBody {
    #[serde(default)]
    url: Option<String>,
}

/// `POST /api/generate` body.
#[derive(Debug, Deserialize)]
pub(super) struct GenerateBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    action: Option<String>,
}

impl From<GenerateBody> for GenerationRequest {
    fn from(body: GenerateBody) -> Self {
        Self {
            title: body.title.unwrap_or_default(),
            content: body.content.unwrap_or_default(),
            action: body.action.unwrap_or_default(),
        }
    }
}

/// Classify `err`, log it, and render `{error, errorName, details?}`.
pub(super) fn error_response(state: &AppState, err: &ReferentError) -> Response {
    let report = err.classify(&state.locale);
    let error_name: &'static str = report.kind.into();

    if report.status >= 500 {
        tracing::error!(
            kind = error_name,
            status = report.status,
            detail = %report.detail,
            "request failed"
        );
    } else {
        tracing::warn!(
            kind = error_name,
            status = report.status,
            detail = %report.detail,
            "request rejected"
        );
    }

    let status =
        StatusCode::from_u16(report.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut body = serde_json::json!({
        "error": report.message,
        "errorName": error_name,
    });
    if state.expose_error_details {
        body["details"] = serde_json::Value::String(report.detail);
    }
    (status, Json(body)).into_response()
}

fn body_error(state: &AppState, rejection: &JsonRejection) -> Response {
    error_response(
        state,
        &ReferentError::Input(InputError::InvalidBody(rejection.body_text())),
    )
}

/// GET /health: no secrets, only whether a credential is configured
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let provider = state.pipeline.provider();
    Json(serde_json::json!({
        "status": "ok",
        "provider": provider.name(),
        "credential": provider.has_credential(),
    }))
}

/// POST /api/parse: fetch a page and extract title, date and content
pub(super) async fn handle_parse(
    State(state): State<AppState>,
    body: Result<Json<ParseBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return body_error(&state, &e),
    };

    let url = body.url.unwrap_or_default();
    match state.pipeline.extract(&url).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(&state, &err),
    }
}

/// POST /api/generate: run one action over extracted text
pub(super) async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return body_error(&state, &e),
    };

    let request = GenerationRequest::from(body);
    match state.pipeline.generate(&request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(serde_json::json!({ "result": result })),
        )
            .into_response(),
        Err(err) => error_response(&state, &err),
    }
}
