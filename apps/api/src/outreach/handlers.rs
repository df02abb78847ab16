// Axum route handlers for the outreach script API.

use axum::{
    body::Body,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{info, info_span, Instrument, Span};
use uuid::Uuid;

use crate::errors::AppError;
use crate::outreach::models::{GenerateScriptRequest, GenerateScriptResponse, OutreachRequest};
use crate::outreach::script::build_prompt;
use crate::state::AppState;

/// Largest request body accepted, in bytes. Matches axum's default extractor limit.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// POST /api/generate-script
///
/// Validates the form inputs, renders the prompt, makes exactly one Gemini call and
/// returns `{ "script": ... }`. Every failure becomes a JSON `{ "error": ... }` body.
///
/// The body is taken unread so the key check runs before any body limit applies.
/// The error response is built inside the request span so its log line carries
/// `request_id` and `platform`.
pub async fn handle_generate_script(State(state): State<AppState>, body: Body) -> Response {
    let span = info_span!(
        "generate_script",
        request_id = %Uuid::new_v4(),
        platform = tracing::field::Empty
    );

    async move { generate_script(&state, body).await.into_response() }
        .instrument(span)
        .await
}

/// Any other method on the script route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn generate_script(
    state: &AppState,
    body: Body,
) -> Result<Json<GenerateScriptResponse>, AppError> {
    let llm = state
        .llm
        .as_ref()
        .ok_or(AppError::ConfigurationMissing("GEMINI_API_KEY"))?;

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        AppError::bad_request(format!(
            "Request body could not be read (limit {MAX_BODY_BYTES} bytes): {e}"
        ))
    })?;

    let request = parse_request(&body)?;
    Span::current().record("platform", request.platform.as_str());

    let prompt = build_prompt(&request);
    let script = llm.generate(&prompt.data, &prompt.instruction).await?;

    info!("Generated outreach script ({} chars)", script.len());
    Ok(Json(GenerateScriptResponse { script }))
}

/// Parses the raw body into a validated request.
///
/// An empty body is treated the same as a body without `inputs`.
fn parse_request(body: &[u8]) -> Result<OutreachRequest, AppError> {
    let envelope: GenerateScriptRequest = if body.iter().all(u8::is_ascii_whitespace) {
        GenerateScriptRequest { inputs: None }
    } else {
        serde_json::from_slice(body)
            .map_err(|e| AppError::bad_request(format!("Request body is not valid JSON: {e}")))?
    };

    let inputs = envelope
        .inputs
        .ok_or_else(|| AppError::bad_request("Request body 'inputs' is required."))?;

    inputs.validate().map_err(|missing| AppError::BadRequest {
        message: format!("Missing required input fields: {}", missing.join(", ")),
        details: Some(json!({ "missing_fields": missing })),
    })
}
