/// LLM Client: the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All provider interactions MUST go through this module.
///
/// One attempt per call. Failures are classified and handed back to the caller,
/// never retried here.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The model used for all script generation.
pub const MODEL: &str = "gemini-2.5-flash-preview-09-2025";
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Harm categories relaxed on every request; all are sent with `BLOCK_NONE`.
const RELAXED_HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport or body-read failure. The request URL is stripped because it carries the key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The provider answered 2xx but without usable text. `details` is the raw body.
    #[error("Gemini returned no usable text")]
    Blocked { details: Value },
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Http(err.without_url())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    safety_settings: Vec<SafetySetting<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SafetySetting<'a> {
    category: &'a str,
    threshold: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(prompt: &'a str, system: &'a str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
            system_instruction: Content {
                parts: vec![RequestPart { text: system }],
            },
            safety_settings: RELAXED_HARM_CATEGORIES
                .iter()
                .map(|&category| SafetySetting {
                    category,
                    threshold: "BLOCK_NONE",
                })
                .collect(),
        }
    }
}

/// Successful `generateContent` body. Every field is defaulted so that partial or
/// blocked responses still deserialize and can be reported with their raw payload.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Text of the first part of the first candidate. Empty text counts as absent.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Pulls `error.message` out of a provider error body, if it has one.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<GeminiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| "Unknown Gemini error".to_string())
}

/// The Gemini client used by the script handler.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Self::with_endpoint(api_key, format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
    }

    /// Builds a client against an arbitrary `generateContent` URL.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            endpoint,
        })
    }

    /// Sends one `generateContent` call and returns the generated text.
    ///
    /// - non-2xx → `LlmError::Api` with the provider's status and `error.message`
    /// - 2xx without text at `candidates[0].content.parts[0].text` → `LlmError::Blocked`
    pub async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest::new(prompt, system);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!("Could not read Gemini error body: {}", e.without_url());
                String::new()
            });
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let bytes = response.bytes().await?;
        let raw: Value = serde_json::from_slice(&bytes)?;
        let parsed: LlmResponse = serde_json::from_value(raw.clone()).unwrap_or_default();

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "Gemini call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }
        if let Some(reason) = parsed.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            debug!("Gemini finish reason: {reason}");
        }

        match parsed.text() {
            Some(text) => Ok(text.to_string()),
            None => Err(LlmError::Blocked { details: raw }),
        }
    }
}
