/// LLM Client — the single point of entry for every generative-AI call in the builder.
///
/// Both AI adapters (intake and ATS) go through [`GenerativeBackend`]; the
/// production implementation is [`LlmClient`], a thin wrapper over the Gemini
/// `generateContent` REST endpoint with structured (schema-constrained) output.
///
/// A client built without a credential is still constructed: it logs one
/// warning and every call fails fast with [`LlmError::MissingCredential`].
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Gemini API key is missing")]
    MissingCredential,
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// Which adapter is calling. Selects the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmTask {
    Intake,
    Ats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    /// Base64-encoded bytes with their media type.
    InlineData { mime_type: String, data: String },
}

/// One structured-output request: content parts plus the JSON schema the
/// response must follow.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    pub task: LlmTask,
    pub parts: Vec<Part>,
    pub schema: Value,
}

impl LlmRequest {
    pub fn new(task: LlmTask, schema: Value) -> Self {
        Self {
            task,
            parts: Vec::new(),
            schema,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text(text.into()));
        self
    }

    pub fn inline_data(mut self, mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        self.parts.push(Part::InlineData {
            mime_type: mime_type.into(),
            data: data.into(),
        });
        self
    }

    /// All text parts joined, for assertions and logging.
    pub fn prompt_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The seam both AI adapters depend on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Sends the request and returns the model's JSON output.
    async fn generate_json(&self, request: &LlmRequest) -> Result<Value, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini wire format
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: WireContent<'a>,
    contents: Vec<WireContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum WirePart<'a> {
    Text {
        text: &'a str,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: WireBlob<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireBlob<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Text of the first candidate, parts concatenated. `None` when blank.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
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

fn build_body<'a>(request: &'a LlmRequest) -> GenerateContentRequest<'a> {
    let parts = request
        .parts
        .iter()
        .map(|part| match part {
            Part::Text(text) => WirePart::Text { text },
            Part::InlineData { mime_type, data } => WirePart::Inline {
                inline_data: WireBlob { mime_type, data },
            },
        })
        .collect();
    GenerateContentRequest {
        system_instruction: WireContent {
            role: None,
            parts: vec![WirePart::Text {
                text: prompts::JSON_ONLY_SYSTEM,
            }],
        },
        contents: vec![WireContent {
            role: Some("user"),
            parts,
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: &request.schema,
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Model identifiers per task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelIds {
    pub intake: String,
    pub ats: String,
}

impl Default for ModelIds {
    fn default() -> Self {
        Self {
            intake: DEFAULT_MODEL.to_string(),
            ats: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ModelIds {
    pub fn for_task(&self, task: LlmTask) -> &str {
        match task {
            LlmTask::Intake => &self.intake,
            LlmTask::Ats => &self.ats,
        }
    }
}

/// The single Gemini client shared by both AI adapters.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    models: ModelIds,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, models: ModelIds, timeout: Duration) -> Result<Self, LlmError> {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            warn!("Gemini API key is not configured; AI intake and ATS scoring are disabled");
        }
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            models,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Self::new(
            config.gemini_api_key.clone(),
            config.models.clone(),
            config.request_timeout,
        )
    }

    /// Points the client at another `generateContent`-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn models(&self) -> &ModelIds {
        &self.models
    }

    /// Makes one call to `generateContent` and returns the full response.
    /// No retries: a failure is reported to the caller as-is.
    pub async fn call(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;
        let model = self.models.for_task(request.task);
        let url = format!("{}/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&build_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, output_tokens={}",
                model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(llm_response)
    }

    /// Calls the model and deserializes its text output as JSON.
    pub async fn call_json<T: DeserializeOwned>(&self, request: &LlmRequest) -> Result<T, LlmError> {
        let response = self.call(request).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        serde_json::from_str(json_object_span(&text)).map_err(LlmError::Parse)
    }
}

#[async_trait]
impl GenerativeBackend for LlmClient {
    async fn generate_json(&self, request: &LlmRequest) -> Result<Value, LlmError> {
        self.call_json(request).await
    }
}

/// Both schemas this crate requests are top-level objects. The model
/// occasionally wraps the object in a markdown fence (any info string) or adds
/// a sentence around it; this returns the span from the first `{` to the last
/// `}`, or the trimmed text when there is no such span.
fn json_object_span(text: &str) -> &str {
    let text = text.trim();
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}
