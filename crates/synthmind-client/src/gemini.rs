use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use synthmind_core::Credential;
use tracing::{debug, info};

use crate::traits::{ClientError, ModelClient};

pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini REST client: one `generateContent` call per prompt.
///
/// The credential is passed in explicitly and sent as the `x-goog-api-key`
/// header. Nothing is read from or written to the process environment.
pub struct GeminiClient {
    base_url: String,
    model: String,
    client: Client,
    credential: Option<Credential>,
}

impl GeminiClient {
    pub fn new(credential: Option<Credential>) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client: Client::new(),
            credential,
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl GenerateResponse {
    /// Concatenate the text parts of the first candidate.
    fn into_text(self) -> Result<String, ClientError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!("no candidates returned (blocked: {r})"))
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(ClientError::MalformedResponse(reason));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .map(|r| format!("candidate has no text (finish reason: {r})"))
                .unwrap_or_else(|| "candidate has no text".to_string());
            return Err(ClientError::MalformedResponse(reason));
        }
        Ok(text)
    }
}

fn parse_error(status: StatusCode, body: String) -> ClientError {
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or(body);
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model_hint(&self) -> Option<&str> {
        Some(&self.model)
    }

    fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        let Some(credential) = &self.credential else {
            return Err(ClientError::MissingCredential);
        };

        let body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("POST {} ({} prompt bytes)", self.endpoint(), prompt.len());
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(parse_error(status, body));
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(format!("json decode: {e}")))?;
        let text = parsed.into_text()?;
        info!("{}: received {} bytes", self.model, text.len());
        Ok(text)
    }
}
