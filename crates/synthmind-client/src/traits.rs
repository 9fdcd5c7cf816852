use async_trait::async_trait;
use synthmind_core::StageResult;
use thiserror::Error;

/// Text shown in place of a stage output when no API key is configured.
pub const MISSING_CREDENTIAL_WARNING: &str = "⚠️ Please enter your API key first.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("API key is not configured")]
    MissingCredential,

    #[error("request failed: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Internal(String),
}

/// A single-shot text generation service.
///
/// One call is one blocking round trip: no retries, no streaming. Prompt
/// assembly lives in synthmind-prompts; turning failures into stage output
/// is done by [`normalize`].
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Human-readable client name for logging.
    fn name(&self) -> &str;

    /// Model identifier, if the client targets a specific one.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    /// Whether a credential is available. Checked before any stage runs.
    fn has_credential(&self) -> bool;

    /// Send one fully composed prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, ClientError>;
}

/// Convert a client outcome into stage output.
///
/// Failures become `Failed` with the text that downstream stages will see:
/// the missing-key warning, or `Error: ` followed by the failure description.
pub fn normalize(outcome: Result<String, ClientError>) -> StageResult {
    match outcome {
        Ok(text) => StageResult::Ok(text),
        Err(ClientError::MissingCredential) => {
            StageResult::Failed(MISSING_CREDENTIAL_WARNING.to_string())
        }
        Err(e) => StageResult::Failed(format!("Error: {e}")),
    }
}
