mod gemini;
mod scripted;
mod traits;

pub use gemini::{GeminiClient, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use scripted::ScriptedClient;
pub use traits::{normalize, ClientError, ModelClient, MISSING_CREDENTIAL_WARNING};
