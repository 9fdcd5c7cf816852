use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::{ClientError, ModelClient};

/// A deterministic client for testing that replays queued responses and
/// records every prompt it receives.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, ClientError>>>,
    prompts: Mutex<Vec<String>>,
    credential: bool,
}

impl ScriptedClient {
    /// Create a client that returns the given outcomes in order.
    pub fn new(responses: Vec<Result<String, ClientError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
            credential: true,
        }
    }

    /// Create a client that returns each string as a successful response.
    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    /// Report no configured credential.
    pub fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    /// Queue more outcomes after the existing ones.
    pub fn push(&self, outcome: Result<String, ClientError>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(outcome);
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Internal("script exhausted".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_scripted() {
        let c = ScriptedClient::replying(&[]);
        assert_eq!(c.name(), "scripted");
        assert_eq!(c.model_hint(), None);
    }

    #[test]
    fn credential_flag() {
        assert!(ScriptedClient::replying(&[]).has_credential());
        assert!(!ScriptedClient::replying(&[]).without_credential().has_credential());
    }

    #[tokio::test]
    async fn replays_in_order_and_records_prompts() {
        let c = ScriptedClient::new(vec![
            Ok("one".into()),
            Err(ClientError::Http("down".into())),
        ]);
        assert_eq!(c.generate("p1").await.unwrap(), "one");
        assert_eq!(
            c.generate("p2").await.unwrap_err(),
            ClientError::Http("down".into())
        );
        assert_eq!(c.prompts(), vec!["p1".to_string(), "p2".to_string()]);
        assert_eq!(c.calls(), 2);
    }

    #[tokio::test]
    async fn exhausted_script_is_internal_error() {
        let c = ScriptedClient::replying(&[]);
        let err = c.generate("p").await.unwrap_err();
        assert_eq!(err, ClientError::Internal("script exhausted".into()));
        assert_eq!(c.calls(), 1);
    }

    #[tokio::test]
    async fn push_appends() {
        let c = ScriptedClient::replying(&["a"]);
        c.push(Ok("b".into()));
        assert_eq!(c.generate("x").await.unwrap(), "a");
        assert_eq!(c.generate("y").await.unwrap(), "b");
    }
}
