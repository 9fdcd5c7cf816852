use thiserror::Error;

/// Why a pipeline run refused to start. No stage executes when one of these
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockedReason {
    #[error("Please describe your idea first.")]
    EmptyIdea,

    #[error("Please enter your API key first.")]
    MissingCredential,
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential must not be empty")]
    Empty,
}
