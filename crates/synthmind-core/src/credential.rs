use std::fmt;

use crate::error::CredentialError;

/// API key for the text-generation service.
///
/// Only non-emptiness is checked. The secret never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Result<Self, CredentialError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Build a credential from an optional raw value, treating blank input
    /// as absent.
    pub fn from_optional(key: Option<&str>) -> Option<Self> {
        key.and_then(|k| Self::new(k).ok())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
