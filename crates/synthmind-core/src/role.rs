use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three fixed personas a pipeline run moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Designer,
    Coder,
    Critic,
}

impl Role {
    /// All roles in the order a pipeline runs them.
    pub const ALL: [Role; 3] = [Role::Designer, Role::Coder, Role::Critic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Designer => "designer",
            Role::Coder => "coder",
            Role::Critic => "critic",
        }
    }

    /// Upper-case name used inside prompts, e.g. `DESIGNER`.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Designer => "DESIGNER",
            Role::Coder => "CODER",
            Role::Critic => "CRITIC",
        }
    }

    /// Capitalized name for display, e.g. `Designer`.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Designer => "Designer",
            Role::Coder => "Coder",
            Role::Critic => "Critic",
        }
    }

    /// One-line summary of what the role contributes.
    pub fn description(&self) -> &'static str {
        match self {
            Role::Designer => "Interprets idea & drafts architecture.",
            Role::Coder => "Generates functional logic skeleton.",
            Role::Critic => "Reviews & improves design transparently.",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
