use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Output of one stage.
///
/// `Failed` carries the normalized error text. Downstream stages still
/// receive that text as context, exactly as they would an `Ok` output, so a
/// later role may end up reasoning over an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum StageResult {
    Ok(String),
    Failed(String),
}

impl StageResult {
    /// The text that is stored, displayed and passed downstream.
    pub fn text(&self) -> &str {
        match self {
            StageResult::Ok(t) | StageResult::Failed(t) => t,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StageResult::Failed(_))
    }
}

impl fmt::Display for StageResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The three outputs of a completed run, owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub idea: String,
    pub design: StageResult,
    pub code: StageResult,
    pub critique: StageResult,
}

impl PipelineResult {
    pub fn get(&self, role: Role) -> &StageResult {
        match role {
            Role::Designer => &self.design,
            Role::Coder => &self.code,
            Role::Critic => &self.critique,
        }
    }

    pub fn has_failures(&self) -> bool {
        Role::ALL.iter().any(|r| self.get(*r).is_failed())
    }
}

/// Where a pipeline run currently is.
///
/// `Blocked` is only reachable from `Idle` and ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    DesignerRunning,
    CoderRunning,
    CriticRunning,
    Done,
    Blocked,
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::DesignerRunning => "designer_running",
            PipelineState::CoderRunning => "coder_running",
            PipelineState::CriticRunning => "critic_running",
            PipelineState::Done => "done",
            PipelineState::Blocked => "blocked",
        }
    }

    /// The running state for a given role.
    pub fn running(role: Role) -> Self {
        match role {
            Role::Designer => PipelineState::DesignerRunning,
            Role::Coder => PipelineState::CoderRunning,
            Role::Critic => PipelineState::CriticRunning,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
