use crate::role::Role;
use crate::stage::{PipelineResult, PipelineState, StageResult};

/// Interactive session state: the last idea submitted and one output slot
/// per role.
///
/// Slots are overwritten one at a time as each stage of a new run
/// completes; there is no rollback.
#[derive(Debug, Clone)]
pub struct Session {
    idea: String,
    design: Option<StageResult>,
    code: Option<StageResult>,
    critique: Option<StageResult>,
    state: PipelineState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            idea: String::new(),
            design: None,
            code: None,
            critique: None,
            state: PipelineState::Idle,
        }
    }

    /// Start a new run for `idea`. Previous slots stay in place until their
    /// stage overwrites them.
    pub fn begin(&mut self, idea: &str) {
        self.idea = idea.to_string();
        self.state = PipelineState::Idle;
    }

    /// Overwrite the slot owned by `role`.
    pub fn record(&mut self, role: Role, result: &StageResult) {
        let slot = match role {
            Role::Designer => &mut self.design,
            Role::Coder => &mut self.code,
            Role::Critic => &mut self.critique,
        };
        *slot = Some(result.clone());
    }

    pub fn set_state(&mut self, state: PipelineState) {
        self.state = state;
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn slot(&self, role: Role) -> Option<&StageResult> {
        match role {
            Role::Designer => self.design.as_ref(),
            Role::Coder => self.code.as_ref(),
            Role::Critic => self.critique.as_ref(),
        }
    }

    /// The completed run, if the most recent run reached `Done`.
    pub fn result(&self) -> Option<PipelineResult> {
        if self.state != PipelineState::Done {
            return None;
        }
        Some(PipelineResult {
            idea: self.idea.clone(),
            design: self.design.clone()?,
            code: self.code.clone()?,
            critique: self.critique.clone()?,
        })
    }
}
