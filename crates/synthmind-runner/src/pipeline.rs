use synthmind_client::{normalize, ModelClient};
use synthmind_core::{BlockedReason, PipelineResult, PipelineState, Role, Session, StageResult};
use synthmind_prompts::PromptContext;
use tracing::{debug, info, warn};

/// Hooks called as a run moves through its states.
///
/// All methods default to no-ops. Observers cannot stop a run.
pub trait PipelineObserver {
    fn on_state(&mut self, _state: PipelineState) {}

    fn on_prompt(&mut self, _role: Role, _prompt: &str) {}

    fn on_stage_complete(&mut self, _role: Role, _result: &StageResult) {}
}

pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Session slots are overwritten as each stage completes, not at the end.
impl PipelineObserver for Session {
    fn on_state(&mut self, state: PipelineState) {
        self.set_state(state);
    }

    fn on_stage_complete(&mut self, role: Role, result: &StageResult) {
        self.record(role, result);
    }
}

/// Forwards every event to each wrapped observer in order.
pub struct Fanout<'a> {
    observers: Vec<&'a mut dyn PipelineObserver>,
}

impl<'a> Fanout<'a> {
    pub fn new(observers: Vec<&'a mut dyn PipelineObserver>) -> Self {
        Self { observers }
    }
}

impl PipelineObserver for Fanout<'_> {
    fn on_state(&mut self, state: PipelineState) {
        for o in self.observers.iter_mut() {
            o.on_state(state);
        }
    }

    fn on_prompt(&mut self, role: Role, prompt: &str) {
        for o in self.observers.iter_mut() {
            o.on_prompt(role, prompt);
        }
    }

    fn on_stage_complete(&mut self, role: Role, result: &StageResult) {
        for o in self.observers.iter_mut() {
            o.on_stage_complete(role, result);
        }
    }
}

/// Runs Designer, Coder and Critic in order against one client.
///
/// Each stage awaits the previous one, since its prompt embeds the previous
/// output. Client failures do not stop the run: the normalized error text
/// becomes that stage's output and is passed on as context.
pub struct Pipeline<'a> {
    client: &'a dyn ModelClient,
}

impl<'a> Pipeline<'a> {
    pub fn new(client: &'a dyn ModelClient) -> Self {
        Self { client }
    }

    /// Validate the inputs of a run without executing any stage.
    pub fn check_preconditions(&self, idea: &str) -> Result<(), BlockedReason> {
        if idea.trim().is_empty() {
            return Err(BlockedReason::EmptyIdea);
        }
        if !self.client.has_credential() {
            return Err(BlockedReason::MissingCredential);
        }
        Ok(())
    }

    pub async fn run(&self, idea: &str) -> Result<PipelineResult, BlockedReason> {
        self.run_observed(idea, &mut NoopObserver).await
    }

    pub async fn run_observed(
        &self,
        idea: &str,
        observer: &mut dyn PipelineObserver,
    ) -> Result<PipelineResult, BlockedReason> {
        observer.on_state(PipelineState::Idle);

        if let Err(reason) = self.check_preconditions(idea) {
            warn!("pipeline blocked: {reason}");
            observer.on_state(PipelineState::Blocked);
            return Err(reason);
        }

        info!(
            "pipeline starting ({}{})",
            self.client.name(),
            self.client
                .model_hint()
                .map(|m| format!(", model={m}"))
                .unwrap_or_default()
        );

        let mut ctx = PromptContext::new(idea);

        let design = self.run_stage(Role::Designer, &ctx, observer).await;
        ctx = ctx.with_design(design.text());

        let code = self.run_stage(Role::Coder, &ctx, observer).await;
        ctx = ctx.with_code(code.text());

        let critique = self.run_stage(Role::Critic, &ctx, observer).await;

        observer.on_state(PipelineState::Done);
        info!("pipeline complete");

        Ok(PipelineResult {
            idea: idea.to_string(),
            design,
            code,
            critique,
        })
    }

    /// Run a new pipeline and write its outputs into `session`.
    ///
    /// A blocked run leaves the session exactly as it was.
    pub async fn run_in_session(
        &self,
        session: &mut Session,
        idea: &str,
    ) -> Result<PipelineResult, BlockedReason> {
        self.run_in_session_observed(session, idea, &mut NoopObserver)
            .await
    }

    pub async fn run_in_session_observed(
        &self,
        session: &mut Session,
        idea: &str,
        observer: &mut dyn PipelineObserver,
    ) -> Result<PipelineResult, BlockedReason> {
        if let Err(reason) = self.check_preconditions(idea) {
            warn!("pipeline blocked: {reason}");
            return Err(reason);
        }
        session.begin(idea);
        let mut fan = Fanout::new(vec![session, observer]);
        self.run_observed(idea, &mut fan).await
    }

    async fn run_stage(
        &self,
        role: Role,
        ctx: &PromptContext,
        observer: &mut dyn PipelineObserver,
    ) -> StageResult {
        observer.on_state(PipelineState::running(role));

        let prompt = synthmind_prompts::assemble_prompt(role, ctx);
        debug!("{role} prompt:\n{prompt}");
        observer.on_prompt(role, &prompt);

        info!("running {role} stage via {}", self.client.name());
        let result = normalize(self.client.generate(&prompt).await);
        if result.is_failed() {
            warn!("{role} stage failed: {}", result.text());
        } else {
            info!("{role} stage complete ({} bytes)", result.text().len());
        }

        observer.on_stage_complete(role, &result);
        result
    }
}
