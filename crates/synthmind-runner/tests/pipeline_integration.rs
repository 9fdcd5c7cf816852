//! End-to-end pipeline behavior against a scripted model client.
//!
//! Covers the precondition gate, upstream threading between stages, error
//! text flowing downstream, and slot overwrite across repeated runs.

use synthmind_client::{ClientError, ScriptedClient};
use synthmind_core::{BlockedReason, PipelineState, Role, Session, StageResult};
use synthmind_runner::{Pipeline, PipelineObserver};

fn ok(s: &str) -> StageResult {
    StageResult::Ok(s.into())
}

// ---- Preconditions ----

#[tokio::test]
async fn empty_idea_blocks_without_calls() {
    for idea in ["", " ", "\n\t  \n"] {
        let client = ScriptedClient::replying(&["D", "C", "R"]);
        let err = Pipeline::new(&client).run(idea).await.unwrap_err();
        assert_eq!(err, BlockedReason::EmptyIdea);
        assert_eq!(client.calls(), 0);
    }
}

#[tokio::test]
async fn missing_credential_blocks_without_calls() {
    let long = "a very long idea ".repeat(50);
    for idea in ["a water tracker", "x", long.as_str()] {
        let client = ScriptedClient::replying(&["D", "C", "R"]).without_credential();
        let err = Pipeline::new(&client).run(idea).await.unwrap_err();
        assert_eq!(err, BlockedReason::MissingCredential);
        assert_eq!(client.calls(), 0);
    }
}

#[test]
fn blocked_reason_messages_are_user_facing() {
    assert_eq!(
        BlockedReason::EmptyIdea.to_string(),
        "Please describe your idea first."
    );
    assert_eq!(
        BlockedReason::MissingCredential.to_string(),
        "Please enter your API key first."
    );
}

// ---- Happy path ----

#[tokio::test]
async fn outputs_thread_through_stages() {
    let client = ScriptedClient::replying(&["DESIGN-D", "CODE-C", "CRITIQUE-R"]);
    let result = Pipeline::new(&client)
        .run("gamify water intake with a growing plant")
        .await
        .unwrap();

    assert_eq!(result.design, ok("DESIGN-D"));
    assert_eq!(result.code, ok("CODE-C"));
    assert_eq!(result.critique, ok("CRITIQUE-R"));
    assert!(!result.has_failures());

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("gamify water intake with a growing plant"));
    assert!(prompts[0].contains("role of the DESIGNER"));
    assert!(prompts[1].contains("DESIGN-D"));
    assert!(prompts[1].contains("role of the CODER"));
    assert!(prompts[2].contains("DESIGN-D"));
    assert!(prompts[2].contains("CODE-C"));
    assert!(prompts[2].contains("role of the CRITIC"));
}

// ---- Failures flow downstream ----

#[tokio::test]
async fn designer_failure_becomes_coder_context() {
    let client = ScriptedClient::new(vec![
        Err(ClientError::Http("connection reset".into())),
        Ok("C".into()),
        Ok("R".into()),
    ]);
    let result = Pipeline::new(&client).run("idea").await.unwrap();

    let e1 = "Error: request failed: connection reset";
    assert_eq!(result.design, StageResult::Failed(e1.into()));
    assert_eq!(result.code, ok("C"));
    assert_eq!(result.critique, ok("R"));
    assert!(result.has_failures());

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[1].contains(e1));
    assert!(prompts[2].contains(e1));
}

#[tokio::test]
async fn every_stage_failing_still_reaches_done() {
    let client = ScriptedClient::new(vec![
        Err(ClientError::Api {
            status: 429,
            message: "quota".into(),
        }),
        Err(ClientError::MalformedResponse("no candidates returned".into())),
        Err(ClientError::Http("timeout".into())),
    ]);
    let mut session = Session::new();
    let result = Pipeline::new(&client)
        .run_in_session(&mut session, "idea")
        .await
        .unwrap();

    assert_eq!(session.state(), PipelineState::Done);
    for role in Role::ALL {
        assert!(result.get(role).is_failed());
        assert!(result.get(role).text().starts_with("Error: "));
    }
    let prompts = client.prompts();
    assert!(prompts[2].contains("Error: API error (429): quota"));
    assert!(prompts[2].contains("Error: malformed response: no candidates returned"));
}

// ---- Repeated runs ----

#[tokio::test]
async fn same_inputs_give_same_result() {
    let client = ScriptedClient::replying(&["D", "C", "R", "D", "C", "R"]);
    let pipeline = Pipeline::new(&client);
    let first = pipeline.run("idea").await.unwrap();
    let second = pipeline.run("idea").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(client.prompts()[0..3], client.prompts()[3..6]);
}

#[tokio::test]
async fn rerun_overwrites_every_slot() {
    let client = ScriptedClient::replying(&["D1", "C1", "R1"]);
    let mut session = Session::new();
    let pipeline = Pipeline::new(&client);
    pipeline.run_in_session(&mut session, "first").await.unwrap();

    client.push(Ok("D2".into()));
    client.push(Err(ClientError::Http("down".into())));
    client.push(Err(ClientError::Http("still down".into())));
    let second = pipeline.run_in_session(&mut session, "second").await.unwrap();

    assert_eq!(second.idea, "second");
    assert_eq!(second.design, ok("D2"));
    assert_eq!(
        second.code,
        StageResult::Failed("Error: request failed: down".into())
    );
    assert_eq!(
        second.critique,
        StageResult::Failed("Error: request failed: still down".into())
    );

    let stored = session.result().unwrap();
    assert_eq!(stored, second);
    for role in Role::ALL {
        assert!(!stored.get(role).text().ends_with('1'));
    }
    // Second run's coder saw the second design, never the first.
    let prompts = client.prompts();
    assert!(prompts[4].contains("D2"));
    assert!(!prompts[4].contains("D1"));
}

type Slots = [Option<String>; 3];

fn slots(design: &str, code: &str, critique: &str) -> Slots {
    [design, code, critique].map(|t| Some(t.to_string()))
}

/// Drives a session through its observer hooks and records its state and
/// slots after every event.
struct SessionWatch<'a> {
    session: &'a mut Session,
    seen: Vec<(PipelineState, Slots)>,
}

impl SessionWatch<'_> {
    fn snapshot(&mut self) {
        let slots = Role::ALL.map(|r| self.session.slot(r).map(|s| s.text().to_string()));
        self.seen.push((self.session.state(), slots));
    }
}

impl PipelineObserver for SessionWatch<'_> {
    fn on_state(&mut self, state: PipelineState) {
        self.session.on_state(state);
        self.snapshot();
    }

    fn on_stage_complete(&mut self, role: Role, result: &StageResult) {
        self.session.on_stage_complete(role, result);
        self.snapshot();
    }
}

#[tokio::test]
async fn rerun_overwrites_slots_one_stage_at_a_time() {
    let client = ScriptedClient::replying(&["D1", "C1", "R1", "D2", "C2", "R2"]);
    let pipeline = Pipeline::new(&client);
    let mut session = Session::new();
    pipeline.run_in_session(&mut session, "first").await.unwrap();

    session.begin("second");
    let mut watch = SessionWatch {
        session: &mut session,
        seen: Vec::new(),
    };
    pipeline.run_observed("second", &mut watch).await.unwrap();
    let seen = watch.seen;

    use PipelineState::*;
    assert_eq!(
        seen,
        vec![
            (Idle, slots("D1", "C1", "R1")),
            (DesignerRunning, slots("D1", "C1", "R1")),
            (DesignerRunning, slots("D2", "C1", "R1")),
            (CoderRunning, slots("D2", "C1", "R1")),
            (CoderRunning, slots("D2", "C2", "R1")),
            (CriticRunning, slots("D2", "C2", "R1")),
            (CriticRunning, slots("D2", "C2", "R2")),
            (Done, slots("D2", "C2", "R2")),
        ]
    );
    assert_eq!(session.result().unwrap().design, ok("D2"));
}

#[tokio::test]
async fn blocked_rerun_keeps_previous_session() {
    let client = ScriptedClient::replying(&["D", "C", "R"]);
    let mut session = Session::new();
    let pipeline = Pipeline::new(&client);
    let first = pipeline.run_in_session(&mut session, "idea").await.unwrap();

    let err = pipeline.run_in_session(&mut session, "   ").await.unwrap_err();
    assert_eq!(err, BlockedReason::EmptyIdea);
    assert_eq!(client.calls(), 3);
    assert_eq!(session.result(), Some(first));
}
