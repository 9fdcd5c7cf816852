use std::io::{BufRead, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use synthmind_client::ModelClient;
use synthmind_core::{BlockedReason, Session};
use tracing::info;

use crate::artifacts::ArtifactWriter;
use crate::config::RunnerConfig;
use crate::input;
use crate::pipeline::{NoopObserver, Pipeline, PipelineObserver};
use crate::render::render;

const QUIT: &str = ":quit";
const COMPLETE: &str = "Synthesis complete.";

/// How a CLI invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Blocked(BlockedReason),
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::Blocked(_) => ExitCode::from(2),
        }
    }
}

/// Run one pipeline for a single idea and render the result to `out`.
/// Warnings go to `err`.
pub async fn run_once(
    config: &RunnerConfig,
    client: &dyn ModelClient,
    stdin: impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    let idea = input::resolve_idea(config, stdin)?;
    let pipeline = Pipeline::new(client);

    if let Err(reason) = pipeline.check_preconditions(&idea) {
        writeln!(err, "{reason}")?;
        return Ok(Outcome::Blocked(reason));
    }

    let mut writer = match &config.save_dir {
        Some(dir) => Some(ArtifactWriter::new(dir)?),
        None => None,
    };
    let mut noop = NoopObserver;
    let observer: &mut dyn PipelineObserver = match writer.as_mut() {
        Some(w) => w,
        None => &mut noop,
    };

    let result = match pipeline.run_observed(&idea, observer).await {
        Ok(result) => result,
        Err(reason) => {
            writeln!(err, "{reason}")?;
            return Ok(Outcome::Blocked(reason));
        }
    };

    if let Some(w) = writer {
        w.finish(&result)?;
    }
    out.write_all(render(&result, config.format)?.as_bytes())?;
    out.flush()?;
    writeln!(err, "{COMPLETE}")?;
    Ok(Outcome::Completed)
}

/// Read ideas from `input`, running a pipeline for each against one
/// session, until EOF or `:quit`.
///
/// An idea may span several lines and ends at a blank line or EOF. A blank
/// line with nothing before it is reported as an empty idea.
pub async fn run_interactive(
    config: &RunnerConfig,
    client: &dyn ModelClient,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    let pipeline = Pipeline::new(client);
    let mut session = Session::new();
    let mut runs = 0usize;
    let mut lines = input.lines();
    let mut idea = String::new();

    writeln!(
        err,
        "Describe your goal in plain language. End it with a blank line ({QUIT} to exit)."
    )?;
    write!(err, "> ")?;
    err.flush()?;

    loop {
        let line = lines
            .next()
            .transpose()
            .context("failed to read stdin")?;
        match line.as_deref() {
            Some(l) if l.trim() == QUIT => break,
            Some(l) if !l.trim().is_empty() => {
                if !idea.is_empty() {
                    idea.push('\n');
                }
                idea.push_str(l);
                continue;
            }
            Some(_) => {}
            None if idea.is_empty() => break,
            None => {}
        }

        let submitted = std::mem::take(&mut idea);
        if let Err(reason) = pipeline.check_preconditions(&submitted) {
            writeln!(err, "{reason}")?;
        } else {
            runs += 1;
            let mut writer = match &config.save_dir {
                Some(dir) => Some(ArtifactWriter::new(&dir.join(format!("run-{runs}")))?),
                None => None,
            };
            let mut noop = NoopObserver;
            let observer: &mut dyn PipelineObserver = match writer.as_mut() {
                Some(w) => w,
                None => &mut noop,
            };

            if let Err(reason) = pipeline
                .run_in_session_observed(&mut session, &submitted, observer)
                .await
            {
                writeln!(err, "{reason}")?;
            } else if let Some(result) = session.result() {
                if let Some(w) = writer {
                    w.finish(&result)?;
                }
                out.write_all(render(&result, config.format)?.as_bytes())?;
                out.flush()?;
                writeln!(err, "{COMPLETE}")?;
            }
        }

        if line.is_none() {
            break;
        }
        write!(err, "> ")?;
        err.flush()?;
    }

    writeln!(err)?;
    info!("session ended after {runs} run(s)");
    Ok(Outcome::Completed)
}
