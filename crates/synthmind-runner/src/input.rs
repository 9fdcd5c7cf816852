use std::io::Read;

use anyhow::{Context, Result};

use crate::config::RunnerConfig;

/// Pick the idea from, in order: the positional argument, `--idea-file`,
/// or everything on `stdin`.
///
/// Trailing line endings from a file or pipe are dropped; everything else is
/// kept as typed.
pub fn resolve_idea(config: &RunnerConfig, mut stdin: impl Read) -> Result<String> {
    if let Some(idea) = &config.idea {
        return Ok(idea.clone());
    }
    if let Some(path) = &config.idea_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read idea file {}", path.display()))?;
        return Ok(strip_line_endings(text));
    }
    let mut buf = String::new();
    stdin
        .read_to_string(&mut buf)
        .context("failed to read idea from stdin")?;
    Ok(strip_line_endings(buf))
}

fn strip_line_endings(mut text: String) -> String {
    let len = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(len);
    text
}
