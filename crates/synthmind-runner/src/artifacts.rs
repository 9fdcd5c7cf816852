use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use synthmind_core::{PipelineResult, Role, StageResult};
use tracing::{info, warn};

use crate::pipeline::PipelineObserver;

/// Saves each stage's prompt and output into a directory as the run
/// progresses, then the full result as `result.json`.
///
/// Write failures do not interrupt the run; the first one is reported by
/// [`ArtifactWriter::finish`].
pub struct ArtifactWriter {
    dir: PathBuf,
    first_error: Option<anyhow::Error>,
}

impl ArtifactWriter {
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create save dir {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            first_error: None,
        })
    }

    fn write(&mut self, name: &str, contents: &str) {
        let path = self.dir.join(name);
        if let Err(e) = std::fs::write(&path, contents) {
            warn!("failed to write {}: {e}", path.display());
            if self.first_error.is_none() {
                self.first_error =
                    Some(anyhow::Error::new(e).context(format!("write {}", path.display())));
            }
        }
    }

    pub fn finish(mut self, result: &PipelineResult) -> Result<()> {
        let json = serde_json::to_string_pretty(result).context("serialize result")?;
        self.write("result.json", &json);
        if let Some(e) = self.first_error {
            return Err(e);
        }
        info!("artifacts saved to {}", self.dir.display());
        Ok(())
    }
}

impl PipelineObserver for ArtifactWriter {
    fn on_prompt(&mut self, role: Role, prompt: &str) {
        self.write(&format!("{role}.prompt.md"), prompt);
    }

    fn on_stage_complete(&mut self, role: Role, result: &StageResult) {
        self.write(&format!("{role}.md"), result.text());
    }
}
