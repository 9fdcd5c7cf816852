use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use synthmind_client::{GeminiClient, DEFAULT_API_BASE, DEFAULT_MODEL};
use synthmind_core::Credential;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown sections, one per role
    Text,
    /// The full result as pretty-printed JSON
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "synthmind",
    about = "Turn ideas into blueprints while watching the AI think",
    after_help = "How it works:\n  \
                  1. Input: describe your idea.\n  \
                  2. Designer: drafts architecture.\n  \
                  3. Coder: writes logic.\n  \
                  4. Critic: reviews & refines."
)]
pub struct RunnerConfig {
    /// Describe your goal in plain language. Read from stdin when omitted.
    pub idea: Option<String>,

    /// Read the idea from a file instead
    #[arg(long, conflicts_with = "idea")]
    pub idea_file: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(long, env = "SYNTHMIND_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generative language API
    #[arg(long, env = "SYNTHMIND_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Directory to save each stage's prompt and output into
    #[arg(long, env = "SYNTHMIND_SAVE_DIR")]
    pub save_dir: Option<PathBuf>,

    /// Read ideas from stdin, keeping one session across runs. An idea may
    /// span several lines and ends at a blank line. Enter `:quit` to stop.
    #[arg(long, short = 'i', conflicts_with_all = ["idea", "idea_file"])]
    pub interactive: bool,
}

impl RunnerConfig {
    /// The configured credential, treating a blank key as absent.
    pub fn credential(&self) -> Option<Credential> {
        Credential::from_optional(self.api_key.as_deref())
    }

    pub fn build_client(&self) -> GeminiClient {
        GeminiClient::new(self.credential())
            .with_model(&self.model)
            .with_base_url(&self.api_base)
    }
}
