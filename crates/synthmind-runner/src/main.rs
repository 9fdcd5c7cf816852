use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use synthmind_client::ModelClient;
use synthmind_runner::app;
use synthmind_runner::config::RunnerConfig;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RunnerConfig::parse();
    info!("synthmind starting");

    let client = config.build_client();
    info!("model: {}", client.model_hint().unwrap_or("(default)"));
    if client.has_credential() {
        info!("API key connected");
    } else {
        warn!("no API key configured (set GEMINI_API_KEY or pass --api-key)");
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let outcome = if config.interactive {
        app::run_interactive(&config, &client, stdin.lock(), &mut stdout, &mut stderr).await?
    } else {
        app::run_once(&config, &client, stdin.lock(), &mut stdout, &mut stderr).await?
    };

    Ok(outcome.exit_code())
}
