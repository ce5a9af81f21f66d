// file: src/main.rs
// description: service entry point: CLI flags, config load, server bootstrap
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use digithesis_ai::{AppState, Config, OpenAiClient, build_router};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "digithesis_ai")]
#[command(version = "0.1.0")]
#[command(about = "AI originality checking service for DigiThesis", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    digithesis_ai::utils::logging::init_logger(cli.color, cli.verbose);

    info!("DigiThesis AI Services");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using defaults with environment overrides",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    let credential_present = config.openai.credential_present();
    if !credential_present {
        warn!("OPENAI_API_KEY is not set; plagiarism checks will fail until it is configured");
    }

    let completion = OpenAiClient::new(&config.openai)?;
    let state = AppState {
        completion: Arc::new(completion),
        credential_present,
    };

    let router = build_router(&config.server, state)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
