use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sagestream_cli::{
    cli::Cli,
    config::Config,
    events::{open_source, read_events},
    replay::replay,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli
        .load_config()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    let source = config.input.source_path();
    tracing::info!(source = source.unwrap_or("stdin"), "Replaying event stream");

    let reader = open_source(source).await?;
    replay(
        read_events(reader),
        config.input.line_buffer(),
        std::io::stdout(),
    )
    .await
    .context("Event stream replay failed")?;

    Ok(())
}

// Logs go to stderr so stdout carries only generated text
fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}
