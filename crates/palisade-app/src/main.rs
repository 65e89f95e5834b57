//! Palisade - offensive-text detection service.
//!
//! Runs the HTTP API server with the denylist filters and, when a credential
//! is configured, the external moderation client.

mod config;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::Config;
use palisade_core::moderation::{ModerationClient, OpenAiModeration};
use palisade_core::ClassificationPipeline;
use palisade_server::{AppState, Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// Palisade - offensive-text detection service
#[derive(Parser, Debug)]
#[command(name = "palisade", version, about)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Initialize console logging with an env-filter override.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("palisade={},warn", log_level)));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Build the moderation client from configuration, if a credential is set.
fn build_moderation(config: &Config) -> Option<Arc<dyn ModerationClient>> {
    match &config.openai_api_key {
        Some(key) => {
            tracing::info!("Using external moderation service");
            Some(Arc::new(OpenAiModeration::new(key.clone())))
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set, using denylist-only detection");
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args);

    tracing::info!("Starting Palisade...");

    let config = Config::load();
    let moderation = build_moderation(&config);

    let pipeline = ClassificationPipeline::new(moderation);
    let state = AppState::new(pipeline);

    let server_config = ServerConfig::default()
        .with_host(args.host)
        .with_port(args.port);
    let server = Server::with_state(server_config, state)?;

    server.run().await?;

    tracing::info!("Palisade shutting down");
    Ok(())
}
