use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salary_engine::api::{AppState, create_router};
use salary_engine::config::ConfigLoader;

/// Uruguayan net salary calculator (BPS contributions and IRPF).
///
/// Loads one fiscal year's configuration and serves the calculation API.
#[derive(Debug, Parser)]
#[command(name = "salary-engine", version)]
struct Cli {
    /// Directory holding fiscal_year.yaml and brackets.yaml.
    #[arg(long, env = "SALARY_ENGINE_CONFIG", default_value = "config/uy2025")]
    config: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "SALARY_ENGINE_BIND", default_value = "127.0.0.1:8000")]
    bind: SocketAddr,
}

/// Initialise the tracing subscriber.
///
/// Honours `RUST_LOG` when set and falls back to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let loader = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    info!(
        fiscal_year = loader.config().fiscal_year(),
        reference_unit = %loader.config().reference_unit(),
        minimum_wage = %loader.config().minimum_wage(),
        "configuration loaded"
    );

    let router = create_router(AppState::new(loader));

    let listener = TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;
    info!(address = %cli.bind, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
