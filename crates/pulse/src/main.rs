//! pulse — a server that pushes timestamped events to browsers over a
//! long-lived event stream.
//!
//! Wires settings, logging, metrics, the template renderer, the clock
//! event source, and the HTTP router, then serves until ctrl-c.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;
use tracing::{info, warn};

use pulse_render::TemplateRenderer;
use pulse_server::sse::clock::ClockSource;
use pulse_server::state::{AppState, StreamConfig};
use pulse_settings::{PulseSettings, load_settings, load_settings_from_path};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Command-line overrides. Highest priority, above the settings file and
/// `PULSE_*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "pulse", about = "Periodic server-push event streamer", version)]
struct Cli {
    /// Settings file path (default: ~/.pulse/settings.json).
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Tick interval in milliseconds.
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Directory holding the HTML templates.
    #[arg(long)]
    views_dir: Option<String>,
}

fn load(cli: &Cli) -> anyhow::Result<PulseSettings> {
    let mut settings = match &cli.config {
        Some(path) => load_settings_from_path(path)?,
        None => load_settings()?,
    };
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(ms) = cli.interval_ms {
        settings.stream.interval_ms = ms;
    }
    if let Some(dir) = &cli.views_dir {
        settings.server.views_dir = dir.clone();
    }
    // CLI values can reintroduce invalid combinations; correct them too.
    settings.validate();
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load(&cli).context("failed to load settings")?;
    pulse_core::logging::init(&settings.logging.level, settings.logging.json);

    let renderer = TemplateRenderer::from_dir(settings.server.views_dir.as_str())
        .with_context(|| format!("failed to open views directory {}", settings.server.views_dir))?;
    let metrics_handle = pulse_server::metrics::install_recorder();

    let state = AppState::new(
        Arc::new(renderer),
        Arc::new(ClockSource),
        StreamConfig {
            interval: settings.stream.interval(),
            index_template: settings.stream.index_template.clone(),
            event_template: settings.stream.event_template.clone(),
        },
    )
    .with_metrics(metrics_handle);

    let app = pulse_server::router(state);
    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, interval_ms = settings.stream.interval_ms, "pulse server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("shutdown complete");
    Ok(())
}

/// Resolve when ctrl-c arrives.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
    }
}
