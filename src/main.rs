// Thoughtbook - browse, search and share a collection of quotations
//
// Loads a JSON collection of quotations ("thoughts") from a file or URL and
// lets you page through it, filter by search text and category, open a
// thought in full, jump along keyword cross-links and share a quote.
//
// Architecture:
// - Loader: fetches and parses the collection (reqwest or filesystem)
// - Pipeline: filter → paginate → keyword links, all over owned state
// - Render: display blocks shared by the plain-text, HTML and TUI front ends
// - TUI (ratatui): the interactive viewer
// - CLI (clap): headless list/categories/export plus config management

mod cli;
mod config;
mod logging;
mod pipeline;
mod render;
mod thoughts;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use thoughts::loader::{self, Source};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // A broken config file must not lock the user out of `config --reset`
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Some(Commands::Config { .. })) => {
            eprintln!("Warning: {:#}", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };
    if let Some(source) = cli.source {
        config.source = source;
    }

    let interactive = cli.command.is_none();
    let log_buffer = LogBuffer::new();

    // The guard must live until exit so buffered file logs flush
    let _file_guard = init_tracing(&config.logging, interactive.then_some(&log_buffer));

    match cli.command {
        Some(command) => cli::run_command(command, &config).await,
        None => {
            // Load in the background; the viewer shows its loading state meanwhile
            let source = Source::parse(&config.source);
            let (load_tx, load_rx) = mpsc::channel(1);
            tokio::spawn(async move {
                tracing::info!("Loading thoughts from {}", source);
                let result = loader::load(&source).await;
                if load_tx.send(result).await.is_err() {
                    tracing::debug!("Viewer closed before the load finished");
                }
            });

            tracing::info!("Starting TUI");
            let result = tui::run_tui(&config, log_buffer, load_rx).await;
            if let Err(e) = &result {
                tracing::error!("TUI error: {:?}", e);
            }
            result
        }
    }
}

/// Initialize tracing with conditional output
///
/// - TUI mode: capture logs to the buffer (prevents garbling the display)
/// - Headless mode: write logs to stderr so stdout stays clean for output
/// - File logging: optionally also write JSON to rotating log files
///
/// Precedence: RUST_LOG env var > config file > default "info"
fn init_tracing(logging: &LoggingConfig, tui_buffer: Option<&LogBuffer>) -> Option<WorkerGuard> {
    let default_filter = format!("thoughtbook={}", logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = tui_buffer.map(|buffer| TuiLogLayer::new(buffer.clone()));
    let stderr_layer = tui_buffer
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = match file_writer(logging) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Non-blocking rolling file writer, if file logging is enabled and possible
fn file_writer(
    logging: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        // Tracing isn't up yet
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };
    Some(tracing_appender::non_blocking(file_appender))
}
