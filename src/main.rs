// quotd - terminal quote viewer
//
// Fetches a JSON document of quotes (read-through 24h disk cache, streamed
// progress), shows one at a time in a ratatui TUI, and lets the user cycle,
// copy, or speak the current quote.
//
// Architecture:
// - Loader: one-shot fetch task, normalizes the document into a collection
// - Picker: without-replacement random selection (one round = every quote once)
// - TUI (ratatui): quote card, status bar, log panel, toast notices
// - Event channel: loader task -> TUI over mpsc

mod cli;
mod config;
mod demo;
mod events;
mod loader;
mod logging;
mod quotes;
mod speech;
mod startup;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation};
use events::AppEvent;
use loader::cache::QuoteCache;
use loader::Loader;
use logging::{LogBuffer, PanelLogLayer};
use speech::Speech;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Spawn the one-shot load task for this session (or a manual reload).
/// Offline mode feeds the bundled document through the same event path.
pub(crate) fn spawn_load(config: &Config, tx: mpsc::Sender<AppEvent>) {
    if config.offline {
        tokio::spawn(demo::run_offline(tx));
        return;
    }

    let cache = if config.cache.enabled {
        config
            .cache
            .dir
            .clone()
            .or_else(QuoteCache::default_dir)
            .map(|dir| QuoteCache::new(dir, config.cache.ttl()))
    } else {
        None
    };

    let loader = Loader::new(config.source_url(), config.streamed_progress, cache);
    tokio::spawn(loader.run(tx));
}

/// Headless mode: wait for the load, print one random quote, exit.
async fn run_headless(mut event_rx: mpsc::Receiver<AppEvent>) -> Result<()> {
    while let Some(event) = event_rx.recv().await {
        match event {
            AppEvent::Loaded { quotes, .. } => {
                let mut picker = quotes::picker::Picker::new(quotes);
                if let Some(quote) = picker.draw() {
                    println!("{}", quote.format_for_copy());
                }
                return Ok(());
            }
            AppEvent::LoadFailed { error, .. } => {
                anyhow::bail!("could not load quotes: {error}");
            }
            _ => {}
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --update)
    let offline_flag = match cli::handle_cli() {
        cli::CliAction::Handled => return Ok(()),
        cli::CliAction::Run { offline } => offline,
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    config.offline = config.offline || offline_flag;

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // Initialize tracing with conditional output:
    // - TUI mode captures logs to the buffer (stdout would garble the screen)
    // - headless mode logs to stdout
    // - file logging optionally adds a rotating JSON layer
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("quotd={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program so file
    // logs flush on exit
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = {
        let file_writer = if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };
                    Some(tracing_appender::non_blocking(appender))
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    None
                }
            }
        } else {
            None
        };

        let registry = tracing_subscriber::registry().with(filter);
        match (config.enable_tui, file_writer) {
            (true, Some((writer, guard))) => {
                registry
                    .with(PanelLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
                Some(guard)
            }
            (true, None) => {
                registry.with(PanelLogLayer::new(log_buffer.clone())).init();
                None
            }
            (false, Some((writer, guard))) => {
                registry
                    .with(tracing_subscriber::fmt::layer())
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(writer)
                            .with_ansi(false),
                    )
                    .init();
                Some(guard)
            }
            (false, None) => {
                registry.with(tracing_subscriber::fmt::layer()).init();
                None
            }
        }
    };

    // Probe the speech capability once; the TUI gates the action on it
    let speech = Speech::detect(&config.speech);

    // Print startup banner before the TUI takes the screen
    startup::print_startup(&config, speech.is_available());
    startup::log_startup(&config, speech.is_available());

    // Loader task -> TUI channel. The sender is also handed to the TUI for
    // manual reloads; bounded so a stalled UI applies backpressure.
    let (event_tx, event_rx) = mpsc::channel(64);
    spawn_load(&config, event_tx.clone());

    if config.enable_tui {
        tracing::info!("Starting TUI");
        if let Err(e) = tui::run_tui(event_rx, event_tx, log_buffer, config, speech).await {
            tracing::error!("TUI error: {e:?}");
            return Err(e);
        }
    } else {
        tracing::info!("TUI disabled, running in headless mode");
        run_headless(event_rx).await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
