// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: init and cleanup of the alternate
// screen, the event loop (keyboard, redraw tick, loader events), and
// rendering. All state lives in `App`; drawing is stateless over it.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::events::AppEvent;
use crate::logging::LogBuffer;
use crate::speech::Speech;
use anyhow::{Context, Result};
use app::{App, LoadState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. `event_tx` is kept for manual reloads ('r' spawns a fresh
/// one-shot load task feeding the same channel).
pub async fn run_tui(
    mut event_rx: mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
    log_buffer: LogBuffer,
    config: Config,
    speech: Speech,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(log_buffer, config, speech);

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx, event_tx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on three things at once: keyboard input, the
/// redraw tick (which also drives the reveal transition and toast
/// expiry), and loader events.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<AppEvent>,
    event_tx: mpsc::Sender<AppEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(150));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input (polled so the branch stays cancel-safe)
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event, &event_tx);
                    }
                }
            } => {}

            // Periodic tick: reveal transition, toast expiry
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Loader events
            Some(load_event) = event_rx.recv() => {
                app.handle_event(load_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent, event_tx: &mpsc::Sender<AppEvent>) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Help overlay absorbs everything; any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
        }

        // Next quote: primary action. No-op until the load resolves.
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('n') => {
            app.next_quote();
        }

        KeyCode::Char('y') => app.copy_current(),
        KeyCode::Char('s') => app.speak_current(),

        // Manual reload; at most one load in flight
        KeyCode::Char('r') => {
            if app.load_state != LoadState::Loading {
                tracing::info!("Manual reload requested");
                crate::spawn_load(&app.config, event_tx.clone());
            }
        }

        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('l') => app.show_logs = !app.show_logs,
        KeyCode::Char('?') => app.show_help = true,

        _ => {}
    }
}
