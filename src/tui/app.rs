// TUI application state
//
// All session state lives here: the picker, the current quote, the load
// state that gates quote-dependent actions, and transient UI state (toast,
// reveal transition, overlays). Rendering reads this struct; nothing in it
// touches the terminal, so the pick/load logic is testable headless.

use super::clipboard;
use super::components::toast::Toast;
use super::theme::ThemeKind;
use crate::config::Config;
use crate::events::{AppEvent, LoadSource};
use crate::logging::LogBuffer;
use crate::quotes::picker::Picker;
use crate::quotes::Quote;
use crate::speech::Speech;
use std::time::Instant;

/// Ticks of the dimmed "reveal" transition after a new quote appears,
/// the terminal analog of the original's fade animation
const REVEAL_TICKS: u8 = 3;

/// Tri-state gating every quote-dependent action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Main application state for the TUI
pub struct App {
    /// Collection + consumption pool
    pub picker: Picker,

    /// Quote currently on the card
    pub current: Option<Quote>,

    /// Gates draw/copy/speak; nothing quote-dependent runs before Loaded
    pub load_state: LoadState,

    /// Where the collection came from (shown in the status bar)
    pub load_source: Option<LoadSource>,

    /// Streamed download progress: (bytes received, total when known)
    pub progress: Option<(u64, Option<u64>)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Help overlay visibility
    pub show_help: bool,

    /// Log panel visibility
    pub show_logs: bool,

    /// Current color theme
    pub theme: ThemeKind,

    /// Transient notification, auto-dismissed
    pub toast: Option<Toast>,

    /// Remaining reveal-transition ticks (>0 renders the card dimmed)
    pub reveal: u8,

    /// Buffer backing the log panel
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Effective configuration (needed for manual reloads)
    pub config: Config,

    /// Speech capability probed at startup
    speech: Speech,
}

impl App {
    pub fn with_config(log_buffer: LogBuffer, config: Config, speech: Speech) -> Self {
        let theme = ThemeKind::from_name(&config.theme);
        Self {
            picker: Picker::new(Vec::new()),
            current: None,
            load_state: LoadState::Loading,
            load_source: None,
            progress: None,
            should_quit: false,
            show_help: false,
            show_logs: false,
            theme,
            toast: None,
            reveal: 0,
            log_buffer,
            start_time: Instant::now(),
            config,
            speech,
        }
    }

    /// Apply one loader event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadStarted { url, .. } => {
                tracing::debug!("Loading quotes from {url}");
                self.load_state = LoadState::Loading;
                self.progress = None;
            }
            AppEvent::LoadProgress { received, total } => {
                self.progress = Some((received, total));
            }
            AppEvent::Loaded { quotes, source, .. } => {
                self.picker.reset(quotes);
                self.load_state = LoadState::Loaded;
                self.load_source = Some(source);
                self.progress = None;
                // Show the first quote immediately, like the original widget
                self.next_quote();
            }
            AppEvent::LoadFailed { error, .. } => {
                self.picker.reset(Vec::new());
                self.current = None;
                self.load_state = LoadState::Failed(error.user_message());
                self.progress = None;
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.load_state == LoadState::Loaded
    }

    /// Total quotes in the collection (0 before a successful load)
    pub fn total(&self) -> usize {
        self.picker.total()
    }

    /// Quotes already shown in the current round
    pub fn shown_in_round(&self) -> usize {
        let remaining = self.picker.remaining_in_round();
        self.picker.total().saturating_sub(remaining)
    }

    /// Advance to the next quote. No-ops (returning false) until loaded.
    pub fn next_quote(&mut self) -> bool {
        if !self.is_loaded() || self.picker.is_empty() {
            return false;
        }
        self.current = self.picker.draw().cloned();
        self.reveal = REVEAL_TICKS;
        true
    }

    /// Copy the current quote to the system clipboard
    pub fn copy_current(&mut self) {
        let Some(quote) = self.current.as_ref().filter(|_| self.is_loaded()) else {
            return;
        };
        let payload = quote.format_for_copy();
        match clipboard::copy_to_clipboard(&payload) {
            Ok(()) => self.show_toast(Toast::success("Copied to clipboard")),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e:#}");
                self.show_toast(Toast::error("Failed to copy"));
            }
        }
    }

    /// Read the current quote aloud
    pub fn speak_current(&mut self) {
        let Some(quote) = self.current.as_ref().filter(|_| self.is_loaded()) else {
            return;
        };
        if !self.speech.is_available() {
            self.show_toast(Toast::error("Speech is not available here"));
            return;
        }
        match self.speech.speak(quote) {
            Ok(()) => self.show_toast(Toast::info("Speaking…")),
            Err(e) => {
                tracing::warn!("Speech failed: {e:#}");
                self.show_toast(Toast::error("Failed to speak"));
            }
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        let name = self.theme.name();
        self.show_toast(Toast::info(format!("Theme: {name}")));
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Periodic tick: advance the reveal transition, expire the toast
    pub fn tick(&mut self) {
        if self.reveal > 0 {
            self.reveal -= 1;
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpeechConfig;
    use crate::events::LoadSource;
    use crate::loader::LoadError;
    use chrono::Utc;

    fn app() -> App {
        let speech = Speech::detect(&SpeechConfig {
            enabled: false,
            voice_zh: None,
            voice_en: None,
        });
        App::with_config(LogBuffer::new(), Config::default(), speech)
    }

    fn loaded_event(n: usize) -> AppEvent {
        let quotes = crate::loader::parse_document(&format!(
            r#"{{"quotes":[{}]}}"#,
            (0..n)
                .map(|i| format!(r#"{{"id":{i},"quote":"q{i}","author":"a"}}"#))
                .collect::<Vec<_>>()
                .join(",")
        ))
        .unwrap();
        AppEvent::Loaded {
            timestamp: Utc::now(),
            quotes,
            source: LoadSource::Network,
        }
    }

    #[test]
    fn test_actions_gated_before_load() {
        let mut app = app();
        assert_eq!(app.load_state, LoadState::Loading);
        assert!(!app.next_quote());
        assert!(app.current.is_none());
    }

    #[test]
    fn test_load_shows_first_quote_and_count() {
        let mut app = app();
        app.handle_event(loaded_event(5));
        assert!(app.is_loaded());
        assert_eq!(app.total(), 5);
        // First quote appears without further input
        assert!(app.current.is_some());
        assert_eq!(app.shown_in_round(), 1);
        assert_eq!(app.reveal, REVEAL_TICKS);
    }

    #[test]
    fn test_failure_empties_collection_and_disables_actions() {
        let mut app = app();
        app.handle_event(loaded_event(3));
        app.handle_event(AppEvent::LoadFailed {
            timestamp: Utc::now(),
            error: LoadError::Network("down".to_string()),
        });

        assert!(matches!(app.load_state, LoadState::Failed(_)));
        assert_eq!(app.total(), 0);
        assert!(app.current.is_none());
        assert!(!app.next_quote());
        // Copy/speak are no-ops with no current quote: no toast appears
        app.copy_current();
        app.speak_current();
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_copy_always_surfaces_a_notice_once_loaded() {
        let mut app = app();
        app.handle_event(loaded_event(2));
        // Success or failure depends on the environment's clipboard, but a
        // notice must appear either way
        app.copy_current();
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_round_progress_counts_draws() {
        let mut app = app();
        app.handle_event(loaded_event(4));
        assert_eq!(app.shown_in_round(), 1);
        app.next_quote();
        app.next_quote();
        assert_eq!(app.shown_in_round(), 3);
    }

    #[test]
    fn test_progress_events_tracked_and_cleared() {
        let mut app = app();
        app.handle_event(AppEvent::LoadProgress {
            received: 512,
            total: Some(2048),
        });
        assert_eq!(app.progress, Some((512, Some(2048))));
        app.handle_event(loaded_event(1));
        assert!(app.progress.is_none());
    }

    #[test]
    fn test_tick_advances_reveal() {
        let mut app = app();
        app.handle_event(loaded_event(1));
        assert_eq!(app.reveal, REVEAL_TICKS);
        app.tick();
        assert_eq!(app.reveal, REVEAL_TICKS - 1);
    }
}
