//! Configuration for the quote viewer
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/quotd/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Built-in quote source (overridable via config or QUOTD_SOURCE)
pub const DEFAULT_SOURCE: &str = "https://quotd.pages.dev/quotes.json";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Quote document location: an absolute URL, or a path joined onto
    /// `base_url` for deployments under a sub-path
    pub source: String,

    /// Optional deployment base joined ahead of a relative `source`
    pub base_url: Option<String>,

    /// Whether to enable the TUI (can be disabled for headless mode)
    pub enable_tui: bool,

    /// Offline mode: load the small bundled document, never touch the network
    pub offline: bool,

    /// Stream the download and report byte-level progress
    pub streamed_progress: bool,

    /// Theme name: "dark", "light", "paper"
    pub theme: String,

    /// Quote cache settings
    pub cache: CacheConfig,

    /// Speech synthesis settings
    pub speech: SpeechConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            base_url: None,
            enable_tui: true,
            offline: false,
            streamed_progress: true,
            theme: "dark".to_string(),
            cache: CacheConfig::default(),
            speech: SpeechConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Quote cache settings
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Override for the cache directory; platform default when unset
    pub dir: Option<PathBuf>,
    /// Freshness window in hours
    pub ttl_hours: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
            ttl_hours: 24,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_hours * 60 * 60)
    }
}

/// Speech synthesis settings
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Voice overrides; platform default voice for the locale when unset
    pub voice_zh: Option<String>,
    pub voice_en: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            voice_zh: None,
            voice_en: None,
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }

    fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "quotd".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub source: Option<String>,
    pub base_url: Option<String>,
    pub streamed_progress: Option<bool>,
    pub theme: Option<String>,

    /// Optional [cache] section
    pub cache: Option<FileCache>,

    /// Optional [speech] section
    pub speech: Option<FileSpeech>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileCache {
    pub enabled: Option<bool>,
    pub dir: Option<String>,
    pub ttl_hours: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileSpeech {
    pub enabled: Option<bool>,
    pub voice_zh: Option<String>,
    pub voice_en: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/quotd/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("quotd").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// If the config file exists but cannot be parsed. A broken config
    /// should fail fast with a clear error, not silently fall back to
    /// defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\nCONFIG ERROR - Failed to parse {}\n", path.display());
                    eprintln!("  {e}\n");
                    eprintln!("  To reset: quotd config --reset\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\nCONFIG ERROR - Cannot read {}: {e}\n", path.display());
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Config::default();

        let source = std::env::var("QUOTD_SOURCE")
            .ok()
            .or(file.source)
            .unwrap_or(defaults.source);

        let base_url = std::env::var("QUOTD_BASE_URL").ok().or(file.base_url);

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("QUOTD_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Offline mode: env only (runtime flag, also set by --offline)
        let offline = std::env::var("QUOTD_OFFLINE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let streamed_progress = file
            .streamed_progress
            .unwrap_or(defaults.streamed_progress);

        let theme = std::env::var("QUOTD_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let file_cache = file.cache.unwrap_or_default();
        let cache = CacheConfig {
            enabled: std::env::var("QUOTD_NO_CACHE")
                .map(|v| v != "1" && v.to_lowercase() != "true")
                .unwrap_or_else(|_| file_cache.enabled.unwrap_or(defaults.cache.enabled)),
            dir: file_cache.dir.map(PathBuf::from),
            ttl_hours: file_cache.ttl_hours.unwrap_or(defaults.cache.ttl_hours),
        };

        let file_speech = file.speech.unwrap_or_default();
        let speech = SpeechConfig {
            enabled: file_speech.enabled.unwrap_or(defaults.speech.enabled),
            voice_zh: file_speech.voice_zh,
            voice_en: file_speech.voice_en,
        };

        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.logging.level),
            file_enabled: file_logging
                .file_enabled
                .unwrap_or(defaults.logging.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
            file_rotation: file_logging
                .file_rotation
                .as_deref()
                .map(LogRotation::parse)
                .unwrap_or(defaults.logging.file_rotation),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or(defaults.logging.file_prefix),
        };

        Self {
            source,
            base_url,
            enable_tui,
            offline,
            streamed_progress,
            theme,
            cache,
            speech,
            logging,
        }
    }

    /// Effective data URL after base-path resolution
    pub fn source_url(&self) -> String {
        crate::loader::resolve_source_url(self.base_url.as_deref(), &self.source)
    }
}
