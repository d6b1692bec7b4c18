//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Generate the TOML representation of this configuration.
    /// Used for the initial config template and `config --reset/--update`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# quotd configuration

# Quote document location: an absolute URL, or a path resolved against
# base_url for deployments under a sub-path
source = "{source}"
{base_url_line}
# Stream the download and show byte-level progress while loading
streamed_progress = {streamed}

# Theme: dark, light, paper
theme = "{theme}"

# Read-through quote cache (skips the network while the entry is fresh)
[cache]
enabled = {cache_enabled}
ttl_hours = {cache_ttl}
{cache_dir_line}
# Speech synthesis (reads the current quote aloud)
[speech]
enabled = {speech_enabled}
{voice_zh_line}{voice_en_line}
# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            source = self.source,
            base_url_line = match &self.base_url {
                Some(base) => format!("base_url = \"{base}\"\n"),
                None => "# base_url = \"https://example.com/my-app\"\n".to_string(),
            },
            streamed = self.streamed_progress,
            theme = self.theme,
            cache_enabled = self.cache.enabled,
            cache_ttl = self.cache.ttl_hours,
            cache_dir_line = match &self.cache.dir {
                Some(dir) => format!("dir = \"{}\"\n", dir.display()),
                None => "# dir = \"/path/to/cache\"\n".to_string(),
            },
            speech_enabled = self.speech.enabled,
            voice_zh_line = match &self.speech.voice_zh {
                Some(v) => format!("voice_zh = \"{v}\"\n"),
                None => "# voice_zh = \"Tingting\"\n".to_string(),
            },
            voice_en_line = match &self.speech.voice_en {
                Some(v) => format!("voice_en = \"{v}\"\n"),
                None => "# voice_en = \"Samantha\"\n".to_string(),
            },
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
