//! Configuration tests
//!
//! The round-trip tests are guards for the hand-written TOML template:
//! when a field is added to Config it must also serialize and parse back,
//! or these fail.

use super::*;

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_with_overrides() {
    let mut config = Config::default();
    config.source = "data/quotes.json".to_string();
    config.base_url = Some("https://example.com/widget".to_string());
    config.cache.dir = Some(PathBuf::from("/tmp/quotd-cache"));
    config.cache.ttl_hours = 6;
    config.speech.voice_zh = Some("Tingting".to_string());
    config.logging.file_enabled = true;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).expect("should parse");

    assert_eq!(parsed.source.as_deref(), Some("data/quotes.json"));
    assert_eq!(
        parsed.base_url.as_deref(),
        Some("https://example.com/widget")
    );

    let cache = parsed.cache.unwrap();
    assert_eq!(cache.ttl_hours, Some(6));
    assert_eq!(cache.dir.as_deref(), Some("/tmp/quotd-cache"));

    let speech = parsed.speech.unwrap();
    assert_eq!(speech.voice_zh.as_deref(), Some("Tingting"));

    assert_eq!(parsed.logging.unwrap().file_enabled, Some(true));
}

#[test]
fn test_default_cache_window_is_24_hours() {
    let config = Config::default();
    assert_eq!(config.cache.ttl_hours, 24);
    assert_eq!(config.cache.ttl(), Duration::from_secs(24 * 60 * 60));
}

#[test]
fn test_rotation_parsing() {
    assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("DAILY"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    // Unknown values fall back to daily
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn test_source_url_resolution() {
    let mut config = Config::default();
    config.source = "quotes.json".to_string();
    config.base_url = Some("https://example.com/widget/".to_string());
    assert_eq!(config.source_url(), "https://example.com/widget/quotes.json");

    config.base_url = None;
    assert_eq!(config.source_url(), "quotes.json");
}
