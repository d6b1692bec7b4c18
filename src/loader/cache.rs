// Read-through disk cache for the quote document
//
// Two entries under a fixed storage key in the platform cache directory:
// the raw document body, and an epoch-millisecond stamp recording when it
// was stored. A read within the freshness window returns the body and the
// load skips the network entirely; a missing, unparsable, or expired stamp
// makes the read report "absent". Writes are best-effort - a failed write
// is logged and never fails the load.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Fixed storage key: file names under the cache directory
const DOC_FILE: &str = "quotes.json";
const STAMP_FILE: &str = "quotes.stamp";

/// Default freshness window
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub struct QuoteCache {
    dir: PathBuf,
    ttl: Duration,
}

impl QuoteCache {
    pub fn new(dir: PathBuf, ttl: Duration) -> Self {
        Self { dir, ttl }
    }

    /// Platform default location: `<cache_dir>/quotd/`
    pub fn default_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|d| d.join("quotd"))
    }

    fn doc_path(&self) -> PathBuf {
        self.dir.join(DOC_FILE)
    }

    fn stamp_path(&self) -> PathBuf {
        self.dir.join(STAMP_FILE)
    }

    /// Read the cached document if it is still fresh.
    ///
    /// Returns `None` when either entry is missing, the stamp does not
    /// parse, or the freshness window has elapsed. IO errors on the
    /// document itself also degrade to `None`; the caller falls through
    /// to the network either way.
    pub fn read_fresh(&self) -> Option<String> {
        let stamp = fs::read_to_string(self.stamp_path()).ok()?;
        let stored_ms: i64 = match stamp.trim().parse() {
            Ok(ms) => ms,
            Err(_) => {
                tracing::warn!("Cache stamp is not a timestamp, ignoring cache");
                return None;
            }
        };

        let age_ms = Utc::now().timestamp_millis().saturating_sub(stored_ms);
        if age_ms < 0 || age_ms as u128 > self.ttl.as_millis() {
            tracing::debug!("Cache entry expired ({age_ms} ms old)");
            return None;
        }

        match fs::read_to_string(self.doc_path()) {
            Ok(body) => {
                tracing::info!("Cache hit ({age_ms} ms old), skipping network");
                Some(body)
            }
            Err(e) => {
                tracing::warn!("Cache stamp present but document unreadable: {e}");
                None
            }
        }
    }

    /// Store a document body and stamp it with the current time
    pub fn write(&self, body: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).context("Failed to create cache directory")?;
        fs::write(self.doc_path(), body).context("Failed to write cached document")?;
        fs::write(
            self.stamp_path(),
            Utc::now().timestamp_millis().to_string(),
        )
        .context("Failed to write cache stamp")?;
        Ok(())
    }

    /// Drop both entries (used by `quotd config --reset` style cleanups
    /// and by tests)
    #[allow(dead_code)]
    pub fn clear(&self) {
        let _ = fs::remove_file(self.doc_path());
        let _ = fs::remove_file(self.stamp_path());
    }

    #[cfg(test)]
    fn backdate(&self, millis: i64) {
        fs::write(self.stamp_path(), millis.to_string()).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(name: &str, ttl: Duration) -> QuoteCache {
        let dir = std::env::temp_dir().join(format!("quotd-cache-test-{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        QuoteCache::new(dir, ttl)
    }

    #[test]
    fn test_roundtrip_within_window() {
        let cache = temp_cache("roundtrip", DEFAULT_TTL);
        cache.write(r#"{"quotes":[]}"#).unwrap();
        assert_eq!(cache.read_fresh().as_deref(), Some(r#"{"quotes":[]}"#));
    }

    #[test]
    fn test_missing_entries_read_as_absent() {
        let cache = temp_cache("missing", DEFAULT_TTL);
        assert!(cache.read_fresh().is_none());
    }

    #[test]
    fn test_expired_stamp_reads_as_absent() {
        let cache = temp_cache("expired", DEFAULT_TTL);
        cache.write(r#"{"quotes":[]}"#).unwrap();

        // Backdate the stamp past the 24 h window
        let old = Utc::now().timestamp_millis() - (25 * 60 * 60 * 1000);
        cache.backdate(old);

        assert!(cache.read_fresh().is_none());
    }

    #[test]
    fn test_garbage_stamp_reads_as_absent() {
        let cache = temp_cache("garbage", DEFAULT_TTL);
        cache.write(r#"{"quotes":[]}"#).unwrap();
        fs::write(cache.stamp_path(), "not-a-number").unwrap();
        assert!(cache.read_fresh().is_none());
    }

    #[test]
    fn test_short_ttl_expires() {
        let cache = temp_cache("short-ttl", Duration::from_millis(0));
        cache.write(r#"{"quotes":[]}"#).unwrap();
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.read_fresh().is_none());
    }
}
