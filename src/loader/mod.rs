// Loader - fetches the quote document and normalizes it into a collection
//
// One load runs per session (plus manual reloads). The sequence is:
// 1. Consult the disk cache; a fresh hit skips the network entirely.
// 2. Otherwise GET the document - plain, or streamed with byte-level
//    progress events when enabled.
// 3. Parse, normalize, tag languages, and best-effort write the cache.
//
// The loader runs in its own tokio task and reports everything through
// AppEvents; it never touches TUI state directly.

pub mod cache;
mod error;

pub use error::LoadError;

use crate::events::{AppEvent, LoadSource};
use crate::quotes::{self, Quote, QuoteDocument};
use bytes::BytesMut;
use cache::QuoteCache;
use chrono::Utc;
use futures::StreamExt;
use tokio::sync::mpsc;

pub struct Loader {
    client: reqwest::Client,
    url: String,
    /// Stream the body and emit LoadProgress events instead of a single read
    streamed: bool,
    cache: Option<QuoteCache>,
}

impl Loader {
    pub fn new(url: String, streamed: bool, cache: Option<QuoteCache>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            streamed,
            cache,
        }
    }

    /// Task entry point: run one load attempt and report the outcome.
    /// Send failures mean the TUI is gone, so they are ignored.
    pub async fn run(self, tx: mpsc::Sender<AppEvent>) {
        let _ = tx
            .send(AppEvent::LoadStarted {
                timestamp: Utc::now(),
                url: self.url.clone(),
            })
            .await;

        match self.load(&tx).await {
            Ok((quotes, source)) => {
                tracing::info!("Loaded {} quotes from {}", quotes.len(), source.label());
                let _ = tx
                    .send(AppEvent::Loaded {
                        timestamp: Utc::now(),
                        quotes,
                        source,
                    })
                    .await;
            }
            Err(error) => {
                tracing::error!("Load failed: {error}");
                let _ = tx
                    .send(AppEvent::LoadFailed {
                        timestamp: Utc::now(),
                        error,
                    })
                    .await;
            }
        }
    }

    async fn load(
        &self,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<(Vec<Quote>, LoadSource), LoadError> {
        // Read-through: a fresh cached document wins over the network.
        // A corrupt cached document is reported and falls through to a
        // fresh fetch rather than failing the whole load.
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.read_fresh() {
                match parse_document(&body) {
                    Ok(quotes) => return Ok((quotes, LoadSource::Cache)),
                    Err(e) => {
                        let e = LoadError::CacheCorrupt(e.to_string());
                        tracing::warn!("{e}; refetching");
                    }
                }
            }
        }

        let body = if self.streamed {
            self.fetch_streamed(tx).await?
        } else {
            self.fetch().await?
        };

        let quotes = parse_document(&body)?;

        // Best-effort cache write; never fails the load
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.write(&body) {
                tracing::warn!("Could not write quote cache: {e:#}");
            }
        }

        Ok((quotes, LoadSource::Network))
    }

    /// Plain fetch-and-read
    async fn fetch(&self) -> Result<String, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))
    }

    /// Streamed fetch with incremental progress reporting.
    /// `total` comes from Content-Length and may be unknown.
    async fn fetch_streamed(&self, tx: &mpsc::Sender<AppEvent>) -> Result<String, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let total = response.content_length();
        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| LoadError::Network(e.to_string()))?;
            body.extend_from_slice(&chunk);
            let _ = tx
                .send(AppEvent::LoadProgress {
                    received: body.len() as u64,
                    total,
                })
                .await;
        }

        String::from_utf8(body.to_vec()).map_err(|e| LoadError::Parse(e.to_string()))
    }
}

/// Parse a raw document body into the canonical collection
pub fn parse_document(body: &str) -> Result<Vec<Quote>, LoadError> {
    let doc: QuoteDocument =
        serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
    Ok(quotes::normalize(doc))
}

/// Resolve the data URL against an optional deployment base path.
///
/// Absolute URLs pass through untouched; a relative source is joined onto
/// the base with exactly one slash between them. With no base configured,
/// the source is used as-is.
pub fn resolve_source_url(base: Option<&str>, source: &str) -> String {
    if source.starts_with("http://") || source.starts_with("https://") {
        return source.to_string();
    }

    match base {
        Some(base) if !base.is_empty() => {
            format!("{}/{}", base.trim_end_matches('/'), source.trim_start_matches('/'))
        }
        _ => source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_url_passes_through() {
        assert_eq!(
            resolve_source_url(Some("https://host/app"), "https://cdn/quotes.json"),
            "https://cdn/quotes.json"
        );
    }

    #[test]
    fn test_resolve_joins_base_and_relative_path() {
        assert_eq!(
            resolve_source_url(Some("https://host/app/"), "/data/quotes.json"),
            "https://host/app/data/quotes.json"
        );
        assert_eq!(
            resolve_source_url(Some("https://host/app"), "quotes.json"),
            "https://host/app/quotes.json"
        );
    }

    #[test]
    fn test_resolve_without_base() {
        assert_eq!(resolve_source_url(None, "quotes.json"), "quotes.json");
        assert_eq!(resolve_source_url(Some(""), "quotes.json"), "quotes.json");
    }

    #[test]
    fn test_parse_document_malformed_json() {
        let err = parse_document("{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_document_wrong_shape() {
        let err = parse_document(r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_document_valid() {
        let quotes = parse_document(r#"{"quotes":[{"quote":"Hi","author":"A"}]}"#).unwrap();
        assert_eq!(quotes.len(), 1);
    }

    // Port 1 on loopback is never listening, so the connect fails fast and
    // deterministically without touching a real network.
    const DEAD_URL: &str = "http://127.0.0.1:1/quotes.json";

    fn temp_cache(name: &str) -> QuoteCache {
        let dir = std::env::temp_dir().join(format!("quotd-loader-test-{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        QuoteCache::new(dir, cache::DEFAULT_TTL)
    }

    #[tokio::test]
    async fn test_network_failure_reports_load_failed() {
        let (tx, mut rx) = mpsc::channel(16);
        Loader::new(DEAD_URL.to_string(), false, None).run(tx).await;

        assert!(matches!(rx.recv().await, Some(AppEvent::LoadStarted { .. })));
        match rx.recv().await {
            Some(AppEvent::LoadFailed { error, .. }) => {
                assert!(matches!(error, LoadError::Network(_)));
            }
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_network() {
        let cache = temp_cache("fresh-hit");
        cache
            .write(r#"{"quotes":[{"quote":"cached","author":"C"}]}"#)
            .unwrap();

        // The URL is unreachable, so a successful load proves the network
        // was never consulted.
        let (tx, mut rx) = mpsc::channel(16);
        Loader::new(DEAD_URL.to_string(), false, Some(cache))
            .run(tx)
            .await;

        assert!(matches!(rx.recv().await, Some(AppEvent::LoadStarted { .. })));
        match rx.recv().await {
            Some(AppEvent::Loaded { quotes, source, .. }) => {
                assert_eq!(source, LoadSource::Cache);
                assert_eq!(quotes[0].text, "cached");
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_corrupt_cache_falls_through_to_network() {
        let cache = temp_cache("corrupt");
        cache.write("{broken").unwrap();

        let (tx, mut rx) = mpsc::channel(16);
        Loader::new(DEAD_URL.to_string(), false, Some(cache))
            .run(tx)
            .await;

        // Corrupt cache is not terminal by itself; the dead endpoint is.
        assert!(matches!(rx.recv().await, Some(AppEvent::LoadStarted { .. })));
        match rx.recv().await {
            Some(AppEvent::LoadFailed { error, .. }) => {
                assert!(matches!(error, LoadError::Network(_)));
            }
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stale_cache_is_ignored() {
        let cache = temp_cache("stale");
        let dir = std::env::temp_dir().join("quotd-loader-test-stale");
        cache
            .write(r#"{"quotes":[{"quote":"old","author":"O"}]}"#)
            .unwrap();
        // Overwrite the stamp with one older than the window
        std::fs::write(
            dir.join("quotes.stamp"),
            (Utc::now().timestamp_millis() - 25 * 60 * 60 * 1000).to_string(),
        )
        .unwrap();

        let (tx, mut rx) = mpsc::channel(16);
        Loader::new(DEAD_URL.to_string(), false, Some(cache))
            .run(tx)
            .await;

        let _ = rx.recv().await; // LoadStarted
        assert!(matches!(
            rx.recv().await,
            Some(AppEvent::LoadFailed { .. })
        ));
    }
}
