// Offline mode: a small bundled quote document
//
// `--offline` (or QUOTD_OFFLINE=1) loads this document through the same
// parse/normalize path as a real fetch, so the whole TUI can be exercised
// with no network. The set mixes Chinese and English entries to show the
// language tagging and per-language speech voices.
//
// Run with: quotd --offline

use crate::events::{AppEvent, LoadSource};
use crate::loader::parse_document;
use chrono::Utc;
use tokio::sync::mpsc;

/// Bundled document, same wire shape as a fetched one
const BUNDLED_DOC: &str = r#"{
  "quotes": [
    { "id": 1, "quote": "学而不思则罔，思而不学则殆。", "author": "孔子", "source": "论语" },
    { "id": 2, "quote": "The unexamined life is not worth living.", "author": "Socrates" },
    { "id": 3, "quote": "千里之行，始于足下。", "author": "老子", "source": "道德经" },
    { "id": 4, "quote": "Stay hungry, stay foolish.", "author": "Stewart Brand", "source": "Whole Earth Catalog" },
    { "id": 5, "quote": "不积跬步，无以至千里。", "author": "荀子" },
    { "id": 6, "quote": "Simplicity is the ultimate sophistication.", "author": "Leonardo da Vinci" },
    { "id": 7, "quote": "知之者不如好之者，好之者不如乐之者。", "author": "孔子", "source": "论语" },
    { "id": 8, "quote": "Talk is cheap. Show me the code.", "author": "Linus Torvalds" }
  ]
}"#;

/// Offline counterpart of `Loader::run`: emits the same event sequence,
/// sourced from the bundled document instead of the network.
pub async fn run_offline(tx: mpsc::Sender<AppEvent>) {
    let _ = tx
        .send(AppEvent::LoadStarted {
            timestamp: Utc::now(),
            url: "bundled".to_string(),
        })
        .await;

    match parse_document(BUNDLED_DOC) {
        Ok(quotes) => {
            tracing::info!("Loaded {} bundled quotes (offline mode)", quotes.len());
            let _ = tx
                .send(AppEvent::Loaded {
                    timestamp: Utc::now(),
                    quotes,
                    source: LoadSource::Bundled,
                })
                .await;
        }
        Err(error) => {
            let _ = tx
                .send(AppEvent::LoadFailed {
                    timestamp: Utc::now(),
                    error,
                })
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::Language;

    #[test]
    fn test_bundled_document_parses() {
        let quotes = parse_document(BUNDLED_DOC).unwrap();
        assert!(!quotes.is_empty());
    }

    #[test]
    fn test_bundled_document_covers_both_languages() {
        let quotes = parse_document(BUNDLED_DOC).unwrap();
        assert!(quotes.iter().any(|q| q.language == Language::Zh));
        assert!(quotes.iter().any(|q| q.language == Language::En));
    }
}
