// Quote data model
//
// The wire format is a JSON object with a top-level `quotes` array. The two
// observed document variants use either `quote` or `text` for the body; both
// are accepted and normalized to one in-memory shape at load time.

pub mod picker;

use serde::{Deserialize, Serialize};

/// Language tag derived per quote at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
}

impl Language {
    /// BCP-47 style locale used when selecting a speech voice
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            Language::En => "en-US",
        }
    }
}

/// A single attributed text entry, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Optional numeric id carried over from the source document
    pub id: Option<u64>,
    pub text: String,
    pub author: String,
    pub source: Option<String>,
    pub language: Language,
}

impl Quote {
    /// Serialize for the clipboard: `"text" — author`
    /// Author is omitted entirely when empty (no dangling dash).
    pub fn format_for_copy(&self) -> String {
        if self.author.is_empty() {
            format!("\"{}\"", self.text)
        } else {
            format!("\"{}\" — {}", self.text, self.author)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level shape of the fetched document
#[derive(Debug, Deserialize)]
pub struct QuoteDocument {
    pub quotes: Vec<WireQuote>,
}

/// One record as it appears on the wire
///
/// `quote` and `text` are aliases for the body; whichever is present wins
/// (`quote` takes precedence when both appear, matching the original feed).
#[derive(Debug, Deserialize)]
pub struct WireQuote {
    pub id: Option<u64>,
    pub quote: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub author: String,
    pub source: Option<String>,
}

impl WireQuote {
    fn body(&self) -> &str {
        self.quote
            .as_deref()
            .or(self.text.as_deref())
            .unwrap_or_default()
    }
}

/// Normalize a parsed document into the canonical collection.
/// Order is preserved; records with an empty body are kept as-is so the
/// total count always matches the source document.
pub fn normalize(doc: QuoteDocument) -> Vec<Quote> {
    doc.quotes
        .into_iter()
        .map(|w| {
            let text = w.body().to_string();
            let language = detect_language(&text);
            Quote {
                id: w.id,
                text,
                author: w.author,
                source: w.source,
                language,
            }
        })
        .collect()
}

/// Tag a quote as Chinese when it contains any CJK character, English
/// otherwise. Covers the unified ideograph blocks plus CJK punctuation,
/// which is enough to route a speech voice; no external detector needed.
pub fn detect_language(text: &str) -> Language {
    let is_cjk = |c: char| {
        matches!(c,
            '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
            | '\u{3400}'..='\u{4DBF}'   // Extension A
            | '\u{F900}'..='\u{FAFF}'   // Compatibility Ideographs
            | '\u{3000}'..='\u{303F}'   // CJK punctuation
        )
    };
    if text.chars().any(is_cjk) {
        Language::Zh
    } else {
        Language::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> QuoteDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_detect_chinese() {
        assert_eq!(detect_language("你好"), Language::Zh);
        assert_eq!(detect_language("学而时习之，不亦说乎？"), Language::Zh);
    }

    #[test]
    fn test_detect_english() {
        assert_eq!(detect_language("Hello"), Language::En);
        assert_eq!(detect_language(""), Language::En);
    }

    #[test]
    fn test_detect_mixed_counts_as_chinese() {
        // A single CJK character anywhere tags the whole quote
        assert_eq!(detect_language("Tao 道"), Language::Zh);
    }

    #[test]
    fn test_normalize_quote_field_variant() {
        let quotes = normalize(doc(
            r#"{"quotes":[{"id":1,"quote":"你好","author":"甲"}]}"#,
        ));
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].text, "你好");
        assert_eq!(quotes[0].author, "甲");
        assert_eq!(quotes[0].language, Language::Zh);
        assert_eq!(quotes[0].id, Some(1));
    }

    #[test]
    fn test_normalize_text_field_variant() {
        let quotes = normalize(doc(
            r#"{"quotes":[{"text":"Hello","author":"B","source":"Speech"}]}"#,
        ));
        assert_eq!(quotes[0].text, "Hello");
        assert_eq!(quotes[0].language, Language::En);
        assert_eq!(quotes[0].source.as_deref(), Some("Speech"));
    }

    #[test]
    fn test_normalize_preserves_order_and_count() {
        let quotes = normalize(doc(
            r#"{"quotes":[{"quote":"a","author":""},{"quote":"b","author":""},{"quote":"c","author":""}]}"#,
        ));
        let texts: Vec<_> = quotes.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_author_renders_empty() {
        let quotes = normalize(doc(r#"{"quotes":[{"quote":"x"}]}"#));
        assert_eq!(quotes[0].author, "");
    }

    #[test]
    fn test_format_for_copy() {
        let q = Quote {
            id: None,
            text: "A".to_string(),
            author: "B".to_string(),
            source: None,
            language: Language::En,
        };
        assert_eq!(q.format_for_copy(), "\"A\" — B");
    }

    #[test]
    fn test_format_for_copy_without_author() {
        let q = Quote {
            id: None,
            text: "A".to_string(),
            author: String::new(),
            source: None,
            language: Language::En,
        };
        assert_eq!(q.format_for_copy(), "\"A\"");
    }
}
