// Events that flow from the loader task to the TUI
//
// The loader runs in its own tokio task; everything the UI needs to know
// about the load (progress, the finished collection, failure) travels over
// an mpsc channel as one of these variants. Using an enum keeps the
// task boundary type-safe and pattern-matchable.

use crate::loader::LoadError;
use crate::quotes::Quote;
use chrono::{DateTime, Utc};

/// Where a successful collection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Network,
    Cache,
    Bundled,
}

impl LoadSource {
    pub fn label(&self) -> &'static str {
        match self {
            LoadSource::Network => "network",
            LoadSource::Cache => "cache",
            LoadSource::Bundled => "bundled",
        }
    }
}

/// Main event type that flows loader -> TUI
#[derive(Debug)]
pub enum AppEvent {
    /// A load attempt began (initial load or manual reload)
    LoadStarted {
        timestamp: DateTime<Utc>,
        url: String,
    },

    /// Streamed fetch progress; `total` is known only when the server
    /// sent a Content-Length header
    LoadProgress {
        received: u64,
        total: Option<u64>,
    },

    /// The collection is ready
    Loaded {
        timestamp: DateTime<Utc>,
        quotes: Vec<Quote>,
        source: LoadSource,
    },

    /// The load failed; the collection stays empty and quote-dependent
    /// actions stay disabled
    LoadFailed {
        timestamp: DateTime<Utc>,
        error: LoadError,
    },
}
