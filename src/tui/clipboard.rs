//! Clipboard helper for the copy action
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created per call rather than held; common failure cases are a missing
//! display server (headless Linux) and denied access.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Write text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
