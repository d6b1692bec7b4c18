// Quote card component - the display surface for the current quote
//
// Renders one of three states:
// - Loading: spinner line, plus a progress gauge when the streamed fetch
//   has reported byte counts
// - Failed: the load error message, centered
// - Loaded: the quote text (wrapped, centered), the author line with its
//   dash prefix, and the source line when present
//
// A freshly drawn quote renders dimmed for a few ticks (the reveal
// transition), then settles into full color.

use crate::tui::app::{App, LoadState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &app.load_state {
        LoadState::Loading => render_loading(f, inner, app),
        LoadState::Failed(message) => render_failed(f, inner, app, message),
        LoadState::Loaded => render_quote(f, inner, app),
    }
}

fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let label = match app.progress {
        Some((received, Some(total))) => {
            format!("Fetching quotes… {} / {} KB", received / 1024, total / 1024)
        }
        Some((received, None)) => format!("Fetching quotes… {} KB", received / 1024),
        None => "Fetching quotes…".to_string(),
    };

    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y.saturating_sub(1), area.width, 1);
    let text = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dim));
    f.render_widget(text, line_area);

    // Byte-level gauge only when the server told us the total
    if let Some((received, Some(total))) = app.progress {
        if total > 0 && area.width > 12 && area.height > 3 {
            let gauge_area = Rect::new(area.x + 4, y + 1, area.width - 8, 1);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(theme.accent).bg(theme.background))
                .ratio((received as f64 / total as f64).min(1.0))
                .label("");
            f.render_widget(gauge, gauge_area);
        }
    }
}

fn render_failed(f: &mut Frame, area: Rect, app: &App, message: &str) {
    let theme = app.theme.theme();
    let lines = wrap_text(message, area.width.saturating_sub(8) as usize);
    let pad_top = (area.height as usize).saturating_sub(lines.len()) / 2;

    let mut text: Vec<Line> = vec![Line::default(); pad_top];
    for l in lines {
        text.push(Line::from(l).style(Style::default().fg(theme.error)));
    }

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_quote(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let Some(quote) = &app.current else {
        // Loaded but nothing drawn yet (empty collection is Failed, so this
        // is only a transient frame)
        return;
    };

    // Reveal transition: dim everything for the first few ticks
    let body_color = if app.reveal > 0 {
        theme.dim
    } else {
        theme.foreground
    };
    let accent_color = if app.reveal > 0 { theme.dim } else { theme.accent };

    let wrap_width = (area.width.saturating_sub(12) as usize).max(8);
    let body = wrap_text(&quote.text, wrap_width);

    // Body + blank + author (+ source), vertically centered
    let mut content_height = body.len();
    if !quote.author.is_empty() {
        content_height += 2;
    }
    if quote.source.is_some() {
        content_height += 1;
    }
    let pad_top = (area.height as usize).saturating_sub(content_height) / 2;

    let mut lines: Vec<Line> = vec![Line::default(); pad_top];
    for l in body {
        lines.push(
            Line::from(l).style(
                Style::default()
                    .fg(body_color)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    // Missing author renders as nothing, never placeholder text
    if !quote.author.is_empty() {
        lines.push(Line::default());
        lines.push(
            Line::from(format!("— {}", quote.author))
                .style(Style::default().fg(accent_color)),
        );
    }
    if let Some(source) = &quote.source {
        lines.push(
            Line::from(format!("《{source}》")).style(
                Style::default()
                    .fg(theme.dim)
                    .add_modifier(Modifier::ITALIC),
            ),
        );
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Greedy wrap by display width. Splits on whitespace where there is any;
/// an over-long word (CJK text has no spaces) breaks at the character level.
pub fn wrap_text(text: &str, max_cols: usize) -> Vec<String> {
    if max_cols == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    let push_word = |lines: &mut Vec<String>, line: &mut String, word: &str| {
        let sep = if line.is_empty() { 0 } else { 1 };
        if line.width() + sep + word.width() <= max_cols {
            if sep == 1 {
                line.push(' ');
            }
            line.push_str(word);
            return;
        }
        if !line.is_empty() {
            lines.push(std::mem::take(line));
        }
        if word.width() <= max_cols {
            line.push_str(word);
            return;
        }
        // Character-level break for words wider than the line
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if line.width() + w > max_cols {
                lines.push(std::mem::take(line));
            }
            line.push(c);
        }
    };

    for word in text.split_whitespace() {
        push_word(&mut lines, &mut line, word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_splits_on_words() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_breaks_cjk_by_character() {
        // 8 CJK characters = 16 columns; at 8 columns that is 4 per line
        let lines = wrap_text("学而时习之不亦说", 8);
        assert_eq!(lines, vec!["学而时习", "之不亦说"]);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap_text("hi", 40), vec!["hi"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 40), vec![""]);
    }
}
