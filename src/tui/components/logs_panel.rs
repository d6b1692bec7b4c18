// System log panel
//
// Shows the tail of the in-memory log buffer, toggled with 'l'. Useful
// for watching the load sequence (cache hit/miss, fetch, parse) without
// leaving the TUI.

use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::Level;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" logs ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let entries = app.log_buffer.snapshot();
    let visible = inner.height as usize;
    let start = entries.len().saturating_sub(visible);

    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| {
            let color = if entry.level == Level::ERROR {
                theme.error
            } else if entry.level == Level::WARN {
                theme.accent
            } else if entry.level == Level::INFO {
                theme.foreground
            } else {
                theme.dim
            };
            let text = format!(
                "{} {:<5} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level,
                entry.message
            );
            Line::from(truncate_to_width(&text, inner.width as usize))
                .style(Style::default().fg(color))
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
