// Help overlay
//
// Centered keybinding reference, toggled with '?'. Absorbs no state; any
// key closes it (handled in the event loop).

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("space / enter / n", "next quote"),
    ("y", "copy quote to clipboard"),
    ("s", "speak quote aloud"),
    ("r", "reload quote document"),
    ("t", "cycle theme"),
    ("l", "toggle log panel"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let width = 44.min(area.width.saturating_sub(4));
    let height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay = Rect::new(x, y, width, height);

    let mut lines = vec![Line::default()];
    for (key, action) in BINDINGS {
        lines.push(Line::from(format!("  {key:<18} {action}")));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.title))
        .style(Style::default().bg(theme.background))
        .title(" keys ")
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        );

    let text = Paragraph::new(lines)
        .style(Style::default().fg(theme.foreground))
        .block(block);

    f.render_widget(Clear, overlay);
    f.render_widget(text, overlay);
}
