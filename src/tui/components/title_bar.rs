// Title bar component
//
// App name on the left, load state on the right.

use crate::config::VERSION;
use crate::tui::app::{App, LoadState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let state = match &app.load_state {
        LoadState::Loading => " ⟳ loading".to_string(),
        LoadState::Loaded => String::new(),
        LoadState::Failed(_) => " ✗ load failed".to_string(),
    };

    let title = Paragraph::new(format!(" ❝ quotd v{VERSION}{state}"))
        .style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title_top(Line::from(" ? help ").right_aligned()),
        );

    f.render_widget(title, area);
}
