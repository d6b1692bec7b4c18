// Status bar component
//
// Bottom line: total quote count, round progress, collection source,
// uptime, and key hints. The total equals the source document's count
// after a successful load, 0 otherwise.

use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let source = app
        .load_source
        .map(|s| format!(" │ {}", s.label()))
        .unwrap_or_default();

    let round = if app.is_loaded() && app.total() > 0 {
        format!(" │ round {}/{}", app.shown_in_round(), app.total())
    } else {
        String::new()
    };

    let status = format!(
        " {} quotes{}{} │ {} │ space next · y copy · s speak · q quit",
        app.total(),
        round,
        source,
        app.uptime(),
    );

    let text = Paragraph::new(truncate_to_width(&status, area.width as usize))
        .style(Style::default().fg(theme.dim))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border)),
        );

    f.render_widget(text, area);
}
