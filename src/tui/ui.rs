// Top-level frame rendering
//
// Layout: title bar / quote card / optional log panel / status bar,
// with toast and help drawn as overlays on top.

use super::app::App;
use super::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme.theme();

    // Theme background for the whole frame
    let bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg, f.area());

    let mut constraints = vec![
        Constraint::Length(3), // title bar
        Constraint::Min(7),    // quote card
    ];
    if app.show_logs {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(2)); // status bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);
    components::quote_card::render(f, chunks[1], app);
    if app.show_logs {
        components::logs_panel::render(f, chunks[2], app);
    }
    components::status_bar::render(f, chunks[chunks.len() - 1], app);

    // Overlays
    if app.show_help {
        components::help::render(f, f.area(), app);
    }
    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &theme);
    }
}
