//! Zones 页面视图

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::table;

/// 渲染 Zones 表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.zones.is_empty() && !app.is_loading() {
        render_empty(app, frame, area);
    } else {
        table::render(&app.zones, &app.theme, frame, area);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let content = vec![
        Line::from(""),
        Line::styled("  No zones found.", theme.muted()),
        Line::from(""),
        Line::styled("  Press q to quit.", theme.muted()),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(true));
    frame.render_widget(Paragraph::new(content).block(block), area);
}
