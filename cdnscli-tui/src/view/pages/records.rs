//! Records 页面视图

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::components::table;

/// 渲染当前 zone 的记录
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.records.is_empty() {
        render_empty(app, frame, area);
    } else {
        table::render(&app.records, &app.theme, frame, area);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let zone = app.selected_zone().unwrap_or_default();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  No DNS records found in {zone}."), theme.muted()),
        Line::from(""),
        Line::styled(
            "  Press c to add a new record, r to reload, or Esc to go back.",
            theme.muted(),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(true));
    frame.render_widget(Paragraph::new(content).block(block), area);
}
