//! 顶部标题栏

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use crate::model::App;

pub const TITLE: &str = "CloudFlare DNS CLI";

/// 渲染标题栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(TITLE, theme.header()),
        Span::styled(" | ", theme.muted()),
        Span::styled(app.provider_name.as_str(), theme.text()),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().padding(Padding::uniform(1)));
    frame.render_widget(paragraph, area);
}
