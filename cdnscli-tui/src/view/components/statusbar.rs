//! 状态栏：错误 > 加载中 > 已加载条数

use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use crate::model::App;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let style = if app.status_message.is_some() {
        theme.error()
    } else {
        theme.muted()
    };

    let paragraph = Paragraph::new(Line::styled(format!(" {}", status_text(app)), style));
    frame.render_widget(paragraph, area);
}

/// 状态栏文本
pub fn status_text(app: &App) -> String {
    if let Some(message) = &app.status_message {
        return format!("Error: {message}");
    }
    if app.is_loading() {
        return format!("Loading {}", app.spinner.current());
    }

    let rows = app.focused_table().len();
    let noun = match (app.focus().is_zones(), rows == 1) {
        (true, true) => "zone",
        (true, false) => "zones",
        (false, true) => "record",
        (false, false) => "records",
    };
    format!("Loaded {rows} {noun}")
}
