//! 底部快捷键菜单

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

/// 渲染菜单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, desc)) in hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.muted()));
        }
        spans.push(Span::styled(key, theme.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, theme.muted()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 根据焦点生成快捷键提示（Create 只在 Records 表出现）
pub fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![
        ("[↑/↓/←/→]", "Navigate"),
        ("[Enter]", "Show"),
        ("[Esc]", "Exit"),
    ];

    if app.focus().is_records() {
        hints.push(("[c]", "Create"));
    }

    hints.extend([("[e]", "Edit"), ("[r]", "Reload"), ("[q]", "Quit")]);
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Focus;
    use crate::view::theme::Theme;

    #[test]
    fn create_only_on_records() {
        let mut app = App::new("Memory", Theme::default());
        assert!(!hints(&app).contains(&("[c]", "Create")));

        app.set_focus(Focus::Records);
        let keys: Vec<_> = hints(&app).into_iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            ["[↑/↓/←/→]", "[Enter]", "[Esc]", "[c]", "[e]", "[r]", "[q]"]
        );
    }
}
