//! 弹窗组件
//!
//! 基础编辑视图（字段表单 / NS 列表）按内容计算宽度后居中绘制；
//! 子编辑器（布尔、类型、文本）以固定宽度的小框叠加在基础编辑视图之上。

use ratatui::{
    text::{Line, Span},
    Frame,
};

use crate::model::{
    validate::field_hint, App, ConfirmDialog, FieldForm, NameServerList, PopupKind, SubEditor,
    TextEdit, NAME_SERVER_HINT, RECORD_TYPES,
};
use crate::view::overlay::{fit_width, render_box};
use crate::view::theme::Theme;

/// 基础编辑视图的最小内容宽度
const MIN_EDITOR_WIDTH: u16 = 30;
/// 布尔 / 类型选择框宽度
const SELECT_WIDTH: u16 = 20;
/// 文本编辑框 / 确认框宽度
const TEXT_WIDTH: u16 = 40;

const FORM_HELP: [&str; 4] = [
    "[↑/↓/←/→] Navigate",
    "[Enter] Edit field",
    "[Ctrl+S] Save",
    "[Esc] Exit edit / cancel selection",
];
const LIST_HELP: [&str; 6] = [
    "[↑/↓] Move",
    "[Enter] Edit",
    "[Ctrl+D] Delete",
    "[Ctrl+S] Save",
    "[Esc] Cancel",
    "(max 4 NS)",
];
const SELECT_HELP: [&str; 3] = ["[↑/↓] Move", "[Enter] Apply", "[Esc] Cancel"];
const TEXT_HELP: &str = "[Enter] Apply  [Esc] Cancel";
const CONFIRM_HELP: &str = "[←/→] Move [Enter] Confirm [Esc] Cancel";

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(popup) = &app.popup else {
        return;
    };
    let theme = &app.theme;

    match &popup.kind {
        PopupKind::Fields(form) => {
            render_form(frame, theme, &popup.title, form);
            match &form.sub {
                Some(SubEditor::Text(edit)) => {
                    let column = form.current_column();
                    render_text(frame, theme, edit, field_hint(&column, form.current_type()));
                }
                Some(SubEditor::Bool(index)) => render_bool(frame, theme, *index),
                Some(SubEditor::Type(index)) => render_type(frame, theme, *index),
                None => {}
            }
        }
        PopupKind::NameServers(list) => {
            render_list(frame, theme, &popup.title, list);
            if let Some(edit) = &list.edit {
                render_text(frame, theme, edit, NAME_SERVER_HINT);
            }
        }
        PopupKind::Confirm(dialog) => render_confirm(frame, theme, &popup.title, dialog),
    }
}

/// 字段表单的全部行
pub fn form_lines<'a>(theme: &Theme, title: &str, form: &'a FieldForm) -> Vec<Line<'a>> {
    let mut lines = vec![title_line(theme, title)];

    for (i, (column, value)) in form.columns.iter().zip(&form.fields).enumerate() {
        let selected = i == form.cursor;
        lines.push(Line::from(vec![
            Span::raw(if selected { " > " } else { "   " }),
            Span::styled(column.as_str(), theme.table_header()),
            Span::raw(": "),
            Span::styled(
                value.as_str(),
                if selected { theme.selected() } else { theme.text() },
            ),
        ]));
    }

    lines.push(Line::styled(FORM_HELP.join(" | "), theme.muted()));
    lines
}

/// NS 列表的全部行
pub fn list_lines<'a>(theme: &Theme, title: &str, list: &'a NameServerList) -> Vec<Line<'a>> {
    let mut lines = vec![title_line(theme, title)];

    for (i, value) in list.values.iter().enumerate() {
        let selected = i == list.cursor;
        let raw = format!(
            "{}ns{}: {value}",
            if selected { " > " } else { "   " },
            i + 1
        );
        lines.push(if selected {
            Line::styled(raw, theme.selected())
        } else {
            Line::styled(raw, theme.text())
        });
    }

    lines.push(Line::styled(LIST_HELP.join(" | "), theme.muted()));
    lines
}

fn title_line(theme: &Theme, title: &str) -> Line<'static> {
    Line::styled(format!("--- {title} ---"), theme.header()).centered()
}

fn render_form(frame: &mut Frame, theme: &Theme, title: &str, form: &FieldForm) {
    let lines = form_lines(theme, title, form);
    let width = fit_width(&lines, MIN_EDITOR_WIDTH);
    render_box(frame, frame.area(), lines, width, theme.border(true));
}

fn render_list(frame: &mut Frame, theme: &Theme, title: &str, list: &NameServerList) {
    let lines = list_lines(theme, title, list);
    let width = fit_width(&lines, MIN_EDITOR_WIDTH);
    render_box(frame, frame.area(), lines, width, theme.border(true));
}

/// 选项列表，选中项高亮
fn choice_lines<'a>(theme: &Theme, title: &'a str, choices: &[&'a str], selected: usize) -> Vec<Line<'a>> {
    let mut lines = vec![Line::styled(title, theme.header()).centered()];
    lines.extend(choices.iter().enumerate().map(|(i, choice)| {
        if i == selected {
            Line::styled(*choice, theme.selected())
        } else {
            Line::styled(*choice, theme.text())
        }
    }));
    lines
}

fn render_bool(frame: &mut Frame, theme: &Theme, index: usize) {
    let mut lines = choice_lines(theme, "Select value", &["true", "false"], index);
    lines.extend(SELECT_HELP.map(|help| Line::styled(help, theme.muted())));
    render_box(frame, frame.area(), lines, SELECT_WIDTH, theme.border(true));
}

fn render_type(frame: &mut Frame, theme: &Theme, index: usize) {
    let mut lines = choice_lines(theme, "Select type", &RECORD_TYPES, index);
    lines.extend(SELECT_HELP.map(|help| Line::styled(help, theme.muted())));
    render_box(frame, frame.area(), lines, SELECT_WIDTH, theme.border(true));
}

fn render_text(frame: &mut Frame, theme: &Theme, edit: &TextEdit, hint: &str) {
    let lines = vec![
        Line::styled("Edit value", theme.header()).centered(),
        Line::from(vec![
            Span::styled(edit.buffer.as_str(), theme.text()),
            Span::styled("▎", theme.hint_key()),
        ]),
        Line::styled(hint, theme.muted()),
        Line::styled(edit.error.as_deref().unwrap_or_default(), theme.error()),
        Line::styled(TEXT_HELP, theme.muted()),
    ];
    render_box(frame, frame.area(), lines, TEXT_WIDTH, theme.border(true));
}

fn render_confirm(frame: &mut Frame, theme: &Theme, title: &str, dialog: &ConfirmDialog) {
    let heading = format!("--- {title} ---");
    let mut lines = choice_lines(theme, &heading, &["Yes", "No"], dialog.index);
    lines.push(Line::styled(CONFIRM_HELP, theme.muted()));
    render_box(frame, frame.area(), lines, TEXT_WIDTH, theme.border(true));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RECORD_FIELDS;
    use crate::view::overlay::line_width;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn form_marks_cursor_line() {
        let theme = Theme::default();
        let mut form = FieldForm::new(
            &RECORD_FIELDS,
            ["www", "300", "A", "false", "192.0.2.1"].map(String::from).to_vec(),
        );
        form.next_field();

        let lines = form_lines(&theme, "Resource record editing", &form);
        assert_eq!(plain(&lines[0]), "--- Resource record editing ---");
        assert_eq!(plain(&lines[1]), "   Name: www");
        assert_eq!(plain(&lines[2]), " > TTL: 300");
        assert_eq!(plain(&lines[6]), FORM_HELP.join(" | "));
    }

    #[test]
    fn editor_width_follows_longest_line() {
        let theme = Theme::default();
        let form = FieldForm::new(&RECORD_FIELDS, vec![String::new(); 5]);
        let lines = form_lines(&theme, "x", &form);
        let help = u16::try_from(FORM_HELP.join(" | ").chars().count()).unwrap();
        assert_eq!(fit_width(&lines, MIN_EDITOR_WIDTH), help);

        let long = "a".repeat(120);
        let form = FieldForm::new(&RECORD_FIELDS, vec![long.clone(), String::new()]);
        let lines = form_lines(&theme, "x", &form);
        assert_eq!(
            fit_width(&lines, MIN_EDITOR_WIDTH),
            line_width(&Line::raw(format!(" > Name: {long}")))
        );
    }

    #[test]
    fn fixed_width_help_fits_its_box() {
        for help in SELECT_HELP {
            assert!(line_width(&Line::raw(help)) <= SELECT_WIDTH, "{help}");
        }
        for help in [TEXT_HELP, CONFIRM_HELP] {
            assert!(line_width(&Line::raw(help)) <= TEXT_WIDTH, "{help}");
        }
    }

    #[test]
    fn list_lines_are_numbered() {
        let theme = Theme::default();
        let list = NameServerList::new(vec!["ns1.example.com".into()]);
        let lines = list_lines(&theme, "Zone: example.com - NameServers", &list);
        assert_eq!(plain(&lines[1]), " > ns1: ns1.example.com");
        assert_eq!(plain(&lines[2]), "   ns2: ");
    }
}
