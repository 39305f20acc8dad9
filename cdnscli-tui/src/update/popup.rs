//! 弹窗更新逻辑
//!
//! 弹窗只改自己的状态；需要主模型处理的结果以 [`PopupOutcome`] 返回，
//! 返回 `Some` 即表示弹窗应当关闭。

use crate::message::{PopupMessage, PopupOutcome};
use crate::model::validate::{NAME_SERVER_ERROR, is_hostname, validate_field};
use crate::model::{
    ConfirmDialog, FieldForm, MIN_NAME_SERVERS, NameServerList, Popup, PopupKind, RECORD_TYPES,
    SubEditor, TextEdit,
};

/// 处理弹窗消息
pub fn update(popup: &mut Popup, msg: PopupMessage) -> Option<PopupOutcome> {
    match &mut popup.kind {
        PopupKind::Fields(form) => update_form(form, msg),
        PopupKind::NameServers(list) => update_name_servers(list, msg),
        PopupKind::Confirm(dialog) => update_confirm(dialog, msg),
    }
}

// ============ 字段表单 ============

fn update_form(form: &mut FieldForm, msg: PopupMessage) -> Option<PopupOutcome> {
    match form.sub.take() {
        Some(SubEditor::Text(edit)) => {
            update_form_text(form, edit, msg);
            None
        }
        Some(SubEditor::Bool(index)) => {
            update_bool_select(form, index, msg);
            None
        }
        Some(SubEditor::Type(index)) => {
            update_type_select(form, index, msg);
            None
        }
        None => update_form_base(form, msg),
    }
}

/// 基础模式：在字段间移动，Enter 打开子编辑器
fn update_form_base(form: &mut FieldForm, msg: PopupMessage) -> Option<PopupOutcome> {
    match msg {
        PopupMessage::NextField | PopupMessage::Down => form.next_field(),
        PopupMessage::PrevField | PopupMessage::Up => form.prev_field(),
        PopupMessage::Left => form.char_pos = form.char_pos.saturating_sub(1),
        PopupMessage::Right => {
            if form.char_pos < form.current_value().chars().count() {
                form.char_pos += 1;
            }
        }
        PopupMessage::Confirm => form.sub = Some(open_sub_editor(form)),
        PopupMessage::Save => return Some(PopupOutcome::Save(form.fields.clone())),
        PopupMessage::Cancel => return Some(PopupOutcome::Cancel),
        // 进入子编辑器之前忽略其他按键
        _ => {}
    }
    None
}

fn open_sub_editor(form: &FieldForm) -> SubEditor {
    let value = form.current_value();
    if form.is_bool_field(form.cursor) {
        SubEditor::Bool(usize::from(!value.eq_ignore_ascii_case("true")))
    } else if form.is_type_field(form.cursor) {
        let index = RECORD_TYPES
            .iter()
            .position(|t| t.eq_ignore_ascii_case(value))
            .unwrap_or(0);
        SubEditor::Type(index)
    } else {
        SubEditor::Text(TextEdit::new(value))
    }
}

fn update_form_text(form: &mut FieldForm, mut edit: TextEdit, msg: PopupMessage) {
    match msg {
        PopupMessage::Confirm => {
            let column = form.current_column();
            if let Some(error) = validate_field(&column, &edit.buffer, form.current_type()) {
                edit.error = Some(error.to_string());
                form.sub = Some(SubEditor::Text(edit));
            } else {
                form.commit(edit.buffer);
            }
        }
        // 丢弃修改
        PopupMessage::Cancel => {}
        msg => {
            edit_text(&mut edit, msg);
            form.sub = Some(SubEditor::Text(edit));
        }
    }
}

fn update_bool_select(form: &mut FieldForm, index: usize, msg: PopupMessage) {
    match msg {
        PopupMessage::Left | PopupMessage::Up => form.sub = Some(SubEditor::Bool(0)),
        PopupMessage::Right | PopupMessage::Down => form.sub = Some(SubEditor::Bool(1)),
        PopupMessage::Confirm => {
            let value = if index == 0 { "true" } else { "false" };
            form.commit(value.to_string());
        }
        PopupMessage::Cancel => {}
        _ => form.sub = Some(SubEditor::Bool(index)),
    }
}

fn update_type_select(form: &mut FieldForm, index: usize, msg: PopupMessage) {
    match msg {
        PopupMessage::Up => form.sub = Some(SubEditor::Type(index.saturating_sub(1))),
        PopupMessage::Down => {
            form.sub = Some(SubEditor::Type((index + 1).min(RECORD_TYPES.len() - 1)));
        }
        PopupMessage::Confirm => {
            let value = RECORD_TYPES.get(index).copied().unwrap_or(RECORD_TYPES[0]);
            form.commit(value.to_string());
        }
        PopupMessage::Cancel => {}
        _ => form.sub = Some(SubEditor::Type(index)),
    }
}

/// 文本缓冲的通用编辑键；方向键等在文本框里没有意义，直接忽略
fn edit_text(edit: &mut TextEdit, msg: PopupMessage) {
    match msg {
        PopupMessage::Backspace => edit.backspace(),
        PopupMessage::Input(ch) => edit.input(ch),
        _ => {}
    }
}

// ============ NS 列表 ============

fn update_name_servers(list: &mut NameServerList, msg: PopupMessage) -> Option<PopupOutcome> {
    if let Some(edit) = list.edit.take() {
        update_name_server_text(list, edit, msg);
        return None;
    }

    match msg {
        PopupMessage::Up => list.move_up(),
        PopupMessage::Down => list.move_down(),
        PopupMessage::Confirm => {
            let current = list.values.get(list.cursor).cloned().unwrap_or_default();
            list.edit = Some(TextEdit::new(&current));
        }
        PopupMessage::DeleteLine => list.delete_current(),
        PopupMessage::Save => return Some(PopupOutcome::SaveNameServers(list.non_empty())),
        PopupMessage::Cancel => return Some(PopupOutcome::Cancel),
        _ => {}
    }
    None
}

fn update_name_server_text(list: &mut NameServerList, mut edit: TextEdit, msg: PopupMessage) {
    match msg {
        PopupMessage::Confirm => {
            let value = edit.buffer.trim().to_string();
            if !value.is_empty() && !is_hostname(&value) {
                edit.error = Some(NAME_SERVER_ERROR.to_string());
                list.edit = Some(edit);
            } else if value.is_empty() && list.values.len() > MIN_NAME_SERVERS {
                // 多于最少行数时，提交空值即删除该行
                list.delete_current();
            } else {
                list.set_current(value);
            }
        }
        PopupMessage::Cancel => {}
        msg => {
            edit_text(&mut edit, msg);
            list.edit = Some(edit);
        }
    }
}

// ============ 确认对话框 ============

fn update_confirm(dialog: &mut ConfirmDialog, msg: PopupMessage) -> Option<PopupOutcome> {
    match msg {
        PopupMessage::Left | PopupMessage::Up => dialog.index = 0,
        PopupMessage::Right | PopupMessage::Down => dialog.index = 1,
        PopupMessage::Confirm if dialog.index == 0 => return Some(PopupOutcome::Confirmed),
        PopupMessage::Confirm | PopupMessage::Cancel => return Some(PopupOutcome::Cancel),
        _ => {}
    }
    None
}
