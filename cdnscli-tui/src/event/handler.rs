//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, PopupMessage, TableMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 弹窗打开时，所有按键交给弹窗
    if app.popup_open() {
        return handle_popup_keys(key).map_or(AppMessage::Noop, AppMessage::Popup);
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    handle_table_keys(key).map_or(AppMessage::Noop, AppMessage::Table)
}

/// 表格按键
fn handle_table_keys(key: KeyEvent) -> Option<TableMessage> {
    if DefaultKeymap::BACK.matches(&key) {
        return Some(TableMessage::Back);
    }
    if DefaultKeymap::EDIT.matches(&key) {
        return Some(TableMessage::Edit);
    }
    if DefaultKeymap::CREATE.matches(&key) {
        return Some(TableMessage::Create);
    }
    if DefaultKeymap::RELOAD.matches(&key) {
        return Some(TableMessage::Reload);
    }
    if !key.modifiers.is_empty() {
        return None;
    }

    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => Some(TableMessage::SelectPrevious),
        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => Some(TableMessage::SelectNext),
        // Enter 或空格: 进入 / 编辑
        KeyCode::Enter | KeyCode::Char(' ') => Some(TableMessage::Confirm),
        _ => None,
    }
}

/// 弹窗按键
fn handle_popup_keys(key: KeyEvent) -> Option<PopupMessage> {
    if DefaultKeymap::SAVE.matches(&key) {
        return Some(PopupMessage::Save);
    }
    if DefaultKeymap::DELETE_LINE.matches(&key) {
        return Some(PopupMessage::DeleteLine);
    }
    // 弹窗里 Ctrl+C 等同 Esc
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return Some(PopupMessage::Cancel);
    }

    match key.code {
        KeyCode::Esc => Some(PopupMessage::Cancel),
        KeyCode::Enter => Some(PopupMessage::Confirm),
        KeyCode::Tab => Some(PopupMessage::NextField),
        KeyCode::BackTab => Some(PopupMessage::PrevField),
        KeyCode::Up => Some(PopupMessage::Up),
        KeyCode::Down => Some(PopupMessage::Down),
        KeyCode::Left => Some(PopupMessage::Left),
        KeyCode::Right => Some(PopupMessage::Right),
        KeyCode::Backspace => Some(PopupMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(PopupMessage::Input(c))
        }
        _ => None,
    }
}
