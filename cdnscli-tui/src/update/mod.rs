//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                                Update 层                                    │
//！│                                                                             │
//！│   AppMessage ──▶ update(app, msg) ──▶ Command ──▶ ProviderService           │
//！│                        │                               │                    │
//！│                        ▼                               │ tokio 任务         │
//！│                     App（修改）                         ▼                    │
//！│                        ▲                     AppMessage::RecordsLoaded ...  │
//！│                        └──────────── 主循环 try_recv ◀─┘                    │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 唯一修改 Model 的地方。消息逐条处理，update 从不阻塞：
//! 所有 I/O 都以 Command 的形式返回，由 Backend 层执行。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod table;      // 无弹窗时的按键（移动、Enter、e、c、r、Esc）
//!         mod popup;      // 弹窗内部状态机
//!         mod records;    // 弹窗结果（保存 / 取消）与远端写入结果
//!         mod data;       // zone 列表与记录的加载结果
//!
//!
//!     弹窗打开时，所有按键都交给弹窗；
//!     弹窗返回 PopupOutcome 时立即以 AppMessage::PopupClosed 再走一遍 update。
//!
//!     每次 update 结束都会从缓存重建 Records 表，
//!     因此表格总是反映缓存的最新内容。
//!

mod data;
mod popup;
mod records;
mod table;

pub use table::{CREATE_RECORD_TITLE, EDIT_RECORD_TITLE};

use crate::message::{AppMessage, Command};
use crate::model::{App, Focus};
use crate::view::layout::{record_column_widths, table_height, zone_column_widths};

/// 启动：列出全部 zone
pub fn init(app: &mut App) -> Command {
    app.begin_load();
    Command::LoadZones
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    // 错误消息保留到下一次按键
    if msg.is_key() {
        app.clear_status();
    }

    let command = match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Command::None
        }

        AppMessage::Resize(width, height) => {
            resize(app, width, height);
            Command::None
        }

        AppMessage::Tick => {
            if app.is_loading() {
                app.spinner.tick();
            }
            Command::None
        }

        AppMessage::Table(table_msg) => table::update(app, table_msg),

        AppMessage::Popup(popup_msg) => {
            let outcome = app.popup.as_mut().and_then(|popup| {
                log::trace!("popup {:?} <- {popup_msg:?}", popup.mode());
                popup::update(popup, popup_msg)
            });
            match outcome {
                Some(outcome) => update(app, AppMessage::PopupClosed(outcome)),
                None => Command::None,
            }
        }

        AppMessage::PopupClosed(outcome) => records::popup_closed(app, outcome),

        AppMessage::SwitchToRecords => {
            app.set_focus(Focus::Records);
            app.records.cursor = 0;
            Command::None
        }

        AppMessage::ZonesLoaded(result) => data::zones_loaded(app, result),

        AppMessage::RecordsLoaded { zone, result } => data::records_loaded(app, &zone, result),

        AppMessage::RecordCreated { zone, result } => records::record_created(app, &zone, result),

        AppMessage::RecordUpdated {
            zone,
            previous_id,
            result,
        } => records::record_updated(app, &zone, &previous_id, result),

        AppMessage::Noop => Command::None,
    };

    app.sync_record_rows();
    command
}

/// 终端尺寸变化：重算表格高度与列宽
fn resize(app: &mut App, width: u16, height: u16) {
    app.width = width;
    app.height = height;

    let rows = table_height(height);
    app.zones.height = rows;
    app.records.height = rows;

    app.zones.set_widths(&zone_column_widths(width));
    let name_width = app.zones.width_of(0);
    app.records.set_widths(&record_column_widths(width, name_width));
}
