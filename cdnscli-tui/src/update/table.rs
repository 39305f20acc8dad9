//! 表格按键的更新逻辑

use crate::message::{AppMessage, Command, TableMessage};
use crate::model::{App, CHECK_MARK, Focus, Popup, PopupTarget, RECORD_FIELDS};

/// 记录编辑 / 创建弹窗的标题
pub const EDIT_RECORD_TITLE: &str = "Resource record editing";
pub const CREATE_RECORD_TITLE: &str = "Resource record creation";

/// 新建记录的默认值
const CREATE_DEFAULTS: [&str; 5] = ["", "3600", "A", "false", ""];

/// 处理表格消息
pub fn update(app: &mut App, msg: TableMessage) -> Command {
    match msg {
        TableMessage::SelectPrevious => app.focused_table_mut().move_up(),
        TableMessage::SelectNext => app.focused_table_mut().move_down(),

        TableMessage::Confirm => match app.focus() {
            // Zones 表上 Enter：进入该 zone 的记录
            Focus::Zones if app.zones.selected_row().is_some() => {
                return super::update(app, AppMessage::SwitchToRecords);
            }
            Focus::Zones => {}
            Focus::Records => open_record_editor(app),
        },

        TableMessage::Edit => match app.focus() {
            Focus::Zones => open_name_server_editor(app),
            Focus::Records => open_record_editor(app),
        },

        TableMessage::Create => {
            if app.focus().is_records() {
                open_record_creator(app);
            }
        }

        TableMessage::Reload => {
            if let Some(zone) = app.selected_zone().map(str::to_string) {
                log::info!("Reloading records of {zone}");
                app.begin_load();
                return Command::LoadRecords { zone };
            }
        }

        TableMessage::Back => app.set_focus(Focus::Zones),
    }

    Command::None
}

/// 以选中行预填字段，打开记录编辑弹窗
fn open_record_editor(app: &mut App) {
    let Some(zone) = app.selected_zone().map(str::to_string) else {
        return;
    };
    let Some(row) = app.records.selected_row() else {
        return;
    };

    let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
    let proxied = if cell(3) == CHECK_MARK { "true" } else { "false" };
    let values = vec![cell(0), cell(1), cell(2), proxied.to_string(), cell(4)];
    let name = cell(0);

    app.open_popup(
        Popup::fields(EDIT_RECORD_TITLE, &RECORD_FIELDS, values),
        Some(PopupTarget::UpdateRecord { zone, name }),
    );
}

/// 打开空白的记录创建弹窗
fn open_record_creator(app: &mut App) {
    let Some(zone) = app.selected_zone().map(str::to_string) else {
        return;
    };
    let values = CREATE_DEFAULTS.iter().map(|v| (*v).to_string()).collect();

    app.open_popup(
        Popup::fields(CREATE_RECORD_TITLE, &RECORD_FIELDS, values),
        Some(PopupTarget::CreateRecord { zone }),
    );
}

/// 打开选中 zone 的 NS 列表弹窗
fn open_name_server_editor(app: &mut App) {
    let Some(row) = app.zones.selected_row() else {
        return;
    };
    let zone = row.first().cloned().unwrap_or_default();
    let servers = row
        .get(1)
        .map(|ns| {
            ns.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let row = app.zones.cursor;

    app.open_popup(
        Popup::name_servers(format!("Zone: {zone} - NameServers"), servers),
        Some(PopupTarget::NameServers { row }),
    );
}
