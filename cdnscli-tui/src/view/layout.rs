//! 主布局与列宽计算
//!
//! 自上而下：标题栏（3 行）+ 表格 + 状态栏（1 行）+ 菜单（1 行）。
//! 列宽只在终端尺寸变化时重算（见 `update::resize`）。

use ratatui::layout::{Constraint, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
pub const MENU_HEIGHT: u16 = 1;

/// 表格最小高度
const MIN_TABLE_HEIGHT: u16 = 3;

/// Zones 表：每列左右各 1 格内边距
const ZONES_PADDING: i32 = 2 * 2;
const ZONES_MIN_AVAILABLE: i32 = 20;
const ZONES_MIN_NAME: i32 = 12;
const ZONES_MIN_NS: i32 = 10;

/// Records 表
const RECORDS_PADDING: i32 = 2 * 5;
const RECORDS_MIN_AVAILABLE: i32 = 40;
const RECORDS_DEFAULT_NAME: u16 = 12;
const RECORDS_MIN_CONTENT: i32 = 10;
const RECORDS_MIN_REMAINING: i32 = 20;

/// Name 列的最终下限（两张表共用）
const MIN_NAME: i32 = 8;

/// 表格可见高度：总高度减去标题栏、状态栏和菜单，至少 3
pub fn table_height(total_height: u16) -> u16 {
    total_height
        .saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT + MENU_HEIGHT)
        .max(MIN_TABLE_HEIGHT)
}

/// Zones 表列宽 `[Name, NS]`：按 35% / 65% 分配，Name 至少 12，NS 至少 10，
/// 两者冲突时 NS 优先，Name 最终不低于 8
pub fn zone_column_widths(total_width: u16) -> [u16; 2] {
    let available = (i32::from(total_width) - ZONES_PADDING).max(ZONES_MIN_AVAILABLE);

    let mut name = available * 35 / 100;
    let mut ns = available - name;

    if name < ZONES_MIN_NAME {
        name = ZONES_MIN_NAME;
        ns = available - name;
    }
    if ns < ZONES_MIN_NS {
        ns = ZONES_MIN_NS;
        name = (available - ns).max(MIN_NAME);
    }

    [to_width(name), to_width(ns)]
}

/// Records 表列宽 `[Name, TTL, Type, Proxied, Content]`
///
/// Name 沿用 Zones 表当前的 Name 宽度，切换表格时两列对齐；
/// 剩余宽度给 Content（至少 10），不够时先压缩 Name（不低于 8）。
pub fn record_column_widths(total_width: u16, zones_name_width: Option<u16>) -> [u16; 5] {
    let available = (i32::from(total_width) - RECORDS_PADDING).max(RECORDS_MIN_AVAILABLE);

    let (mut ttl, mut kind, mut proxied) = (8, 8, 10);
    let mut name = i32::from(zones_name_width.unwrap_or(RECORDS_DEFAULT_NAME));

    let mut remaining = available - (name + ttl + kind + proxied);
    if remaining < RECORDS_MIN_REMAINING {
        // 终端太窄时收窄固定列
        (ttl, kind, proxied) = (6, 6, 8);
        remaining = available - (name + ttl + kind + proxied);
    }

    let mut content = remaining;
    if content < RECORDS_MIN_CONTENT {
        if name > MIN_NAME {
            let reduce = (RECORDS_MIN_CONTENT - content).min(name - MIN_NAME);
            name -= reduce;
            content = available - (name + ttl + kind + proxied);
        }
        content = content.max(RECORDS_MIN_CONTENT);
    }

    [
        to_width(name),
        to_width(ttl),
        to_width(kind),
        to_width(proxied),
        to_width(content),
    ]
}

fn to_width(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

/// 主布局区域
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub menu: Rect,
}

/// 切分主布局
pub fn main_layout(area: Rect, body_height: u16) -> MainLayout {
    let [header, body, status, menu, _] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(body_height),
        Constraint::Length(STATUS_HEIGHT),
        Constraint::Length(MENU_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    MainLayout {
        header,
        body,
        status,
        menu,
    }
}
