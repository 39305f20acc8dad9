//! 应用主状态结构

use cdnscli_provider::DnsRecord;

use super::{Column, Focus, Popup, PopupTarget, RecordCache, Spinner, TableView};
use crate::view::theme::Theme;

/// Proxied 列的勾选 / 未勾选符号
pub const CHECK_MARK: &str = "✓";
pub const CROSS_MARK: &str = "𐄂";

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 终端尺寸
    pub width: u16,
    pub height: u16,

    /// 尚未返回的加载请求数（启动时的 zone 列表 + 每个 zone 的记录，以及手动刷新）
    pub pending_loads: usize,
    /// 加载动画
    pub spinner: Spinner,

    /// Zones 表
    pub zones: TableView,
    /// 当前 zone 的 Records 表（每次更新后从缓存重建）
    pub records: TableView,
    /// zone 名称 → 记录
    pub cache: RecordCache,

    /// 弹窗（`None` 表示没有弹窗）
    pub popup: Option<Popup>,
    /// 弹窗保存时的去向
    pub popup_target: Option<PopupTarget>,

    /// 状态栏错误消息
    pub status_message: Option<String>,

    /// 当前 Provider 的显示名称
    pub provider_name: String,
    /// 配色
    pub theme: Theme,
}

impl App {
    /// 创建新的应用实例，Zones 表拥有焦点
    pub fn new(provider_name: impl Into<String>, theme: Theme) -> Self {
        let mut zones = TableView::new(vec![Column::new("Name", 30), Column::new("NS", 50)]);
        zones.focused = true;
        let records = TableView::new(vec![
            Column::new("Name", 30),
            Column::new("TTL", 8),
            Column::new("Type", 8),
            Column::new("Proxied", 10),
            Column::new("Content", 40),
        ]);

        Self {
            should_quit: false,
            width: 0,
            height: 0,
            pending_loads: 0,
            spinner: Spinner::default(),
            zones,
            records,
            cache: RecordCache::default(),
            popup: None,
            popup_target: None,
            status_message: None,
            provider_name: provider_name.into(),
            theme,
        }
    }

    // ============ 焦点 ============

    pub fn focus(&self) -> Focus {
        if self.records.focused {
            Focus::Records
        } else {
            Focus::Zones
        }
    }

    /// 切换焦点，两个表格的焦点标志总是互斥
    pub fn set_focus(&mut self, focus: Focus) {
        self.zones.focused = focus.is_zones();
        self.records.focused = focus.is_records();
    }

    /// 当前拥有焦点的表格
    pub fn focused_table(&self) -> &TableView {
        match self.focus() {
            Focus::Zones => &self.zones,
            Focus::Records => &self.records,
        }
    }

    pub fn focused_table_mut(&mut self) -> &mut TableView {
        match self.focus() {
            Focus::Zones => &mut self.zones,
            Focus::Records => &mut self.records,
        }
    }

    // ============ 加载状态 ============

    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    pub fn begin_load(&mut self) {
        self.pending_loads += 1;
    }

    pub fn finish_load(&mut self) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
    }

    // ============ 数据 ============

    /// Zones 表中选中的 zone 名称
    pub fn selected_zone(&self) -> Option<&str> {
        self.zones.selected_cell(0)
    }

    /// 从缓存重建 Records 表
    pub fn sync_record_rows(&mut self) {
        let rows: Vec<Vec<String>> = self
            .selected_zone()
            .map(|zone| self.cache.get(zone).iter().map(record_row).collect())
            .unwrap_or_default();
        self.records.set_rows(rows);
    }

    pub fn popup_open(&self) -> bool {
        self.popup.is_some()
    }

    /// 打开弹窗并记下保存时的去向
    pub fn open_popup(&mut self, popup: Popup, target: Option<PopupTarget>) {
        self.popup = Some(popup);
        self.popup_target = target;
    }

    pub fn close_popup(&mut self) -> Option<PopupTarget> {
        self.popup = None;
        self.popup_target.take()
    }

    // ============ 状态栏 ============

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// 记录 → Records 表的一行
pub fn record_row(record: &DnsRecord) -> Vec<String> {
    vec![
        record.name.clone(),
        record.ttl.to_string(),
        record.record_type.clone(),
        if record.proxied { CHECK_MARK } else { CROSS_MARK }.to_string(),
        record.content.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_is_exclusive() {
        let mut app = App::new("Memory", Theme::default());
        assert_eq!(app.focus(), Focus::Zones);
        assert!(app.zones.focused ^ app.records.focused);

        app.set_focus(Focus::Records);
        assert!(app.records.focused);
        assert!(!app.zones.focused);

        app.set_focus(Focus::Zones);
        assert!(app.zones.focused ^ app.records.focused);
    }

    #[test]
    fn loading_counts_outstanding_requests() {
        let mut app = App::new("Memory", Theme::default());
        app.begin_load();
        app.begin_load();
        app.finish_load();
        assert!(app.is_loading());
        app.finish_load();
        app.finish_load();
        assert!(!app.is_loading());
    }

    #[test]
    fn record_rows_use_glyphs() {
        let record = DnsRecord {
            name: "www.example.com".to_string(),
            ttl: 300,
            record_type: "A".to_string(),
            proxied: true,
            content: "192.0.2.1".to_string(),
            ..DnsRecord::default()
        };
        assert_eq!(
            record_row(&record),
            ["www.example.com", "300", "A", CHECK_MARK, "192.0.2.1"]
        );
    }
}
