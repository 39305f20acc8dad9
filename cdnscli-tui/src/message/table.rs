//! 表格子消息

/// 没有弹窗时作用于表格的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMessage {
    /// ↑ / k
    SelectPrevious,
    /// ↓ / j
    SelectNext,
    /// Enter / Space：Zones 表进入记录，Records 表打开编辑器
    Confirm,
    /// e：编辑选中的记录或 zone 的 NS
    Edit,
    /// c：新建记录（仅 Records 表）
    Create,
    /// r：刷新当前 zone 的记录
    Reload,
    /// Esc：回到 Zones 表
    Back,
}
