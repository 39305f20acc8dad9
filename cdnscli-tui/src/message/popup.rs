//! 弹窗子消息

/// 弹窗打开时的按键，含义由弹窗当前模式决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupMessage {
    Up,
    Down,
    Left,
    Right,
    /// Tab
    NextField,
    /// Shift+Tab
    PrevField,
    /// Enter
    Confirm,
    /// Esc
    Cancel,
    /// Ctrl+S
    Save,
    /// Ctrl+D
    DeleteLine,
    Backspace,
    Input(char),
}

/// 弹窗关闭时交给主模型的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupOutcome {
    /// 字段表单保存（按字段顺序）
    Save(Vec<String>),
    /// NS 列表保存（已去掉空行）
    SaveNameServers(Vec<String>),
    /// 确认对话框选了 Yes
    Confirmed,
    /// 取消
    Cancel,
}
