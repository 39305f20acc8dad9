//! 弹窗编辑器状态
//!
//! 弹窗有三种顶层形态：
//!
//! ```text
//! FieldForm ──Enter──▶ TextEdit / BoolSelect / TypeSelect ──Enter/Esc──▶ FieldForm
//! NameServerList ──Enter──▶ TextEdit ──Enter/Esc──▶ NameServerList
//! Confirm
//! ```
//!
//! 按键如何驱动这些状态见 `update/popup.rs`。弹窗从不直接修改记录缓存，
//! 只通过 [`PopupOutcome`](crate::message::PopupOutcome) 把结果交还给主模型。

/// 可选的记录类型（Type 选择器的固定顺序）
pub const RECORD_TYPES: [&str; 8] = ["A", "AAAA", "CNAME", "TXT", "MX", "NS", "SRV", "CAA"];

/// 记录编辑器的字段名
pub const RECORD_FIELDS: [&str; 5] = ["Name", "TTL", "Type", "Proxied", "Content"];

/// NS 列表最少 / 最多行数
pub const MIN_NAME_SERVERS: usize = 2;
pub const MAX_NAME_SERVERS: usize = 4;

/// 弹窗当前所处的模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupMode {
    FieldForm,
    TextEdit,
    BoolSelect,
    TypeSelect,
    NameServerList,
    Confirm,
}

/// 弹窗
#[derive(Debug, Clone)]
pub struct Popup {
    pub title: String,
    pub kind: PopupKind,
}

#[derive(Debug, Clone)]
pub enum PopupKind {
    Fields(FieldForm),
    NameServers(NameServerList),
    Confirm(ConfirmDialog),
}

impl Popup {
    /// 字段表单
    pub fn fields(title: impl Into<String>, columns: &[&str], values: Vec<String>) -> Self {
        Self {
            title: title.into(),
            kind: PopupKind::Fields(FieldForm::new(columns, values)),
        }
    }

    /// NS 列表编辑器
    pub fn name_servers(title: impl Into<String>, initial: Vec<String>) -> Self {
        Self {
            title: title.into(),
            kind: PopupKind::NameServers(NameServerList::new(initial)),
        }
    }

    /// 确认对话框（默认选中 Yes）
    // 删除记录的流程接入后由 `update/table.rs` 调用
    #[allow(dead_code)]
    pub fn confirm(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: PopupKind::Confirm(ConfirmDialog::default()),
        }
    }

    pub fn mode(&self) -> PopupMode {
        match &self.kind {
            PopupKind::Fields(form) => match form.sub {
                None => PopupMode::FieldForm,
                Some(SubEditor::Text(_)) => PopupMode::TextEdit,
                Some(SubEditor::Bool(_)) => PopupMode::BoolSelect,
                Some(SubEditor::Type(_)) => PopupMode::TypeSelect,
            },
            PopupKind::NameServers(list) if list.edit.is_some() => PopupMode::TextEdit,
            PopupKind::NameServers(_) => PopupMode::NameServerList,
            PopupKind::Confirm(_) => PopupMode::Confirm,
        }
    }
}

// ============ 字段表单 ============

/// 字段表单中打开的子编辑器
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubEditor {
    Text(TextEdit),
    /// 0 = true，1 = false
    Bool(usize),
    /// `RECORD_TYPES` 下标
    Type(usize),
}

/// 文本编辑缓冲
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEdit {
    pub buffer: String,
    pub error: Option<String>,
}

impl TextEdit {
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            error: None,
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn input(&mut self, ch: char) {
        self.buffer.push(ch);
    }
}

#[derive(Debug, Clone)]
pub struct FieldForm {
    pub columns: Vec<String>,
    pub fields: Vec<String>,
    /// 当前字段，始终在 `[0, fields.len())` 内
    pub cursor: usize,
    /// 字段内字符位置（仅显示用）
    pub char_pos: usize,
    pub sub: Option<SubEditor>,
}

impl FieldForm {
    pub fn new(columns: &[&str], mut fields: Vec<String>) -> Self {
        fields.resize(columns.len(), String::new());
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            fields,
            cursor: 0,
            char_pos: 0,
            sub: None,
        }
    }

    /// 当前字段名（小写）
    pub fn current_column(&self) -> String {
        self.columns
            .get(self.cursor)
            .map(|c| c.to_lowercase())
            .unwrap_or_default()
    }

    pub fn current_value(&self) -> &str {
        self.fields.get(self.cursor).map_or("", String::as_str)
    }

    /// Type 字段的当前值
    pub fn current_type(&self) -> &str {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case("type"))
            .and_then(|i| self.fields.get(i))
            .map_or("", String::as_str)
    }

    pub fn is_bool_field(&self, index: usize) -> bool {
        self.columns.get(index).is_some_and(|c| {
            let c = c.to_lowercase();
            c == "proxied" || c == "enabled" || c == "active"
        })
    }

    pub fn is_type_field(&self, index: usize) -> bool {
        self.columns
            .get(index)
            .is_some_and(|c| c.eq_ignore_ascii_case("type"))
    }

    /// 写入当前字段并把字符位置移到末尾
    pub fn commit(&mut self, value: String) {
        if let Some(field) = self.fields.get_mut(self.cursor) {
            *field = value;
        }
        self.char_pos = self.current_value().chars().count();
        self.sub = None;
    }

    pub fn next_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.fields.len();
        self.char_pos = self.current_value().chars().count();
    }

    pub fn prev_field(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.cursor = (self.cursor + self.fields.len() - 1) % self.fields.len();
        self.char_pos = self.current_value().chars().count();
    }
}

// ============ NS 列表 ============

/// NS 文本框下方的提示
pub const NAME_SERVER_HINT: &str = "Nameserver hostname, e.g. ns1.example.com";

#[derive(Debug, Clone)]
pub struct NameServerList {
    /// 长度始终在 `[MIN_NAME_SERVERS, MAX_NAME_SERVERS]` 内
    pub values: Vec<String>,
    pub cursor: usize,
    pub edit: Option<TextEdit>,
}

impl NameServerList {
    pub fn new(mut values: Vec<String>) -> Self {
        values.truncate(MAX_NAME_SERVERS);
        let mut list = Self {
            values,
            cursor: 0,
            edit: None,
        };
        list.pad();
        list
    }

    fn pad(&mut self) {
        while self.values.len() < MIN_NAME_SERVERS {
            self.values.push(String::new());
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 下移；越过最后一行时追加空行（不超过上限）
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.values.len() {
            self.cursor += 1;
        } else if self.values.len() < MAX_NAME_SERVERS {
            self.values.push(String::new());
            self.cursor += 1;
        }
    }

    /// 删除当前行（多于最少行数时）
    pub fn delete_current(&mut self) {
        if self.values.len() <= MIN_NAME_SERVERS {
            return;
        }
        self.values.remove(self.cursor);
        if self.cursor >= self.values.len() {
            self.cursor = self.values.len().saturating_sub(1);
        }
        self.pad();
    }

    pub fn set_current(&mut self, value: String) {
        if let Some(slot) = self.values.get_mut(self.cursor) {
            *slot = value;
        }
    }

    /// 去空白后的非空值
    pub fn non_empty(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }
}

// ============ 确认对话框 ============

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialog {
    /// 0 = Yes，1 = No
    pub index: usize,
}

// ============ 弹窗用途 ============

/// 弹窗打开时记下的目标，保存时据此决定创建还是更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupTarget {
    /// 新建记录
    CreateRecord { zone: String },
    /// 编辑记录：按打开时的名称在缓存中查找
    UpdateRecord { zone: String, name: String },
    /// 编辑 zone 的 NS 列表（Zones 表的行号）
    NameServers { row: usize },
}
