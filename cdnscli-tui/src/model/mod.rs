//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│  ┌────────────────────────────── UI 层 ────────────────────────────────┐   │
//！│  │                                                                      │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐          │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │          │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │          │   │
//！│  │   └─────────┘          │           │          └────┬─────┘          │   │
//！│  │        ▲               │ AppMessage│               │ 修改 + Command │   │
//！│  │        │               │ TableMsg  │               ▼                │   │
//！│  │   ┌─────────┐          │ PopupMsg  │          ┌──────────┐          │   │
//！│  │   │  View   │          └───────────┘   ┌───── │  Model   │          │   │
//！│  │   │   层    │ ◀──────── 读取 ──────────┘      │    层    │          │   │
//！│  │   └────┬────┘                                 └──────────┘          │   │
//！│  └────────│──────────────────────────────────────────▲─────────────────┘   │
//！│           │                                          │ AppMessage         │
//！│           ▼                                     ┌────┴─────┐              │
//！│      ┌─────────┐                                │ Backend  │ Command      │
//！│      │  终端   │                                │    层    │ ◀── Update   │
//！│      │ (Util)  │                                └────┬─────┘              │
//！│      └─────────┘                                     ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ cdnscli-provider  │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和少量自洽的小操作（光标夹紧、补齐 NS 行数等），
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod cache;          // zone → 记录缓存
//!         mod focus;          // 焦点状态（Zones / Records）
//!         mod popup;          // 弹窗编辑器状态
//!         mod spinner;        // 加载动画
//!         mod table;          // 表格视图
//!         pub mod validate;   // 字段校验
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub width / height: u16,                // 终端尺寸
//!             pub pending_loads: usize,               // 未返回的加载请求数
//!             pub spinner: Spinner,                   // 加载动画
//!
//!             pub zones: TableView,                   // Zones 表
//!             pub records: TableView,                 // Records 表
//!             pub cache: RecordCache,                 // zone → 记录
//!
//!             pub popup: Option<Popup>,               // 弹窗
//!             pub popup_target: Option<PopupTarget>,  // 弹窗保存去向
//!             pub status_message: Option<String>,     // 状态栏错误
//!
//!             pub provider_name: String,              // 标题栏显示
//!             pub theme: Theme,                       // 配色（显式传入，无全局状态）
//!         }
//!
//!     两张表的 focused 标志始终互斥，只能经由 App::set_focus() 切换。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、记录缓存（RecordCache）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     启动时列出全部 zone，并为每个 zone 并发拉取一次记录；
//!     按 r 只刷新当前 zone，整体替换，不做合并。
//!
//!     编辑保存时先同步改缓存（乐观更新），再异步调用 Provider；
//!     远端失败不回滚，只在状态栏显示错误。
//!
//!     记录按名称匹配（同名只取第一条）：表单只携带 Name/TTL/Type/Proxied/Content，
//!     不携带 ID。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗（Popup）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     PopupKind::Fields       记录编辑 / 创建（字段表单 + 子编辑器）
//!     PopupKind::NameServers  NS 列表（2 到 4 行）
//!     PopupKind::Confirm      是 / 否 确认
//!
//!     PopupTarget 记录弹窗打开时的 zone 与记录名，
//!     使保存结果落到打开时的 zone，即使之后选中项发生了变化。
//!

mod app;
mod cache;
mod focus;
mod popup;
mod spinner;
mod table;
pub mod validate;

pub use app::{App, CHECK_MARK, CROSS_MARK, record_row};
pub use cache::RecordCache;
pub use focus::Focus;
pub use popup::{
    ConfirmDialog, FieldForm, MAX_NAME_SERVERS, MIN_NAME_SERVERS, NAME_SERVER_HINT,
    NameServerList, Popup, PopupKind, PopupMode, PopupTarget, RECORD_FIELDS, RECORD_TYPES,
    SubEditor, TextEdit,
};
pub use spinner::{Spinner, TICK_RATE};
pub use table::{Column, TableView};
