//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，
//! 同时也是 Backend —→ Update 之间的桥梁。
//! 按键、终端尺寸变化、动画时钟、后台任务的返回结果，全部翻译成 AppMessage，
//! 由 Update 层逐条、按到达顺序处理。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod table;          // TableMessage：无弹窗时的表格操作
//!         mod popup;          // PopupMessage / PopupOutcome：弹窗按键与结果
//!         mod command;        // Command：Update 返回的副作用描述
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             Resize(u16, u16),                   // 终端尺寸变化
//!             Tick,                               // 动画时钟
//!             Table(TableMessage),                // 表格子消息
//!             Popup(PopupMessage),                // 弹窗子消息
//!             PopupClosed(PopupOutcome),          // 弹窗结果
//!             SwitchToRecords,                    // 进入 Records 表
//!             ZonesLoaded(..),                    // ┐
//!             RecordsLoaded { .. },               // │ 后台任务返回，
//!             RecordCreated { .. },               // │ 全部携带 Result
//!             RecordUpdated { .. },               // ┘
//!             Noop,                               // 无操作
//!         }
//!
//!
//!     Command 是反方向的：
//!         update(app, msg) -> Command
//!                              ↓
//!         ProviderService::execute(command)      // tokio 任务 + 超时
//!                              ↓
//!         mpsc::UnboundedSender<AppMessage>      // 结果送回主循环
//!

mod app;
mod command;
mod popup;
mod table;

pub use app::{AppMessage, ProviderResult};
pub use command::Command;
pub use popup::{PopupMessage, PopupOutcome};
pub use table::TableMessage;
