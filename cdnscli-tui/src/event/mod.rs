//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   crossterm ──poll_event──▶ Event ──handle_event──▶ AppMessage ──▶ update   │
//！│                                          │                                  │
//！│                                          ├── 弹窗打开：PopupMessage         │
//！│                                          ├── q / Ctrl+C：Quit               │
//！│                                          └── 其余：TableMessage             │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责把终端事件翻译成 AppMessage，本身不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长等待到下一次 Tick
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)            // 键盘事件（只处理 Press）
//!             Event::Resize(width, height)    // → AppMessage::Resize，重算列宽
//!             其余事件                         // → AppMessage::Noop
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、表格按键（没有弹窗时）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ↑ / k           → TableMessage::SelectPrevious
//!     ↓ / j           → TableMessage::SelectNext
//!     Enter / Space   → TableMessage::Confirm
//!     e               → TableMessage::Edit
//!     c               → TableMessage::Create
//!     r               → TableMessage::Reload
//!     Esc             → TableMessage::Back
//!     q / Ctrl+C      → AppMessage::Quit
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、弹窗按键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     弹窗打开时 q 是普通字符，退出只能先关闭弹窗。
//!
//!     Tab / Shift+Tab → NextField / PrevField
//!     ↑ ↓ ← →         → Up / Down / Left / Right
//!     Enter           → Confirm
//!     Esc / Ctrl+C    → Cancel
//!     Ctrl+S          → Save
//!     Ctrl+D          → DeleteLine
//!     Backspace       → Backspace
//!     字符输入         → Input(c)
//!
//!     同一个 PopupMessage 在不同弹窗模式下含义不同，解释工作在 src/update/popup.rs。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
