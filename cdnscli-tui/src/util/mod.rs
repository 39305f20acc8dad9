//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                                 Util 层                                     │
//！│                                                                             │
//！│   main ──▶ init_logging(--log-file, --debug) ──▶ 日志文件                   │
//！│        ──▶ init_terminal() ──▶ app::run(...) ──▶ restore_terminal()         │
//！│                                                                             │
//！│   panic ──▶ panic hook ──▶ 离开备用屏幕 ──▶ 打印 panic 信息                 │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/util/mod.rs
//! Util 层：与业务无关的基础设施
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志订阅者（写文件）
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、日志
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端被 TUI 独占，日志写入文件：
//!         --log-file <path>               显式指定
//!         <cache_dir>/cdnscli/cdnscli.log 默认
//!
//!     过滤级别：
//!         --debug                         debug
//!         RUST_LOG                        按 EnvFilter 语法
//!         其余                             info
//!
//!     Provider crate 使用 log 宏；tracing-subscriber 开启 tracing-log 后，
//!     init 会同时安装 LogTracer，两套宏写进同一个文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、终端
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     init_terminal：
//!         · enable_raw_mode()             逐键读取、关闭回显
//!         · EnterAlternateScreen          退出后恢复原屏幕内容
//!         · 安装 panic hook               panic 时先恢复终端再打印
//!
//!     restore_terminal：
//!         · disable_raw_mode()
//!         · LeaveAlternateScreen
//!         · show_cursor()
//!
//!     main 在 app::run 返回后立即调用 restore_terminal，
//!     即使 run 返回错误也先恢复终端，再返回错误。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
