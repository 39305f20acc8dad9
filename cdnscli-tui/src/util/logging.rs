//! 日志初始化
//!
//! TUI 占用了整个终端，日志只能写文件。`log` 宏的记录经由
//! tracing-subscriber 的 `tracing-log` 桥接进入同一个订阅者。

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_DIR: &str = "cdnscli";
const LOG_FILE: &str = "cdnscli.log";

/// 默认日志文件：`<cache_dir>/cdnscli/cdnscli.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// 过滤规则：`--debug` 强制 debug，否则 `RUST_LOG`，再否则 info
fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// 初始化日志，返回实际使用的日志文件
///
/// 平台没有缓存目录且未指定路径时不记录日志。
pub fn init_logging(path: Option<&Path>, debug: bool) -> Result<Option<PathBuf>> {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter(debug))
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(Some(path))
}
