//! cdnscli：DNS zone 与记录的终端界面
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息与副作用描述 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、凭证与 Provider 调用 (`backend/`)
//! - **Util**: 终端与日志 (`util/`)
//! - **Cli**: 非交互子命令与输出格式 (`cli/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Args::parse()               // 命令行参数
//!     load_config()               // 读取配置、钥匙串补齐凭证、校验
//!     init_logging()              // 日志写文件
//!     create_provider()           // 按配置构造 Provider
//!     tokio Runtime               // 后台任务运行时
//!     cli::run()                  // 有子命令时：执行、打印、退出
//!     init_terminal()             // 原始模式 + 备用屏幕
//!     app::run()                  // 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//! 终端初始化之前的错误直接打印到 stderr；之后的错误等终端恢复后再返回。

mod app;
mod backend;
mod cli;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use cdnscli_provider::create_provider;
use clap::Parser;
use tokio::sync::mpsc;

use cli::{CliCommand, OutputFormat};
use backend::{AppConfig, ConfigService, JsonConfigService, KeyringCredentialStore, ProviderService};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::Theme;

/// Browse and edit DNS zones and records (TUI without a subcommand)
#[derive(Debug, Parser)]
#[command(name = "cdnscli", version, about)]
struct Args {
    /// Config file (default: <config dir>/cdnscli/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Provider name from the config file ("memory" works without one)
    #[arg(long, value_name = "NAME", global = true)]
    provider: Option<String>,

    /// Timeout for each provider call, in seconds
    #[arg(short = 'T', long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Log file (default: <cache dir>/cdnscli/cdnscli.log)
    #[arg(long, value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,

    /// Output format of subcommands
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output_format: OutputFormat,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let service = match &args.config {
        Some(path) => JsonConfigService::new(path),
        None => JsonConfigService::default_location()?,
    };

    let mut config = service
        .load()
        .with_context(|| format!("failed to load {}", service.path().display()))?;

    if let Some(secs) = args.timeout {
        config.client_timeout_secs = secs;
    }
    config.debug |= args.debug;

    config.fill_missing_credentials(&KeyringCredentialStore);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. 配置
    let config = load_config(&args)?;

    // 2. 日志
    let log_path = init_logging(args.log_file.as_deref(), config.debug)?;
    tracing::info!(
        "cdnscli {} starting, log file {:?}",
        env!("CARGO_PKG_VERSION"),
        log_path
    );

    // 3. Provider
    let (name, provider_config) = config.resolve_provider(args.provider.as_deref())?;
    let provider = create_provider(provider_config.to_credentials(&name)?)
        .with_context(|| format!("failed to create provider {name:?}"))?;
    tracing::info!("Using provider {name} ({})", provider.id());

    // 4. 后台任务运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    // 子命令：执行一次后退出，不进入 TUI
    if let Some(command) = args.command {
        let stdout = std::io::stdout();
        let result = runtime.block_on(cli::run(
            command,
            provider,
            config.client_timeout(),
            args.output_format,
            &mut stdout.lock(),
        ));
        if let Err(e) = &result {
            tracing::warn!("Command failed: {e:#}");
        }
        return result;
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let executor = ProviderService::new(
        provider,
        config.client_timeout(),
        runtime.handle().clone(),
        tx,
    );

    let mut app = model::App::new(provider_config.display_name(&name), Theme::dark());

    // 5. 终端
    let mut terminal = init_terminal()?;

    // 6. 主循环
    let result = app::run(&mut terminal, &mut app, &executor, &mut rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 未完成的请求随运行时一起丢弃
    runtime.shutdown_background();
    tracing::info!("cdnscli stopped");

    result
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::cli::RrCommand;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_tui() {
        let args = Args::try_parse_from(["cdnscli", "--provider", "memory"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.output_format, OutputFormat::Text);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let args = Args::try_parse_from([
            "cdnscli", "rr", "add", "-z", "example.com", "-n", "www", "-t", "a", "-c",
            "192.0.2.1", "-o", "json", "--provider", "memory",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.provider.as_deref(), Some("memory"));
        assert!(matches!(
            args.command,
            Some(CliCommand::Rr(RrCommand::Add { ttl: 1800, proxied: false, .. }))
        ));
    }
}
