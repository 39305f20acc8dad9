//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   update ──Command──▶ ProviderService::execute ──spawn──▶ tokio 任务        │
//！│                                                              │              │
//！│                                          timeout(DnsProvider::*)            │
//！│                                                              │              │
//！│   主循环 ◀──try_recv── mpsc::UnboundedReceiver ◀──AppMessage──┘              │
//！│                                                                             │
//！│   启动时：JsonConfigService ──▶ AppConfig ──▶ KeyringCredentialStore 补齐   │
//！│            ──▶ resolve_provider ──▶ create_provider ──▶ Arc<dyn DnsProvider>│
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/backend/mod.rs
//! Backend 层：配置、凭证与 Provider 调用
//!
//! Backend 层与 UI 完全解耦：Model 不知道 tokio，Backend 不知道 ratatui。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;         // AppConfig 加载、保存、校验、选择 Provider
//!         mod credential_service;     // 系统钥匙串
//!         mod provider_service;       // Command → tokio 任务 → AppMessage
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、启动
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/main.rs 中，有：
//!
//!         let service = JsonConfigService::new(path);       // 或 default_location()
//!         let mut config = service.load()?;                 // 文件不存在 → 默认配置
//!         config.fill_missing_credentials(&KeyringCredentialStore);
//!         config.validate()?;                               // 一次报告全部问题
//!         let (name, provider) = config.resolve_provider(args.provider.as_deref())?;
//!         let provider = create_provider(provider.to_credentials(&name)?)?;
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、运行
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ProviderService::execute(command) 立即返回：
//!         · Command::Batch 中的每个命令各自 spawn，彼此并发
//!         · 每次调用都包在 tokio::time::timeout(client_timeout) 中，
//!           超时得到 ProviderError::Timeout
//!         · 结果（无论成功失败）都以 AppMessage 送回主循环
//!
//!     Model 只在 update 中被修改，任务永远不直接接触 Model。
//!

mod config_service;
mod credential_service;
mod provider_service;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use credential_service::KeyringCredentialStore;
pub use provider_service::ProviderService;
