//! 配置服务
//!
//! 配置以 JSON 保存在 `<config_dir>/cdnscli/config.json`：
//!
//! ```json
//! {
//!   "default_provider": "cf",
//!   "client_timeout_secs": 10,
//!   "providers": {
//!     "cf": { "type": "cloudflare", "credentials": { "api_token": "..." } }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use cdnscli_provider::{CredentialValidationError, ProviderCredentials, ProviderType};
use serde::{Deserialize, Serialize};

use super::credential_service::CredentialSource;

const APP_DIR: &str = "cdnscli";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 不需要配置即可使用的内置 Provider
pub const MEMORY_PROVIDER: &str = "memory";

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(serde_json::Error),

    #[error("no config directory available on this platform")]
    NoConfigDir,

    #[error("configuration validation failed: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),

    #[error("no provider specified and no default provider configured")]
    NoProvider,

    #[error("provider {0:?} not found in providers list")]
    UnknownProvider(String),

    #[error("provider {name:?}: {source}")]
    Credentials {
        name: String,
        source: CredentialValidationError,
    },
}

/// 单条校验问题，带出错字段的路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field {:?}: {}", self.field, self.message)
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 未指定 `--provider` 时使用的 Provider 名称
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_provider: Option<String>,
    /// 名称 → Provider 配置
    pub providers: BTreeMap<String, ProviderConfig>,
    /// 每次 Provider 调用的超时（秒）
    pub client_timeout_secs: u64,
    /// 调试日志
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_provider: None,
            providers: BTreeMap::new(),
            client_timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug: false,
        }
    }
}

/// 单个 Provider 的配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub credentials: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ProviderConfig {
    /// 内置的 memory Provider
    pub fn memory() -> Self {
        Self {
            provider_type: Some(MEMORY_PROVIDER.to_string()),
            ..Self::default()
        }
    }

    /// 解析 `type` 字段
    pub fn parsed_type(&self) -> Option<ProviderType> {
        self.provider_type.as_deref()?.parse().ok()
    }

    /// 标题栏显示的名称
    pub fn display_name(&self, name: &str) -> String {
        self.display_name
            .clone()
            .or_else(|| self.parsed_type().map(|t| t.display_name().to_string()))
            .unwrap_or_else(|| name.to_string())
    }

    /// 转换为 Provider 凭证
    pub fn to_credentials(&self, name: &str) -> Result<ProviderCredentials, ConfigError> {
        let provider_type = self
            .parsed_type()
            .ok_or_else(|| ConfigError::UnknownProvider(name.to_string()))?;
        ProviderCredentials::from_map(provider_type, &self.credentials).map_err(|source| {
            ConfigError::Credentials {
                name: name.to_string(),
                source,
            }
        })
    }

    fn has(&self, keys: &[&str]) -> bool {
        keys.iter()
            .any(|k| self.credentials.get(*k).is_some_and(|v| !v.trim().is_empty()))
    }

    fn validate(&self, name: &str, issues: &mut Vec<ValidationIssue>) {
        let credentials_field = format!("providers.{name}.credentials");

        let Some(raw_type) = self.provider_type.as_deref().filter(|t| !t.trim().is_empty()) else {
            issues.push(ValidationIssue::new(
                format!("providers.{name}.type"),
                "provider type is required",
            ));
            return;
        };

        match raw_type.parse::<ProviderType>() {
            Ok(ProviderType::Cloudflare) => {
                let has_token = self.has(&["api_token", "api-token"]);
                let has_key_and_email = self.has(&["api_key", "api-key"]) && self.has(&["email"]);
                if !has_token && !has_key_and_email {
                    issues.push(ValidationIssue::new(
                        &credentials_field,
                        "must have either api_token or (api_key + email)",
                    ));
                }
                if has_token && has_key_and_email {
                    issues.push(ValidationIssue::new(
                        &credentials_field,
                        "cannot have both api_token and (api_key + email)",
                    ));
                }
            }
            Ok(ProviderType::Regru) => {
                for key in ["username", "password"] {
                    if !self.has(&[key]) {
                        issues.push(ValidationIssue::new(
                            &credentials_field,
                            format!("{key} is required"),
                        ));
                    }
                }
            }
            Ok(ProviderType::Memory) => {}
            Err(_) => issues.push(ValidationIssue::new(
                format!("providers.{name}.type"),
                format!("unsupported provider type {raw_type:?}"),
            )),
        }
    }
}

impl AppConfig {
    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_secs)
    }

    /// 校验配置，一次收集全部问题
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut issues = Vec::new();

        if self.client_timeout_secs == 0 {
            issues.push(ValidationIssue::new(
                "client_timeout_secs",
                "must be greater than 0",
            ));
        }

        for (name, provider) in &self.providers {
            provider.validate(name, &mut issues);
        }

        if let Some(default) = &self.default_provider {
            if !self.providers.contains_key(default) {
                issues.push(ValidationIssue::new(
                    "default_provider",
                    format!("provider {default:?} not found in providers list"),
                ));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }

    /// 选择 Provider：显式名称 > `default_provider`
    ///
    /// `memory` 未在配置中出现时使用内置配置。
    pub fn resolve_provider(&self, name: Option<&str>) -> Result<(String, ProviderConfig), ConfigError> {
        let name = name
            .or(self.default_provider.as_deref())
            .ok_or(ConfigError::NoProvider)?;

        match self.providers.get(name) {
            Some(provider) => Ok((name.to_string(), provider.clone())),
            None if name == MEMORY_PROVIDER => Ok((name.to_string(), ProviderConfig::memory())),
            None => Err(ConfigError::UnknownProvider(name.to_string())),
        }
    }

    /// 配置文件里缺失的凭证从钥匙串补齐
    pub fn fill_missing_credentials(&mut self, source: &dyn CredentialSource) {
        for (name, provider) in &mut self.providers {
            let keys: &[&str] = match provider.parsed_type() {
                Some(ProviderType::Cloudflare) if provider.has(&["api_key", "api-key"]) => {
                    &["email"]
                }
                Some(ProviderType::Cloudflare) => &["api_token"],
                Some(ProviderType::Regru) => &["username", "password"],
                Some(ProviderType::Memory) | None => &[],
            };

            for &key in keys {
                if provider.has(&[key]) {
                    continue;
                }
                if let Some(value) = source.get(name, key) {
                    log::debug!("Credential {name}/{key} loaded from keyring");
                    provider.credentials.insert(key.to_string(), value);
                }
            }
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用平台默认路径
    pub fn default_location() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::new(dir.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config file at {}, using defaults", self.path.display());
                return Ok(AppConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
