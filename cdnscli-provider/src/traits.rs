use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateRecordParams, DnsRecord, ListRecordsParams, Zone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录名称（用于 `RecordExists` / `RecordNotFound`）
    pub record_name: Option<String>,
    /// Zone 名称（用于 `ZoneNotFound`）
    pub zone: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            ..Self::default()
        }
    }

    pub fn record(zone: &str, record_name: &str) -> Self {
        Self {
            record_name: Some(record_name.to_string()),
            zone: Some(zone.to_string()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：Zone 不存在
    fn zone_not_found(&self, zone: &str) -> ProviderError {
        ProviderError::ZoneNotFound {
            provider: self.provider_name().to_string(),
            zone: zone.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS 提供商 Trait
///
/// 所有方法都以 zone 名称定位 zone。调用方负责超时控制
/// （`tokio::time::timeout` 包裹每一次调用）。
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 列出账号下的所有 zone
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// 按名称过滤 zone
    async fn list_zones_by_name(&self, name: &str) -> Result<Vec<Zone>>;

    /// 列出 zone 下的全部记录
    async fn list_records(&self, params: &ListRecordsParams) -> Result<Vec<DnsRecord>>;

    /// 创建记录
    async fn add_rr(&self, zone: &str, params: &CreateRecordParams) -> Result<DnsRecord>;

    /// 更新记录，返回服务端的最新值
    async fn update_rr(&self, zone: &str, record: &DnsRecord) -> Result<DnsRecord>;

    /// 删除记录
    async fn delete_rr(&self, zone: &str, record: &DnsRecord) -> Result<()>;

    /// 按名称获取单条记录（多条同名时返回第一条）
    async fn get_rr_by_name(&self, zone: &str, name: &str) -> Result<DnsRecord>;
}
