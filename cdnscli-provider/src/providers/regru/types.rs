//! REG.RU API 类型定义

use serde::Deserialize;

/// REG.RU 响应信封
#[derive(Debug, Deserialize)]
pub struct RegRuResponse<T> {
    /// `success` 或 `error`
    pub result: String,
    pub answer: Option<T>,
    pub error_code: Option<String>,
    pub error_text: Option<String>,
}

/// `answer.domains[]` 列表
#[derive(Debug, Deserialize)]
pub struct RegRuAnswer<T> {
    #[serde(default = "Vec::new")]
    pub domains: Vec<T>,
}

/// `service/get_list` 的返回
#[derive(Debug, Deserialize)]
pub struct RegRuServiceList {
    #[serde(default)]
    pub services: Vec<RegRuService>,
}

#[derive(Debug, Deserialize)]
pub struct RegRuService {
    pub dname: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub service_id: String,
    #[serde(default)]
    pub state: String,
}

/// 只关心执行结果的域名级返回（`zone/add_*`、`zone/remove_record`）
#[derive(Debug, Deserialize)]
pub struct RegRuDomainResult {
    pub dname: String,
    pub result: Option<String>,
    pub error_code: Option<String>,
}

/// `domain/get_nss` 中的单个域名
#[derive(Debug, Deserialize)]
pub struct RegRuDomainNss {
    #[serde(default)]
    pub nss: Vec<RegRuNameServer>,
    pub result: Option<String>,
    pub error_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegRuNameServer {
    pub ns: String,
}

/// `zone/get_resource_records` 中的单个域名
#[derive(Debug, Deserialize)]
pub struct RegRuZoneRecords {
    pub dname: String,
    #[serde(default)]
    pub rrs: Vec<RegRuRecord>,
    pub soa: Option<RegRuSoa>,
    pub result: Option<String>,
    pub error_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegRuRecord {
    pub subname: String,
    pub rectype: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct RegRuSoa {
    #[serde(default, deserialize_with = "string_or_number")]
    pub ttl: String,
}

/// REG.RU 对数字字段时而返回字符串时而返回数字
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(i64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}
