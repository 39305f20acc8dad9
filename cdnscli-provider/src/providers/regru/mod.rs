//! REG.RU DNS Provider
//!
//! API v2 (`https://api.reg.ru/api/regru2`). Every call is a form POST
//! carrying the account login and password; the answer comes back in a
//! `{result, answer, error_code, error_text}` envelope.

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;

pub(crate) use types::{
    RegRuAnswer, RegRuDomainNss, RegRuDomainResult, RegRuRecord, RegRuResponse,
    RegRuServiceList, RegRuZoneRecords,
};

pub(crate) const REGRU_API_BASE: &str = "https://api.reg.ru/api/regru2";
/// zone 未返回 SOA TTL 时使用的默认值
pub(crate) const DEFAULT_TTL: u32 = 3600;
/// 未指定优先级时 MX 记录使用的优先级
pub(crate) const DEFAULT_MX_PRIORITY: &str = "10";

/// REG.RU DNS Provider
pub struct RegRuProvider {
    pub(crate) client: Client,
    pub(crate) username: String,
    pub(crate) password: String,
}

impl RegRuProvider {
    pub fn new(username: String, password: String) -> Result<Self> {
        Ok(Self {
            client: create_http_client("regru")?,
            username,
            password,
        })
    }
}
