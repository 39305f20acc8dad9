//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;

pub(crate) use types::{CloudflareDnsRecord, CloudflareRecordBody, CloudflareResponse, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Cloudflare DNS Records API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare 认证方式
#[derive(Clone)]
pub enum CloudflareAuth {
    /// API Token（Bearer）
    Token(String),
    /// Global API Key + 账号邮箱
    Key { api_key: String, email: String },
}

/// Cloudflare DNS Provider
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) auth: CloudflareAuth,
}

impl CloudflareProvider {
    pub fn new(auth: CloudflareAuth) -> Result<Self> {
        Ok(Self {
            client: create_http_client("cloudflare")?,
            auth,
        })
    }

    /// 为请求附加认证头
    pub(crate) fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            CloudflareAuth::Token(token) => builder.bearer_auth(token),
            CloudflareAuth::Key { api_key, email } => builder
                .header("X-Auth-Key", api_key)
                .header("X-Auth-Email", email),
        }
    }
}
