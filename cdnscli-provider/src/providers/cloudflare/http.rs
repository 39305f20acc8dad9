//! Cloudflare HTTP 请求方法

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{CF_API_BASE, CloudflareProvider, CloudflareRecordBody, CloudflareResponse};

impl CloudflareProvider {
    /// 发送请求并解析 Cloudflare 响应信封
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&CloudflareRecordBody>,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{CF_API_BASE}{path}");
        let mut builder = self.authorize(self.client.request(method.clone(), &url));

        if let Some(body) = body {
            log::debug!(
                "Request Body: {}",
                serde_json::to_string(body).unwrap_or_else(|_| "无法序列化请求体".to_string())
            );
            builder = builder.json(body);
        }

        let (_status, response_text) =
            HttpUtils::execute_request(builder, self.provider_name(), method.as_str(), &url)
                .await?;

        let cf_response: CloudflareResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if !cf_response.success {
            let raw = cf_response.errors.first().map_or_else(
                || RawApiError::new("Unknown error"),
                |e| RawApiError::with_code(e.code.to_string(), e.message.clone()),
            );
            let err = self.map_error(raw, context);
            if err.is_expected() {
                log::warn!("API 错误: {err}");
            } else {
                log::error!("API 错误: {err}");
            }
            return Err(err);
        }

        Ok(cf_response)
    }

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        self.send::<T>(Method::GET, path, None, context)
            .await?
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    /// 执行 GET 请求并拉取全部分页
    pub(crate) async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        per_page: u32,
        context: ErrorContext,
    ) -> Result<Vec<T>> {
        let separator = if path.contains('?') { '&' } else { '?' };
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let paged = format!("{path}{separator}page={page}&per_page={per_page}");
            let response = self
                .send::<Vec<T>>(Method::GET, &paged, None, context.clone())
                .await?;

            items.extend(response.result.unwrap_or_default());

            let total_pages = response.result_info.map_or(1, |info| info.total_pages);
            if page >= total_pages {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &CloudflareRecordBody,
        context: ErrorContext,
    ) -> Result<T> {
        self.send::<T>(Method::POST, path, Some(body), context)
            .await?
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    /// 执行 PUT 请求（整条覆盖）
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &CloudflareRecordBody,
        context: ErrorContext,
    ) -> Result<T> {
        self.send::<T>(Method::PUT, path, Some(body), context)
            .await?
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        self.send::<serde_json::Value>(Method::DELETE, path, None, context)
            .await
            .map(|_| ())
    }
}
