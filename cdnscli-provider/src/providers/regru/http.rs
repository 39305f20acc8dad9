//! REG.RU HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{REGRU_API_BASE, RegRuProvider, RegRuResponse};

impl RegRuProvider {
    /// 调用 API 函数（如 `zone/get_resource_records`），返回 `answer`
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        function: &str,
        params: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{REGRU_API_BASE}/{function}");

        let mut form: Vec<(&str, &str)> = vec![
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("output_content_type", "plain"),
        ];
        form.extend(params.iter().map(|(k, v)| (*k, v.as_str())));

        // 参数里没有秘密，密码不进日志
        log::debug!("[regru] {function} params: {params:?}");

        let builder = self.client.post(&url).form(&form);
        let (_status, response_text) =
            HttpUtils::execute_request(builder, self.provider_name(), "POST", &url).await?;

        let response: RegRuResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if response.result != "success" {
            let raw = RawApiError {
                code: response.error_code,
                message: response
                    .error_text
                    .unwrap_or_else(|| "Unknown error".to_string()),
            };
            return Err(self.log_and_map(raw, context));
        }

        response
            .answer
            .ok_or_else(|| self.parse_error("响应中缺少 answer 字段"))
    }

    /// 单个域名级别的错误（`answer.domains[].result == "error"`）
    pub(crate) fn check_domain_result(
        &self,
        result: Option<&str>,
        error_code: Option<&str>,
        context: ErrorContext,
    ) -> Result<()> {
        match result {
            Some("error") => {
                let code = error_code.unwrap_or("UNKNOWN");
                Err(self.log_and_map(RawApiError::with_code(code, code), context))
            }
            _ => Ok(()),
        }
    }

    fn log_and_map(&self, raw: RawApiError, context: ErrorContext) -> crate::ProviderError {
        let err = self.map_error(raw, context);
        if err.is_expected() {
            log::warn!("API 错误: {err}");
        } else {
            log::error!("API 错误: {err}");
        }
        err
    }
}
