//! REG.RU error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::RegRuProvider;

const UNKNOWN: &str = "<unknown>";

/// REG.RU error code mapping
/// Reference: <https://www.reg.ru/reseller/api2doc#common_errors>
impl ProviderErrorMapper for RegRuProvider {
    fn provider_name(&self) -> &'static str {
        "regru"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some(
                "NO_USERNAME"
                | "NO_AUTH"
                | "PASSWORD_AUTH_FAILED"
                | "RESELLER_AUTH_FAILED"
                | "ACCESS_DENIED"
                | "ACCESS_DENIED_FROM_IP",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("IP_EXCEEDED_ALLOWED_CONNECTION_RATE" | "ACCOUNT_EXCEEDED_ALLOWED_CONNECTION_RATE") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            Some(
                "DOMAIN_NOT_FOUND"
                | "NO_DOMAIN"
                | "SERVICE_NOT_FOUND"
                | "DOMAIN_IS_NOT_ATTACHED_TO_ACCOUNT"
                | "NO_SUCH_SERVICE",
            ) => self.zone_not_found(context.zone.as_deref().unwrap_or(UNKNOWN)),

            Some("NO_SUCH_RR" | "RR_NOT_FOUND") => ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record: context.record_name.unwrap_or_else(|| UNKNOWN.to_string()),
                raw_message: Some(raw.message),
            },

            Some("CONFLICT_CNAME" | "RR_ALREADY_EXISTS" | "DUPLICATE_RR") => {
                ProviderError::RecordExists {
                    provider: self.provider_name().to_string(),
                    record_name: context.record_name.unwrap_or_else(|| UNKNOWN.to_string()),
                    raw_message: Some(raw.message),
                }
            }

            Some(
                code @ ("INVALID_DOMAIN_NAME_FORMAT"
                | "INVALID_SUBDOMAIN"
                | "INVALID_IP"
                | "INVALID_TTL"
                | "PARAMETER_MISSING"
                | "PARAMETER_INCORRECT"),
            ) => {
                let param = match code {
                    "INVALID_DOMAIN_NAME_FORMAT" | "INVALID_SUBDOMAIN" => "name",
                    "INVALID_IP" => "content",
                    "INVALID_TTL" => "ttl",
                    _ => "general",
                };
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: param.to_string(),
                    detail: raw.message,
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}
