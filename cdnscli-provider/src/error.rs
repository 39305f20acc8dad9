use serde::{Deserialize, Serialize};

/// Unified error type for all DNS provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Requests are issued exactly once; the transient variants
/// ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout),
/// [`RateLimited`](Self::RateLimited)) are reported to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provided credentials are invalid, expired or missing.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (e.g., bad TTL value, malformed IP address).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The zone was not found on the account.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone name that was not found.
        zone: String,
    },

    /// The specified DNS record was not found.
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Name or ID of the record that was not found.
        record: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A DNS record with the same name/type already exists.
    RecordExists {
        /// Provider that produced the error.
        provider: String,
        /// Name of the conflicting record.
        record_name: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The requested provider type is unknown or its feature is not enabled.
    UnsupportedProvider {
        /// Provider type string as configured.
        provider: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::InvalidParameter { .. }
                | Self::ZoneNotFound { .. }
                | Self::RecordNotFound { .. }
                | Self::RecordExists { .. }
                | Self::UnsupportedProvider { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ZoneNotFound { provider, zone } => {
                write!(f, "[{provider}] Zone '{zone}' not found")
            }
            Self::RecordNotFound {
                provider, record, ..
            } => {
                write!(f, "[{provider}] Record '{record}' not found")
            }
            Self::RecordExists {
                provider,
                record_name,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_name}' already exists")
            }
            Self::UnsupportedProvider { provider } => {
                write!(f, "unsupported provider type: {provider:?}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "cloudflare".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] Network error: connection refused"
        );
    }

    #[test]
    fn display_invalid_credentials_with_and_without_message() {
        let with = ProviderError::InvalidCredentials {
            provider: "regru".to_string(),
            raw_message: Some("bad password".to_string()),
        };
        assert_eq!(with.to_string(), "[regru] Invalid credentials: bad password");

        let without = ProviderError::InvalidCredentials {
            provider: "regru".to_string(),
            raw_message: None,
        };
        assert_eq!(without.to_string(), "[regru] Invalid credentials");
    }

    #[test]
    fn display_zone_not_found() {
        let e = ProviderError::ZoneNotFound {
            provider: "memory".to_string(),
            zone: "example.com".to_string(),
        };
        assert_eq!(e.to_string(), "[memory] Zone 'example.com' not found");
    }

    #[test]
    fn display_unsupported_provider() {
        let e = ProviderError::UnsupportedProvider {
            provider: "route53".to_string(),
        };
        assert_eq!(e.to_string(), "unsupported provider type: \"route53\"");
    }

    #[test]
    fn display_rate_limited_with_retry_after() {
        let e = ProviderError::RateLimited {
            provider: "cloudflare".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[cloudflare] Rate limited (retry after 30s)");
    }

    #[test]
    fn expected_errors_are_user_side() {
        assert!(
            ProviderError::RecordNotFound {
                provider: "p".to_string(),
                record: "www".to_string(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ProviderError::Timeout {
                provider: "p".to_string(),
                detail: "10s".to_string(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::ParseError {
                provider: "p".to_string(),
                detail: "eof".to_string(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::Timeout {
            provider: "cloudflare".to_string(),
            detail: "deadline".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["code"], "Timeout");
        assert_eq!(json["provider"], "cloudflare");
    }
}
