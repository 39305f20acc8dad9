use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

// ============ Zones & Records ============

/// A DNS zone managed by a provider, with its authoritative name servers.
///
/// Zones are looked up by [`name`](Self::name), not by ID: the UI keys its
/// record cache on the zone name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Provider-specific zone identifier.
    pub id: String,
    /// Zone apex, e.g. `example.com`.
    pub name: String,
    /// Authoritative name servers in provider order.
    pub name_servers: Vec<String>,
    /// Provider status string (`active`, `pending`, ...).
    pub status: String,
}

/// A single DNS resource record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Provider-specific record identifier. May be empty for records built locally.
    pub id: String,
    /// Record name as returned by the provider.
    pub name: String,
    /// TTL in seconds.
    pub ttl: u32,
    /// Record type (`A`, `AAAA`, `CNAME`, `TXT`, `MX`, `NS`, `SRV`, `CAA`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Cloudflare edge proxy flag. Always `false` for providers without proxying.
    pub proxied: bool,
    /// Record content (address, target hostname, text value, ...).
    pub content: String,
}

/// Parameters for [`DnsProvider::list_records`](crate::DnsProvider::list_records).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRecordsParams {
    /// Zone whose records are listed.
    pub zone_name: String,
}

impl ListRecordsParams {
    pub fn new(zone_name: impl Into<String>) -> Self {
        Self {
            zone_name: zone_name.into(),
        }
    }
}

/// Parameters for [`DnsProvider::add_rr`](crate::DnsProvider::add_rr).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecordParams {
    pub name: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    pub proxied: bool,
    pub content: String,
    pub zone_name: String,
}

impl CreateRecordParams {
    /// Build the record a provider would return for these parameters, minus the ID.
    pub fn to_record(&self, id: impl Into<String>) -> DnsRecord {
        DnsRecord {
            id: id.into(),
            name: self.name.clone(),
            ttl: self.ttl,
            record_type: self.record_type.clone(),
            proxied: self.proxied,
            content: self.content.clone(),
        }
    }
}

// ============ Provider Types ============

/// Supported DNS provider types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Cloudflare DNS.
    Cloudflare,
    /// REG.RU DNS hosting.
    Regru,
    /// In-process provider, used for tests and offline demos.
    Memory,
}

impl ProviderType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cloudflare => "cloudflare",
            Self::Regru => "regru",
            Self::Memory => "memory",
        }
    }

    /// Default display name, used when the configuration gives none.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cloudflare => "Cloudflare",
            Self::Regru => "RegRu",
            Self::Memory => "Memory",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = crate::ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cloudflare" => Ok(Self::Cloudflare),
            "regru" => Ok(Self::Regru),
            "memory" => Ok(Self::Memory),
            _ => Err(crate::ProviderError::UnsupportedProvider {
                provider: s.to_string(),
            }),
        }
    }
}

// ============ Credentials ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing or blank.
    MissingField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
    },
    /// Two mutually exclusive authentication methods were both supplied.
    Conflicting {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Description of the conflict.
        reason: String,
    },
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { provider, field } => {
                write!(f, "{provider}: missing required credential '{field}'")
            }
            Self::Conflicting { provider, reason } => write!(f, "{provider}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for all supported DNS providers.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
///
/// ```json
/// { "provider": "cloudflare", "credentials": { "api_token": "..." } }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Cloudflare API token (preferred).
    #[serde(rename = "cloudflare")]
    Cloudflare {
        /// Cloudflare API token.
        api_token: String,
    },

    /// Cloudflare global API key + account email (legacy).
    #[serde(rename = "cloudflare_key")]
    CloudflareKey {
        /// Global API key.
        api_key: String,
        /// Account email.
        email: String,
    },

    /// REG.RU API credentials.
    #[serde(rename = "regru")]
    RegRu {
        /// Account login.
        username: String,
        /// Account password or API alternative password.
        password: String,
    },

    /// In-memory provider seeded with the given zones.
    #[serde(rename = "memory")]
    Memory {
        /// Initial zones.
        #[serde(default)]
        zones: Vec<Zone>,
    },
}

impl fmt::Debug for ProviderCredentials {
    // 凭证只保留前缀进入日志
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cloudflare { api_token } => f
                .debug_struct("Cloudflare")
                .field("api_token", &mask_secret(api_token))
                .finish(),
            Self::CloudflareKey { api_key, email } => f
                .debug_struct("CloudflareKey")
                .field("api_key", &mask_secret(api_key))
                .field("email", email)
                .finish(),
            Self::RegRu { username, password } => f
                .debug_struct("RegRu")
                .field("username", username)
                .field("password", &mask_secret(password))
                .finish(),
            Self::Memory { zones } => f.debug_struct("Memory").field("zones", &zones.len()).finish(),
        }
    }
}

impl ProviderCredentials {
    /// Construct credentials from a flat key/value map, validating required fields.
    ///
    /// Cloudflare accepts either `api_token` (also spelled `api-token`) or
    /// `api_key` + `email`, never both.
    pub fn from_map(
        provider: ProviderType,
        map: &BTreeMap<String, String>,
    ) -> Result<Self, CredentialValidationError> {
        match provider {
            ProviderType::Cloudflare => {
                let token = Self::lookup(map, &["api_token", "api-token"]);
                let key = Self::lookup(map, &["api_key", "api-key"]);
                let email = Self::lookup(map, &["email"]);

                match (token, key, email) {
                    (Some(_), Some(_), Some(_)) => Err(CredentialValidationError::Conflicting {
                        provider,
                        reason: "cannot have both api_token and (api_key + email)".to_string(),
                    }),
                    (Some(api_token), _, _) => Ok(Self::Cloudflare { api_token }),
                    (None, Some(api_key), Some(email)) => {
                        Ok(Self::CloudflareKey { api_key, email })
                    }
                    (None, Some(_), None) => Err(CredentialValidationError::MissingField {
                        provider,
                        field: "email".to_string(),
                    }),
                    (None, None, _) => Err(CredentialValidationError::MissingField {
                        provider,
                        field: "api_token".to_string(),
                    }),
                }
            }
            ProviderType::Regru => Ok(Self::RegRu {
                username: Self::required(provider, map, "username")?,
                password: Self::required(provider, map, "password")?,
            }),
            ProviderType::Memory => Ok(Self::Memory { zones: Vec::new() }),
        }
    }

    /// Returns the [`ProviderType`] corresponding to this credential variant.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            Self::Cloudflare { .. } | Self::CloudflareKey { .. } => ProviderType::Cloudflare,
            Self::RegRu { .. } => ProviderType::Regru,
            Self::Memory { .. } => ProviderType::Memory,
        }
    }

    /// 取第一个非空（trim 后）的值
    fn lookup(map: &BTreeMap<String, String>, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|k| map.get(*k))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn required(
        provider: ProviderType,
        map: &BTreeMap<String, String>,
        key: &str,
    ) -> Result<String, CredentialValidationError> {
        Self::lookup(map, &[key]).ok_or_else(|| CredentialValidationError::MissingField {
            provider,
            field: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn cloudflare_token_from_either_spelling() {
        let a = ProviderCredentials::from_map(ProviderType::Cloudflare, &map(&[("api_token", "t1")]));
        assert_eq!(
            a,
            Ok(ProviderCredentials::Cloudflare {
                api_token: "t1".to_string()
            })
        );

        let b = ProviderCredentials::from_map(ProviderType::Cloudflare, &map(&[("api-token", " t2 ")]));
        assert_eq!(
            b,
            Ok(ProviderCredentials::Cloudflare {
                api_token: "t2".to_string()
            })
        );
    }

    #[test]
    fn cloudflare_key_and_email() {
        let creds = ProviderCredentials::from_map(
            ProviderType::Cloudflare,
            &map(&[("api_key", "k"), ("email", "me@example.com")]),
        );
        assert!(matches!(creds, Ok(ProviderCredentials::CloudflareKey { .. })));
    }

    #[test]
    fn cloudflare_rejects_both_methods() {
        let creds = ProviderCredentials::from_map(
            ProviderType::Cloudflare,
            &map(&[("api_token", "t"), ("api_key", "k"), ("email", "e")]),
        );
        assert!(matches!(
            creds,
            Err(CredentialValidationError::Conflicting { .. })
        ));
    }

    #[test]
    fn cloudflare_key_without_email() {
        let creds = ProviderCredentials::from_map(ProviderType::Cloudflare, &map(&[("api_key", "k")]));
        assert_eq!(
            creds,
            Err(CredentialValidationError::MissingField {
                provider: ProviderType::Cloudflare,
                field: "email".to_string(),
            })
        );
    }

    #[test]
    fn regru_requires_non_blank_password() {
        let creds = ProviderCredentials::from_map(
            ProviderType::Regru,
            &map(&[("username", "user"), ("password", "   ")]),
        );
        assert_eq!(
            creds,
            Err(CredentialValidationError::MissingField {
                provider: ProviderType::Regru,
                field: "password".to_string(),
            })
        );
    }

    #[test]
    fn debug_hides_secrets() {
        let creds = ProviderCredentials::Cloudflare {
            api_token: "super-secret".to_string(),
        };
        assert!(!format!("{creds:?}").contains("super-secret"));
    }

    #[test]
    fn provider_type_parsing() {
        assert_eq!("Cloudflare".parse::<ProviderType>(), Ok(ProviderType::Cloudflare));
        assert_eq!("regru".parse::<ProviderType>(), Ok(ProviderType::Regru));
        assert!("route53".parse::<ProviderType>().is_err());
    }

    #[test]
    fn record_type_serializes_as_type() {
        let record = DnsRecord {
            record_type: "A".to_string(),
            ..DnsRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "A");
    }
}
