//! Provider factory functions.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::providers::MemoryProvider;
use crate::traits::DnsProvider;
use crate::types::{ProviderCredentials, ProviderType};

#[cfg(feature = "cloudflare")]
use crate::providers::{CloudflareAuth, CloudflareProvider};
#[cfg(feature = "regru")]
use crate::providers::RegRuProvider;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// Every credential field must be non-blank after trimming; the trimmed values are
/// what the provider receives. The returned provider is wrapped in
/// `Arc<dyn DnsProvider>` for easy sharing across async tasks.
///
/// A [`ProviderCredentials::Memory`] without zones yields the built-in demo data.
///
/// # Examples
///
/// ```rust,no_run
/// use cdnscli_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::Cloudflare {
///     api_token: "your-token".to_string(),
/// }).unwrap();
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    let provider_type = credentials.provider_type();
    log::debug!("Creating provider: {credentials:?}");

    match credentials {
        #[cfg(feature = "cloudflare")]
        ProviderCredentials::Cloudflare { api_token } => {
            let api_token = required(provider_type, "api_token", &api_token)?;
            Ok(Arc::new(CloudflareProvider::new(CloudflareAuth::Token(
                api_token,
            ))?))
        }
        #[cfg(feature = "cloudflare")]
        ProviderCredentials::CloudflareKey { api_key, email } => {
            let api_key = required(provider_type, "api_key", &api_key)?;
            let email = required(provider_type, "email", &email)?;
            Ok(Arc::new(CloudflareProvider::new(CloudflareAuth::Key {
                api_key,
                email,
            })?))
        }
        #[cfg(feature = "regru")]
        ProviderCredentials::RegRu { username, password } => {
            let username = required(provider_type, "username", &username)?;
            let password = required(provider_type, "password", &password)?;
            Ok(Arc::new(RegRuProvider::new(username, password)?))
        }
        ProviderCredentials::Memory { zones } => {
            if zones.is_empty() {
                Ok(Arc::new(MemoryProvider::demo()))
            } else {
                Ok(Arc::new(MemoryProvider::new(zones)))
            }
        }
        #[allow(unreachable_patterns)]
        _ => Err(ProviderError::UnsupportedProvider {
            provider: provider_type.to_string(),
        }),
    }
}

/// 去掉首尾空白后必须非空
fn required(provider: ProviderType, field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::InvalidCredentials {
            provider: provider.to_string(),
            raw_message: Some(format!("{field} is required but empty")),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Zone;

    #[test]
    fn blank_token_is_rejected() {
        let result = create_provider(ProviderCredentials::Cloudflare {
            api_token: "   ".to_string(),
        });
        assert!(matches!(
            result,
            Err(ProviderError::InvalidCredentials { provider, .. }) if provider == "cloudflare"
        ));
    }

    #[test]
    fn blank_regru_password_is_rejected() {
        let result = create_provider(ProviderCredentials::RegRu {
            username: "user".to_string(),
            password: String::new(),
        });
        assert!(matches!(
            result,
            Err(ProviderError::InvalidCredentials { raw_message: Some(msg), .. })
                if msg.contains("password")
        ));
    }

    #[test]
    fn creates_each_provider() {
        let cf = create_provider(ProviderCredentials::Cloudflare {
            api_token: " token ".to_string(),
        })
        .unwrap();
        assert_eq!(cf.id(), "cloudflare");

        let regru = create_provider(ProviderCredentials::RegRu {
            username: "user".to_string(),
            password: "pass".to_string(),
        })
        .unwrap();
        assert_eq!(regru.id(), "regru");

        let memory = create_provider(ProviderCredentials::Memory {
            zones: vec![Zone {
                name: "example.com".to_string(),
                ..Zone::default()
            }],
        })
        .unwrap();
        assert_eq!(memory.id(), "memory");
    }
}
