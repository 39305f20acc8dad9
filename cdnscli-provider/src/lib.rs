//! # cdnscli-provider
//!
//! DNS provider abstraction used by the `cdnscli` terminal UI.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) | `cloudflare` | Bearer Token or Global API Key + Email |
//! | [REG.RU](https://www.reg.ru/) | `regru` | Username / Password |
//! | In-memory | *(always)* | None |
//!
//! ## Feature Flags
//!
//! ### Provider Selection
//!
//! - **`all-providers`** *(default)*: Enable all remote providers listed above.
//! - **`cloudflare`**: Enable only the Cloudflare provider.
//! - **`regru`**: Enable only the REG.RU provider.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cdnscli_provider::{create_provider, DnsProvider, ListRecordsParams, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Cloudflare {
//!         api_token: "your-token".to_string(),
//!     })?;
//!
//!     for zone in provider.list_zones().await? {
//!         println!("{} [{}]", zone.name, zone.name_servers.join(", "));
//!
//!         let records = provider
//!             .list_records(&ListRecordsParams::new(&zone.name))
//!             .await?;
//!         for record in &records {
//!             println!("  {} {} {} -> {}", record.name, record.ttl, record.record_type, record.content);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Requests are sent exactly once: there is no retry or backoff, and callers
//! bound each call with their own timeout. [`ProviderError::is_expected`]
//! separates user-side failures (bad credentials, missing zone, duplicate
//! record) from transport and server failures.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    CreateRecordParams, CredentialValidationError, DnsRecord, ListRecordsParams,
    ProviderCredentials, ProviderType, Zone,
};

// Re-export name helpers
pub use providers::common::{normalize_domain_name, relative_to_full_name};

// Re-export concrete providers
pub use providers::MemoryProvider;

#[cfg(feature = "cloudflare")]
pub use providers::{CloudflareAuth, CloudflareProvider};

#[cfg(feature = "regru")]
pub use providers::RegRuProvider;
