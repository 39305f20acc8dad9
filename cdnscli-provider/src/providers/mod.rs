//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "cloudflare")]
mod cloudflare;
mod memory;
#[cfg(feature = "regru")]
mod regru;

#[cfg(feature = "cloudflare")]
pub use cloudflare::{CloudflareAuth, CloudflareProvider};
pub use memory::MemoryProvider;
#[cfg(feature = "regru")]
pub use regru::RegRuProvider;
