//! Utility modules.

/// Log sanitization utilities to keep secrets and huge payloads out of logs.
pub mod log_sanitizer;
