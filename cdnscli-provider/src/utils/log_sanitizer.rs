//! Log sanitization utilities
//!
//! Keeps API tokens, passwords and oversized response bodies out of
//! debug/error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged. Longer strings are cut on
/// a char boundary and suffixed with the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask a credential, keeping only a short prefix.
///
/// `"abcd1234efgh"` becomes `"abcd********"`. Secrets no longer than the
/// visible prefix are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= SECRET_VISIBLE_PREFIX {
        return "*".repeat(total);
    }

    let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    format!("{prefix}{}", "*".repeat(total - SECRET_VISIBLE_PREFIX))
}
