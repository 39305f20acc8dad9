//! 输入校验
//!
//! 文本编辑子模式提交时按字段名（Content 另按记录类型）校验。

use std::net::{IpAddr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

/// 主机名最大长度
const MAX_HOSTNAME_LEN: usize = 253;

// 模式为常量，编译不会失败
#[allow(clippy::expect_used)]
static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*\.?$",
    )
    .expect("hostname pattern")
});

pub const TTL_ERROR: &str = "TTL must be a number in seconds (e.g. 60, 300, 1800)";
pub const NAME_ERROR: &str = "Name must be a valid hostname";
pub const NAME_SERVER_ERROR: &str = "Name server must be a valid hostname";

/// 主机名：标签 1-63 个字母数字或连字符（首尾不能是连字符），点分隔，可带末尾的点
pub fn is_hostname(s: &str) -> bool {
    !s.is_empty() && s.len() <= MAX_HOSTNAME_LEN && HOSTNAME_RE.is_match(s)
}

/// 非空且全部为 ASCII 数字
pub fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_ipv4(s: &str) -> bool {
    match s.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => true,
        // ::ffff:a.b.c.d 也算 IPv4
        Ok(IpAddr::V6(v6)) => v6.to_ipv4_mapped().is_some(),
        Err(_) => false,
    }
}

pub fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>()
        .is_ok_and(|v6| v6.to_ipv4_mapped().is_none())
}

/// 校验单个字段，返回错误文本；`None` 表示通过
///
/// `field` 为小写字段名，`record_type` 为当前记录类型（仅 content 使用）。
pub fn validate_field(field: &str, value: &str, record_type: &str) -> Option<&'static str> {
    match field {
        "ttl" => (!is_number(value)).then_some(TTL_ERROR),
        "name" => (!is_hostname(value)).then_some(NAME_ERROR),
        "content" => match record_type.to_uppercase().as_str() {
            "A" => (!is_ipv4(value)).then_some("Content must be a valid IPv4 address for A record"),
            "AAAA" => {
                (!is_ipv6(value)).then_some("Content must be a valid IPv6 address for AAAA record")
            }
            "CNAME" | "NS" | "MX" => {
                (!is_hostname(value)).then_some("Content must be a valid hostname")
            }
            // TXT / SRV / CAA 等不做严格校验
            _ => None,
        },
        _ => None,
    }
}

/// 文本编辑框下方的提示
pub fn field_hint(field: &str, record_type: &str) -> &'static str {
    match field {
        "ttl" => "TTL in seconds, e.g. 60, 300, 1800",
        "name" => "Record name (hostname), e.g. www or api.example.com",
        "content" => match record_type.to_uppercase().as_str() {
            "A" => "IPv4 address, e.g. 203.0.113.10",
            "AAAA" => "IPv6 address, e.g. 2001:db8::1",
            "CNAME" => "Canonical hostname, e.g. target.example.com",
            "MX" => "Mail exchanger hostname, e.g. mail.example.com",
            "NS" => "Nameserver hostname, e.g. ns1.example.com",
            _ => "Value for record content",
        },
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostnames() {
        assert!(is_hostname("www.example.com"));
        assert!(is_hostname("example.com."));
        assert!(is_hostname("xn--80ak6aa92e.com"));
        assert!(!is_hostname("-bad.example.com"));
        assert!(!is_hostname("bad-.example.com"));
        assert!(!is_hostname("a..b"));
        assert!(!is_hostname(""));
        assert!(!is_hostname(&"a".repeat(254)));
        assert!(!is_hostname(&format!("{}.com", "a".repeat(64))));
    }

    #[test]
    fn ip_discrimination() {
        assert!(is_ipv4("192.0.2.1"));
        assert!(!is_ipv6("192.0.2.1"));
        assert!(is_ipv6("2001:db8::1"));
        assert!(!is_ipv4("2001:db8::1"));
        assert!(!is_ipv6("::ffff:192.0.2.1"));
        assert!(!is_ipv4("999.1.1.1"));
    }

    #[test]
    fn numbers() {
        assert!(is_number("300"));
        assert!(!is_number(""));
        assert!(!is_number("-1"));
        assert!(!is_number("1h"));
    }

    #[test]
    fn content_depends_on_type() {
        assert_eq!(validate_field("content", "192.0.2.1", "A"), None);
        assert!(validate_field("content", "2001:db8::1", "a").is_some());
        assert_eq!(validate_field("content", "mail.example.com", "MX"), None);
        assert!(validate_field("content", "not a host", "CNAME").is_some());
        assert_eq!(validate_field("content", "v=spf1 -all", "TXT"), None);
        assert_eq!(validate_field("ttl", "abc", "A"), Some(TTL_ERROR));
        assert_eq!(validate_field("proxied", "whatever", "A"), None);
    }
}
