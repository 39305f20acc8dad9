//! Provider 公共工具函数

use crate::types::DnsRecord;

// ============ 域名名称处理 ============

/// 去掉域名末尾的点并转为小写
pub fn normalize_domain_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_lowercase()
}

/// 将完整域名转换为相对名称
/// 如: "www.example.com" + "example.com" -> "www"
/// 如: "example.com" + "example.com" -> "@"
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(full_name);
    let zone = normalize_domain_name(zone_name);

    if full == zone {
        "@".to_string()
    } else if let Some(subdomain) = full.strip_suffix(&format!(".{zone}")) {
        subdomain.to_string()
    } else {
        full
    }
}

/// 将名称补全为 zone 下的完整域名
/// 如: "www" + "example.com" -> "www.example.com"
/// 如: "@" + "example.com" -> "example.com"
/// 已经是完整域名的保持不变: "www.example.com." + "example.com" -> "www.example.com"
pub fn relative_to_full_name(name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);
    let name = normalize_domain_name(name);

    if name == "@" || name.is_empty() || name == zone {
        zone
    } else if name.ends_with(&format!(".{zone}")) {
        name
    } else {
        format!("{name}.{zone}")
    }
}

/// 名称匹配（忽略大小写与末尾的点，相对名称按 zone 补全）
pub fn names_match(a: &str, b: &str, zone_name: &str) -> bool {
    relative_to_full_name(a, zone_name) == relative_to_full_name(b, zone_name)
}

/// 按名称取第一条记录
pub fn first_by_name<'a>(
    records: &'a [DnsRecord],
    name: &str,
    zone_name: &str,
) -> Option<&'a DnsRecord> {
    records
        .iter()
        .find(|r| names_match(&r.name, name, zone_name))
}
