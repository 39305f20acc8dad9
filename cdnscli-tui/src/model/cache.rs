//! 记录缓存
//!
//! zone 名称 → 记录列表。启动时每个 zone 拉取一次，手动刷新只替换当前 zone；
//! 条目不会被淘汰。

use std::collections::HashMap;

use cdnscli_provider::DnsRecord;

#[derive(Debug, Clone, Default)]
pub struct RecordCache {
    entries: HashMap<String, Vec<DnsRecord>>,
}

impl RecordCache {
    /// 用最新一次拉取的结果整体替换
    pub fn replace(&mut self, zone: &str, records: Vec<DnsRecord>) {
        self.entries.insert(zone.to_string(), records);
    }

    pub fn get(&self, zone: &str) -> &[DnsRecord] {
        self.entries.get(zone).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.entries.contains_key(zone)
    }

    /// 追加新建的记录
    pub fn push(&mut self, zone: &str, record: DnsRecord) {
        self.entries.entry(zone.to_string()).or_default().push(record);
    }

    /// 按名称取第一条（同名记录只匹配第一条）
    pub fn first_by_name_mut(&mut self, zone: &str, name: &str) -> Option<&mut DnsRecord> {
        self.entries
            .get_mut(zone)?
            .iter_mut()
            .find(|r| r.name == name)
    }

    /// 把 ID 为 `id` 的条目替换为服务端返回的值（新值的 ID 可以不同）；
    /// 找不到时返回 false
    pub fn replace_by_id(&mut self, zone: &str, id: &str, record: DnsRecord) -> bool {
        let Some(slot) = self
            .entries
            .get_mut(zone)
            .and_then(|records| records.iter_mut().find(|r| r.id == id))
        else {
            return false;
        };
        *slot = record;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, content: &str) -> DnsRecord {
        DnsRecord {
            id: id.to_string(),
            name: name.to_string(),
            ttl: 300,
            record_type: "A".to_string(),
            proxied: false,
            content: content.to_string(),
        }
    }

    #[test]
    fn replace_is_not_a_merge() {
        let mut cache = RecordCache::default();
        cache.replace("example.com", vec![record("1", "www", "192.0.2.1")]);
        cache.replace("example.com", vec![record("2", "api", "192.0.2.2")]);
        let names: Vec<_> = cache.get("example.com").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["api"]);
        assert!(cache.get("missing.com").is_empty());
    }

    #[test]
    fn name_lookup_hits_first_match() {
        let mut cache = RecordCache::default();
        cache.replace(
            "example.com",
            vec![record("1", "www", "192.0.2.1"), record("2", "www", "192.0.2.2")],
        );
        let found = cache.first_by_name_mut("example.com", "www").map(|r| r.id.clone());
        assert_eq!(found.as_deref(), Some("1"));
    }

    #[test]
    fn replace_by_id_swaps_in_place() {
        let mut cache = RecordCache::default();
        cache.replace("example.com", vec![record("1", "www", "192.0.2.1")]);
        assert!(cache.replace_by_id("example.com", "1", record("1", "www", "192.0.2.9")));
        assert_eq!(cache.get("example.com")[0].content, "192.0.2.9");
        assert!(!cache.replace_by_id("example.com", "7", record("7", "x", "y")));
    }

    #[test]
    fn replace_by_id_takes_new_id() {
        let mut cache = RecordCache::default();
        let old = "www.example.com/A/192.0.2.1";
        let new = "www.example.com/A/192.0.2.2";
        cache.replace("example.com", vec![record(old, "www", "192.0.2.1")]);
        assert!(cache.replace_by_id("example.com", old, record(new, "www", "192.0.2.2")));
        assert_eq!(cache.get("example.com").len(), 1);
        assert_eq!(cache.get("example.com")[0].id, new);
    }
}
