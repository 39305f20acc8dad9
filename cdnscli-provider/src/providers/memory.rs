//! In-memory DNS Provider
//!
//! Keeps zones and records in process memory. Used for offline demos
//! (`type = "memory"`) and as a deterministic provider in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ProviderError, Result};
use crate::providers::common::{
    first_by_name, names_match, normalize_domain_name, relative_to_full_name,
};
use crate::traits::DnsProvider;
use crate::types::{CreateRecordParams, DnsRecord, ListRecordsParams, Zone};

const PROVIDER: &str = "memory";

/// In-memory DNS Provider
pub struct MemoryProvider {
    /// 保持列出顺序
    zones: Vec<Zone>,
    records: RwLock<BTreeMap<String, Vec<DnsRecord>>>,
}

impl MemoryProvider {
    /// 以给定 zone 列表初始化，每个 zone 的记录为空
    pub fn new(zones: Vec<Zone>) -> Self {
        let records = zones
            .iter()
            .map(|z| (normalize_domain_name(&z.name), Vec::new()))
            .collect();
        Self {
            zones,
            records: RwLock::new(records),
        }
    }

    /// 附带初始记录（构造器风格，主要给测试用）
    #[must_use]
    pub fn with_records(self, zone: &str, records: Vec<DnsRecord>) -> Self {
        let mut map = self.records.into_inner();
        map.entry(normalize_domain_name(zone))
            .or_default()
            .extend(records);
        Self {
            zones: self.zones,
            records: RwLock::new(map),
        }
    }

    /// 离线演示数据：两个 zone，各带几条记录
    pub fn demo() -> Self {
        let zone = |id: &str, name: &str, ns: &[&str]| Zone {
            id: id.to_string(),
            name: name.to_string(),
            name_servers: ns.iter().map(|s| (*s).to_string()).collect(),
            status: "active".to_string(),
        };
        let record = |name: &str, ttl: u32, record_type: &str, proxied: bool, content: &str| {
            DnsRecord {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_string(),
                ttl,
                record_type: record_type.to_string(),
                proxied,
                content: content.to_string(),
            }
        };

        Self::new(vec![
            zone("demo-1", "example.com", &["ns1.example.com", "ns2.example.com"]),
            zone("demo-2", "test.com", &["ns1.test.com"]),
        ])
        .with_records(
            "example.com",
            vec![
                record("example.com", 3600, "A", true, "192.0.2.1"),
                record("www.example.com", 300, "CNAME", true, "example.com"),
                record("example.com", 3600, "MX", false, "mail.example.com"),
                record("example.com", 3600, "TXT", false, "v=spf1 -all"),
            ],
        )
        .with_records(
            "test.com",
            vec![record("api.test.com", 600, "AAAA", false, "2001:db8::1")],
        )
    }

    fn zone_not_found(zone: &str) -> ProviderError {
        ProviderError::ZoneNotFound {
            provider: PROVIDER.to_string(),
            zone: zone.to_string(),
        }
    }

    fn record_not_found(record: &str) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: PROVIDER.to_string(),
            record: record.to_string(),
            raw_message: None,
        }
    }

    /// 优先按 ID 定位，ID 为空时按名称取第一条
    fn position(records: &[DnsRecord], target: &DnsRecord, zone: &str) -> Option<usize> {
        if target.id.is_empty() {
            records
                .iter()
                .position(|r| names_match(&r.name, &target.name, zone))
        } else {
            records.iter().position(|r| r.id == target.id)
        }
    }
}

#[async_trait]
impl DnsProvider for MemoryProvider {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        Ok(self.zones.clone())
    }

    async fn list_zones_by_name(&self, name: &str) -> Result<Vec<Zone>> {
        let wanted = normalize_domain_name(name);
        Ok(self
            .zones
            .iter()
            .filter(|z| normalize_domain_name(&z.name) == wanted)
            .cloned()
            .collect())
    }

    async fn list_records(&self, params: &ListRecordsParams) -> Result<Vec<DnsRecord>> {
        self.records
            .read()
            .await
            .get(&normalize_domain_name(&params.zone_name))
            .cloned()
            .ok_or_else(|| Self::zone_not_found(&params.zone_name))
    }

    async fn add_rr(&self, zone: &str, params: &CreateRecordParams) -> Result<DnsRecord> {
        let mut map = self.records.write().await;
        let records = map
            .get_mut(&normalize_domain_name(zone))
            .ok_or_else(|| Self::zone_not_found(zone))?;

        let mut record = params.to_record(uuid::Uuid::new_v4().to_string());
        record.name = relative_to_full_name(&params.name, zone);

        if records.iter().any(|r| {
            names_match(&r.name, &record.name, zone)
                && r.record_type.eq_ignore_ascii_case(&record.record_type)
                && r.content == record.content
        }) {
            return Err(ProviderError::RecordExists {
                provider: PROVIDER.to_string(),
                record_name: record.name,
                raw_message: None,
            });
        }

        records.push(record.clone());
        log::debug!("[memory] Added {} {} in {zone}", record.record_type, record.name);
        Ok(record)
    }

    async fn update_rr(&self, zone: &str, record: &DnsRecord) -> Result<DnsRecord> {
        let mut map = self.records.write().await;
        let records = map
            .get_mut(&normalize_domain_name(zone))
            .ok_or_else(|| Self::zone_not_found(zone))?;

        let index =
            Self::position(records, record, zone).ok_or_else(|| Self::record_not_found(&record.name))?;

        let mut updated = record.clone();
        updated.id.clone_from(&records[index].id);
        records[index] = updated.clone();
        Ok(updated)
    }

    async fn delete_rr(&self, zone: &str, record: &DnsRecord) -> Result<()> {
        let mut map = self.records.write().await;
        let records = map
            .get_mut(&normalize_domain_name(zone))
            .ok_or_else(|| Self::zone_not_found(zone))?;

        let index =
            Self::position(records, record, zone).ok_or_else(|| Self::record_not_found(&record.name))?;
        records.remove(index);
        Ok(())
    }

    async fn get_rr_by_name(&self, zone: &str, name: &str) -> Result<DnsRecord> {
        let map = self.records.read().await;
        let records = map
            .get(&normalize_domain_name(zone))
            .ok_or_else(|| Self::zone_not_found(zone))?;
        first_by_name(records, name, zone)
            .cloned()
            .ok_or_else(|| Self::record_not_found(&relative_to_full_name(name, zone)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(name: &str) -> Zone {
        Zone {
            id: name.to_string(),
            name: name.to_string(),
            name_servers: vec![format!("ns1.{name}")],
            status: "active".to_string(),
        }
    }

    fn create(name: &str, content: &str) -> CreateRecordParams {
        CreateRecordParams {
            name: name.to_string(),
            ttl: 300,
            record_type: "A".to_string(),
            proxied: false,
            content: content.to_string(),
            zone_name: "example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn zones_keep_listing_order() {
        let provider = MemoryProvider::new(vec![zone("b.com"), zone("a.com")]);
        let names: Vec<String> = provider
            .list_zones()
            .await
            .unwrap()
            .into_iter()
            .map(|z| z.name)
            .collect();
        assert_eq!(names, vec!["b.com", "a.com"]);
    }

    #[tokio::test]
    async fn add_then_get_by_relative_name() {
        let provider = MemoryProvider::new(vec![zone("example.com")]);
        let created = provider
            .add_rr("example.com", &create("api", "192.0.2.7"))
            .await
            .unwrap();
        assert_eq!(created.name, "api.example.com");
        assert!(!created.id.is_empty());

        let found = provider.get_rr_by_name("example.com", "api").await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn duplicate_record_is_rejected() {
        let provider = MemoryProvider::new(vec![zone("example.com")]);
        provider
            .add_rr("example.com", &create("www", "192.0.2.1"))
            .await
            .unwrap();
        let err = provider
            .add_rr("example.com", &create("www", "192.0.2.1"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::RecordExists { .. }));
    }

    #[tokio::test]
    async fn update_without_id_matches_first_by_name() {
        let provider = MemoryProvider::new(vec![zone("example.com")]);
        let first = provider
            .add_rr("example.com", &create("www", "192.0.2.1"))
            .await
            .unwrap();
        provider
            .add_rr("example.com", &create("www", "192.0.2.2"))
            .await
            .unwrap();

        let edited = DnsRecord {
            id: String::new(),
            ttl: 600,
            content: "203.0.113.1".to_string(),
            ..first.clone()
        };
        let updated = provider.update_rr("example.com", &edited).await.unwrap();
        assert_eq!(updated.id, first.id);

        let records = provider
            .list_records(&ListRecordsParams::new("example.com"))
            .await
            .unwrap();
        assert_eq!(records[0].content, "203.0.113.1");
        assert_eq!(records[1].content, "192.0.2.2");
    }

    #[tokio::test]
    async fn delete_by_id() {
        let provider = MemoryProvider::new(vec![zone("example.com")]);
        let record = provider
            .add_rr("example.com", &create("www", "192.0.2.1"))
            .await
            .unwrap();
        provider.delete_rr("example.com", &record).await.unwrap();

        let err = provider.get_rr_by_name("example.com", "www").await.unwrap_err();
        assert!(matches!(err, ProviderError::RecordNotFound { .. }));
    }

    #[tokio::test]
    async fn unknown_zone() {
        let provider = MemoryProvider::new(Vec::new());
        let err = provider
            .list_records(&ListRecordsParams::new("missing.com"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProviderError::ZoneNotFound {
                provider: "memory".to_string(),
                zone: "missing.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn demo_data_is_populated() {
        let provider = MemoryProvider::demo();
        let zones = provider.list_zones().await.unwrap();
        assert_eq!(zones.len(), 2);
        let records = provider
            .list_records(&ListRecordsParams::new("example.com"))
            .await
            .unwrap();
        assert!(!records.is_empty());
    }
}
