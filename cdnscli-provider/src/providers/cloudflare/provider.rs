//! Cloudflare DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::{names_match, normalize_domain_name, relative_to_full_name};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{CreateRecordParams, DnsRecord, ListRecordsParams, Zone};

use super::{
    CloudflareDnsRecord, CloudflareProvider, CloudflareRecordBody, CloudflareZone,
    MAX_PAGE_SIZE_RECORDS, MAX_PAGE_SIZE_ZONES,
};

impl CloudflareProvider {
    pub(crate) fn cf_zone_to_zone(zone: CloudflareZone) -> Zone {
        Zone {
            id: zone.id,
            name: zone.name,
            name_servers: zone.name_servers,
            status: zone.status,
        }
    }

    /// 将 Cloudflare 记录转换为 `DnsRecord`（名称保持 API 返回的完整域名）
    pub(crate) fn cf_record_to_dns_record(cf_record: CloudflareDnsRecord) -> DnsRecord {
        DnsRecord {
            id: cf_record.id,
            name: cf_record.name,
            ttl: cf_record.ttl,
            record_type: cf_record.record_type,
            proxied: cf_record.proxied.unwrap_or(false),
            content: cf_record.content,
        }
    }

    /// 按 zone 名称查找 zone ID
    async fn zone_id(&self, zone_name: &str) -> Result<String> {
        let wanted = normalize_domain_name(zone_name);
        self.list_zones_by_name(&wanted)
            .await?
            .into_iter()
            .find(|z| normalize_domain_name(&z.name) == wanted)
            .map(|z| z.id)
            .ok_or_else(|| self.zone_not_found(zone_name))
    }

    /// 记录没有 ID 时（本地构造的记录）按名称回查
    async fn resolve_record_id(&self, zone_name: &str, record: &DnsRecord) -> Result<String> {
        if record.id.is_empty() {
            Ok(self.get_rr_by_name(zone_name, &record.name).await?.id)
        } else {
            Ok(record.id.clone())
        }
    }

    fn record_body(
        name: &str,
        zone_name: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
        proxied: bool,
    ) -> CloudflareRecordBody {
        CloudflareRecordBody {
            record_type: record_type.to_string(),
            name: relative_to_full_name(name, zone_name),
            content: content.to_string(),
            // Cloudflare 用 1 表示 automatic
            ttl: ttl.max(1),
            proxied,
        }
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let zones: Vec<CloudflareZone> = self
            .get_all_pages("/zones", MAX_PAGE_SIZE_ZONES, ErrorContext::default())
            .await?;
        log::info!("[cloudflare] Listed {} zones", zones.len());
        Ok(zones.into_iter().map(Self::cf_zone_to_zone).collect())
    }

    async fn list_zones_by_name(&self, name: &str) -> Result<Vec<Zone>> {
        let path = format!("/zones?name={}", urlencoding::encode(name));
        let zones: Vec<CloudflareZone> = self
            .get_all_pages(&path, MAX_PAGE_SIZE_ZONES, ErrorContext::zone(name))
            .await?;
        Ok(zones.into_iter().map(Self::cf_zone_to_zone).collect())
    }

    async fn list_records(&self, params: &ListRecordsParams) -> Result<Vec<DnsRecord>> {
        let zone_id = self.zone_id(&params.zone_name).await?;
        let records: Vec<CloudflareDnsRecord> = self
            .get_all_pages(
                &format!("/zones/{zone_id}/dns_records"),
                MAX_PAGE_SIZE_RECORDS,
                ErrorContext::zone(&params.zone_name),
            )
            .await?;
        log::debug!(
            "[cloudflare] Zone {} has {} records",
            params.zone_name,
            records.len()
        );
        Ok(records
            .into_iter()
            .map(Self::cf_record_to_dns_record)
            .collect())
    }

    async fn add_rr(&self, zone: &str, params: &CreateRecordParams) -> Result<DnsRecord> {
        let zone_id = self.zone_id(zone).await?;
        let body = Self::record_body(
            &params.name,
            zone,
            &params.record_type,
            &params.content,
            params.ttl,
            params.proxied,
        );

        let created: CloudflareDnsRecord = self
            .post(
                &format!("/zones/{zone_id}/dns_records"),
                &body,
                ErrorContext::record(zone, &body.name),
            )
            .await?;
        Ok(Self::cf_record_to_dns_record(created))
    }

    async fn update_rr(&self, zone: &str, record: &DnsRecord) -> Result<DnsRecord> {
        let zone_id = self.zone_id(zone).await?;
        let record_id = self.resolve_record_id(zone, record).await?;
        let body = Self::record_body(
            &record.name,
            zone,
            &record.record_type,
            &record.content,
            record.ttl,
            record.proxied,
        );

        let updated: CloudflareDnsRecord = self
            .put(
                &format!("/zones/{zone_id}/dns_records/{record_id}"),
                &body,
                ErrorContext::record(zone, &body.name),
            )
            .await?;
        Ok(Self::cf_record_to_dns_record(updated))
    }

    async fn delete_rr(&self, zone: &str, record: &DnsRecord) -> Result<()> {
        let zone_id = self.zone_id(zone).await?;
        let record_id = self.resolve_record_id(zone, record).await?;
        self.delete(
            &format!("/zones/{zone_id}/dns_records/{record_id}"),
            ErrorContext::record(zone, &record.name),
        )
        .await
    }

    async fn get_rr_by_name(&self, zone: &str, name: &str) -> Result<DnsRecord> {
        let zone_id = self.zone_id(zone).await?;
        let full_name = relative_to_full_name(name, zone);
        let records: Vec<CloudflareDnsRecord> = self
            .get_all_pages(
                &format!(
                    "/zones/{zone_id}/dns_records?name={}",
                    urlencoding::encode(&full_name)
                ),
                MAX_PAGE_SIZE_RECORDS,
                ErrorContext::record(zone, &full_name),
            )
            .await?;

        records
            .into_iter()
            .find(|r| names_match(&r.name, &full_name, zone))
            .map(Self::cf_record_to_dns_record)
            .ok_or_else(|| crate::ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record: full_name,
                raw_message: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::cloudflare::CloudflareResponse;

    #[test]
    fn record_without_proxied_flag_is_not_proxied() {
        let json = r#"{
            "success": true,
            "errors": [],
            "result": {
                "id": "372e67954025e0ba6aaa6d586b9e0b59",
                "type": "TXT",
                "name": "example.com",
                "content": "v=spf1 -all",
                "ttl": 3600
            }
        }"#;
        let response: CloudflareResponse<CloudflareDnsRecord> =
            serde_json::from_str(json).unwrap();
        let record = CloudflareProvider::cf_record_to_dns_record(response.result.unwrap());
        assert!(!record.proxied);
        assert_eq!(record.record_type, "TXT");
        assert_eq!(record.ttl, 3600);
    }

    #[test]
    fn zone_conversion_keeps_name_servers() {
        let json = r#"{
            "success": true,
            "errors": [],
            "result": [{
                "id": "023e105f4ecef8ad9ca31a8372d0c353",
                "name": "example.com",
                "status": "active",
                "name_servers": ["bob.ns.cloudflare.com", "lola.ns.cloudflare.com"]
            }],
            "result_info": { "page": 1, "per_page": 50, "total_pages": 1, "count": 1 }
        }"#;
        let response: CloudflareResponse<Vec<CloudflareZone>> =
            serde_json::from_str(json).unwrap();
        assert_eq!(response.result_info.map(|i| i.total_pages), Some(1));

        let zones: Vec<Zone> = response
            .result
            .unwrap()
            .into_iter()
            .map(CloudflareProvider::cf_zone_to_zone)
            .collect();
        assert_eq!(zones[0].name_servers.len(), 2);
        assert_eq!(zones[0].status, "active");
    }

    #[test]
    fn body_uses_full_name_and_minimum_ttl() {
        let body = CloudflareProvider::record_body("www", "example.com", "A", "192.0.2.1", 0, true);
        assert_eq!(body.name, "www.example.com");
        assert_eq!(body.ttl, 1);
        assert!(body.proxied);
    }

    #[test]
    fn error_envelope_parses() {
        let json = r#"{
            "success": false,
            "errors": [{ "code": 81057, "message": "Record already exists." }],
            "result": null
        }"#;
        let response: CloudflareResponse<CloudflareDnsRecord> =
            serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.errors[0].code, 81057);
    }
}
