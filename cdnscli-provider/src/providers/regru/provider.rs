//! REG.RU DnsProvider trait 实现

use async_trait::async_trait;
use futures::future::join_all;

use crate::error::{ProviderError, Result};
use crate::providers::common::{
    first_by_name, full_name_to_relative, normalize_domain_name, relative_to_full_name,
};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{CreateRecordParams, DnsRecord, ListRecordsParams, Zone};

use super::{
    DEFAULT_MX_PRIORITY, DEFAULT_TTL, RegRuAnswer, RegRuDomainNss, RegRuDomainResult,
    RegRuProvider, RegRuRecord, RegRuServiceList, RegRuZoneRecords,
};

/// 记录的 (name, type, content) 三元组；REG.RU 以此定位记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordKey {
    pub name: String,
    pub record_type: String,
    pub content: String,
}

impl RecordKey {
    /// API 不提供记录 ID，用 `name/type/content` 合成
    pub(crate) fn to_id(&self) -> String {
        format!("{}/{}/{}", self.name, self.record_type, self.content)
    }

    /// 解析合成 ID；content 本身可以包含 `/`
    pub(crate) fn from_id(id: &str) -> Option<Self> {
        let mut parts = id.splitn(3, '/');
        let name = parts.next().filter(|s| !s.is_empty())?;
        let record_type = parts.next().filter(|s| !s.is_empty())?;
        let content = parts.next()?;
        Some(Self {
            name: name.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
        })
    }

    fn of(record: &DnsRecord) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.record_type.clone(),
            content: record.content.clone(),
        }
    }
}

impl RegRuProvider {
    pub(crate) fn regru_record_to_dns_record(rr: RegRuRecord, zone_name: &str, ttl: u32) -> DnsRecord {
        let key = RecordKey {
            name: relative_to_full_name(&rr.subname, zone_name),
            record_type: rr.rectype.to_uppercase(),
            content: rr.content,
        };
        DnsRecord {
            id: key.to_id(),
            name: key.name,
            ttl,
            record_type: key.record_type,
            // REG.RU 不支持代理
            proxied: false,
            content: key.content,
        }
    }

    /// 按记录类型选择 `zone/add_*` 函数及其参数
    pub(crate) fn add_function(
        &self,
        zone_name: &str,
        name: &str,
        record_type: &str,
        content: &str,
    ) -> Result<(&'static str, Vec<(&'static str, String)>)> {
        let subdomain = full_name_to_relative(name, zone_name);
        let content = content.trim().to_string();

        let (function, mut params) = match record_type.to_uppercase().as_str() {
            "A" => ("zone/add_alias", vec![("ipaddr", content)]),
            "AAAA" => ("zone/add_aaaa", vec![("ipaddr", content)]),
            "CNAME" => ("zone/add_cname", vec![("canonical_name", content)]),
            "MX" => (
                "zone/add_mx",
                vec![
                    ("mail_server", content),
                    ("priority", DEFAULT_MX_PRIORITY.to_string()),
                ],
            ),
            "NS" => (
                "zone/add_ns",
                vec![("dns_server", content), ("record_number", "0".to_string())],
            ),
            "TXT" => ("zone/add_txt", vec![("text", content)]),
            "SRV" => {
                // 内容格式: "<priority> <weight> <port> <target>"
                let fields: Vec<&str> = content.split_whitespace().collect();
                let [priority, weight, port, target] = fields.as_slice() else {
                    return Err(self.invalid_content("SRV content must be '<priority> <weight> <port> <target>'"));
                };
                return Ok((
                    "zone/add_srv",
                    vec![
                        ("dname", zone_name.to_string()),
                        ("service", subdomain),
                        ("priority", (*priority).to_string()),
                        ("weight", (*weight).to_string()),
                        ("port", (*port).to_string()),
                        ("target", (*target).to_string()),
                    ],
                ));
            }
            "CAA" => {
                // 内容格式: "<flags> <tag> <value>"
                let mut fields = content.splitn(3, ' ');
                let (Some(flags), Some(tag), Some(value)) =
                    (fields.next(), fields.next(), fields.next())
                else {
                    return Err(self.invalid_content("CAA content must be '<flags> <tag> <value>'"));
                };
                (
                    "zone/add_caa",
                    vec![
                        ("flags", flags.to_string()),
                        ("tag", tag.to_string()),
                        ("value", value.trim_matches('"').to_string()),
                    ],
                )
            }
            other => {
                return Err(ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "type".to_string(),
                    detail: format!("record type '{other}' is not supported"),
                });
            }
        };

        params.insert(0, ("subdomain", subdomain));
        params.insert(0, ("dname", zone_name.to_string()));
        Ok((function, params))
    }

    fn invalid_content(&self, detail: &str) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: "content".to_string(),
            detail: detail.to_string(),
        }
    }

    /// 对单域名函数的返回做结果检查
    async fn call_for_domain(
        &self,
        function: &str,
        params: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<()> {
        let answer: RegRuAnswer<RegRuDomainResult> =
            self.call(function, params, context.clone()).await?;
        for domain in &answer.domains {
            log::debug!("[regru] {function} {}: {:?}", domain.dname, domain.result);
            self.check_domain_result(
                domain.result.as_deref(),
                domain.error_code.as_deref(),
                context.clone(),
            )?;
        }
        Ok(())
    }

    async fn add_key(&self, zone_name: &str, key: &RecordKey) -> Result<()> {
        let (function, params) = self.add_function(zone_name, &key.name, &key.record_type, &key.content)?;
        self.call_for_domain(function, &params, ErrorContext::record(zone_name, &key.name))
            .await
    }

    async fn remove_key(&self, zone_name: &str, key: &RecordKey) -> Result<()> {
        let params = [
            ("dname", zone_name.to_string()),
            ("subdomain", full_name_to_relative(&key.name, zone_name)),
            ("record_type", key.record_type.clone()),
            ("content", key.content.clone()),
        ];
        self.call_for_domain(
            "zone/remove_record",
            &params,
            ErrorContext::record(zone_name, &key.name),
        )
        .await
    }

    /// 记录当前在服务端的定位键：优先用合成 ID，其次按名称回查
    async fn current_key(&self, zone_name: &str, record: &DnsRecord) -> Result<RecordKey> {
        if let Some(key) = RecordKey::from_id(&record.id) {
            return Ok(key);
        }
        let existing = self.get_rr_by_name(zone_name, &record.name).await?;
        Ok(RecordKey::of(&existing))
    }

    async fn name_servers(&self, zone_name: &str) -> Result<Vec<String>> {
        let answer: RegRuAnswer<RegRuDomainNss> = self
            .call(
                "domain/get_nss",
                &[("dname", zone_name.to_string())],
                ErrorContext::zone(zone_name),
            )
            .await?;

        let Some(domain) = answer.domains.into_iter().next() else {
            return Ok(Vec::new());
        };
        self.check_domain_result(
            domain.result.as_deref(),
            domain.error_code.as_deref(),
            ErrorContext::zone(zone_name),
        )?;
        Ok(domain.nss.into_iter().map(|n| n.ns).collect())
    }
}

/// SOA TTL 形如 `3600`、`30m`、`12h`、`1d`、`1w`
fn parse_ttl(raw: &str) -> Option<u32> {
    let raw = raw.trim().to_lowercase();
    let (digits, unit) = match raw.char_indices().last()? {
        (i, c) if c.is_ascii_alphabetic() => (&raw[..i], c),
        _ => (raw.as_str(), 's'),
    };
    let value: u32 = digits.parse().ok()?;
    let multiplier = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86_400,
        'w' => 604_800,
        _ => return None,
    };
    value.checked_mul(multiplier)
}

#[async_trait]
impl DnsProvider for RegRuProvider {
    fn id(&self) -> &'static str {
        "regru"
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let list: RegRuServiceList = self
            .call(
                "service/get_list",
                &[("servtype", "domain".to_string())],
                ErrorContext::default(),
            )
            .await?;

        let lookups = list.services.iter().map(|s| self.name_servers(&s.dname));
        let name_servers = join_all(lookups).await;

        let zones: Vec<Zone> = list
            .services
            .into_iter()
            .zip(name_servers)
            .map(|(service, ns)| {
                let name_servers = ns.unwrap_or_else(|e| {
                    log::warn!("[regru] Failed to get name servers of {}: {e}", service.dname);
                    Vec::new()
                });
                Zone {
                    id: service.service_id,
                    name: service.dname,
                    name_servers,
                    status: service.state,
                }
            })
            .collect();

        log::info!("[regru] Listed {} zones", zones.len());
        Ok(zones)
    }

    async fn list_zones_by_name(&self, name: &str) -> Result<Vec<Zone>> {
        let wanted = normalize_domain_name(name);
        Ok(self
            .list_zones()
            .await?
            .into_iter()
            .filter(|z| normalize_domain_name(&z.name) == wanted)
            .collect())
    }

    async fn list_records(&self, params: &ListRecordsParams) -> Result<Vec<DnsRecord>> {
        let zone_name = &params.zone_name;
        let answer: RegRuAnswer<RegRuZoneRecords> = self
            .call(
                "zone/get_resource_records",
                &[("dname", zone_name.clone())],
                ErrorContext::zone(zone_name),
            )
            .await?;

        let domain = answer
            .domains
            .into_iter()
            .find(|d| normalize_domain_name(&d.dname) == normalize_domain_name(zone_name))
            .ok_or_else(|| self.zone_not_found(zone_name))?;
        self.check_domain_result(
            domain.result.as_deref(),
            domain.error_code.as_deref(),
            ErrorContext::zone(zone_name),
        )?;

        // TTL 是 zone 级别的（SOA）
        let ttl = domain
            .soa
            .and_then(|soa| parse_ttl(&soa.ttl))
            .unwrap_or(DEFAULT_TTL);

        Ok(domain
            .rrs
            .into_iter()
            .map(|rr| Self::regru_record_to_dns_record(rr, zone_name, ttl))
            .collect())
    }

    async fn add_rr(&self, zone: &str, params: &CreateRecordParams) -> Result<DnsRecord> {
        let key = RecordKey {
            name: relative_to_full_name(&params.name, zone),
            record_type: params.record_type.to_uppercase(),
            content: params.content.trim().to_string(),
        };
        self.add_key(zone, &key).await?;

        let mut record = params.to_record(key.to_id());
        record.name = key.name;
        record.record_type = key.record_type;
        record.content = key.content;
        record.proxied = false;
        Ok(record)
    }

    async fn update_rr(&self, zone: &str, record: &DnsRecord) -> Result<DnsRecord> {
        // 没有原地更新接口：先删后加
        let old = self.current_key(zone, record).await?;
        let new = RecordKey {
            name: relative_to_full_name(&record.name, zone),
            record_type: record.record_type.to_uppercase(),
            content: record.content.trim().to_string(),
        };

        // 先校验新内容，避免删掉旧记录后才发现无法添加
        self.add_function(zone, &new.name, &new.record_type, &new.content)?;

        self.remove_key(zone, &old).await?;
        self.add_key(zone, &new).await?;

        Ok(DnsRecord {
            id: new.to_id(),
            name: new.name,
            ttl: record.ttl,
            record_type: new.record_type,
            proxied: false,
            content: new.content,
        })
    }

    async fn delete_rr(&self, zone: &str, record: &DnsRecord) -> Result<()> {
        let key = self.current_key(zone, record).await?;
        self.remove_key(zone, &key).await
    }

    async fn get_rr_by_name(&self, zone: &str, name: &str) -> Result<DnsRecord> {
        let records = self.list_records(&ListRecordsParams::new(zone)).await?;
        first_by_name(&records, name, zone)
            .cloned()
            .ok_or_else(|| ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record: relative_to_full_name(name, zone),
                raw_message: None,
            })
    }
}
