//! 记录保存与远端结果的更新逻辑
//!
//! 编辑保存时先同步修改缓存（乐观更新），再发出远端请求；
//! 新建记录则要等远端确认后才进入缓存。

use cdnscli_provider::{CreateRecordParams, DnsRecord};

use crate::message::{Command, PopupOutcome, ProviderResult};
use crate::model::{App, PopupTarget};

/// 表单字段：Name、TTL、Type、Proxied、Content
struct RecordFields {
    name: String,
    ttl: u32,
    record_type: String,
    proxied: bool,
    content: String,
}

impl RecordFields {
    fn parse(fields: Vec<String>) -> Option<Self> {
        let [name, ttl, record_type, proxied, content] = <[String; 5]>::try_from(fields).ok()?;
        Some(Self {
            name,
            // 无法解析时按 0 处理
            ttl: ttl.parse().unwrap_or(0),
            record_type,
            proxied: proxied.eq_ignore_ascii_case("true"),
            content,
        })
    }

    fn apply_to(self, record: &mut DnsRecord) {
        record.name = self.name;
        record.ttl = self.ttl;
        record.record_type = self.record_type;
        record.proxied = self.proxied;
        record.content = self.content;
    }

    fn into_params(self, zone: &str) -> CreateRecordParams {
        CreateRecordParams {
            name: self.name,
            ttl: self.ttl,
            record_type: self.record_type,
            proxied: self.proxied,
            content: self.content,
            zone_name: zone.to_string(),
        }
    }
}

/// 弹窗关闭：无论结果如何弹窗都已关闭，再按打开时记下的目标处理
pub fn popup_closed(app: &mut App, outcome: PopupOutcome) -> Command {
    let target = app.close_popup();

    match (outcome, target) {
        (PopupOutcome::Save(fields), Some(PopupTarget::CreateRecord { zone })) => {
            let Some(fields) = RecordFields::parse(fields) else {
                return Command::None;
            };
            log::info!("Creating {} record {} in {zone}", fields.record_type, fields.name);
            Command::CreateRecord {
                params: fields.into_params(&zone),
                zone,
            }
        }

        (PopupOutcome::Save(fields), Some(PopupTarget::UpdateRecord { zone, name })) => {
            let Some(fields) = RecordFields::parse(fields) else {
                return Command::None;
            };
            // 按名称匹配，同名时只改第一条
            let Some(record) = app.cache.first_by_name_mut(&zone, &name) else {
                app.set_status(format!("record {name} not found in {zone}"));
                return Command::None;
            };
            fields.apply_to(record);
            let record = record.clone();
            log::info!("Updating record {} in {zone}", record.name);
            Command::UpdateRecord { zone, record }
        }

        (PopupOutcome::SaveNameServers(servers), Some(PopupTarget::NameServers { row })) => {
            // 只更新表格，不调用 Provider
            if let Some(cell) = app.zones.rows.get_mut(row).and_then(|r| r.get_mut(1)) {
                *cell = servers.join(", ");
            }
            Command::None
        }

        (PopupOutcome::Confirmed, _) => {
            log::debug!("Confirmation accepted with no pending action");
            Command::None
        }

        _ => Command::None,
    }
}

/// 新建记录返回：追加到发起请求时的 zone
pub fn record_created(app: &mut App, zone: &str, result: ProviderResult<DnsRecord>) -> Command {
    match result {
        Ok(record) => app.cache.push(zone, record),
        Err(e) => app.set_status(e.to_string()),
    }
    Command::None
}

/// 更新记录返回：缓存已是乐观值，这里用服务端的返回值（含新 ID）覆盖
pub fn record_updated(
    app: &mut App,
    zone: &str,
    previous_id: &str,
    result: ProviderResult<DnsRecord>,
) -> Command {
    match result {
        Ok(record) => {
            if !app.cache.replace_by_id(zone, previous_id, record) {
                log::debug!("Updated record is no longer cached in {zone}");
            }
        }
        // 不回滚
        Err(e) => app.set_status(e.to_string()),
    }
    Command::None
}
