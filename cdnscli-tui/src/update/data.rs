//! 后台加载结果的更新逻辑

use cdnscli_provider::{DnsRecord, Zone};

use crate::message::{Command, ProviderResult};
use crate::model::App;

/// zone 列表返回：填充 Zones 表，并为每个 zone 并发拉取记录
pub fn zones_loaded(app: &mut App, result: ProviderResult<Vec<Zone>>) -> Command {
    app.finish_load();

    let zones = match result {
        Ok(zones) => zones,
        Err(e) => {
            app.set_status(e.to_string());
            return Command::None;
        }
    };
    log::info!("Loaded {} zones", zones.len());

    let rows = zones
        .iter()
        .map(|z| vec![z.name.clone(), z.name_servers.join(", ")])
        .collect();
    app.zones.set_rows(rows);

    zones.into_iter().fold(Command::None, |cmd, z| {
        app.begin_load();
        cmd.and(Command::LoadRecords { zone: z.name })
    })
}

/// 某个 zone 的记录返回：整体替换缓存条目
pub fn records_loaded(
    app: &mut App,
    zone: &str,
    result: ProviderResult<Vec<DnsRecord>>,
) -> Command {
    app.finish_load();

    match result {
        Ok(records) => {
            log::debug!("Loaded {} records of {zone}", records.len());
            app.cache.replace(zone, records);
            app.clear_status();
        }
        Err(e) => app.set_status(e.to_string()),
    }

    Command::None
}
