//! 非交互子命令
//!
//! 不带子命令时 `cdnscli` 启动 TUI；带子命令时直接调用 Provider，
//! 把结果按 `--output-format` 打印到 stdout 后退出。
//!
//! ```text
//! cdnscli zone list [--name <zone>]
//! cdnscli rr list   --zone <zone>
//! cdnscli rr info   --zone <zone> --name <name>
//! cdnscli rr add    --zone <zone> --name <name> --type <type> --content <value> [--ttl <secs>] [--proxied]
//! cdnscli rr update --zone <zone> --name <name> --type <type> --content <value> [--ttl <secs>] [--proxied <bool>]
//! cdnscli rr delete --zone <zone> --name <name> [--type <type>] [--content <value>]
//! cdnscli search    --zone <zone> [--name <name>] [--content <value>]
//! ```
//!
//! 记录名称一律写相对名称（`www`、`@`），由这里补全为完整域名。

mod printer;

pub use printer::OutputFormat;

use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use cdnscli_provider::{
    normalize_domain_name, relative_to_full_name, CreateRecordParams, DnsProvider, DnsRecord,
    ListRecordsParams, ProviderError,
};
use clap::{Args, Subcommand};

/// 子命令
#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Zone operations
    #[command(subcommand)]
    Zone(ZoneCommand),

    /// Resource record operations
    #[command(subcommand)]
    Rr(RrCommand),

    /// Search resource records of a zone by name and/or content
    Search(SearchArgs),
}

#[derive(Debug, Subcommand)]
pub enum ZoneCommand {
    /// List zones on the account, optionally filtered by name
    #[command(visible_alias = "ls")]
    List {
        /// Zone name to filter against
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RrCommand {
    /// List resource records of a zone
    #[command(visible_alias = "ls")]
    List {
        /// Zone name
        #[arg(short, long)]
        zone: String,
    },

    /// Details of a single resource record (first match by name)
    #[command(visible_alias = "details")]
    Info(RecordRef),

    /// Add a resource record to a zone
    #[command(visible_aliases = ["new", "create"])]
    Add {
        #[command(flatten)]
        target: RecordRef,

        /// Record type (A, AAAA, CNAME, ...)
        #[arg(short = 't', long = "type")]
        record_type: String,

        /// Record content (address, hostname, text)
        #[arg(short, long)]
        content: String,

        /// TTL in seconds
        #[arg(short = 'l', long, default_value_t = 1800)]
        ttl: u32,

        /// Proxy through the Cloudflare edge
        #[arg(short, long)]
        proxied: bool,
    },

    /// Update an existing resource record (first match by name)
    #[command(visible_aliases = ["change", "patch"])]
    Update {
        #[command(flatten)]
        target: RecordRef,

        /// New record type
        #[arg(short = 't', long = "type")]
        record_type: String,

        /// New record content
        #[arg(short, long)]
        content: String,

        /// New TTL in seconds (unchanged if omitted)
        #[arg(short = 'l', long)]
        ttl: Option<u32>,

        /// New proxy flag (unchanged if omitted)
        #[arg(short, long)]
        proxied: Option<bool>,
    },

    /// Delete a resource record from a zone
    #[command(visible_aliases = ["del", "rm", "remove"])]
    Delete {
        #[command(flatten)]
        target: RecordRef,

        /// Only delete a record of this type
        #[arg(short = 't', long = "type")]
        record_type: Option<String>,

        /// Only delete a record with this content
        #[arg(short, long)]
        content: Option<String>,
    },
}

/// zone + 相对记录名
#[derive(Debug, Args)]
pub struct RecordRef {
    /// Zone name
    #[arg(short, long)]
    pub zone: String,

    /// Record name relative to the zone (`www`, `@`)
    #[arg(short, long)]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Zone name
    #[arg(short, long)]
    pub zone: String,

    /// Record name relative to the zone
    #[arg(short, long)]
    pub name: Option<String>,

    /// Record content to match exactly
    #[arg(short, long)]
    pub content: Option<String>,
}

/// 执行一条子命令
pub async fn run(
    command: CliCommand,
    provider: Arc<dyn DnsProvider>,
    timeout: Duration,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let runner = Runner { provider, timeout };
    let printer = format.printer();

    match command {
        CliCommand::Zone(ZoneCommand::List { name }) => {
            let zones = match name {
                Some(name) => {
                    runner
                        .call("list_zones_by_name", runner.provider.list_zones_by_name(&name))
                        .await?
                }
                None => runner.call("list_zones", runner.provider.list_zones()).await?,
            };
            printer.zones_list(out, &zones)?;
        }

        CliCommand::Rr(RrCommand::List { zone }) => {
            let records = runner.list_records(&zone).await?;
            printer.records_list(out, &records)?;
        }

        CliCommand::Rr(RrCommand::Info(target)) => {
            let record = runner.get_by_name(&target).await?;
            printer.record(out, &record)?;
        }

        CliCommand::Rr(RrCommand::Add {
            target,
            record_type,
            content,
            ttl,
            proxied,
        }) => {
            let params = CreateRecordParams {
                name: full_name(&target.name, &target.zone)?,
                ttl,
                record_type: record_type.to_uppercase(),
                proxied,
                content,
                zone_name: target.zone.clone(),
            };
            let record = runner
                .call("add_rr", runner.provider.add_rr(&target.zone, &params))
                .await?;
            printer.record(out, &record)?;
        }

        CliCommand::Rr(RrCommand::Update {
            target,
            record_type,
            content,
            ttl,
            proxied,
        }) => {
            let mut record = runner.get_by_name(&target).await?;
            record.record_type = record_type.to_uppercase();
            record.content = content;
            if let Some(ttl) = ttl {
                record.ttl = ttl;
            }
            if let Some(proxied) = proxied {
                record.proxied = proxied;
            }
            let updated = runner
                .call("update_rr", runner.provider.update_rr(&target.zone, &record))
                .await?;
            printer.record(out, &updated)?;
        }

        CliCommand::Rr(RrCommand::Delete {
            target,
            record_type,
            content,
        }) => {
            let record = if record_type.is_none() && content.is_none() {
                runner.get_by_name(&target).await?
            } else {
                let filter = RecordFilter {
                    name: Some(full_name(&target.name, &target.zone)?),
                    record_type,
                    content,
                };
                let records = runner.list_records(&target.zone).await?;
                filter
                    .apply(records)
                    .into_iter()
                    .next()
                    .with_context(|| {
                        format!("no matching record {} in {}", target.name, target.zone)
                    })?
            };
            runner
                .call("delete_rr", runner.provider.delete_rr(&target.zone, &record))
                .await?;
            printer.record(out, &record)?;
        }

        CliCommand::Search(args) => {
            if args.name.is_none() && args.content.is_none() {
                bail!("specify at least one of --name or --content");
            }
            let filter = RecordFilter {
                name: args
                    .name
                    .as_deref()
                    .map(|name| full_name(name, &args.zone))
                    .transpose()?,
                record_type: None,
                content: args.content,
            };
            let records = runner.list_records(&args.zone).await?;
            printer.records_list(out, &filter.apply(records))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Provider 调用加超时
struct Runner {
    provider: Arc<dyn DnsProvider>,
    timeout: Duration,
}

impl Runner {
    async fn call<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, ProviderError>>,
    ) -> Result<T, ProviderError> {
        log::debug!("[{}] {operation}", self.provider.id());
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or_else(|_| {
                Err(ProviderError::Timeout {
                    provider: self.provider.id().to_string(),
                    detail: format!("{operation} did not finish within {:?}", self.timeout),
                })
            })
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<DnsRecord>, ProviderError> {
        let params = ListRecordsParams::new(zone);
        self.call("list_records", self.provider.list_records(&params))
            .await
    }

    async fn get_by_name(&self, target: &RecordRef) -> Result<DnsRecord> {
        let name = full_name(&target.name, &target.zone)?;
        Ok(self
            .call(
                "get_rr_by_name",
                self.provider.get_rr_by_name(&target.zone, &name),
            )
            .await?)
    }
}

/// 相对名称补全为完整域名；已经带 zone 后缀的名称直接拒绝
fn full_name(name: &str, zone: &str) -> Result<String> {
    let normalized = normalize_domain_name(name);
    let zone_name = normalize_domain_name(zone);
    if normalized == zone_name || normalized.ends_with(&format!(".{zone_name}")) {
        bail!("name ({name}) must be relative to the zone, without the domain {zone}");
    }
    Ok(relative_to_full_name(&normalized, &zone_name))
}

/// 按完整名称、类型、内容过滤记录（未给出的条件不参与过滤）
struct RecordFilter {
    name: Option<String>,
    record_type: Option<String>,
    content: Option<String>,
}

impl RecordFilter {
    fn apply(&self, records: Vec<DnsRecord>) -> Vec<DnsRecord> {
        records
            .into_iter()
            .filter(|r| {
                self.name
                    .as_ref()
                    .is_none_or(|name| normalize_domain_name(&r.name) == *name)
                    && self
                        .record_type
                        .as_ref()
                        .is_none_or(|t| r.record_type.eq_ignore_ascii_case(t))
                    && self.content.as_ref().is_none_or(|c| r.content == *c)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use cdnscli_provider::MemoryProvider;

    use super::*;

    async fn exec(command: CliCommand, format: OutputFormat) -> (Result<()>, String) {
        exec_on(Arc::new(MemoryProvider::demo()), command, format).await
    }

    async fn exec_on(
        provider: Arc<dyn DnsProvider>,
        command: CliCommand,
        format: OutputFormat,
    ) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(command, provider, Duration::from_secs(5), format, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    fn target(zone: &str, name: &str) -> RecordRef {
        RecordRef {
            zone: zone.to_string(),
            name: name.to_string(),
        }
    }

    fn json(text: &str) -> serde_json::Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn relative_names_are_completed() {
        assert_eq!(full_name("www", "example.com").unwrap(), "www.example.com");
        assert_eq!(full_name("@", "example.com").unwrap(), "example.com");
        assert!(full_name("www.example.com", "example.com").is_err());
        assert!(full_name("example.com.", "example.com").is_err());
    }

    #[tokio::test]
    async fn zone_list_filters_by_name() {
        let (result, text) = exec(
            CliCommand::Zone(ZoneCommand::List {
                name: Some("test.com".to_string()),
            }),
            OutputFormat::Text,
        )
        .await;
        result.unwrap();
        assert!(text.contains("Name: test.com\n"));
        assert!(!text.contains("example.com"));

        let (result, text) = exec(
            CliCommand::Zone(ZoneCommand::List { name: None }),
            OutputFormat::Json,
        )
        .await;
        result.unwrap();
        assert_eq!(json(&text).as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn rr_info_prints_first_match() {
        let (result, text) = exec(
            CliCommand::Rr(RrCommand::Info(target("example.com", "@"))),
            OutputFormat::Json,
        )
        .await;
        result.unwrap();
        let record = json(&text);
        assert_eq!(record["name"], "example.com");
        assert_eq!(record["type"], "A");
    }

    #[tokio::test]
    async fn add_update_delete_roundtrip() {
        let provider: Arc<dyn DnsProvider> = Arc::new(MemoryProvider::demo());

        let (result, text) = exec_on(
            Arc::clone(&provider),
            CliCommand::Rr(RrCommand::Add {
                target: target("test.com", "web"),
                record_type: "a".to_string(),
                content: "192.0.2.10".to_string(),
                ttl: 1800,
                proxied: false,
            }),
            OutputFormat::Json,
        )
        .await;
        result.unwrap();
        let added = json(&text);
        assert_eq!(added["name"], "web.test.com");
        assert_eq!(added["type"], "A");

        let (result, text) = exec_on(
            Arc::clone(&provider),
            CliCommand::Rr(RrCommand::Update {
                target: target("test.com", "web"),
                record_type: "A".to_string(),
                content: "192.0.2.11".to_string(),
                ttl: None,
                proxied: None,
            }),
            OutputFormat::Json,
        )
        .await;
        result.unwrap();
        let updated = json(&text);
        assert_eq!(updated["content"], "192.0.2.11");
        assert_eq!(updated["ttl"], 1800);

        let (result, text) = exec_on(
            Arc::clone(&provider),
            CliCommand::Rr(RrCommand::Delete {
                target: target("test.com", "web"),
                record_type: Some("A".to_string()),
                content: Some("192.0.2.11".to_string()),
            }),
            OutputFormat::None,
        )
        .await;
        result.unwrap();
        assert!(text.is_empty());

        let records = provider
            .list_records(&ListRecordsParams::new("test.com"))
            .await
            .unwrap();
        assert!(records.iter().all(|r| r.name != "web.test.com"));
    }

    #[tokio::test]
    async fn add_rejects_fully_qualified_name() {
        let (result, _) = exec(
            CliCommand::Rr(RrCommand::Add {
                target: target("test.com", "web.test.com"),
                record_type: "A".to_string(),
                content: "192.0.2.10".to_string(),
                ttl: 1800,
                proxied: false,
            }),
            OutputFormat::Text,
        )
        .await;
        assert!(result.unwrap_err().to_string().contains("relative to the zone"));
    }

    #[tokio::test]
    async fn delete_without_match_fails() {
        let (result, _) = exec(
            CliCommand::Rr(RrCommand::Delete {
                target: target("example.com", "@"),
                record_type: Some("AAAA".to_string()),
                content: None,
            }),
            OutputFormat::Text,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn search_by_content_and_name() {
        let search = |name: Option<&str>, content: Option<&str>| {
            CliCommand::Search(SearchArgs {
                zone: "example.com".to_string(),
                name: name.map(str::to_string),
                content: content.map(str::to_string),
            })
        };

        let (result, text) = exec(search(None, Some("example.com")), OutputFormat::Json).await;
        result.unwrap();
        let found = json(&text);
        assert_eq!(found.as_array().map(Vec::len), Some(1));
        assert_eq!(found[0]["name"], "www.example.com");

        // @ 下有 A、MX、TXT 三条
        let (result, text) = exec(search(Some("@"), None), OutputFormat::Json).await;
        result.unwrap();
        assert_eq!(json(&text).as_array().map(Vec::len), Some(3));

        let (result, _) = exec(search(None, None), OutputFormat::Text).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn provider_errors_surface() {
        let (result, _) = exec(
            CliCommand::Rr(RrCommand::List {
                zone: "missing.org".to_string(),
            }),
            OutputFormat::Text,
        )
        .await;
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProviderError>(),
            Some(ProviderError::ZoneNotFound { .. })
        ));
    }
}
