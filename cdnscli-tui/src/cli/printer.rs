//! 非交互命令的输出格式
//!
//! text 面向人读，json 每次输出一行紧凑 JSON（便于管道处理），
//! none 什么都不输出，只靠退出码。

use std::io::{self, Write};

use cdnscli_provider::{DnsRecord, Zone};
use clap::ValueEnum;
use serde::Serialize;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// 人类可读的 `Key: value` 行
    #[default]
    Text,
    /// 单行 JSON
    Json,
    /// 不输出
    None,
}

impl OutputFormat {
    pub fn printer(self) -> Box<dyn PrettyPrinter> {
        match self {
            Self::Text => Box::new(TextPrinter),
            Self::Json => Box::new(JsonPrinter),
            Self::None => Box::new(NonePrinter),
        }
    }
}

/// 命令结果的打印器
pub trait PrettyPrinter {
    fn zones_list(&self, out: &mut dyn Write, zones: &[Zone]) -> io::Result<()>;

    fn records_list(&self, out: &mut dyn Write, records: &[DnsRecord]) -> io::Result<()>;

    /// 单条记录（info / add / update / delete 共用）
    fn record(&self, out: &mut dyn Write, record: &DnsRecord) -> io::Result<()>;
}

pub struct TextPrinter;

impl TextPrinter {
    fn write_record(out: &mut dyn Write, record: &DnsRecord) -> io::Result<()> {
        writeln!(out, "ID: {}", record.id)?;
        writeln!(out, "Name: {}", record.name)?;
        writeln!(out, "Type: {}", record.record_type)?;
        writeln!(out, "TTL: {}", record.ttl)?;
        writeln!(out, "Proxied: {}", record.proxied)?;
        writeln!(out, "Content: {}", record.content)
    }
}

impl PrettyPrinter for TextPrinter {
    fn zones_list(&self, out: &mut dyn Write, zones: &[Zone]) -> io::Result<()> {
        for zone in zones {
            writeln!(out, "ID: {}", zone.id)?;
            writeln!(out, "Name: {}", zone.name)?;
            writeln!(out, "Name Servers: {}", zone.name_servers.join(", "))?;
            writeln!(out, "Status: {}", zone.status)?;
        }
        Ok(())
    }

    fn records_list(&self, out: &mut dyn Write, records: &[DnsRecord]) -> io::Result<()> {
        for (i, record) in records.iter().enumerate() {
            // 记录之间空一行
            if i > 0 {
                writeln!(out)?;
            }
            Self::write_record(out, record)?;
        }
        Ok(())
    }

    fn record(&self, out: &mut dyn Write, record: &DnsRecord) -> io::Result<()> {
        Self::write_record(out, record)
    }
}

pub struct JsonPrinter;

impl JsonPrinter {
    fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut *out, value)?;
        writeln!(out)
    }
}

impl PrettyPrinter for JsonPrinter {
    fn zones_list(&self, out: &mut dyn Write, zones: &[Zone]) -> io::Result<()> {
        Self::write_json(out, zones)
    }

    fn records_list(&self, out: &mut dyn Write, records: &[DnsRecord]) -> io::Result<()> {
        Self::write_json(out, records)
    }

    fn record(&self, out: &mut dyn Write, record: &DnsRecord) -> io::Result<()> {
        Self::write_json(out, record)
    }
}

pub struct NonePrinter;

impl PrettyPrinter for NonePrinter {
    fn zones_list(&self, _out: &mut dyn Write, _zones: &[Zone]) -> io::Result<()> {
        Ok(())
    }

    fn records_list(&self, _out: &mut dyn Write, _records: &[DnsRecord]) -> io::Result<()> {
        Ok(())
    }

    fn record(&self, _out: &mut dyn Write, _record: &DnsRecord) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> Zone {
        Zone {
            id: "z1".to_string(),
            name: "example.com".to_string(),
            name_servers: vec!["ns1.example.com".to_string(), "ns2.example.com".to_string()],
            status: "active".to_string(),
        }
    }

    fn record(id: &str, content: &str) -> DnsRecord {
        DnsRecord {
            id: id.to_string(),
            name: "www.example.com".to_string(),
            ttl: 300,
            record_type: "A".to_string(),
            proxied: false,
            content: content.to_string(),
        }
    }

    fn render(
        format: OutputFormat,
        print: impl Fn(&dyn PrettyPrinter, &mut Vec<u8>) -> io::Result<()>,
    ) -> String {
        let mut out = Vec::new();
        print(&*format.printer(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_zones() {
        let text = render(OutputFormat::Text, |p, out| p.zones_list(out, &[zone()]));
        assert_eq!(
            text,
            "ID: z1\nName: example.com\nName Servers: ns1.example.com, ns2.example.com\nStatus: active\n"
        );
    }

    #[test]
    fn text_records_are_separated() {
        let records = [record("1", "192.0.2.1"), record("2", "192.0.2.2")];
        let text = render(OutputFormat::Text, |p, out| p.records_list(out, &records));
        assert!(text.starts_with("ID: 1\nName: www.example.com\nType: A\nTTL: 300\n"));
        assert!(text.contains("Content: 192.0.2.1\n\nID: 2\n"));
        assert!(text.ends_with("Content: 192.0.2.2\n"));
    }

    #[test]
    fn json_is_one_line() {
        let text = render(OutputFormat::Json, |p, out| p.record(out, &record("1", "192.0.2.1")));
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "A");
        assert_eq!(value["content"], "192.0.2.1");

        let text = render(OutputFormat::Json, |p, out| p.zones_list(out, &[zone()]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name_servers"][1], "ns2.example.com");
    }

    #[test]
    fn none_prints_nothing() {
        let text = render(OutputFormat::None, |p, out| {
            p.zones_list(out, &[zone()])?;
            p.records_list(out, &[record("1", "192.0.2.1")])?;
            p.record(out, &record("1", "192.0.2.1"))
        });
        assert!(text.is_empty());
    }
}
