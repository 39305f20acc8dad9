//! 副作用描述
//!
//! Update 层不直接做 I/O，而是返回 Command，由 Backend 层的
//! `ProviderService` 在 tokio 运行时上执行，结果以 AppMessage 送回主循环。

use cdnscli_provider::{CreateRecordParams, DnsRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// 什么都不做
    #[default]
    None,
    /// 多个命令，彼此并发执行
    Batch(Vec<Command>),
    /// 列出全部 zone
    LoadZones,
    /// 拉取某个 zone 的全部记录
    LoadRecords { zone: String },
    /// 新建记录
    CreateRecord {
        zone: String,
        params: CreateRecordParams,
    },
    /// 更新记录
    UpdateRecord { zone: String, record: DnsRecord },
}

impl Command {
    /// 合并两个命令
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::None, c) | (c, Self::None) => c,
            (Self::Batch(mut a), Self::Batch(b)) => {
                a.extend(b);
                Self::Batch(a)
            }
            (Self::Batch(mut a), c) => {
                a.push(c);
                Self::Batch(a)
            }
            (a, b) => Self::Batch(vec![a, b]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_flattens() {
        let zones = Command::LoadZones;
        let a = Command::LoadRecords {
            zone: "a".to_string(),
        };
        assert_eq!(Command::None.and(zones.clone()), zones);
        assert_eq!(
            zones.clone().and(a.clone()).and(Command::None).and(a.clone()),
            Command::Batch(vec![zones, a.clone(), a])
        );
    }
}
