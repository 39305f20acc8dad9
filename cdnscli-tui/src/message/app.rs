//! 应用主消息枚举

use cdnscli_provider::{DnsRecord, ProviderError, Zone};

use super::{PopupMessage, PopupOutcome, TableMessage};

/// Provider 调用结果
pub type ProviderResult<T> = Result<T, ProviderError>;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 终端尺寸变化（宽、高）
    Resize(u16, u16),

    /// 动画时钟
    Tick,

    /// 表格相关消息（无弹窗时的按键）
    Table(TableMessage),

    /// 弹窗打开时的按键
    Popup(PopupMessage),

    /// 弹窗结束（保存 / 取消 / 确认）
    PopupClosed(PopupOutcome),

    /// 切换到 Records 表（Zones 表上按 Enter）
    SwitchToRecords,

    // === 后台任务返回 ===
    /// zone 列表
    ZonesLoaded(ProviderResult<Vec<Zone>>),

    /// 某个 zone 的全部记录
    RecordsLoaded {
        zone: String,
        result: ProviderResult<Vec<DnsRecord>>,
    },

    /// 新建记录完成（zone 为发起请求时的 zone）
    RecordCreated {
        zone: String,
        result: ProviderResult<DnsRecord>,
    },

    /// 更新记录完成
    ///
    /// 部分 Provider 的记录 ID 由内容生成，更新后 ID 会变，
    /// 因此带上请求时的 ID 用来定位缓存条目。
    RecordUpdated {
        zone: String,
        previous_id: String,
        result: ProviderResult<DnsRecord>,
    },

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

impl AppMessage {
    /// 是否由用户按键产生
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Table(_) | Self::Popup(_))
    }
}
