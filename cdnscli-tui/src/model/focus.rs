//! 焦点状态定义

/// 当前拥有焦点的表格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Zones 表
    #[default]
    Zones,
    /// 当前 zone 的 Records 表
    Records,
}

impl Focus {
    /// 是否是 Zones 表
    pub fn is_zones(self) -> bool {
        matches!(self, Self::Zones)
    }

    /// 是否是 Records 表
    pub fn is_records(self) -> bool {
        matches!(self, Self::Records)
    }
}
