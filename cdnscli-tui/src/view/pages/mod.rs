//! 表格页面：同一时刻只显示拥有焦点的一张表

pub mod records;
pub mod zones;
