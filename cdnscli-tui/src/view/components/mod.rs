//! 可复用的界面组件

pub mod header;
pub mod menu;
pub mod popup;
pub mod statusbar;
pub mod table;
