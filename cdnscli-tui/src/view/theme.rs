//! 主题和样式定义
//!
//! 主题是显式构造的值，由 `main` 创建后交给 [`App`](crate::model::App) 持有，
//! 视图函数通过 `app.theme` 读取，不存在全局主题状态。

use ratatui::style::{Color, Modifier, Style};

/// 主题颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub header: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub error: Color,
    pub muted: Color,
    pub hint_key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            header: Color::Rgb(246, 130, 31),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            error: Color::Rgb(244, 135, 113),
            muted: Color::Rgb(128, 128, 128),
            hint_key: Color::Yellow,
        }
    }

    /// 普通文本
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// 表格 / 弹窗边框
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// 标题栏
    pub fn header(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    /// 表头
    pub fn table_header(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// 选中行 / 选中项
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 错误文本
    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// 次要文本（提示、说明）
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// 快捷键
    pub fn hint_key(&self) -> Style {
        Style::default()
            .fg(self.hint_key)
            .add_modifier(Modifier::BOLD)
    }
}
