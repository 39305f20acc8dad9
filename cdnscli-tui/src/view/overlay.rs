//! 弹窗叠加
//!
//! 背景（主界面或弹窗的基础编辑视图）照常绘制，
//! 前景框居中后先用 `Clear` 擦除所在区域再绘制，两层即完成合成。

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// 边框与左右内边距占用的宽度
const FRAME_WIDTH: u16 = 2 + 2;
/// 上下边框占用的高度
const FRAME_HEIGHT: u16 = 2;

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 一行文本的显示宽度
pub fn line_width(line: &Line<'_>) -> u16 {
    let width: usize = line.spans.iter().map(|span| span.content.width()).sum();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// 最长行的显示宽度，不低于 `min`
pub fn fit_width(lines: &[Line<'_>], min: u16) -> u16 {
    lines.iter().map(line_width).fold(min, u16::max)
}

/// 在 `area` 中央绘制一个带边框的前景框，内容区宽度为 `inner_width`
///
/// 返回前景框实际占用的区域。
pub fn render_box(
    frame: &mut Frame,
    area: Rect,
    lines: Vec<Line<'_>>,
    inner_width: u16,
    border: Style,
) -> Rect {
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(FRAME_HEIGHT);
    let rect = centered_rect(inner_width.saturating_add(FRAME_WIDTH), height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
    rect
}
