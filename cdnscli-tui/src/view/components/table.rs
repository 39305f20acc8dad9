//! 表格组件
//!
//! 把 [`TableView`] 画成 ratatui `Table`，列宽取自 `TableView::columns`。

use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::TableView;
use crate::view::theme::Theme;

/// 渲染表格，光标行高亮
pub fn render(table: &TableView, theme: &Theme, frame: &mut Frame, area: Rect) {
    let header = Row::new(table.columns.iter().map(|c| Cell::from(c.title)))
        .style(theme.table_header())
        .bottom_margin(0);

    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))).style(theme.text()));

    let widths = table.columns.iter().map(|c| Constraint::Length(c.width));

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border(table.focused)),
        )
        .row_highlight_style(theme.selected());

    let mut state = TableState::default();
    if !table.is_empty() {
        state.select(Some(table.cursor));
    }

    frame.render_stateful_widget(widget, area, &mut state);
}
