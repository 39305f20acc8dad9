//! 表格视图状态
//!
//! Zones 表与 Records 表共用同一结构：行数据、光标、焦点和列宽。

/// 表格列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
}

impl Column {
    pub const fn new(title: &'static str, width: u16) -> Self {
        Self { title, width }
    }
}

/// 表格视图
#[derive(Debug, Clone, Default)]
pub struct TableView {
    /// 列定义（宽度在 resize 时重算）
    pub columns: Vec<Column>,
    /// 行数据，每行与 `columns` 等长
    pub rows: Vec<Vec<String>>,
    /// 当前选中行
    pub cursor: usize,
    /// 是否拥有焦点
    pub focused: bool,
    /// 可见高度（行数，含表头）
    pub height: u16,
}

impl TableView {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// 上移一行（不回绕）
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 下移一行（停在最后一行）
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    /// 当前选中的行
    pub fn selected_row(&self) -> Option<&[String]> {
        self.rows.get(self.cursor).map(Vec::as_slice)
    }

    /// 当前选中行的某一列
    pub fn selected_cell(&self, column: usize) -> Option<&str> {
        self.selected_row()
            .and_then(|row| row.get(column))
            .map(String::as_str)
    }

    /// 替换全部行，光标夹紧到有效范围
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    /// 依次设置列宽；多出的宽度被忽略
    pub fn set_widths(&mut self, widths: &[u16]) {
        for (column, width) in self.columns.iter_mut().zip(widths) {
            column.width = *width;
        }
    }

    pub fn width_of(&self, column: usize) -> Option<u16> {
        self.columns.get(column).map(|c| c.width)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> TableView {
        let mut table = TableView::new(vec![Column::new("Name", 10)]);
        table.set_rows((0..rows).map(|i| vec![format!("row{i}")]).collect());
        table
    }

    #[test]
    fn cursor_is_clamped() {
        let mut t = table(2);
        t.move_up();
        assert_eq!(t.cursor, 0);
        t.move_down();
        t.move_down();
        t.move_down();
        assert_eq!(t.cursor, 1);
        assert_eq!(t.selected_cell(0), Some("row1"));

        t.set_rows(vec![vec!["only".to_string()]]);
        assert_eq!(t.cursor, 0);
    }

    #[test]
    fn empty_table_has_no_selection() {
        let mut t = table(0);
        t.move_down();
        assert_eq!(t.cursor, 0);
        assert!(t.selected_row().is_none());
    }
}
