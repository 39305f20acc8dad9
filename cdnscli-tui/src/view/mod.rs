//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                                 View 层                                     │
//！│                                                                             │
//！│   ┌───────────────────────────── frame.area() ─────────────────────────┐    │
//！│   │  header     CloudFlare DNS CLI | <provider>            (3 行)      │    │
//！│   ├────────────────────────────────────────────────────────────────────┤    │
//！│   │  body       Zones 表 或 Records 表（取决于焦点）                   │    │
//！│   │                       ┌──────────────┐                             │    │
//！│   │                       │    popup     │ ◀── overlay 居中叠加        │    │
//！│   │                       └──────────────┘                             │    │
//！│   ├────────────────────────────────────────────────────────────────────┤    │
//！│   │  status     Error / Loading ●∙∙ / Loaded N records     (1 行)      │    │
//！│   │  menu       [↑/↓/←/→] Navigate | [Enter] Show | ...    (1 行)      │    │
//！│   └────────────────────────────────────────────────────────────────────┘    │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/view/mod.rs
//! View 层：只读地把 App 画到终端
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         pub mod layout;         // 主布局与列宽算法
//!         mod overlay;            // 居中叠加
//!         mod components;         // header / statusbar / menu / popup / table
//!         mod pages;              // zones / records
//!         pub mod theme;          // 配色
//!
//!
//!     叠加顺序：
//!         1. 基础界面（标题、表格、状态栏、菜单）
//!         2. 弹窗的基础编辑视图（字段表单或 NS 列表）
//!         3. 子编辑器小框（文本 / 布尔 / 类型）
//!
//!     每一层都先 Clear 自己的区域，所以下层内容不会透出。
//!

mod components;
pub mod layout;
mod overlay;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::{App, Focus};

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let areas = layout::main_layout(area, layout::table_height(area.height));

    components::header::render(app, frame, areas.header);

    match app.focus() {
        Focus::Zones => pages::zones::render(app, frame, areas.body),
        Focus::Records => pages::records::render(app, frame, areas.body),
    }

    components::statusbar::render(app, frame, areas.status);
    components::menu::render(app, frame, areas.menu);

    // 弹窗（在最上层）
    components::popup::render(app, frame);
}

#[cfg(test)]
mod tests {
    use cdnscli_provider::DnsRecord;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::model::{Popup, PopupTarget, SubEditor, PopupKind, RECORD_FIELDS};
    use crate::view::theme::Theme;

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with_zone() -> App {
        let mut app = App::new("Memory", Theme::default());
        app.zones.set_rows(vec![vec![
            "example.com".to_string(),
            "ns1.example.com, ns2.example.com".to_string(),
        ]]);
        app.cache.replace(
            "example.com",
            vec![DnsRecord {
                id: "r1".to_string(),
                name: "www".to_string(),
                ttl: 300,
                record_type: "A".to_string(),
                proxied: true,
                content: "192.0.2.1".to_string(),
            }],
        );
        app
    }

    #[test]
    fn zones_screen() {
        let screen = text(&draw(&app_with_zone()));
        assert!(screen.contains("CloudFlare DNS CLI | Memory"));
        assert!(screen.contains("example.com"));
        assert!(screen.contains("ns1.example.com, ns2.example.com"));
        assert!(screen.contains("Loaded 1 zone"));
        assert!(!screen.contains("[c] Create"));
    }

    #[test]
    fn records_screen() {
        let mut app = app_with_zone();
        app.set_focus(Focus::Records);
        app.sync_record_rows();

        let screen = text(&draw(&app));
        assert!(screen.contains("www"));
        assert!(screen.contains("192.0.2.1"));
        assert!(screen.contains("✓"));
        assert!(screen.contains("Loaded 1 record"));
        assert!(screen.contains("[c] Create"));
    }

    #[test]
    fn popup_is_layered_over_base() {
        let mut app = app_with_zone();
        app.set_focus(Focus::Records);
        app.sync_record_rows();
        let mut popup = Popup::fields(
            "Resource record editing",
            &RECORD_FIELDS,
            ["www", "300", "A", "true", "192.0.2.1"].map(String::from).to_vec(),
        );
        if let PopupKind::Fields(form) = &mut popup.kind {
            form.next_field();
            form.next_field();
            form.sub = Some(SubEditor::Type(0));
        }
        app.open_popup(
            popup,
            Some(PopupTarget::UpdateRecord {
                zone: "example.com".to_string(),
                name: "www".to_string(),
            }),
        );

        let screen = text(&draw(&app));
        // 类型选择框盖住表单中间（含标题），表单左侧仍可见
        assert!(screen.contains("Name: www"));
        assert!(screen.contains("[↑/↓/←/→] Navigate"));
        assert!(screen.contains("Select type"));
        assert!(screen.contains("CAA"));
        // 基础界面仍在弹窗之外可见
        assert!(screen.contains("CloudFlare DNS CLI"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app_with_zone();
        app.open_popup(Popup::name_servers("Zone: example.com - NameServers", vec![]), None);
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }
}
