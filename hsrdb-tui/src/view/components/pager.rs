//! 分页条组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use hsrdb_core::pagination::PageWindow;

use crate::i18n::{fill, t};
use crate::view::theme::Styles;

/// 渲染一行分页信息：`第 x/y 页 · 共 n 条`
pub fn render(window: &PageWindow, frame: &mut Frame, area: Rect) {
    let line = fill(
        t().pager.line,
        &[
            ("page", window.page.to_string()),
            ("pages", window.total_pages.to_string()),
            ("total", window.total.to_string()),
        ],
    );
    let paragraph = Paragraph::new(Line::from(Span::styled(line, Styles::hint_desc())));
    frame.render_widget(paragraph, area);
}
