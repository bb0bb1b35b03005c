//! 底部状态栏组件
//!
//! 左侧显示当前上下文可用的快捷键提示，右侧显示临时状态消息。

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use hsrdb_core::types::Domain;

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = build_hints(app);

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::hint_desc()));
        }
        spans.push(Span::styled(format!(" {key} "), Styles::hint_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::hint_desc()));
    }

    // 右侧状态消息
    if let Some(ref message) = app.status_message {
        spans.push(Span::styled("  ▸ ", Styles::hint_desc()));
        spans.push(Span::styled(message.clone(), Styles::hint_key()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据焦点和页面组合快捷键提示
fn build_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();

    // 弹窗打开时提示最简
    if app.modal.is_open() {
        return vec![("Esc", texts.hints.back), ("Enter", texts.common.confirm)];
    }

    let mut hints: Vec<(&'static str, &'static str)> = Vec::new();

    if app.focus.is_navigation() {
        hints.push(("↑↓", texts.hints.select));
        hints.push(("Enter", texts.hints.open));
    } else {
        match &app.current_page {
            Page::Domain(domain) => {
                let detail_open = match domain {
                    Domain::Avatar => app.avatars.detail.is_open(),
                    Domain::Dialogue => app.dialogues.detail.is_open(),
                    Domain::Mission => app.missions.detail.is_open(),
                    Domain::Item => app.items.detail.is_open(),
                    Domain::Monster => app.monsters.detail.is_open(),
                };
                hints.push(("Enter", texts.hints.search));
                if detail_open {
                    hints.push(("↑↓", texts.hints.scroll));
                } else {
                    hints.push(("↑↓", texts.hints.select));
                }
                hints.push(("Alt+D", texts.hints.detail));
                hints.push(("Alt+T", texts.hints.glossary));
                hints.push(("Alt+N/P", texts.hints.pages));
                hints.push(("Alt+G", texts.hints.jump));
                if domain.has_facets() {
                    hints.push(("Alt+1/2/3", texts.hints.filter));
                } else if *domain == Domain::Dialogue {
                    hints.push(("Alt+1", texts.hints.order));
                }
            }
            Page::Settings => {
                hints.push(("↑↓", texts.hints.select));
                hints.push(("←→", texts.hints.toggle));
            }
            Page::Home => {}
        }
    }

    hints.push(("Tab", texts.hints.toggle));
    hints.push(("Esc", texts.hints.back));
    hints.push(("F1", texts.hints.help));
    hints.push(("Alt+Q", texts.hints.quit));
    hints
}
