//! 对话检索页
//!
//! 详情是该句在剧情脚本中的引用位置列表，自带分页：
//! 详情打开时 Alt+N/P 翻的是引用页而不是检索结果页。

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use hsrdb_core::enums::nickname;
use hsrdb_core::markup;
use hsrdb_core::types::{DialogueRow, DomainDetail, StoryRef};
use hsrdb_core::Lang;

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::components::markup as markup_view;
use crate::view::theme::colors;

use super::{kv_line, render_search_scaffold, section_line};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.data_lang;
    render_search_scaffold(
        &app.dialogues,
        frame,
        area,
        Some(order_line(app)),
        |row, width| row_item(row, lang, width),
        t().detail.refs_title,
        |payload| detail_lines(payload, lang),
    );
}

/// 排序行：Alt+1 切换句子 ID 升序 / 降序
fn order_line(app: &App) -> Line<'static> {
    let texts = t();
    let c = colors();
    let label = if app.dialogues.filter_value("order") == "desc" {
        texts.search.order_desc
    } else {
        texts.search.order_asc
    };
    Line::from(vec![
        Span::styled(
            format!("{}: ", texts.search.order),
            Style::default().fg(c.muted),
        ),
        Span::styled("[1] ", Style::default().fg(c.highlight)),
        Span::styled(label, Style::default().fg(c.fg)),
    ])
}

fn row_item(row: &DialogueRow, lang: Lang, width: usize) -> ListItem<'static> {
    let speaker = row.speaker.clone().unwrap_or_default();
    let text = row
        .text
        .as_deref()
        .map(|raw| markup::render(raw, nickname(lang)).plain_text().replace('\n', " "))
        .unwrap_or_default();
    let line = if speaker.is_empty() {
        text
    } else {
        format!("{speaker}: {text}")
    };
    ListItem::new(super::truncate_width(&line, width))
}

fn detail_lines(payload: &DomainDetail, lang: Lang) -> Vec<Line<'static>> {
    let DomainDetail::Dialogue(refs) = payload else {
        return Vec::new();
    };
    let texts = t();
    let c = colors();
    let mut lines: Vec<Line> = Vec::new();

    for item in &refs.items {
        lines.extend(ref_lines(item, lang));
        lines.push(Line::default());
    }

    if refs.items.is_empty() {
        lines.push(Line::from(Span::styled(
            texts.common.no_results,
            Style::default().fg(c.muted),
        )));
    }

    lines.push(Line::from(Span::styled(
        fill(
            texts.pager.line,
            &[
                ("page", refs.page.to_string()),
                ("pages", refs.total_pages.to_string()),
                ("total", refs.total.to_string()),
            ],
        ),
        Style::default().fg(c.muted),
    )));
    lines
}

fn ref_lines(item: &StoryRef, lang: Lang) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(ref path) = item.source_path {
        lines.push(section_line(path));
    }
    if let Some(ref task_type) = item.task_type {
        lines.push(kv_line("·", task_type.clone()));
    }
    let speaker = item.speaker.clone().unwrap_or_default();
    if !speaker.is_empty() {
        lines.push(kv_line("»", speaker));
    }
    if let Some(ref text) = item.text {
        lines.extend(markup_view::render_lines(text, nickname(lang)));
    }
    lines
}
