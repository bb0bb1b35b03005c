//! 页面渲染
//!
//! 每个导航项一个页面模块。五个检索页共用 `render_search_scaffold`
//! 骨架，域间差异只剩行格式化和详情正文。

pub mod avatar;
pub mod dialogue;
pub mod home;
pub mod item;
pub mod mission;
pub mod monster;
pub mod settings;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use hsrdb_core::types::DomainDetail;

use crate::i18n::t;
use crate::model::state::SearchPanel;
use crate::view::components::pager;
use crate::view::theme::{colors, Styles};

/// 检索页通用骨架：输入行 + 可选筛选行 + 结果区 + 底部分页/错误行。
/// 详情面板打开时结果区左右分栏，右侧为详情。
pub(super) fn render_search_scaffold<I>(
    panel: &SearchPanel<I>,
    frame: &mut Frame,
    area: Rect,
    filter_line: Option<Line<'static>>,
    row: impl Fn(&I, usize) -> ListItem<'static>,
    detail_title: &str,
    detail_body: impl Fn(&DomainDetail) -> Vec<Line<'static>>,
) {
    let has_filter = filter_line.is_some();
    let mut constraints = vec![Constraint::Length(1)];
    if has_filter {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(1));
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let query_area = rows[0];
    let body_area = rows[if has_filter { 2 } else { 1 }];
    let footer_area = rows[if has_filter { 3 } else { 2 }];

    render_query_line(panel, frame, query_area);
    if let Some(line) = filter_line {
        frame.render_widget(Paragraph::new(line), rows[1]);
    }

    if panel.detail.is_open() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(body_area);
        render_result_list(panel, frame, columns[0], &row);
        render_detail(panel, frame, columns[1], detail_title, &detail_body);
    } else {
        render_result_list(panel, frame, body_area, &row);
    }

    render_footer(panel, frame, footer_area);
}

/// 关键词输入行
fn render_query_line<I>(panel: &SearchPanel<I>, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut spans = vec![
        Span::styled(
            format!("{} ❯ ", texts.search.prompt),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
    ];
    if panel.input.is_empty() && !panel.has_searched() {
        spans.push(Span::styled(
            texts.search.placeholder,
            Style::default().fg(c.muted),
        ));
    } else {
        spans.push(Span::styled(
            panel.input.clone(),
            Style::default().fg(c.fg),
        ));
        spans.push(Span::styled("▌", Style::default().fg(c.highlight)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 结果列表
fn render_result_list<I>(
    panel: &SearchPanel<I>,
    frame: &mut Frame,
    area: Rect,
    row: &impl Fn(&I, usize) -> ListItem<'static>,
) {
    let texts = t();
    let c = colors();

    let Some(ref result) = panel.result else {
        let message = if panel.loading {
            texts.common.loading
        } else {
            texts.home.quick_start
        };
        let paragraph = Paragraph::new(message).style(Style::default().fg(c.muted));
        frame.render_widget(paragraph, area);
        return;
    };

    if result.items.is_empty() {
        let paragraph =
            Paragraph::new(texts.common.no_results).style(Style::default().fg(c.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width as usize;
    let items: Vec<ListItem> = result.items.iter().map(|item| row(item, width)).collect();

    let list = List::new(items).highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(panel.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// 详情面板（右侧分栏）
fn render_detail<I>(
    panel: &SearchPanel<I>,
    frame: &mut Frame,
    area: Rect,
    title: &str,
    body: &impl Fn(&DomainDetail) -> Vec<Line<'static>>,
) {
    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = if panel.detail.loading {
        vec![Line::from(Span::styled(
            texts.detail.loading,
            Style::default().fg(c.muted),
        ))]
    } else if let Some(ref error) = panel.detail.error {
        vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(c.error),
        ))]
    } else if let Some(ref payload) = panel.detail.payload {
        body(payload)
    } else {
        Vec::new()
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((panel.detail.scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// 底部行：错误优先，其次分页信息，加载中显示提示
fn render_footer<I>(panel: &SearchPanel<I>, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    if let Some(ref error) = panel.error {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!("{}: {}", texts.common.error, error),
            Style::default().fg(c.error),
        )));
        frame.render_widget(paragraph, area);
        return;
    }

    if panel.loading {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            texts.common.loading,
            Style::default().fg(c.muted),
        )));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(window) = panel.page_window() {
        pager::render(&window, frame, area);
    }
}

/// 详情正文里的小节标题行
pub(super) fn section_line(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

/// 键值对行（详情正文通用）
pub(super) fn kv_line(key: &str, value: String) -> Line<'static> {
    let c = colors();
    Line::from(vec![
        Span::styled(format!("{key}: "), Style::default().fg(c.muted)),
        Span::styled(value, Style::default().fg(c.fg)),
    ])
}

/// 可选浮点数格式化：缺失显示为 "-"
pub(super) fn fmt_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

/// 按显示宽度截断一行文本（CJK 宽字符占两列），超出以 … 结尾
pub(super) fn truncate_width(text: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_width("hello", 10), "hello");
    }

    #[test]
    fn cjk_counts_double_width() {
        // 每个汉字占两列，8 列只装得下三个字加省略号
        assert_eq!(truncate_width("开拓者列车组", 8), "开拓者…");
    }

    #[test]
    fn fmt_stat_renders_missing_as_dash() {
        assert_eq!(fmt_stat(None), "-");
        assert_eq!(fmt_stat(Some(126.72)), "126.7");
    }
}
