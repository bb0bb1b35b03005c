//! 弹窗组件
//!
//! 所有弹窗都画在主布局之上的居中区域。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::{state::Modal, App};
use crate::view::theme::{colors, Styles};

/// 渲染当前活动的弹窗（没有弹窗时什么都不画）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::TermLookup {
            term,
            reply,
            loading,
            error,
            ..
        } => {
            let nick = hsrdb_core::enums::nickname(app.data_lang);
            render_term_lookup(frame, term, reply.as_ref(), *loading, error.as_deref(), nick);
        }
        Modal::PageJump { input } => render_page_jump(frame, input),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn modal_block(title: &str) -> Block<'static> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg))
}

/// 词条解释弹窗
fn render_term_lookup(
    frame: &mut Frame,
    term: &str,
    reply: Option<&hsrdb_core::types::TermReply>,
    loading: bool,
    error: Option<&str>,
    nick: &str,
) {
    let texts = t();
    let c = colors();
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(&format!("{}: {}", texts.term.title, term));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if loading {
        lines.push(Line::from(Span::styled(
            texts.term.pending,
            Style::default().fg(c.muted),
        )));
    } else if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(c.error),
        )));
    } else if let Some(reply) = reply {
        if reply.is_fallback() {
            lines.push(Line::from(Span::styled(
                fill(
                    texts.term.fallback_notice,
                    &[("lang", reply.used_lang.display_name().to_string())],
                ),
                Style::default().fg(c.warning),
            )));
            lines.push(Line::default());
        }
        if reply.items.is_empty() {
            lines.push(Line::from(Span::styled(
                texts.term.empty,
                Style::default().fg(c.muted),
            )));
        }
        for hit in &reply.items {
            lines.push(Line::from(Span::styled("─".repeat(8), Style::default().fg(c.border))));
            lines.extend(super::markup::render_lines(&hit.text, nick));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// 页码跳转弹窗
fn render_page_jump(frame: &mut Frame, input: &str) {
    let texts = t();
    let c = colors();
    let area = centered_rect(40, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(texts.pager.jump_title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(c.highlight)),
            Span::styled(
                format!("{input}▌"),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            texts.pager.jump_hint,
            Style::default().fg(c.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(texts.help.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section_style = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);
    let body_style = Style::default().fg(c.fg);

    let lines = vec![
        Line::from(Span::styled(texts.help.nav_section, section_style)),
        Line::from(Span::styled(texts.help.nav_lines, body_style)),
        Line::default(),
        Line::from(Span::styled(texts.help.search_section, section_style)),
        Line::from(Span::styled(texts.help.search_lines, body_style)),
        Line::default(),
        Line::from(Span::styled(texts.help.global_section, section_style)),
        Line::from(Span::styled(texts.help.global_lines, body_style)),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// 错误提示弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(c.error).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(c.fg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
