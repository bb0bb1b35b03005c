//! 首页：欢迎语 + 数据集统计横幅

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

use super::{kv_line, section_line};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            texts.home.welcome,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            texts.home.welcome_desc,
            Style::default().fg(c.fg),
        )),
        Line::default(),
    ];

    lines.push(section_line(texts.home.dataset_stats));

    if app.home.loading {
        lines.push(Line::from(Span::styled(
            texts.common.loading,
            Style::default().fg(c.muted),
        )));
    } else if let Some(ref error) = app.home.error {
        lines.push(Line::from(Span::styled(
            format!("{} ({error})", texts.home.stats_unavailable),
            Style::default().fg(c.warning),
        )));
    } else if let Some(ref stats) = app.home.stats {
        if let Some(ref build_at) = stats.build_at {
            lines.push(kv_line(texts.home.build_at, build_at.clone()));
        }
        for (table, count) in &stats.table_counts {
            lines.push(kv_line(table, count.to_string()));
        }
        lines.push(kv_line(texts.home.monsters, stats.monster_count.to_string()));
    } else {
        lines.push(Line::from(Span::styled(
            texts.home.stats_unavailable,
            Style::default().fg(c.muted),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        texts.home.quick_start,
        Style::default().fg(c.muted),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
