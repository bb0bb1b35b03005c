//! 设置页：界面语言、数据语言、主题

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::{current_language, t};
use crate::model::state::SettingsRow;
use crate::model::App;
use crate::view::theme::{colors, current_theme_index};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut lines: Vec<Line> = vec![Line::default()];

    for (i, row) in SettingsRow::ALL.iter().enumerate() {
        let is_selected = i == app.settings.selected;
        let (label, value) = match row {
            SettingsRow::UiLanguage => (
                texts.settings.ui_language,
                current_language().display_name().to_string(),
            ),
            SettingsRow::DataLanguage => (
                texts.settings.data_language,
                app.data_lang.display_name().to_string(),
            ),
            SettingsRow::Theme => (
                texts.settings.theme,
                if current_theme_index() == 0 {
                    texts.settings.theme_dark.to_string()
                } else {
                    texts.settings.theme_light.to_string()
                },
            ),
        };

        let marker = if is_selected { "▶ " } else { "  " };
        let label_style = if is_selected {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{label}"), label_style),
            Span::styled("  ◀ ", Style::default().fg(c.muted)),
            Span::styled(value, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
            Span::styled(" ▶", Style::default().fg(c.muted)),
        ]));
        lines.push(Line::default());
    }

    // 只读信息：数据服务地址
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}: ", texts.settings.api_base),
            Style::default().fg(c.muted),
        ),
        Span::styled(app.api_base.clone(), Style::default().fg(c.fg)),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("  {}", texts.settings.toggle_hint),
        Style::default().fg(c.muted),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}
