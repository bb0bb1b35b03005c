//! 物品检索页（含光锥）

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use hsrdb_core::enums::{localize, nickname};
use hsrdb_core::types::{DomainDetail, ItemRow};
use hsrdb_core::Lang;

use crate::i18n::t;
use crate::model::App;
use crate::view::components::markup;
use crate::view::theme::colors;

use super::{kv_line, render_search_scaffold, section_line};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.data_lang;
    let filter_line = filter_line(app, lang);
    render_search_scaffold(
        &app.items,
        frame,
        area,
        Some(filter_line),
        |row, _| row_item(row, lang),
        t().nav.item,
        |payload| detail_lines(payload, lang),
    );
}

/// 筛选行：Alt+1 稀有度、Alt+2 主类型、Alt+3 子类型
fn filter_line(app: &App, lang: Lang) -> Line<'static> {
    let texts = t();
    let c = colors();
    let panel = &app.items;

    let value = |key: &str, group: &str| -> String {
        let current = panel.filter_value(key);
        if current.is_empty() {
            texts.search.filter_all.to_string()
        } else {
            localize(group, current, lang).to_string()
        }
    };

    Line::from(vec![
        Span::styled(
            format!("{}: ", texts.search.filter),
            Style::default().fg(c.muted),
        ),
        Span::styled("[1] ", Style::default().fg(c.highlight)),
        Span::styled(value("rarity", "rarity"), Style::default().fg(c.fg)),
        Span::styled("  [2] ", Style::default().fg(c.highlight)),
        Span::styled(
            value("item_main_type", "item_main_type"),
            Style::default().fg(c.fg),
        ),
        Span::styled("  [3] ", Style::default().fg(c.highlight)),
        Span::styled(
            value("item_sub_type", "item_sub_type"),
            Style::default().fg(c.fg),
        ),
    ])
}

fn row_item(row: &ItemRow, lang: Lang) -> ListItem<'static> {
    let name = row.name.clone().unwrap_or_else(|| row.item_id.to_string());
    let rarity = row
        .rarity
        .as_deref()
        .map_or("", |code| localize("rarity", code, lang));
    let main_type = row
        .item_main_type
        .as_deref()
        .map_or("", |code| localize("item_main_type", code, lang));
    ListItem::new(format!("{name}  {rarity} {main_type}"))
}

fn detail_lines(payload: &DomainDetail, lang: Lang) -> Vec<Line<'static>> {
    let DomainDetail::Item(detail) = payload else {
        return Vec::new();
    };
    let texts = t();
    let nick = nickname(lang);
    let mut lines: Vec<Line> = Vec::new();

    let info = &detail.item;
    let name = info.name.clone().unwrap_or_else(|| info.item_id.to_string());
    lines.push(section_line(&name));

    let mut tags: Vec<&str> = Vec::new();
    if let Some(ref code) = info.rarity {
        tags.push(localize("rarity", code, lang));
    }
    if let Some(ref code) = info.item_main_type {
        tags.push(localize("item_main_type", code, lang));
    }
    if let Some(ref code) = info.item_sub_type {
        tags.push(localize("item_sub_type", code, lang));
    }
    if !tags.is_empty() {
        lines.push(Line::from(tags.join(" · ")));
    }

    if let Some(ref description) = info.description {
        if !description.is_empty() {
            lines.push(Line::default());
            lines.extend(markup::render_lines(description, nick));
        }
    }
    if let Some(ref bg_description) = info.bg_description {
        if !bg_description.is_empty() {
            lines.push(Line::default());
            lines.extend(markup::render_lines(bg_description, nick));
        }
    }

    if let Some(ref light_cone) = detail.light_cone {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.light_cone));
        if let Some(ref code) = light_cone.avatar_base_type {
            lines.push(Line::from(localize("avatar_base_type", code, lang).to_string()));
        }
        for level in &light_cone.levels {
            if let Some(ref skill_name) = level.skill_name {
                lines.push(kv_line(
                    &format!("S{}", level.level.unwrap_or(0)),
                    skill_name.clone(),
                ));
            }
            if let Some(ref skill_desc) = level.skill_desc {
                lines.extend(markup::render_lines(skill_desc, nick));
            }
        }
    }

    lines
}
