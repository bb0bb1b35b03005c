//! 敌人检索页

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use hsrdb_core::enums::{localize, nickname};
use hsrdb_core::types::{DomainDetail, MonsterRow};
use hsrdb_core::Lang;

use crate::i18n::t;
use crate::model::App;
use crate::view::components::markup;
use crate::view::theme::colors;

use super::{fmt_stat, kv_line, render_search_scaffold, section_line};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.data_lang;
    let filter_line = filter_line(app, lang);
    render_search_scaffold(
        &app.monsters,
        frame,
        area,
        Some(filter_line),
        |row, _| row_item(row, lang),
        t().nav.monster,
        |payload| detail_lines(payload, lang),
    );
}

/// 筛选行：Alt+1 级别、Alt+2 弱点
fn filter_line(app: &App, lang: Lang) -> Line<'static> {
    let texts = t();
    let c = colors();
    let panel = &app.monsters;

    let rank = {
        let current = panel.filter_value("rank");
        if current.is_empty() {
            texts.search.filter_all.to_string()
        } else {
            localize("rank", current, lang).to_string()
        }
    };
    let weakness = {
        let current = panel.filter_value("weakness");
        if current.is_empty() {
            texts.search.filter_all.to_string()
        } else {
            localize("damage_type", current, lang).to_string()
        }
    };

    Line::from(vec![
        Span::styled(
            format!("{}: ", texts.search.filter),
            Style::default().fg(c.muted),
        ),
        Span::styled("[1] ", Style::default().fg(c.highlight)),
        Span::styled(rank, Style::default().fg(c.fg)),
        Span::styled("  [2] ", Style::default().fg(c.highlight)),
        Span::styled(weakness, Style::default().fg(c.fg)),
    ])
}

fn row_item(row: &MonsterRow, lang: Lang) -> ListItem<'static> {
    let id = row
        .monster_id
        .or(row.monster_template_id)
        .map_or_else(String::new, |id| id.to_string());
    let name = row.name.clone().unwrap_or(id);
    let rank = row
        .rank
        .as_deref()
        .map_or("", |code| localize("rank", code, lang));
    let weaknesses: Vec<&str> = row
        .stance_weak_list
        .iter()
        .map(|code| localize("damage_type", code, lang))
        .collect();
    ListItem::new(format!("{name}  {rank}  {}", weaknesses.join("/")))
}

fn detail_lines(payload: &DomainDetail, lang: Lang) -> Vec<Line<'static>> {
    let DomainDetail::Monster(detail) = payload else {
        return Vec::new();
    };
    let texts = t();
    let nick = nickname(lang);
    let mut lines: Vec<Line> = Vec::new();

    let info = &detail.monster;
    let name = info.name.clone().unwrap_or_default();
    lines.push(section_line(&name));
    if let Some(ref code) = info.rank {
        lines.push(Line::from(localize("rank", code, lang).to_string()));
    }
    if let Some(ref introduction) = info.introduction {
        if !introduction.is_empty() {
            lines.push(Line::default());
            lines.extend(markup::render_lines(introduction, nick));
        }
    }

    if !info.stance_weak_list.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.weaknesses));
        let weaknesses: Vec<&str> = info
            .stance_weak_list
            .iter()
            .map(|code| localize("damage_type", code, lang))
            .collect();
        lines.push(Line::from(format!("  {}", weaknesses.join(" / "))));
    }

    if !info.damage_type_resistance.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.resistances));
        for resistance in &info.damage_type_resistance {
            let damage = resistance
                .damage_type
                .as_deref()
                .map_or("", |code| localize("damage_type", code, lang));
            let value = resistance
                .value
                .map_or_else(String::new, |v| format!("{:.0}%", v * 100.0));
            lines.push(kv_line(damage, value));
        }
    }

    lines.push(Line::default());
    lines.push(section_line(texts.detail.base_stats));
    let base = &info.base_stats;
    lines.push(Line::from(format!(
        "  HP {}  ATK {}  DEF {}  SPD {}  TGH {}",
        fmt_stat(base.hp_base),
        fmt_stat(base.attack_base),
        fmt_stat(base.defence_base),
        fmt_stat(base.speed_base),
        fmt_stat(base.stance_base),
    )));

    lines.push(section_line(texts.detail.scaled_stats));
    let scaled = &info.scaled_stats;
    lines.push(Line::from(format!(
        "  HP {}  ATK {}  DEF {}  SPD {}",
        fmt_stat(scaled.hp),
        fmt_stat(scaled.attack),
        fmt_stat(scaled.defence),
        fmt_stat(scaled.speed),
    )));

    if !detail.abilities.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.abilities));
        for ability in &detail.abilities {
            if let Some(ref text) = ability.text {
                lines.extend(markup::render_lines(text, nick));
            }
        }
    }

    if !detail.skills.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.skills));
        for skill in &detail.skills {
            let skill_name = skill.name.clone().unwrap_or_else(|| skill.skill_id.to_string());
            let damage = skill
                .damage_type
                .as_deref()
                .map_or("", |code| localize("damage_type", code, lang));
            lines.push(kv_line(&skill_name, damage.to_string()));
            if let Some(ref description) = skill.description {
                lines.extend(markup::render_lines(description, nick));
            }
        }
    }

    lines
}
