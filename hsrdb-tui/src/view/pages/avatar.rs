//! 角色检索页

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::ListItem,
    Frame,
};

use hsrdb_core::enums::{localize, nickname};
use hsrdb_core::types::{AvatarRow, DomainDetail};
use hsrdb_core::Lang;

use crate::i18n::t;
use crate::model::App;
use crate::view::components::markup;

use super::{fmt_stat, kv_line, render_search_scaffold, section_line};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.data_lang;
    render_search_scaffold(
        &app.avatars,
        frame,
        area,
        None,
        |row, _| row_item(row, lang),
        t().nav.avatar,
        |payload| detail_lines(payload, lang),
    );
}

fn row_item(row: &AvatarRow, lang: Lang) -> ListItem<'static> {
    let name = row.name.clone().unwrap_or_else(|| row.avatar_id.to_string());
    let rarity = row
        .rarity
        .as_deref()
        .map_or("", |code| localize("rarity", code, lang));
    let damage = row
        .damage_type
        .as_deref()
        .map_or("", |code| localize("damage_type", code, lang));
    let path = row
        .avatar_base_type
        .as_deref()
        .map_or("", |code| localize("avatar_base_type", code, lang));
    ListItem::new(format!("{name}  {rarity} {damage} {path}"))
}

fn detail_lines(payload: &DomainDetail, lang: Lang) -> Vec<Line<'static>> {
    let DomainDetail::Avatar(detail) = payload else {
        return Vec::new();
    };
    let texts = t();
    let nick = nickname(lang);
    let mut lines: Vec<Line> = Vec::new();

    let info = &detail.avatar;
    let name = info.name.clone().unwrap_or_else(|| info.avatar_id.to_string());
    lines.push(section_line(&name));
    if let Some(ref full_name) = info.full_name {
        if Some(full_name) != info.name.as_ref() {
            lines.push(kv_line("≡", full_name.clone()));
        }
    }
    let mut tags: Vec<&str> = Vec::new();
    if let Some(ref code) = info.rarity {
        tags.push(localize("rarity", code, lang));
    }
    if let Some(ref code) = info.damage_type {
        tags.push(localize("damage_type", code, lang));
    }
    if let Some(ref code) = info.avatar_base_type {
        tags.push(localize("avatar_base_type", code, lang));
    }
    if !tags.is_empty() {
        lines.push(Line::from(tags.join(" · ")));
    }

    if !detail.promotions.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.promotions));
        for promo in &detail.promotions {
            lines.push(Line::from(format!(
                "  {}  Lv≤{}  HP {} (+{})  ATK {} (+{})  DEF {} (+{})",
                promo.promotion.unwrap_or(0),
                promo.max_level.unwrap_or(0),
                fmt_stat(promo.hp_base),
                fmt_stat(promo.hp_add),
                fmt_stat(promo.attack_base),
                fmt_stat(promo.attack_add),
                fmt_stat(promo.defence_base),
                fmt_stat(promo.defence_add),
            )));
        }
    }

    if !detail.level_checkpoints.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.level_checkpoints));
        for stat in &detail.level_checkpoints {
            lines.push(Line::from(format!(
                "  {} {}  HP {}  ATK {}  DEF {}  SPD {}",
                texts.detail.level,
                stat.level,
                fmt_stat(stat.hp),
                fmt_stat(stat.attack),
                fmt_stat(stat.defence),
                fmt_stat(stat.speed),
            )));
        }
    }

    if !detail.skills.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.skills));
        for skill in &detail.skills {
            let name = skill.name.clone().unwrap_or_else(|| skill.skill_id.to_string());
            let tag = skill.tag.clone().unwrap_or_default();
            lines.push(kv_line(&name, tag));
            for level in &skill.levels {
                if let Some(ref description) = level.description {
                    lines.push(Line::from(format!("  Lv{}:", level.level)));
                    lines.extend(markup::render_lines(description, nick));
                }
            }
        }
    }

    if !detail.ranks.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.ranks));
        for rank in &detail.ranks {
            let name = rank.name.clone().unwrap_or_default();
            lines.push(kv_line(&rank.rank.unwrap_or(0).to_string(), name));
            if let Some(ref description) = rank.description {
                lines.extend(markup::render_lines(description, nick));
            }
        }
    }

    if !detail.personal_stories.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.stories));
        for story in &detail.personal_stories {
            if let Some(ref title) = story.title {
                lines.push(section_line(title));
            }
            if let Some(ref content) = story.content {
                lines.extend(markup::render_lines(content, nick));
            }
            lines.push(Line::default());
        }
    }

    lines
}
