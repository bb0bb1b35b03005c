//! 任务检索页

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use hsrdb_core::enums::{localize, nickname};
use hsrdb_core::types::{DomainDetail, MissionRow, SubMission};
use hsrdb_core::Lang;

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::components::markup;
use crate::view::theme::colors;

use super::{kv_line, render_search_scaffold, section_line};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let lang = app.data_lang;
    render_search_scaffold(
        &app.missions,
        frame,
        area,
        None,
        |row, _| row_item(row, lang),
        t().nav.mission,
        |payload| detail_lines(payload, lang),
    );
}

fn row_item(row: &MissionRow, lang: Lang) -> ListItem<'static> {
    let c = colors();
    let name = row
        .name
        .clone()
        .unwrap_or_else(|| row.main_mission_id.to_string());
    let mission_type = row
        .mission_type
        .as_deref()
        .map_or("", |code| localize("mission_type", code, lang));

    let mut lines = vec![Line::from(format!("[{mission_type}] {name}"))];
    for sub in &row.sub_missions_preview {
        lines.push(Line::from(Span::styled(
            format!("    · {}", sub_text(sub)),
            Style::default().fg(c.muted),
        )));
    }
    if row.sub_missions_more > 0 {
        lines.push(Line::from(Span::styled(
            format!(
                "    {}",
                fill(
                    t().search.sub_missions_more,
                    &[("count", row.sub_missions_more.to_string())],
                )
            ),
            Style::default().fg(c.muted),
        )));
    }
    ListItem::new(lines)
}

fn sub_text(sub: &SubMission) -> String {
    let target = sub.target.clone().unwrap_or_default();
    if !target.is_empty() {
        return target;
    }
    sub.description.clone().unwrap_or_default()
}

fn detail_lines(payload: &DomainDetail, lang: Lang) -> Vec<Line<'static>> {
    let DomainDetail::Mission(detail) = payload else {
        return Vec::new();
    };
    let texts = t();
    let nick = nickname(lang);
    let mut lines: Vec<Line> = Vec::new();

    let info = &detail.main_mission;
    let name = info
        .name
        .clone()
        .unwrap_or_else(|| info.main_mission_id.to_string());
    lines.push(section_line(&name));
    if let Some(ref code) = info.mission_type {
        lines.push(Line::from(localize("mission_type", code, lang).to_string()));
    }

    if !detail.sub_missions.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.sub_missions));
        for sub in &detail.sub_missions {
            lines.push(Line::from(format!("  · {}", sub_text(sub))));
            if let Some(ref description) = sub.description {
                if !description.is_empty() && sub.target.as_deref().unwrap_or("") != description {
                    lines.push(Line::from(format!("    {description}")));
                }
            }
        }
    }

    if !detail.mission_packs.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.mission_packs));
        let packs: Vec<String> = detail.mission_packs.iter().map(i64::to_string).collect();
        lines.push(Line::from(format!("  {}", packs.join(", "))));
    }

    if !detail.dialogues.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.dialogues));
        for line in &detail.dialogues {
            let speaker = line.speaker.clone().unwrap_or_default();
            if !speaker.is_empty() {
                lines.push(kv_line("»", speaker));
            }
            if let Some(ref text) = line.text {
                lines.extend(markup::render_lines(text, nick));
            }
        }
    }

    if !detail.story_refs.is_empty() {
        lines.push(Line::default());
        lines.push(section_line(texts.detail.story_refs));
        for story_ref in &detail.story_refs {
            if let Some(ref path) = story_ref.source_path {
                lines.push(Line::from(format!("  {path}")));
            }
            if let Some(ref text) = story_ref.text {
                lines.extend(markup::render_lines(text, nick));
            }
        }
    }

    lines
}
