//! 内容面板更新逻辑
//!
//! 检索页：关键词编辑、列表移动、分页、详情、词条、筛选。
//! 设置页：选项移动与取值切换（语言切换会级联刷新所有已加载面板）。

use hsrdb_core::pagination::PageWindow;
use hsrdb_core::types::{DetailKey, Domain, DomainDetail};
use hsrdb_core::{enums, markup};

use crate::i18n::{self, t};
use crate::message::{Command, ContentMessage};
use crate::model::{with_panel, App, Page, SettingsRow};
use crate::view::theme;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Vec<Command> {
    match app.current_page {
        Page::Domain(domain) => update_search(app, domain, msg),
        Page::Settings => update_settings(app, msg),
        Page::Home => Vec::new(),
    }
}

// ========== 检索页 ==========

fn update_search(app: &mut App, domain: Domain, msg: ContentMessage) -> Vec<Command> {
    match msg {
        ContentMessage::InputChar(c) => {
            with_panel!(app, domain, |panel| panel.input.push(c));
            Vec::new()
        }

        ContentMessage::Backspace => {
            with_panel!(app, domain, |panel| {
                panel.input.pop();
            });
            Vec::new()
        }

        ContentMessage::ClearQuery => {
            with_panel!(app, domain, |panel| panel.input.clear());
            Vec::new()
        }

        ContentMessage::Submit => vec![super::submit_search(app, domain, 1)],

        ContentMessage::SelectPrevious => {
            with_panel!(app, domain, |panel| panel.select_previous());
            app.term_cursor = 0;
            Vec::new()
        }

        ContentMessage::SelectNext => {
            with_panel!(app, domain, |panel| panel.select_next());
            app.term_cursor = 0;
            Vec::new()
        }

        ContentMessage::SelectFirst => {
            with_panel!(app, domain, |panel| panel.select_first());
            app.term_cursor = 0;
            Vec::new()
        }

        ContentMessage::SelectLast => {
            with_panel!(app, domain, |panel| panel.select_last());
            app.term_cursor = 0;
            Vec::new()
        }

        ContentMessage::NextPage => turn_page(app, domain, PageTurn::Next),
        ContentMessage::PrevPage => turn_page(app, domain, PageTurn::Prev),
        ContentMessage::FirstPage => turn_page(app, domain, PageTurn::First),
        ContentMessage::LastPage => turn_page(app, domain, PageTurn::Last),

        ContentMessage::OpenJump => {
            let has_result = with_panel!(app, domain, |panel| panel.result.is_some());
            if has_result {
                app.modal.show_page_jump();
            }
            Vec::new()
        }

        ContentMessage::OpenDetail => open_detail(app, domain),

        ContentMessage::LookupTerm => lookup_term(app, domain),

        ContentMessage::ScrollUp => {
            with_panel!(app, domain, |panel| panel.detail.scroll_up(2));
            Vec::new()
        }

        ContentMessage::ScrollDown => {
            with_panel!(app, domain, |panel| panel.detail.scroll_down(2));
            Vec::new()
        }

        ContentMessage::CycleFacet(slot) => cycle_facet(app, domain, slot),

        ContentMessage::TogglePrev | ContentMessage::ToggleNext => Vec::new(),
    }
}

enum PageTurn {
    Next,
    Prev,
    First,
    Last,
}

impl PageTurn {
    fn target(&self, window: PageWindow) -> u32 {
        match self {
            PageTurn::Next => window.next(),
            PageTurn::Prev => window.prev(),
            PageTurn::First => window.first(),
            PageTurn::Last => window.last(),
        }
    }
}

/// 翻页。对话详情面板打开时翻的是引用列表，否则翻检索结果。
fn turn_page(app: &mut App, domain: Domain, turn: PageTurn) -> Vec<Command> {
    if domain == Domain::Dialogue && app.dialogues.detail.is_open() {
        let window = dialogue_refs_window(app);
        if let Some(window) = window {
            let target = turn.target(window);
            if target != window.page {
                if let Some(DetailKey::DialogueRefs {
                    talk_sentence_id, ..
                }) = app.dialogues.detail.key
                {
                    let key = DetailKey::DialogueRefs {
                        talk_sentence_id,
                        page: target,
                    };
                    return vec![super::begin_detail(app, domain, key)];
                }
            }
        }
        return Vec::new();
    }

    let window = with_panel!(app, domain, |panel| panel.page_window());
    match window {
        Some(window) => {
            let target = turn.target(window);
            if target == window.page {
                Vec::new()
            } else {
                vec![super::refresh_search(app, domain, target)]
            }
        }
        None => Vec::new(),
    }
}

/// 对话引用列表当前的分页窗口
fn dialogue_refs_window(app: &App) -> Option<PageWindow> {
    match &app.dialogues.detail.payload {
        Some(DomainDetail::Dialogue(refs)) => {
            Some(PageWindow::new(refs.page, refs.total_pages, refs.total))
        }
        _ => None,
    }
}

/// 打开选中条目的详情
fn open_detail(app: &mut App, domain: Domain) -> Vec<Command> {
    let key = match domain {
        Domain::Avatar => app
            .avatars
            .selected_item()
            .map(|row| DetailKey::Id(row.avatar_id)),
        Domain::Dialogue => app.dialogues.selected_item().map(|row| {
            DetailKey::DialogueRefs {
                talk_sentence_id: row.talk_sentence_id,
                page: 1,
            }
        }),
        Domain::Mission => app
            .missions
            .selected_item()
            .map(|row| DetailKey::Id(row.main_mission_id)),
        Domain::Item => app
            .items
            .selected_item()
            .map(|row| DetailKey::Id(row.item_id)),
        Domain::Monster => app
            .monsters
            .selected_item()
            .and_then(|row| row.monster_id.or(row.monster_template_id))
            .map(DetailKey::Id),
    };
    match key {
        Some(key) => vec![super::begin_detail(app, domain, key)],
        None => Vec::new(),
    }
}

/// 收集选中条目富文本中的词条（`<u>` 标注）
fn row_terms(app: &App, domain: Domain) -> Vec<String> {
    let nickname = enums::nickname(app.data_lang);
    let mut texts: Vec<&str> = Vec::new();
    match domain {
        // 角色行只有名字等纯文本，没有词条
        Domain::Avatar => {}
        Domain::Dialogue => {
            if let Some(row) = app.dialogues.selected_item() {
                texts.extend(row.text.as_deref());
            }
        }
        Domain::Mission => {
            if let Some(row) = app.missions.selected_item() {
                for sub in &row.sub_missions_preview {
                    texts.extend(sub.target.as_deref());
                    texts.extend(sub.description.as_deref());
                }
            }
        }
        Domain::Item => {
            if let Some(row) = app.items.selected_item() {
                texts.extend(row.description.as_deref());
                texts.extend(row.bg_description.as_deref());
                if let Some(lc) = &row.light_cone {
                    texts.extend(lc.skill_desc.as_deref());
                }
            }
        }
        Domain::Monster => {
            if let Some(row) = app.monsters.selected_item() {
                texts.extend(row.introduction.as_deref());
            }
        }
    }

    let mut terms = Vec::new();
    for text in texts {
        for term in markup::render(text, nickname).terms {
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
    }
    terms
}

/// 查询选中条目的下一个词条（Alt+T 循环）
fn lookup_term(app: &mut App, domain: Domain) -> Vec<Command> {
    let terms = row_terms(app, domain);
    if terms.is_empty() {
        app.set_status(t().term.no_terms_in_row);
        return Vec::new();
    }
    let term = terms[app.term_cursor % terms.len()].clone();
    app.term_cursor = app.term_cursor.wrapping_add(1);

    app.modal.show_term_lookup(&term, domain);
    let token = app.term_seq.begin();
    vec![Command::Term {
        term,
        lang: app.data_lang,
        domain,
        token,
    }]
}

/// 循环切换第 N 个筛选键的取值并重新检索
fn cycle_facet(app: &mut App, domain: Domain, slot: u8) -> Vec<Command> {
    // 对话域没有 facets，Alt+1 切换的是句子 ID 的排序方向
    if domain == Domain::Dialogue {
        if slot != 1 {
            return Vec::new();
        }
        let next = if app.dialogues.filter_value("order") == "desc" {
            "asc"
        } else {
            "desc"
        };
        app.dialogues
            .query
            .filters
            .insert("order".to_string(), next.to_string());
        return vec![super::refresh_search(app, domain, 1)];
    }

    let (key, values): (&str, Vec<String>) = match domain {
        Domain::Item => match slot {
            1 => ("rarity", app.items.facets.rarity.clone()),
            2 => ("item_main_type", app.items.facets.item_main_type.clone()),
            3 => ("item_sub_type", app.items.facets.item_sub_type.clone()),
            _ => return Vec::new(),
        },
        Domain::Monster => match slot {
            1 => ("rank", app.monsters.facets.rank.clone()),
            2 => ("weakness", app.monsters.facets.weakness.clone()),
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    if values.is_empty() {
        return Vec::new();
    }
    with_panel!(app, domain, |panel| panel.cycle_filter(key, &values));
    vec![super::refresh_search(app, domain, 1)]
}

// ========== 设置页 ==========

fn update_settings(app: &mut App, msg: ContentMessage) -> Vec<Command> {
    match msg {
        ContentMessage::SelectPrevious => {
            app.settings.select_previous();
            Vec::new()
        }
        ContentMessage::SelectNext => {
            app.settings.select_next();
            Vec::new()
        }
        ContentMessage::TogglePrev => toggle_setting(app, false),
        ContentMessage::ToggleNext => toggle_setting(app, true),
        _ => Vec::new(),
    }
}

fn toggle_setting(app: &mut App, forward: bool) -> Vec<Command> {
    match app.settings.current_row() {
        SettingsRow::UiLanguage => {
            let current = i18n::current_language();
            i18n::set_language(if forward {
                current.next()
            } else {
                current.prev()
            });
            vec![Command::SaveConfig(app.config_snapshot())]
        }
        SettingsRow::DataLanguage => {
            app.data_lang = if forward {
                app.data_lang.next()
            } else {
                app.data_lang.prev()
            };
            switch_data_language(app)
        }
        SettingsRow::Theme => {
            let next = (theme::current_theme_index() + 1) % 2;
            theme::set_theme_index(next);
            vec![Command::SaveConfig(app.config_snapshot())]
        }
    }
}

/// 数据语言切换的级联刷新：所有已检索的面板回到各自当前页重新加载，
/// 打开的详情以同一主键换语言重取。
fn switch_data_language(app: &mut App) -> Vec<Command> {
    let mut commands = vec![Command::SaveConfig(app.config_snapshot())];
    for domain in Domain::ALL {
        let searched = with_panel!(app, domain, |panel| panel.has_searched());
        if searched {
            let page = with_panel!(app, domain, |panel| panel.query.page);
            commands.push(super::refresh_search(app, domain, page));
        }
        let open_key = with_panel!(app, domain, |panel| panel.detail.key);
        if let Some(key) = open_key {
            commands.push(super::begin_detail(app, domain, key));
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::super::test_support::new_app;
    use super::*;
    use crate::message::{AppMessage, NavigationMessage};
    use crate::model::Modal;
    use hsrdb_core::types::{AvatarRow, DomainPage, PageResult};
    use hsrdb_core::Lang;

    fn enter_domain(app: &mut App, steps: usize) -> Vec<Command> {
        for _ in 0..steps {
            super::super::update(
                app,
                AppMessage::Navigation(NavigationMessage::SelectNext),
            );
        }
        super::super::update(app, AppMessage::Navigation(NavigationMessage::Confirm))
    }

    fn avatar_page(total: u64, page: u32) -> DomainPage {
        let rows: Vec<AvatarRow> = (0..total.min(20))
            .map(|i| {
                serde_json::from_value(serde_json::json!({ "avatar_id": i + 1 })).unwrap()
            })
            .collect();
        DomainPage::Avatar(PageResult {
            items: rows,
            page,
            page_size: 20,
            total,
            total_pages: u32::try_from(total.div_ceil(20)).unwrap_or(1).max(1),
        })
    }

    #[test]
    fn typing_and_submit_builds_query() {
        let mut app = new_app();
        enter_domain(&mut app, 1); // Avatar

        for c in "march".chars() {
            update(&mut app, ContentMessage::InputChar(c));
        }
        let commands = update(&mut app, ContentMessage::Submit);
        match commands.as_slice() {
            [Command::Search { domain, query, .. }] => {
                assert_eq!(*domain, Domain::Avatar);
                assert_eq!(query.q, "march");
                assert_eq!(query.page, 1);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn next_page_keeps_committed_query() {
        let mut app = new_app();
        enter_domain(&mut app, 1);
        let token = app.avatars.seq.begin();
        app.avatars
            .commit(token, match avatar_page(45, 1) {
                DomainPage::Avatar(p) => p,
                _ => unreachable!(),
            });

        let commands = update(&mut app, ContentMessage::NextPage);
        match commands.as_slice() {
            [Command::Search { query, .. }] => assert_eq!(query.page, 2),
            other => panic!("unexpected commands: {other:?}"),
        }

        // 最后一页不再前进
        let token = app.avatars.seq.begin();
        app.avatars
            .commit(token, match avatar_page(45, 3) {
                DomainPage::Avatar(p) => p,
                _ => unreachable!(),
            });
        assert!(update(&mut app, ContentMessage::NextPage).is_empty());
    }

    #[test]
    fn lookup_term_without_terms_sets_status() {
        let mut app = new_app();
        enter_domain(&mut app, 1);
        assert!(update(&mut app, ContentMessage::LookupTerm).is_empty());
        assert!(app.status_message.is_some());
        assert!(!app.modal.is_open());
    }

    #[test]
    fn lookup_term_cycles_through_row_terms() {
        let mut app = new_app();
        enter_domain(&mut app, 2); // Dialogue
        let token = app.dialogues.seq.begin();
        let row = serde_json::from_value(serde_json::json!({
            "talk_sentence_id": 7,
            "speaker": "三月七",
            "text": "受到<u>冻结</u>或<u>纠缠</u>影响的敌人无法行动"
        }))
        .unwrap();
        app.dialogues.commit(
            token,
            PageResult {
                items: vec![row],
                page: 1,
                page_size: 20,
                total: 1,
                total_pages: 1,
            },
        );

        let first = update(&mut app, ContentMessage::LookupTerm);
        match first.as_slice() {
            [Command::Term { term, .. }] => assert_eq!(term, "冻结"),
            other => panic!("unexpected commands: {other:?}"),
        }
        assert!(matches!(
            app.modal.active,
            Some(Modal::TermLookup { ref term, .. }) if term == "冻结"
        ));

        let second = update(&mut app, ContentMessage::LookupTerm);
        match second.as_slice() {
            [Command::Term { term, .. }] => assert_eq!(term, "纠缠"),
            other => panic!("unexpected commands: {other:?}"),
        }
    }

    #[test]
    fn data_language_switch_cascades_to_loaded_panels() {
        let mut app = new_app();
        enter_domain(&mut app, 1); // Avatar（已发起检索）

        // 进入设置页
        app.current_page = Page::Settings;
        app.settings.selected = 1; // 数据语言
        let commands = update(&mut app, ContentMessage::ToggleNext);

        assert_eq!(app.data_lang, Lang::En);
        assert!(matches!(commands.first(), Some(Command::SaveConfig(_))));
        let searches: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, Command::Search { .. }))
            .collect();
        assert_eq!(searches.len(), 1);
        match searches[0] {
            Command::Search { domain, query, .. } => {
                assert_eq!(*domain, Domain::Avatar);
                assert_eq!(query.lang, Lang::En);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn dialogue_order_toggles_and_resubmits_from_page_one() {
        let mut app = new_app();
        enter_domain(&mut app, 2); // Dialogue

        let commands = update(&mut app, ContentMessage::CycleFacet(1));
        match commands.as_slice() {
            [Command::Search { domain, query, .. }] => {
                assert_eq!(*domain, Domain::Dialogue);
                assert_eq!(query.filters.get("order").map(String::as_str), Some("desc"));
                assert_eq!(query.page, 1);
            }
            other => panic!("unexpected commands: {other:?}"),
        }

        // 再按一次回到升序，且显式携带 order=asc
        let commands = update(&mut app, ContentMessage::CycleFacet(1));
        match commands.as_slice() {
            [Command::Search { query, .. }] => {
                assert_eq!(query.filters.get("order").map(String::as_str), Some("asc"));
            }
            other => panic!("unexpected commands: {other:?}"),
        }

        // 对话域只有一个排序槽位
        assert!(update(&mut app, ContentMessage::CycleFacet(2)).is_empty());
    }

    #[test]
    fn facet_cycle_resubmits_from_page_one() {
        let mut app = new_app();
        enter_domain(&mut app, 4); // Item
        app.items.facets.rarity = vec!["Rare".to_string(), "SuperRare".to_string()];

        let commands = update(&mut app, ContentMessage::CycleFacet(1));
        match commands.as_slice() {
            [Command::Search { query, .. }] => {
                assert_eq!(query.filters.get("rarity").map(String::as_str), Some("Rare"));
                assert_eq!(query.page, 1);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
    }
}
