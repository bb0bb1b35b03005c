//! 导航更新逻辑

use crate::message::{Command, NavigationMessage};
use crate::model::{with_panel, App, FocusPanel, NavItemId, Page};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Vec<Command> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
            Vec::new()
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
            Vec::new()
        }

        NavigationMessage::Confirm => {
            let id = app.navigation.current_id();
            app.current_page = page_from_nav_id(id);
            app.focus = FocusPanel::Content;
            app.clear_status(); // 切换页面时清除状态消息

            // 首次进入检索页时加载第一页与筛选取值
            let mut commands = Vec::new();
            if let Some(domain) = id.domain() {
                let searched = with_panel!(app, domain, |panel| panel.has_searched());
                if !searched {
                    commands.push(super::submit_search(app, domain, 1));
                    if domain.has_facets() {
                        commands.push(Command::Facets { domain });
                    }
                }
            }
            commands
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
            Vec::new()
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
            Vec::new()
        }
    }
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::Settings => Page::Settings,
        _ => match id.domain() {
            Some(domain) => Page::Domain(domain),
            None => Page::Home,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::new_app;
    use super::*;

    #[test]
    fn selection_stops_at_bounds() {
        let mut app = new_app();
        update(&mut app, NavigationMessage::SelectPrevious);
        assert_eq!(app.navigation.selected, 0);
        update(&mut app, NavigationMessage::SelectLast);
        assert_eq!(app.navigation.current_id(), NavItemId::Settings);
        update(&mut app, NavigationMessage::SelectNext);
        assert_eq!(app.navigation.current_id(), NavItemId::Settings);
    }

    #[test]
    fn second_entry_does_not_resubmit() {
        let mut app = new_app();
        update(&mut app, NavigationMessage::SelectNext); // Avatar
        let first = update(&mut app, NavigationMessage::Confirm);
        assert_eq!(first.len(), 1);

        // 回到导航栏再次进入，不重复加载
        app.focus = FocusPanel::Navigation;
        let second = update(&mut app, NavigationMessage::Confirm);
        assert!(second.is_empty());
    }
}
