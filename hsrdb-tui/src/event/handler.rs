//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{state::Modal, App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop, // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NAV_UP.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectPrevious);
    }
    if DefaultKeymap::NAV_DOWN.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::SelectNext);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Confirm);
    }
    match key.code {
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match &app.current_page {
        Page::Domain(_) => handle_search_keys(key, app),
        Page::Settings => handle_settings_keys(key),
        Page::Home => AppMessage::Noop,
    }
}

/// 处理检索页的按键。无修饰字符留给关键词输入，动作全部在 Alt 上。
fn handle_search_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::ACTION_DETAIL.matches(&key) {
        return AppMessage::Content(ContentMessage::OpenDetail);
    }
    if DefaultKeymap::ACTION_TERM.matches(&key) {
        return AppMessage::Content(ContentMessage::LookupTerm);
    }
    if DefaultKeymap::PAGE_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPage);
    }
    if DefaultKeymap::PAGE_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevPage);
    }
    if DefaultKeymap::PAGE_FIRST.matches(&key) {
        return AppMessage::Content(ContentMessage::FirstPage);
    }
    if DefaultKeymap::PAGE_LAST.matches(&key) {
        return AppMessage::Content(ContentMessage::LastPage);
    }
    if DefaultKeymap::PAGE_JUMP.matches(&key) {
        return AppMessage::Content(ContentMessage::OpenJump);
    }
    if DefaultKeymap::FACET_1.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleFacet(1));
    }
    if DefaultKeymap::FACET_2.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleFacet(2));
    }
    if DefaultKeymap::FACET_3.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleFacet(3));
    }
    if DefaultKeymap::CLEAR_QUERY.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearQuery);
    }

    // 详情面板打开时，↑/↓ 滚动详情而不是移动列表
    let detail_open = match app.current_page {
        Page::Domain(domain) => match domain {
            hsrdb_core::types::Domain::Avatar => app.avatars.detail.is_open(),
            hsrdb_core::types::Domain::Dialogue => app.dialogues.detail.is_open(),
            hsrdb_core::types::Domain::Mission => app.missions.detail.is_open(),
            hsrdb_core::types::Domain::Item => app.items.detail.is_open(),
            hsrdb_core::types::Domain::Monster => app.monsters.detail.is_open(),
        },
        _ => false,
    };

    match key.code {
        KeyCode::Up if detail_open => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::Down if detail_open => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::Up => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home if !detail_open => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End if !detail_open => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::NextPage),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PrevPage),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Submit),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::InputChar(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ←: 切换到上一个值
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        // →: 切换到下一个值
        KeyCode::Right => AppMessage::Content(ContentMessage::ToggleNext),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::PageJump { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
            KeyCode::Char(ch) if key.modifiers.is_empty() => {
                AppMessage::Modal(ModalMessage::Input(ch))
            }
            _ => AppMessage::Noop,
        },
        Modal::TermLookup { .. } | Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AppConfig;
    use crate::model::FocusPanel;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_q_is_text_on_search_pages() {
        let mut app = App::new(&AppConfig::default());
        app.current_page = Page::Domain(hsrdb_core::types::Domain::Avatar);
        app.focus = FocusPanel::Content;

        let msg = handle_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(
            msg,
            AppMessage::Content(ContentMessage::InputChar('q'))
        ));

        let msg = handle_key_event(press(KeyCode::Char('q'), KeyModifiers::ALT), &app);
        assert!(matches!(msg, AppMessage::Quit));
    }

    #[test]
    fn modal_swallows_global_keys() {
        let mut app = App::new(&AppConfig::default());
        app.modal.show_page_jump();
        let msg = handle_key_event(press(KeyCode::Char('3'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Input('3'))));
        let msg = handle_key_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Close)));
    }
}
