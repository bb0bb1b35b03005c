//! 弹窗更新逻辑

use crate::message::{Command, ModalMessage};
use crate::model::{with_panel, App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Vec<Command> {
    match msg {
        ModalMessage::Close => {
            app.modal.close();
            Vec::new()
        }

        ModalMessage::Input(c) => {
            // 页码输入只接受 ASCII 数字，其余字符直接忽略
            if let Some(Modal::PageJump { input }) = &mut app.modal.active {
                if c.is_ascii_digit() {
                    input.push(c);
                }
            }
            Vec::new()
        }

        ModalMessage::Backspace => {
            if let Some(Modal::PageJump { input }) = &mut app.modal.active {
                input.pop();
            }
            Vec::new()
        }

        ModalMessage::Confirm => confirm(app),
    }
}

fn confirm(app: &mut App) -> Vec<Command> {
    match &app.modal.active {
        Some(Modal::PageJump { input }) => {
            let input = input.clone();
            app.modal.close();

            let Some(domain) = app.current_domain() else {
                return Vec::new();
            };
            let window = with_panel!(app, domain, |panel| panel.page_window());
            match window.and_then(|w| w.jump(&input)) {
                Some(target) if Some(target) != window.map(|w| w.page) => {
                    vec![super::refresh_search(app, domain, target)]
                }
                _ => Vec::new(),
            }
        }
        Some(_) => {
            app.modal.close();
            Vec::new()
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::new_app;
    use super::*;
    use crate::message::{AppMessage, NavigationMessage};
    use hsrdb_core::types::PageResult;

    fn app_on_avatar_page(total: u64) -> App {
        let mut app = new_app();
        super::super::update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::SelectNext),
        );
        super::super::update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        let token = app.avatars.seq.begin();
        app.avatars.commit(
            token,
            PageResult {
                items: Vec::new(),
                page: 1,
                page_size: 20,
                total,
                total_pages: u32::try_from(total.div_ceil(20)).unwrap_or(1).max(1),
            },
        );
        app
    }

    #[test]
    fn jump_input_rejects_non_digits() {
        let mut app = app_on_avatar_page(100);
        app.modal.show_page_jump();
        for c in ['4', 'a', '-', '2'] {
            update(&mut app, ModalMessage::Input(c));
        }
        assert!(matches!(
            app.modal.active,
            Some(Modal::PageJump { ref input }) if input == "42"
        ));
    }

    #[test]
    fn jump_confirm_clamps_to_last_page() {
        let mut app = app_on_avatar_page(100); // 5 页
        app.modal.show_page_jump();
        for c in "99".chars() {
            update(&mut app, ModalMessage::Input(c));
        }
        let commands = update(&mut app, ModalMessage::Confirm);
        match commands.as_slice() {
            [Command::Search { query, .. }] => assert_eq!(query.page, 5),
            other => panic!("unexpected commands: {other:?}"),
        }
        assert!(!app.modal.is_open());
    }

    #[test]
    fn jump_confirm_with_empty_input_is_noop() {
        let mut app = app_on_avatar_page(100);
        app.modal.show_page_jump();
        assert!(update(&mut app, ModalMessage::Confirm).is_empty());
        assert!(!app.modal.is_open());
    }
}
