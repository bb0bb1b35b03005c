//! 后台响应处理
//!
//! 所有带令牌的响应先校验令牌再提交；过期响应静默丢弃。

use hsrdb_core::types::DomainPage;

use crate::message::{Command, ResponseMessage};
use crate::model::{with_panel, App, Modal};

/// 处理后台响应消息
pub fn update(app: &mut App, msg: ResponseMessage) -> Vec<Command> {
    match msg {
        ResponseMessage::Search {
            domain,
            token,
            result,
        } => {
            match result {
                Ok(page) => commit_page(app, token, page),
                Err(error) => {
                    with_panel!(app, domain, |panel| panel.fail(token, error));
                }
            }
            Vec::new()
        }

        ResponseMessage::Detail {
            domain,
            token,
            result,
        } => {
            match result {
                Ok(payload) => {
                    with_panel!(app, domain, |panel| panel.detail.commit(token, payload));
                }
                Err(error) => {
                    with_panel!(app, domain, |panel| panel.detail.fail(token, error));
                }
            }
            Vec::new()
        }

        ResponseMessage::Term { token, result } => {
            if app.term_seq.is_current(token) {
                if let Some(Modal::TermLookup {
                    reply,
                    loading,
                    error,
                    ..
                }) = &mut app.modal.active
                {
                    *loading = false;
                    match result {
                        Ok(r) => *reply = Some(r),
                        Err(e) => *error = Some(e),
                    }
                }
            }
            Vec::new()
        }

        ResponseMessage::Facets { domain, result } => {
            if let Ok(facets) = result {
                with_panel!(app, domain, |panel| panel.facets = facets);
            }
            // 失败时保留旧取值，检索本身不受影响
            Vec::new()
        }

        ResponseMessage::Stats { token, result } => {
            if app.home.seq.is_current(token) {
                app.home.loading = false;
                match result {
                    Ok(stats) => {
                        app.home.stats = Some(stats);
                        app.home.error = None;
                    }
                    Err(error) => app.home.error = Some(error),
                }
            }
            Vec::new()
        }
    }
}

/// 按载荷的域提交到对应面板
fn commit_page(app: &mut App, token: hsrdb_core::RequestToken, page: DomainPage) {
    match page {
        DomainPage::Avatar(p) => {
            app.avatars.commit(token, p);
        }
        DomainPage::Dialogue(p) => {
            app.dialogues.commit(token, p);
        }
        DomainPage::Mission(p) => {
            app.missions.commit(token, p);
        }
        DomainPage::Item(p) => {
            app.items.commit(token, p);
        }
        DomainPage::Monster(p) => {
            app.monsters.commit(token, p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::new_app;
    use super::*;
    use crate::message::{AppMessage, ContentMessage, NavigationMessage};
    use hsrdb_core::types::{Domain, PageResult, TermReply};

    #[test]
    fn stale_search_response_does_not_overwrite() {
        let mut app = new_app();
        super::super::update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::SelectNext),
        );
        let commands = super::super::update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Confirm),
        );
        let first_token = match commands.as_slice() {
            [Command::Search { token, .. }] => *token,
            other => panic!("unexpected commands: {other:?}"),
        };

        // 用户等不及，又提交了一次
        let commands = super::super::update(&mut app, AppMessage::Content(ContentMessage::Submit));
        let second_token = match commands.as_slice() {
            [Command::Search { token, .. }] => *token,
            other => panic!("unexpected commands: {other:?}"),
        };

        // 第一次的响应后到
        update(
            &mut app,
            ResponseMessage::Search {
                domain: Domain::Avatar,
                token: first_token,
                result: Ok(DomainPage::Avatar(PageResult {
                    total: 999,
                    ..PageResult::default()
                })),
            },
        );
        assert!(app.avatars.result.is_none());
        assert!(app.avatars.loading);

        update(
            &mut app,
            ResponseMessage::Search {
                domain: Domain::Avatar,
                token: second_token,
                result: Ok(DomainPage::Avatar(PageResult::default())),
            },
        );
        assert!(app.avatars.result.is_some());
        assert!(!app.avatars.loading);
    }

    #[test]
    fn term_reply_lands_in_open_modal() {
        let mut app = new_app();
        app.modal.show_term_lookup("冻结", Domain::Dialogue);
        let token = app.term_seq.begin();

        let reply: TermReply = serde_json::from_str(
            r#"{"term": "冻结", "lang": "CHS", "used_lang": "CHS",
                "items": [{"text": "冻结状态下无法行动", "score": 120.0}]}"#,
        )
        .unwrap();
        update(
            &mut app,
            ResponseMessage::Term {
                token,
                result: Ok(reply),
            },
        );
        assert!(matches!(
            app.modal.active,
            Some(Modal::TermLookup { ref reply, loading: false, .. }) if reply.is_some()
        ));
    }

    #[test]
    fn stale_term_reply_is_discarded() {
        let mut app = new_app();
        app.modal.show_term_lookup("冻结", Domain::Dialogue);
        let stale = app.term_seq.begin();
        // 第二次查询替换了弹窗
        app.modal.show_term_lookup("纠缠", Domain::Dialogue);
        let _current = app.term_seq.begin();

        update(
            &mut app,
            ResponseMessage::Term {
                token: stale,
                result: Err("late".to_string()),
            },
        );
        assert!(matches!(
            app.modal.active,
            Some(Modal::TermLookup { loading: true, ref error, .. }) if error.is_none()
        ));
    }

    #[test]
    fn stats_error_is_recorded() {
        let mut app = new_app();
        let commands = super::super::startup(&mut app);
        let token = match commands.as_slice() {
            [Command::Stats { token }] => *token,
            other => panic!("unexpected commands: {other:?}"),
        };
        update(
            &mut app,
            ResponseMessage::Stats {
                token,
                result: Err("connection refused".to_string()),
            },
        );
        assert!(!app.home.loading);
        assert_eq!(app.home.error.as_deref(), Some("connection refused"));
    }
}
