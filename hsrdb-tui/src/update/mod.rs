//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │    hsrdb-core     │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod response;           // 后台响应处理
//!
//!
//!     与原教科书式 TEA 的一个差别：update 返回命令列表
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command>
//!
//!     需要副作用（网络请求、写配置文件）的消息不在这里执行，
//!     而是领取请求令牌、把意图打包成 Command 返回，由主循环交给
//!     backend 层异步执行。这保证了 update 是纯同步函数，
//!     全部状态机行为都可以在普通 #[test] 里驱动。
//!
//!     响应回流（ResponseMessage）同样走这里：response.rs 校验令牌，
//!     过期的响应直接丢弃，慢请求永远不会覆盖新结果。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;
mod navigation;
mod response;

use hsrdb_core::types::{DetailKey, Domain};

use crate::message::{AppMessage, Command};
use crate::model::{with_panel, App, FocusPanel, Page};

/// 处理应用消息，更新状态，返回待执行的后台命令
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
            Vec::new()
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Response(response_msg) => response::update(app, response_msg),

        AppMessage::GoBack => {
            if app.modal.is_open() {
                // 先关闭弹窗
                app.modal.close();
                app.clear_status();
            } else if let Some(domain) = app.current_domain() {
                let closed = with_panel!(app, domain, |panel| {
                    if panel.detail.is_open() {
                        panel.detail.close();
                        true
                    } else {
                        false
                    }
                });
                if !closed {
                    app.focus = FocusPanel::Navigation;
                }
                app.clear_status();
            } else {
                app.focus = FocusPanel::Navigation;
            }
            Vec::new()
        }

        AppMessage::Refresh => refresh_current_page(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            Vec::new()
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}

/// 应用启动时的初始加载（首页统计横幅）
pub fn startup(app: &mut App) -> Vec<Command> {
    vec![begin_stats(app)]
}

/// 发起一次统计加载
pub(crate) fn begin_stats(app: &mut App) -> Command {
    app.home.loading = true;
    app.home.error = None;
    Command::Stats {
        token: app.home.seq.begin(),
    }
}

/// 以输入框内容发起检索（落到指定页）
pub(crate) fn submit_search(app: &mut App, domain: Domain, page: u32) -> Command {
    let lang = app.data_lang;
    app.term_cursor = 0;
    with_panel!(app, domain, |panel| {
        let token = panel.begin_search(lang, page);
        Command::Search {
            domain,
            query: panel.query.clone(),
            token,
        }
    })
}

/// 以当前查询参数重新检索（翻页、筛选、语言切换、刷新）
pub(crate) fn refresh_search(app: &mut App, domain: Domain, page: u32) -> Command {
    let lang = app.data_lang;
    with_panel!(app, domain, |panel| {
        panel.query.page = page.max(1);
        let token = panel.begin_refresh(lang);
        Command::Search {
            domain,
            query: panel.query.clone(),
            token,
        }
    })
}

/// 发起一次详情加载
pub(crate) fn begin_detail(app: &mut App, domain: Domain, key: DetailKey) -> Command {
    let lang = app.data_lang;
    let page_size = with_panel!(app, domain, |panel| panel.query.page_size);
    let token = with_panel!(app, domain, |panel| panel.detail.begin(key));
    Command::Detail {
        domain,
        key,
        lang,
        page_size: page_size.max(1),
        token,
    }
}

/// 刷新当前页面的数据
fn refresh_current_page(app: &mut App) -> Vec<Command> {
    match app.current_page {
        Page::Home => vec![begin_stats(app)],
        Page::Domain(domain) => {
            let mut commands = Vec::new();
            let searched = with_panel!(app, domain, |panel| panel.has_searched());
            if searched {
                let page = with_panel!(app, domain, |panel| panel.query.page);
                commands.push(refresh_search(app, domain, page));
            }
            if domain.has_facets() {
                commands.push(Command::Facets { domain });
            }
            let open_key = with_panel!(app, domain, |panel| panel.detail.key);
            if let Some(key) = open_key {
                commands.push(begin_detail(app, domain, key));
            }
            commands
        }
        Page::Settings => Vec::new(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::backend::AppConfig;
    use crate::model::App;

    pub fn new_app() -> App {
        App::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::new_app;
    use super::*;
    use crate::message::{AppMessage, Command, NavigationMessage};

    #[test]
    fn startup_loads_stats() {
        let mut app = new_app();
        let commands = startup(&mut app);
        assert!(matches!(commands.as_slice(), [Command::Stats { .. }]));
        assert!(app.home.loading);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = new_app();
        assert!(update(&mut app, AppMessage::Quit).is_empty());
        assert!(app.should_quit);
    }

    #[test]
    fn go_back_closes_modal_before_leaving_page() {
        let mut app = new_app();
        app.modal.show_help();
        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn refresh_on_home_reloads_stats() {
        let mut app = new_app();
        let commands = update(&mut app, AppMessage::Refresh);
        assert!(matches!(commands.as_slice(), [Command::Stats { .. }]));
    }

    #[test]
    fn entering_item_page_loads_facets_and_first_page() {
        let mut app = new_app();
        // 导航到物品页：Home → Avatar → Dialogue → Mission → Item
        for _ in 0..4 {
            update(
                &mut app,
                AppMessage::Navigation(NavigationMessage::SelectNext),
            );
        }
        let commands = update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Confirm),
        );
        assert_eq!(app.current_page, Page::Domain(Domain::Item));
        assert!(commands
            .iter()
            .any(|c| matches!(c, Command::Search { domain: Domain::Item, .. })));
        assert!(commands
            .iter()
            .any(|c| matches!(c, Command::Facets { domain: Domain::Item })));
    }
}
