//! 应用主状态结构

use hsrdb_core::types::{
    AvatarRow, DialogueRow, Domain, ItemRow, MissionRow, MonsterRow,
};
use hsrdb_core::{Lang, RequestSeq};

use super::{FocusPanel, HomeState, ModalState, NavigationState, Page, SearchPanel, SettingsState};
use crate::backend::AppConfig;
use crate::i18n;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 首页状态
    pub home: HomeState,
    /// 角色检索页状态
    pub avatars: SearchPanel<AvatarRow>,
    /// 对话检索页状态
    pub dialogues: SearchPanel<DialogueRow>,
    /// 任务检索页状态
    pub missions: SearchPanel<MissionRow>,
    /// 物品检索页状态
    pub items: SearchPanel<ItemRow>,
    /// 敌人检索页状态
    pub monsters: SearchPanel<MonsterRow>,
    /// 设置页状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    // === 全局设置 ===
    /// 数据语言（发往数据服务的 lang 参数）
    pub data_lang: Lang,
    /// 数据服务地址
    pub api_base: String,

    /// 词条查询的请求序号（弹窗可能在响应到达前被关闭或替换）
    pub term_seq: RequestSeq,
    /// 当前行内词条的游标（Alt+T 循环选取）
    pub term_cursor: usize,
}

impl App {
    /// 从持久化配置创建应用实例
    pub fn new(config: &AppConfig) -> Self {
        if let Some(lang) = i18n::Language::from_code(&config.ui_language) {
            i18n::set_language(lang);
        } else {
            i18n::set_language(i18n::Language::from_env());
        }
        crate::view::theme::set_theme_index(config.theme);

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            home: HomeState::new(),
            avatars: SearchPanel::default(),
            dialogues: SearchPanel::default(),
            missions: SearchPanel::default(),
            items: SearchPanel::default(),
            monsters: SearchPanel::default(),
            settings: SettingsState::new(),
            modal: ModalState::new(),
            data_lang: config.data_lang,
            api_base: config.api_base.clone(),
            term_seq: RequestSeq::default(),
            term_cursor: 0,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 当前设置状态的持久化快照
    pub fn config_snapshot(&self) -> AppConfig {
        AppConfig {
            ui_language: i18n::current_language().code().to_string(),
            data_lang: self.data_lang,
            theme: crate::view::theme::current_theme_index(),
            api_base: self.api_base.clone(),
        }
    }
}

/// 按数据域分发到对应检索面板。五个面板的行类型各不相同，
/// 所以用宏而不是返回值来复用同一段逻辑。
macro_rules! with_panel {
    ($app:expr, $domain:expr, |$panel:ident| $body:expr) => {
        match $domain {
            hsrdb_core::types::Domain::Avatar => {
                let $panel = &mut $app.avatars;
                $body
            }
            hsrdb_core::types::Domain::Dialogue => {
                let $panel = &mut $app.dialogues;
                $body
            }
            hsrdb_core::types::Domain::Mission => {
                let $panel = &mut $app.missions;
                $body
            }
            hsrdb_core::types::Domain::Item => {
                let $panel = &mut $app.items;
                $body
            }
            hsrdb_core::types::Domain::Monster => {
                let $panel = &mut $app.monsters;
                $body
            }
        }
    };
}

pub(crate) use with_panel;

impl App {
    /// 当前页面对应的数据域
    pub fn current_domain(&self) -> Option<Domain> {
        self.current_page.domain()
    }
}
