//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）。
//! 检索页的无修饰字符都留给关键词输入，所以动作键一律挂在 Alt 上。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 导航
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 检索页操作
    pub const ACTION_DETAIL: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_TERM: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const PAGE_NEXT: KeyBinding = KeyBinding::alt(KeyCode::Char('n'));
    pub const PAGE_PREV: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const PAGE_FIRST: KeyBinding = KeyBinding::alt(KeyCode::Char('f'));
    pub const PAGE_LAST: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const PAGE_JUMP: KeyBinding = KeyBinding::alt(KeyCode::Char('g'));
    pub const FACET_1: KeyBinding = KeyBinding::alt(KeyCode::Char('1'));
    pub const FACET_2: KeyBinding = KeyBinding::alt(KeyCode::Char('2'));
    pub const FACET_3: KeyBinding = KeyBinding::alt(KeyCode::Char('3'));
    pub const CLEAR_QUERY: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
