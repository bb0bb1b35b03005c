//! 导航状态定义

use hsrdb_core::types::Domain;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    Avatar,
    Dialogue,
    Mission,
    Item,
    Monster,
    Settings,
}

impl NavItemId {
    /// 固定的侧边栏条目顺序
    pub const ALL: [NavItemId; 7] = [
        NavItemId::Home,
        NavItemId::Avatar,
        NavItemId::Dialogue,
        NavItemId::Mission,
        NavItemId::Item,
        NavItemId::Monster,
        NavItemId::Settings,
    ];

    /// 侧边栏图标
    pub fn icon(&self) -> &'static str {
        match self {
            NavItemId::Home => "⌂",
            NavItemId::Avatar => "★",
            NavItemId::Dialogue => "❝",
            NavItemId::Mission => "◆",
            NavItemId::Item => "◈",
            NavItemId::Monster => "☠",
            NavItemId::Settings => "≡",
        }
    }

    /// 对应的数据域（首页与设置页没有）
    pub fn domain(&self) -> Option<Domain> {
        match self {
            NavItemId::Avatar => Some(Domain::Avatar),
            NavItemId::Dialogue => Some(Domain::Dialogue),
            NavItemId::Mission => Some(Domain::Mission),
            NavItemId::Item => Some(Domain::Item),
            NavItemId::Monster => Some(Domain::Monster),
            NavItemId::Home | NavItemId::Settings => None,
        }
    }
}

/// 导航状态
pub struct NavigationState {
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < NavItemId::ALL.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = NavItemId::ALL.len() - 1;
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> NavItemId {
        NavItemId::ALL[self.selected.min(NavItemId::ALL.len() - 1)]
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
