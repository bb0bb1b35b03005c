//! 焦点状态
//!
//! 界面只有两个可聚焦区域：左侧导航栏（五个检索域 + 设置入口）和
//! 右侧内容区（首页 / 检索页 / 设置页）。弹窗打开时按键由弹窗独占，
//! 不经过焦点分发。

/// 当前持有键盘输入的面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航栏
    #[default]
    Navigation,
    /// 右侧内容区
    Content,
}

impl FocusPanel {
    /// Tab 在两个面板间来回切换
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
        }
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    pub fn is_content(&self) -> bool {
        matches!(self, FocusPanel::Content)
    }
}
