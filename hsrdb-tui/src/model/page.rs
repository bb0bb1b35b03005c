//! 页面状态定义

use hsrdb_core::types::Domain;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 某个数据域的检索页
    Domain(Domain),
    /// 设置
    Settings,
}

impl Page {
    /// 获取页面标题（i18n key 由视图层解析）
    pub fn domain(&self) -> Option<Domain> {
        match self {
            Page::Domain(domain) => Some(*domain),
            Page::Home | Page::Settings => None,
        }
    }

    /// 是否是检索页面
    pub fn is_search_page(&self) -> bool {
        matches!(self, Page::Domain(_))
    }
}
