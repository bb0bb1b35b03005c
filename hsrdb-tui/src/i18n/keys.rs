//! 翻译键结构定义
//!
//! 所有翻译文本的类型定义。每种语言提供一个 `Translations` 常量，
//! 编译期即可发现缺失的翻译项。

/// 完整翻译结构
pub struct Translations {
    pub common: CommonTexts,
    pub nav: NavTexts,
    pub home: HomeTexts,
    pub search: SearchTexts,
    pub pager: PagerTexts,
    pub detail: DetailTexts,
    pub term: TermTexts,
    pub settings: SettingsTexts,
    pub help: HelpTexts,
    pub hints: HintTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub no_results: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub back: &'static str,
    pub refresh: &'static str,
    pub quit: &'static str,
}

/// 导航栏文本
pub struct NavTexts {
    pub home: &'static str,
    pub avatar: &'static str,
    pub dialogue: &'static str,
    pub mission: &'static str,
    pub item: &'static str,
    pub monster: &'static str,
    pub settings: &'static str,
}

/// 首页文本
pub struct HomeTexts {
    pub welcome: &'static str,
    pub welcome_desc: &'static str,
    pub dataset_stats: &'static str,
    pub build_at: &'static str,
    pub monsters: &'static str,
    pub stats_unavailable: &'static str,
    pub quick_start: &'static str,
}

/// 搜索页文本
pub struct SearchTexts {
    pub prompt: &'static str,
    pub placeholder: &'static str,
    pub filter: &'static str,
    pub filter_all: &'static str,
    pub order: &'static str,
    pub order_asc: &'static str,
    pub order_desc: &'static str,
    pub results_for: &'static str,
    pub sub_missions_more: &'static str,
}

/// 分页器文本
pub struct PagerTexts {
    /// 模板：`{page}`、`{pages}`、`{total}` 会被替换
    pub line: &'static str,
    pub jump_title: &'static str,
    pub jump_hint: &'static str,
}

/// 详情面板文本
pub struct DetailTexts {
    pub loading: &'static str,
    pub promotions: &'static str,
    pub level_checkpoints: &'static str,
    pub skills: &'static str,
    pub ranks: &'static str,
    pub stories: &'static str,
    pub sub_missions: &'static str,
    pub mission_packs: &'static str,
    pub story_refs: &'static str,
    pub dialogues: &'static str,
    pub base_stats: &'static str,
    pub scaled_stats: &'static str,
    pub resistances: &'static str,
    pub weaknesses: &'static str,
    pub abilities: &'static str,
    pub light_cone: &'static str,
    pub refs_title: &'static str,
    pub level: &'static str,
}

/// 词条弹窗文本
pub struct TermTexts {
    pub title: &'static str,
    pub pending: &'static str,
    pub empty: &'static str,
    /// 模板：`{lang}` 会被替换为实际使用的语言
    pub fallback_notice: &'static str,
    pub no_terms_in_row: &'static str,
}

/// 设置页文本
pub struct SettingsTexts {
    pub title: &'static str,
    pub ui_language: &'static str,
    pub data_language: &'static str,
    pub theme: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
    pub api_base: &'static str,
    pub toggle_hint: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub nav_section: &'static str,
    pub nav_lines: &'static str,
    pub search_section: &'static str,
    pub search_lines: &'static str,
    pub global_section: &'static str,
    pub global_lines: &'static str,
}

/// 状态栏快捷键提示
pub struct HintTexts {
    pub select: &'static str,
    pub open: &'static str,
    pub search: &'static str,
    pub detail: &'static str,
    pub glossary: &'static str,
    pub pages: &'static str,
    pub jump: &'static str,
    pub filter: &'static str,
    pub order: &'static str,
    pub toggle: &'static str,
    pub scroll: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}
