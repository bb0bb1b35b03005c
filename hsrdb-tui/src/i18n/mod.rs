//! 国际化（i18n）模块
//!
//! 界面文本的多语言支持。使用纯 Rust 结构体方案，编译期类型检查，
//! 零运行时开销。界面语言与数据语言相互独立：前者决定菜单与提示
//! 的文字，后者决定向数据服务请求哪种语言的游戏文本。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod ja_jp;
pub mod keys;
mod ko_kr;
mod zh_cn;

pub use keys::*;

/// 支持的界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 简体中文（中国）
    #[default]
    ZhCn,
    /// 英语（美国）
    EnUs,
    /// 日语（日本）
    JaJp,
    /// 韩语（韩国）
    KoKr,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[
            Language::ZhCn,
            Language::EnUs,
            Language::JaJp,
            Language::KoKr,
        ]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::ZhCn => "简体中文",
            Language::EnUs => "English",
            Language::JaJp => "日本語",
            Language::KoKr => "한국어",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::EnUs => "en-US",
            Language::JaJp => "ja-JP",
            Language::KoKr => "ko-KR",
        }
    }

    /// 从语言代码解析（前缀匹配，大小写不敏感）
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim().to_ascii_lowercase();
        if code.starts_with("zh") || code.starts_with("chs") || code.starts_with("cn") {
            Some(Language::ZhCn)
        } else if code.starts_with("en") {
            Some(Language::EnUs)
        } else if code.starts_with("ja") || code.starts_with("jp") {
            Some(Language::JaJp)
        } else if code.starts_with("ko") || code.starts_with("kr") {
            Some(Language::KoKr)
        } else {
            None
        }
    }

    /// 按环境变量偏好（`LANGUAGE` > `LC_ALL` > `LANG`）选择语言
    pub fn from_env() -> Language {
        if let Ok(list) = std::env::var("LANGUAGE") {
            for entry in list.split(':') {
                if let Some(lang) = Language::from_code(entry) {
                    return lang;
                }
            }
        }
        for key in ["LC_ALL", "LANG"] {
            if let Ok(value) = std::env::var(key) {
                if let Some(lang) = Language::from_code(&value) {
                    return lang;
                }
            }
        }
        Language::default()
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(&self) -> Language {
        match self {
            Language::ZhCn => Language::EnUs,
            Language::EnUs => Language::JaJp,
            Language::JaJp => Language::KoKr,
            Language::KoKr => Language::ZhCn,
        }
    }

    /// 获取上一个语言（用于循环切换）
    #[must_use]
    pub fn prev(&self) -> Language {
        match self {
            Language::ZhCn => Language::KoKr,
            Language::EnUs => Language::ZhCn,
            Language::JaJp => Language::EnUs,
            Language::KoKr => Language::JaJp,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = ZhCn

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        2 => &ja_jp::TRANSLATIONS,
        3 => &ko_kr::TRANSLATIONS,
        _ => &zh_cn::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::ZhCn => 0,
        Language::EnUs => 1,
        Language::JaJp => 2,
        Language::KoKr => 3,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EnUs,
        2 => Language::JaJp,
        3 => Language::KoKr,
        _ => Language::ZhCn,
    }
}

/// 填充 `{name}` 形式的模板占位符
pub fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_matches_prefixes() {
        assert_eq!(Language::from_code("zh_CN.UTF-8"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("en_US.UTF-8"), Some(Language::EnUs));
        assert_eq!(Language::from_code("ja"), Some(Language::JaJp));
        assert_eq!(Language::from_code("ko_KR"), Some(Language::KoKr));
        assert_eq!(Language::from_code("fr_FR"), None);
    }

    #[test]
    fn cycle_covers_all_languages() {
        let mut lang = Language::ZhCn;
        for _ in 0..Language::all().len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::ZhCn);
        assert_eq!(Language::EnUs.next().prev(), Language::EnUs);
    }

    #[test]
    fn fill_replaces_pager_placeholders() {
        let line = fill(
            en_us::TRANSLATIONS.pager.line,
            &[
                ("page", "1".to_string()),
                ("pages", "2".to_string()),
                ("total", "23".to_string()),
            ],
        );
        assert_eq!(line, "Page 1/2 · 23 total");
    }
}
