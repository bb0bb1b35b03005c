//! Data language axis
//!
//! The dataset ships text in four languages. This is independent from the
//! UI chrome language: a user may browse Japanese game text under an
//! English interface.

use serde::{Deserialize, Serialize};

/// Closed set of dataset languages.
///
/// Serialized with the wire codes the API expects (`CHS`/`EN`/`JP`/`KR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Lang {
    /// Simplified Chinese, the dataset's source language
    #[default]
    #[serde(rename = "CHS")]
    Chs,
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "JP")]
    Jp,
    #[serde(rename = "KR")]
    Kr,
}

impl Lang {
    pub const ALL: [Lang; 4] = [Lang::Chs, Lang::En, Lang::Jp, Lang::Kr];

    /// Wire code sent as the `lang` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Lang::Chs => "CHS",
            Lang::En => "EN",
            Lang::Jp => "JP",
            Lang::Kr => "KR",
        }
    }

    /// Native display name for settings menus.
    pub fn display_name(self) -> &'static str {
        match self {
            Lang::Chs => "简体中文",
            Lang::En => "English",
            Lang::Jp => "日本語",
            Lang::Kr => "한국어",
        }
    }

    /// Parse a language tag, accepting the wire codes and common aliases
    /// (`zh-CN`, `ja`, `ko_KR`, `en-US`, ...). Matching is by prefix and
    /// case-insensitive. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Lang> {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.is_empty() {
            return None;
        }
        if tag.starts_with("zh") || tag.starts_with("chs") || tag.starts_with("cn") {
            Some(Lang::Chs)
        } else if tag.starts_with("ja") || tag.starts_with("jp") {
            Some(Lang::Jp)
        } else if tag.starts_with("ko") || tag.starts_with("kr") {
            Some(Lang::Kr)
        } else if tag.starts_with("en") {
            Some(Lang::En)
        } else {
            None
        }
    }

    /// Pick the first recognized tag from an ordered preference list,
    /// defaulting to CHS when nothing matches.
    pub fn from_preferences<'a, I>(tags: I) -> Lang
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter()
            .find_map(Lang::from_tag)
            .unwrap_or(Lang::Chs)
    }

    /// Next language in display order, wrapping. Used by the settings page.
    pub fn next(self) -> Lang {
        match self {
            Lang::Chs => Lang::En,
            Lang::En => Lang::Jp,
            Lang::Jp => Lang::Kr,
            Lang::Kr => Lang::Chs,
        }
    }

    /// Previous language in display order, wrapping.
    pub fn prev(self) -> Lang {
        match self {
            Lang::Chs => Lang::Kr,
            Lang::En => Lang::Chs,
            Lang::Jp => Lang::En,
            Lang::Kr => Lang::Jp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_prefix_matching() {
        assert_eq!(Lang::from_tag("zh-CN"), Some(Lang::Chs));
        assert_eq!(Lang::from_tag("zh_TW"), Some(Lang::Chs));
        assert_eq!(Lang::from_tag("CHS"), Some(Lang::Chs));
        assert_eq!(Lang::from_tag("ja"), Some(Lang::Jp));
        assert_eq!(Lang::from_tag("jp"), Some(Lang::Jp));
        assert_eq!(Lang::from_tag("ko_KR.UTF-8"), Some(Lang::Kr));
        assert_eq!(Lang::from_tag("kr"), Some(Lang::Kr));
        assert_eq!(Lang::from_tag("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_tag("fr"), None);
        assert_eq!(Lang::from_tag(""), None);
    }

    #[test]
    fn preference_list_first_match_wins() {
        assert_eq!(Lang::from_preferences(["fr", "ja", "en"]), Lang::Jp);
        assert_eq!(Lang::from_preferences(["de", "ru"]), Lang::Chs);
        assert_eq!(Lang::from_preferences([]), Lang::Chs);
    }

    #[test]
    fn wire_codes_round_trip() {
        for lang in Lang::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
            let back: Lang = serde_json::from_str(&json).unwrap();
            assert_eq!(back, lang);
        }
    }

    #[test]
    fn cycle_is_complete() {
        let mut lang = Lang::Chs;
        for _ in 0..4 {
            assert_eq!(lang.next().prev(), lang);
            lang = lang.next();
        }
        assert_eq!(lang, Lang::Chs);
    }
}
