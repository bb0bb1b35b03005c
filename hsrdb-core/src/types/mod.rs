//! API data models
//!
//! Serde models for every payload the dataset service returns, plus the
//! dispatch enums that let one generic search/detail path serve all five
//! content domains. Unknown JSON fields are ignored so dataset additions
//! never break deserialization.

mod detail;
mod search;

pub use detail::*;
pub use search::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lang::Lang;
use crate::pagination::clamp_page;

/// The five searchable content domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Avatar,
    Dialogue,
    Mission,
    Item,
    Monster,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Avatar,
        Domain::Dialogue,
        Domain::Mission,
        Domain::Item,
        Domain::Monster,
    ];

    /// URL path segment of this domain's endpoints.
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Avatar => "avatar",
            Domain::Dialogue => "dialogue",
            Domain::Mission => "mission",
            Domain::Item => "item",
            Domain::Monster => "monster",
        }
    }

    /// Whether the domain exposes a facet endpoint for filters.
    pub fn has_facets(self) -> bool {
        matches!(self, Domain::Item | Domain::Monster)
    }
}

/// One committed search request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub q: String,
    pub lang: Lang,
    pub page: u32,
    pub page_size: u32,
    /// Domain-specific filters (`rarity`, `rank`, `weakness`, `order`, ...),
    /// sent verbatim as query parameters.
    pub filters: BTreeMap<String, String>,
}

impl SearchQuery {
    pub fn new(lang: Lang, page_size: u32) -> Self {
        Self {
            q: String::new(),
            lang,
            page: 1,
            page_size,
            filters: BTreeMap::new(),
        }
    }
}

/// One page of search results with paging metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageResult<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: 0,
            total: 0,
            total_pages: 1,
        }
    }
}

impl<T> PageResult<T> {
    /// Enforce the paging invariants after deserialization:
    /// `total_pages >= 1` and `1 <= page <= total_pages`. The service
    /// reports `total_pages == 0` for an empty result.
    pub fn normalize(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.page = clamp_page(self.page, self.total_pages);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Identifier of a detail fetch. Dialogue "detail" is the paginated
/// reference list of one talk sentence, so it carries a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKey {
    Id(i64),
    DialogueRefs { talk_sentence_id: i64, page: u32 },
}

impl DetailKey {
    /// The stable identifier that survives language switches.
    pub fn id(self) -> i64 {
        match self {
            DetailKey::Id(id) => id,
            DetailKey::DialogueRefs {
                talk_sentence_id, ..
            } => talk_sentence_id,
        }
    }
}

/// Search payloads, one variant per domain.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainPage {
    Avatar(PageResult<AvatarRow>),
    Dialogue(PageResult<DialogueRow>),
    Mission(PageResult<MissionRow>),
    Item(PageResult<ItemRow>),
    Monster(PageResult<MonsterRow>),
}

impl DomainPage {
    pub fn domain(&self) -> Domain {
        match self {
            DomainPage::Avatar(_) => Domain::Avatar,
            DomainPage::Dialogue(_) => Domain::Dialogue,
            DomainPage::Mission(_) => Domain::Mission,
            DomainPage::Item(_) => Domain::Item,
            DomainPage::Monster(_) => Domain::Monster,
        }
    }
}

/// Detail payloads, one variant per domain.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainDetail {
    Avatar(Box<AvatarDetail>),
    Dialogue(DialogueRefs),
    Mission(Box<MissionDetail>),
    Item(Box<ItemDetail>),
    Monster(Box<MonsterDetail>),
}

/// Facet value lists for filterable domains. Fields missing from a
/// domain's reply default to empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Facets {
    #[serde(default)]
    pub rarity: Vec<String>,
    #[serde(default)]
    pub item_main_type: Vec<String>,
    #[serde(default)]
    pub item_sub_type: Vec<String>,
    #[serde(default)]
    pub rank: Vec<String>,
    #[serde(default)]
    pub weakness: Vec<String>,
}

/// Aggregate dataset statistics for the home page banner.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub build_at: Option<String>,
    #[serde(default)]
    pub table_counts: BTreeMap<String, i64>,
    #[serde(default)]
    pub monster_count: i64,
}

/// One glossary lookup hit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TermHit {
    pub text: String,
    #[serde(default)]
    pub score: f64,
}

/// Glossary lookup reply. `used_lang` may differ from `lang` when the
/// requested language had no hits and the service fell back to CHS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TermReply {
    pub term: String,
    pub lang: Lang,
    pub used_lang: Lang,
    #[serde(default)]
    pub items: Vec<TermHit>,
}

impl TermReply {
    pub fn is_fallback(&self) -> bool {
        self.used_lang != self.lang
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_result_normalization() {
        let empty: PageResult<AvatarRow> = serde_json::from_str::<PageResult<AvatarRow>>(
            r#"{"items": [], "page": 1, "page_size": 20, "total": 0, "total_pages": 0}"#,
        )
        .unwrap()
        .normalize();
        assert_eq!(empty.total_pages, 1);
        assert_eq!(empty.page, 1);
        assert!(empty.is_empty());

        let overshoot: PageResult<AvatarRow> = serde_json::from_str::<PageResult<AvatarRow>>(
            r#"{"items": [], "page": 9, "total": 23, "page_size": 20, "total_pages": 2}"#,
        )
        .unwrap()
        .normalize();
        assert_eq!(overshoot.page, 2);
    }

    #[test]
    fn term_reply_fallback_detection() {
        let reply: TermReply = serde_json::from_str(
            r#"{"term": "弱点击破", "lang": "JP", "used_lang": "CHS",
                "items": [{"hash": "123", "text": "弱点击破：……", "score": 140.5}]}"#,
        )
        .unwrap();
        assert!(reply.is_fallback());
        assert_eq!(reply.items[0].score, 140.5);
    }

    #[test]
    fn facets_tolerate_partial_replies() {
        let item: Facets =
            serde_json::from_str(r#"{"rarity": ["Rare"], "item_main_type": [], "item_sub_type": ["Food"]}"#)
                .unwrap();
        assert_eq!(item.rarity, vec!["Rare".to_string()]);
        assert!(item.rank.is_empty());

        let monster: Facets =
            serde_json::from_str(r#"{"rank": ["Elite"], "weakness": ["Fire"]}"#).unwrap();
        assert_eq!(monster.weakness, vec!["Fire".to_string()]);
    }

    #[test]
    fn stats_with_unknown_fields() {
        let stats: Stats = serde_json::from_str(
            r#"{"build_at": "2024-06-01T10:00:00", "elapsed_seconds": 42.5,
                "table_counts": {"talk_sentence": 120000, "avatar": 96}, "monster_count": 512}"#,
        )
        .unwrap();
        assert_eq!(stats.table_counts.get("avatar"), Some(&96));
        assert_eq!(stats.monster_count, 512);
    }
}
