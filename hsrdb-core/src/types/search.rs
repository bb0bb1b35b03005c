//! Search result rows
//!
//! One row type per domain, matching the service's search payloads.
//! Text fields are optional because untranslated entries come back as
//! NULL or empty strings depending on the language path taken.

use serde::Deserialize;

/// Character search row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvatarRow {
    pub avatar_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub damage_type: Option<String>,
    #[serde(default)]
    pub avatar_base_type: Option<String>,
}

/// Dialogue sentence search row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DialogueRow {
    pub talk_sentence_id: i64,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Sub-mission objective, embedded both in search previews and in the
/// mission detail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubMission {
    #[serde(default)]
    pub sub_mission_id: Option<i64>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Main mission search row with a bounded sub-mission preview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissionRow {
    pub main_mission_id: i64,
    #[serde(default)]
    pub mission_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub chapter_id: Option<i64>,
    #[serde(default)]
    pub world_id: Option<i64>,
    #[serde(default)]
    pub display_priority: Option<i64>,
    #[serde(default)]
    pub sub_mission_count: u32,
    #[serde(default)]
    pub sub_missions_preview: Vec<SubMission>,
    /// How many sub-missions beyond the preview exist
    #[serde(default)]
    pub sub_missions_more: u32,
}

/// Light cone summary attached to equipment rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightConeSummary {
    pub equipment_id: i64,
    #[serde(default)]
    pub avatar_base_type: Option<String>,
    #[serde(default)]
    pub max_rank: Option<i64>,
    #[serde(default)]
    pub max_promotion: Option<i64>,
    #[serde(default)]
    pub skill_name: Option<String>,
    #[serde(default)]
    pub skill_desc: Option<String>,
}

/// Item search row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemRow {
    pub item_id: i64,
    #[serde(default)]
    pub item_main_type: Option<String>,
    #[serde(default)]
    pub item_sub_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bg_description: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub light_cone: Option<LightConeSummary>,
}

/// Monster search row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonsterRow {
    #[serde(default)]
    pub monster_id: Option<i64>,
    #[serde(default)]
    pub monster_template_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub stance_weak_list: Vec<String>,
    #[serde(default)]
    pub stance_type: Option<String>,
    #[serde(default)]
    pub skill_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageResult;

    #[test]
    fn avatar_search_payload_deserializes() {
        let page: PageResult<AvatarRow> = serde_json::from_str(
            r#"{
                "q": "march", "lang": "EN",
                "items": [{
                    "avatar_id": 1001, "name": "March 7th", "full_name": "March 7th",
                    "rarity": "CombatPowerAvatarRarityType4",
                    "damage_type": "Ice", "avatar_base_type": "Knight"
                }],
                "page": 1, "page_size": 20, "total": 1, "total_pages": 1
            }"#,
        )
        .unwrap();
        assert_eq!(page.items[0].avatar_id, 1001);
        assert_eq!(page.items[0].damage_type.as_deref(), Some("Ice"));
    }

    #[test]
    fn mission_row_with_preview() {
        let row: MissionRow = serde_json::from_str(
            r#"{
                "main_mission_id": 1000101, "mission_type": "Main", "name": "惊梦",
                "chapter_id": 1, "world_id": 100, "display_priority": 10,
                "sub_mission_count": 12,
                "sub_missions_preview": [
                    {"sub_mission_id": 100010101, "target": "跟随丹恒", "description": "……"}
                ],
                "sub_missions_more": 11
            }"#,
        )
        .unwrap();
        assert_eq!(row.sub_mission_count, 12);
        assert_eq!(row.sub_missions_preview.len(), 1);
        assert_eq!(row.sub_missions_more, 11);
    }

    #[test]
    fn item_row_with_light_cone() {
        let row: ItemRow = serde_json::from_str(
            r#"{
                "item_id": 23000, "item_main_type": "Equipment", "item_sub_type": null,
                "rarity": "SuperRare", "name": "银河铁道之夜", "description": "",
                "bg_description": null, "purpose": null,
                "light_cone": {
                    "equipment_id": 23000, "skill_id": 2300001,
                    "avatar_base_type": "Rogue", "max_rank": 5, "max_promotion": 6,
                    "skill_name": "朝闻道", "skill_desc": "使装备者造成的伤害提高……"
                }
            }"#,
        )
        .unwrap();
        let lc = row.light_cone.unwrap();
        assert_eq!(lc.avatar_base_type.as_deref(), Some("Rogue"));
    }

    #[test]
    fn monster_row_without_ids_still_parses() {
        // The monster index is assembled from loose JSON; ids can be absent.
        let row: MonsterRow = serde_json::from_str(
            r#"{"name": "虚卒", "rank": "Minion", "stance_weak_list": ["Fire", "Quantum"]}"#,
        )
        .unwrap();
        assert_eq!(row.monster_id, None);
        assert_eq!(row.stance_weak_list.len(), 2);
    }
}
