//! Detail payloads
//!
//! Models for the per-id detail endpoints. Stats are `f64` throughout
//! because the service rounds but never guarantees integers.

use serde::Deserialize;

use super::search::SubMission;

// ========== Avatar ==========

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvatarInfo {
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
    #[serde(default)]
    pub sp_need: Option<f64>,
    #[serde(default)]
    pub max_promotion: Option<i64>,
    #[serde(default)]
    pub max_rank: Option<i64>,
}

/// One promotion (ascension) stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Promotion {
    #[serde(default)]
    pub promotion: Option<i64>,
    #[serde(default)]
    pub max_level: Option<i64>,
    #[serde(default)]
    pub player_level_require: Option<i64>,
    #[serde(default)]
    pub world_level_require: Option<i64>,
    #[serde(default)]
    pub hp_base: Option<f64>,
    #[serde(default)]
    pub hp_add: Option<f64>,
    #[serde(default)]
    pub attack_base: Option<f64>,
    #[serde(default)]
    pub attack_add: Option<f64>,
    #[serde(default)]
    pub defence_base: Option<f64>,
    #[serde(default)]
    pub defence_add: Option<f64>,
    #[serde(default)]
    pub speed_base: Option<f64>,
    #[serde(default)]
    pub critical_chance: Option<f64>,
    #[serde(default)]
    pub critical_damage: Option<f64>,
    #[serde(default)]
    pub base_aggro: Option<f64>,
}

/// Computed stats at one level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelStat {
    pub level: u32,
    #[serde(default)]
    pub promotion: Option<i64>,
    #[serde(default)]
    pub hp: Option<f64>,
    #[serde(default)]
    pub attack: Option<f64>,
    #[serde(default)]
    pub defence: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
}

/// One level entry of a skill, with the param template already applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillLevel {
    pub level: u32,
    #[serde(default)]
    pub max_level: Option<i64>,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub param_values: Option<Vec<f64>>,
}

/// A skill with its levels grouped, capped by the level limit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub skill_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub skill_effect: Option<String>,
    #[serde(default)]
    pub attack_type: Option<String>,
    #[serde(default)]
    pub stance_damage_type: Option<String>,
    #[serde(default)]
    pub sp_base: Option<f64>,
    #[serde(default)]
    pub bp_need: Option<f64>,
    #[serde(default)]
    pub bp_add: Option<f64>,
    #[serde(default)]
    pub available_levels: u32,
    #[serde(default)]
    pub shown_levels: u32,
    #[serde(default)]
    pub levels: Vec<SkillLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankAbility {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Eidolon rank text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankItem {
    #[serde(default)]
    pub rank_id: Option<i64>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub param_values: Option<Vec<f64>>,
    #[serde(default)]
    pub rank_abilities: Vec<RankAbility>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonalStory {
    pub story_id: i64,
    #[serde(default)]
    pub unlock: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AvatarDetail {
    pub avatar: AvatarInfo,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
    #[serde(default)]
    pub level_checkpoints: Vec<LevelStat>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub ranks: Vec<RankItem>,
    #[serde(default)]
    pub personal_stories: Vec<PersonalStory>,
    #[serde(default)]
    pub skill_level_limit: u32,
    #[serde(default)]
    pub level_max: u32,
}

// ========== Mission ==========

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissionInfo {
    pub main_mission_id: i64,
    #[serde(default)]
    pub mission_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub world_id: Option<i64>,
    #[serde(default)]
    pub chapter_id: Option<i64>,
    #[serde(default)]
    pub mission_pack: Option<i64>,
    #[serde(default)]
    pub display_priority: Option<i64>,
}

/// One story-reference row (where a talk sentence is used).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoryRef {
    #[serde(default)]
    pub source_path: Option<String>,
    #[serde(default)]
    pub source_group: Option<String>,
    #[serde(default)]
    pub json_path: Option<String>,
    #[serde(default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub timeline_name: Option<String>,
    #[serde(default)]
    pub talk_sentence_id: Option<i64>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// One transcript line of the mission's dialogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DialogueLine {
    pub talk_sentence_id: i64,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MissionDetail {
    pub main_mission: MissionInfo,
    #[serde(default)]
    pub sub_missions: Vec<SubMission>,
    #[serde(default)]
    pub mission_packs: Vec<i64>,
    #[serde(default)]
    pub story_refs: Vec<StoryRef>,
    #[serde(default)]
    pub dialogues: Vec<DialogueLine>,
}

// ========== Dialogue refs ==========

/// Paginated list of places one talk sentence appears.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DialogueRefs {
    pub talk_sentence_id: i64,
    #[serde(default)]
    pub items: Vec<StoryRef>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl DialogueRefs {
    /// Same paging invariants as `PageResult::normalize`.
    pub fn normalize(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.page = crate::pagination::clamp_page(self.page, self.total_pages);
        self
    }
}

// ========== Item ==========

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemInfo {
    pub item_id: i64,
    #[serde(default)]
    pub item_main_type: Option<String>,
    #[serde(default)]
    pub item_sub_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bg_description: Option<String>,
    #[serde(default)]
    pub pile_limit: Option<i64>,
}

/// One superimposition level of a light cone skill.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightConeLevel {
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub skill_name: Option<String>,
    #[serde(default)]
    pub skill_desc: Option<String>,
    #[serde(default)]
    pub param_values: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LightConeDetail {
    pub equipment_id: i64,
    #[serde(default)]
    pub avatar_base_type: Option<String>,
    #[serde(default)]
    pub max_rank: Option<i64>,
    #[serde(default)]
    pub max_promotion: Option<i64>,
    #[serde(default)]
    pub levels: Vec<LightConeLevel>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDetail {
    pub item: ItemInfo,
    #[serde(default)]
    pub light_cone: Option<LightConeDetail>,
}

// ========== Monster ==========

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonsterBaseStats {
    #[serde(default)]
    pub hp_base: Option<f64>,
    #[serde(default)]
    pub attack_base: Option<f64>,
    #[serde(default)]
    pub defence_base: Option<f64>,
    #[serde(default)]
    pub speed_base: Option<f64>,
    #[serde(default)]
    pub stance_base: Option<f64>,
    #[serde(default)]
    pub critical_damage_base: Option<f64>,
    #[serde(default)]
    pub status_resistance_base: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MonsterScaledStats {
    #[serde(default)]
    pub hp: Option<f64>,
    #[serde(default)]
    pub attack: Option<f64>,
    #[serde(default)]
    pub defence: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub stance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resistance {
    #[serde(default)]
    pub damage_type: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonsterInfo {
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
    pub stance_type: Option<String>,
    #[serde(default)]
    pub stance_weak_list: Vec<String>,
    #[serde(default)]
    pub damage_type_resistance: Vec<Resistance>,
    #[serde(default)]
    pub base_stats: MonsterBaseStats,
    #[serde(default)]
    pub scaled_stats: MonsterScaledStats,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilityText {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonsterSkill {
    pub skill_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skill_type: Option<String>,
    #[serde(default)]
    pub skill_tag: Option<String>,
    #[serde(default)]
    pub damage_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub param_values: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonsterDetail {
    pub monster: MonsterInfo,
    #[serde(default)]
    pub abilities: Vec<AbilityText>,
    #[serde(default)]
    pub skills: Vec<MonsterSkill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_detail_with_grouped_skills() {
        let detail: AvatarDetail = serde_json::from_str(
            r#"{
                "avatar": {
                    "avatar_id": 1102, "name": "希儿", "full_name": "希儿",
                    "rarity": "CombatPowerAvatarRarityType5",
                    "damage_type": "Quantum", "avatar_base_type": "Rogue",
                    "sp_need": 120, "max_promotion": 6, "max_rank": 6
                },
                "promotions": [
                    {"promotion": 0, "max_level": 20, "hp_base": 126.72, "hp_add": 6.336,
                     "attack_base": 87.12, "attack_add": 4.356,
                     "defence_base": 49.5, "defence_add": 2.475, "speed_base": 115}
                ],
                "level_checkpoints": [
                    {"level": 1, "promotion": 0, "hp": 126.72, "attack": 87.12,
                     "defence": 49.5, "speed": 115}
                ],
                "skills": [{
                    "skill_id": 110201, "name": "岁月轻抚", "tag": "单攻",
                    "attack_type": "Normal", "available_levels": 9, "shown_levels": 2,
                    "levels": [
                        {"level": 1, "max_level": 9,
                         "description_raw": "造成等同于希儿#1[i]%攻击力的量子属性伤害",
                         "description": "造成等同于希儿100%攻击力的量子属性伤害",
                         "param_values": [1.0]}
                    ]
                }],
                "ranks": [{
                    "rank_id": 110201, "rank": 1, "name": "极刑",
                    "description": "……", "param_values": [0.15],
                    "rank_abilities": [{"key": "SeeleRank01", "text": null}]
                }],
                "personal_stories": [
                    {"story_id": 1, "unlock": 1, "title": "角色详情", "content": "……"}
                ],
                "skill_level_limit": 10, "level_max": 80
            }"#,
        )
        .unwrap();
        assert_eq!(detail.skills[0].levels[0].param_values, Some(vec![1.0]));
        assert_eq!(detail.ranks[0].rank, Some(1));
        assert_eq!(detail.level_checkpoints[0].speed, Some(115.0));
    }

    #[test]
    fn mission_detail_payload() {
        let detail: MissionDetail = serde_json::from_str(
            r#"{
                "main_mission": {"main_mission_id": 1000101, "mission_type": "Main",
                                 "name": "惊梦", "world_id": 100, "chapter_id": 1},
                "sub_missions": [{"sub_mission_id": 100010101, "target": "跟随丹恒", "description": ""}],
                "mission_packs": [1001],
                "story_refs": [{"source_path": "Story/Mission/1000101/Act1.json",
                                "json_path": "$.OnStartSequece[0]", "task_type": "PlayTimeline",
                                "talk_sentence_id": 100010101, "speaker": "丹恒", "text": "……"}],
                "dialogues": [{"talk_sentence_id": 100010101, "voice_id": 101,
                               "speaker": "丹恒", "text": "列车即将进站。",
                               "source_path": "Story/Mission/1000101/Act1.json", "json_path": "$"}]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.mission_packs, vec![1001]);
        assert_eq!(detail.dialogues[0].speaker.as_deref(), Some("丹恒"));
    }

    #[test]
    fn monster_detail_scaled_stats() {
        let detail: MonsterDetail = serde_json::from_str(
            r#"{
                "monster": {
                    "monster_id": 8013010, "name": "末日兽", "rank": "BigBoss",
                    "stance_weak_list": ["Physical", "Wind", "Quantum"],
                    "damage_type_resistance": [{"damage_type": "Fire", "value": 0.2}],
                    "base_stats": {"hp_base": 51.0, "attack_base": 33.0, "defence_base": 60.0,
                                   "speed_base": 132.0, "stance_base": 9.0},
                    "scaled_stats": {"hp": 510.0, "attack": 33.0}
                },
                "abilities": [{"key": "Doomsday_Ability", "text": "毁灭之势"}],
                "skills": [{"skill_id": 801301001, "name": "天崩地裂",
                            "damage_type": "Physical",
                            "description": "对全体目标造成伤害。", "param_values": [0.5]}]
            }"#,
        )
        .unwrap();
        assert_eq!(detail.monster.scaled_stats.hp, Some(510.0));
        assert_eq!(detail.monster.damage_type_resistance[0].value, Some(0.2));
        assert_eq!(detail.skills[0].damage_type.as_deref(), Some("Physical"));
    }

    #[test]
    fn dialogue_refs_normalize_like_pages() {
        let refs: DialogueRefs = serde_json::from_str::<DialogueRefs>(
            r#"{"talk_sentence_id": 100010101, "items": [],
                "page": 3, "page_size": 20, "total": 0, "total_pages": 0}"#,
        )
        .unwrap()
        .normalize();
        assert_eq!((refs.page, refs.total_pages), (1, 1));
    }
}
