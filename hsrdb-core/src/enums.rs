//! Game enum localization
//!
//! The dataset stores machine-readable enum codes (`"Quantum"`,
//! `"BigBoss"`, `"CombatPowerAvatarRarityType5"`). This module maps
//! (group, code) to a display string in the requested data language.
//!
//! The mapping is a total function: unknown groups or codes come back as
//! the raw code so new dataset values degrade readable instead of failing.

use crate::lang::Lang;

/// Display strings per language, indexed [CHS, EN, JP, KR].
type Display = [&'static str; 4];

/// (group, code, display) rows. Linear scan; the table is small and the
/// lookups happen at render cadence, not in a hot loop.
static ENTRIES: &[(&str, &str, Display)] = &[
    // -- damage_type: combat element --
    ("damage_type", "Physical", ["物理", "Physical", "物理", "물리"]),
    ("damage_type", "Fire", ["火", "Fire", "炎", "화염"]),
    ("damage_type", "Ice", ["冰", "Ice", "氷", "얼음"]),
    ("damage_type", "Thunder", ["雷", "Lightning", "雷", "번개"]),
    ("damage_type", "Wind", ["风", "Wind", "風", "바람"]),
    ("damage_type", "Quantum", ["量子", "Quantum", "量子", "양자"]),
    ("damage_type", "Imaginary", ["虚数", "Imaginary", "虚数", "허수"]),
    // -- avatar_base_type: the character's path --
    ("avatar_base_type", "Warrior", ["毁灭", "Destruction", "壊滅", "파멸"]),
    ("avatar_base_type", "Rogue", ["巡猎", "The Hunt", "巡狩", "수렵"]),
    ("avatar_base_type", "Mage", ["智识", "Erudition", "知恵", "지식"]),
    ("avatar_base_type", "Shaman", ["同谐", "Harmony", "調和", "화합"]),
    ("avatar_base_type", "Warlock", ["虚无", "Nihility", "虚無", "공허"]),
    ("avatar_base_type", "Knight", ["存护", "Preservation", "存護", "보존"]),
    ("avatar_base_type", "Priest", ["丰饶", "Abundance", "豊穣", "풍요"]),
    ("avatar_base_type", "Memory", ["记忆", "Remembrance", "記憶", "기억"]),
    // -- rarity: avatar star rating --
    ("rarity", "CombatPowerAvatarRarityType4", ["4★", "4★", "4★", "4★"]),
    ("rarity", "CombatPowerAvatarRarityType5", ["5★", "5★", "5★", "5★"]),
    // -- rarity: item star rating --
    ("rarity", "Normal", ["1★", "1★", "1★", "1★"]),
    ("rarity", "NotNormal", ["2★", "2★", "2★", "2★"]),
    ("rarity", "Rare", ["3★", "3★", "3★", "3★"]),
    ("rarity", "VeryRare", ["4★", "4★", "4★", "4★"]),
    ("rarity", "SuperRare", ["5★", "5★", "5★", "5★"]),
    // -- rank: monster tier --
    ("rank", "Minion", ["普通", "Minion", "通常", "일반"]),
    ("rank", "MinionLv2", ["普通·强化", "Minion Lv2", "通常·強化", "일반·강화"]),
    ("rank", "Elite", ["精英", "Elite", "精鋭", "정예"]),
    ("rank", "LittleBoss", ["剧情首领", "Story Boss", "ストーリーボス", "스토리 보스"]),
    ("rank", "BigBoss", ["周本首领", "Weekly Boss", "週ボス", "주간 보스"]),
    // -- item_main_type --
    ("item_main_type", "Virtual", ["虚拟物品", "Virtual", "仮想アイテム", "가상 아이템"]),
    ("item_main_type", "Material", ["材料", "Material", "素材", "재료"]),
    ("item_main_type", "Mission", ["任务道具", "Mission Item", "任務アイテム", "임무 아이템"]),
    ("item_main_type", "Display", ["陈列品", "Curio", "陳列品", "진열품"]),
    ("item_main_type", "Equipment", ["光锥", "Light Cone", "光円錐", "광추"]),
    ("item_main_type", "Usable", ["消耗品", "Consumable", "消耗品", "소모품"]),
    ("item_main_type", "Relic", ["遗器", "Relic", "遺物", "유물"]),
    ("item_main_type", "AvatarCard", ["角色", "Character", "キャラクター", "캐릭터"]),
    // -- item_sub_type --
    ("item_sub_type", "Food", ["食品", "Food", "食品", "음식"]),
    ("item_sub_type", "Book", ["书籍", "Book", "書物", "서적"]),
    ("item_sub_type", "Gift", ["礼物", "Gift", "ギフト", "선물"]),
    ("item_sub_type", "Formula", ["配方", "Recipe", "レシピ", "레시피"]),
    ("item_sub_type", "Material", ["材料", "Material", "素材", "재료"]),
    ("item_sub_type", "Mission", ["任务道具", "Mission Item", "任務アイテム", "임무 아이템"]),
    ("item_sub_type", "Virtual", ["虚拟物品", "Virtual", "仮想アイテム", "가상 아이템"]),
    ("item_sub_type", "RelicMaterial", ["遗器材料", "Relic Material", "遺物素材", "유물 재료"]),
    ("item_sub_type", "Eidolon", ["星魂", "Eidolon", "星魂", "성혼"]),
    ("item_sub_type", "ChatBubble", ["聊天框", "Chat Box", "チャット枠", "채팅 상자"]),
    ("item_sub_type", "PhoneTheme", ["手机主题", "Phone Theme", "スマホテーマ", "폰 테마"]),
    ("item_sub_type", "MuseumExhibit", ["展品", "Exhibit", "展示品", "전시품"]),
    // -- mission_type --
    ("mission_type", "Main", ["主线", "Trailblaze Mission", "開拓クエスト", "개척 임무"]),
    ("mission_type", "Branch", ["支线", "Adventure Mission", "冒険クエスト", "모험 임무"]),
    ("mission_type", "Companion", ["同行", "Companion Mission", "同行クエスト", "동행 임무"]),
    ("mission_type", "Daily", ["日常", "Daily Mission", "デイリークエスト", "일일 임무"]),
    ("mission_type", "Gap", ["间章", "Interlude", "間章", "간장"]),
];

/// Localize an enum code within a group.
///
/// Fallback chain when the requested language slot is empty: CHS, then the
/// first non-empty slot, then the raw code. Unknown (group, code) pairs
/// return the raw code unchanged.
pub fn localize<'a>(group: &str, code: &'a str, lang: Lang) -> &'a str {
    let Some(display) = ENTRIES
        .iter()
        .find(|(g, c, _)| *g == group && *c == code)
        .map(|(_, _, d)| d)
    else {
        return code;
    };
    let idx = match lang {
        Lang::Chs => 0,
        Lang::En => 1,
        Lang::Jp => 2,
        Lang::Kr => 3,
    };
    if !display[idx].is_empty() {
        return display[idx];
    }
    if !display[0].is_empty() {
        return display[0];
    }
    display
        .iter()
        .find(|s| !s.is_empty())
        .copied()
        .unwrap_or(code)
}

/// Localized player name substituted for the `{NICKNAME}` placeholder.
pub fn nickname(lang: Lang) -> &'static str {
    match lang {
        Lang::Chs => "开拓者",
        Lang::En => "Trailblazer",
        Lang::Jp => "開拓者",
        Lang::Kr => "개척자",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_localize() {
        assert_eq!(localize("damage_type", "Quantum", Lang::Chs), "量子");
        assert_eq!(localize("damage_type", "Quantum", Lang::En), "Quantum");
        assert_eq!(localize("avatar_base_type", "Rogue", Lang::En), "The Hunt");
        assert_eq!(localize("rank", "BigBoss", Lang::Kr), "주간 보스");
    }

    #[test]
    fn unknown_code_passes_through_unchanged() {
        assert_eq!(
            localize("damage_type", "FutureElement", Lang::En),
            "FutureElement"
        );
        assert_eq!(localize("no_such_group", "Quantum", Lang::En), "Quantum");
        assert_eq!(localize("rank", "", Lang::Jp), "");
    }

    #[test]
    fn rarity_covers_both_avatar_and_item_codes() {
        assert_eq!(
            localize("rarity", "CombatPowerAvatarRarityType5", Lang::Jp),
            "5★"
        );
        assert_eq!(localize("rarity", "SuperRare", Lang::Chs), "5★");
    }

    #[test]
    fn nickname_per_language() {
        assert_eq!(nickname(Lang::Chs), "开拓者");
        assert_eq!(nickname(Lang::En), "Trailblazer");
    }
}
