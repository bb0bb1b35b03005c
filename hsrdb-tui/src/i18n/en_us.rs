//! English (US) translations

use super::keys::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "HSRDB Browser",
        loading: "Loading...",
        error: "Error",
        no_results: "No matching results",
        confirm: "Confirm",
        cancel: "Cancel",
        close: "Close",
        back: "Back",
        refresh: "Refresh",
        quit: "Quit",
    },
    nav: NavTexts {
        home: "Home",
        avatar: "Characters",
        dialogue: "Dialogue",
        mission: "Missions",
        item: "Items",
        monster: "Enemies",
        settings: "Settings",
    },
    home: HomeTexts {
        welcome: "Welcome to the HSRDB Browser",
        welcome_desc: "Pick a data domain on the left to start searching game text and stats.",
        dataset_stats: "Dataset statistics",
        build_at: "Built at",
        monsters: "Enemies",
        stats_unavailable: "Statistics unavailable",
        quick_start: "Tab switches focus, Enter opens a page, F1 shows help.",
    },
    search: SearchTexts {
        prompt: "Search",
        placeholder: "Type a keyword and press Enter",
        filter: "Filter",
        filter_all: "All",
        order: "Order",
        order_asc: "ID asc",
        order_desc: "ID desc",
        results_for: "Results",
        sub_missions_more: "…{count} more sub-missions",
    },
    pager: PagerTexts {
        line: "Page {page}/{pages} · {total} total",
        jump_title: "Jump to page",
        jump_hint: "Type a page number, Enter to confirm",
    },
    detail: DetailTexts {
        loading: "Loading detail...",
        promotions: "Ascensions",
        level_checkpoints: "Level stats",
        skills: "Skills",
        ranks: "Eidolons",
        stories: "Character stories",
        sub_missions: "Sub-missions",
        mission_packs: "Mission packs",
        story_refs: "Story references",
        dialogues: "Dialogue transcript",
        base_stats: "Base stats",
        scaled_stats: "Scaled stats",
        resistances: "Resistances",
        weaknesses: "Weaknesses",
        abilities: "Abilities",
        light_cone: "Light cone",
        refs_title: "Sentence references",
        level: "Level",
    },
    term: TermTexts {
        title: "Glossary",
        pending: "Looking up...",
        empty: "No explanation found",
        fallback_notice: "No results in the current language, fell back to {lang}",
        no_terms_in_row: "The selected entry has no glossary terms",
    },
    settings: SettingsTexts {
        title: "Settings",
        ui_language: "Interface language",
        data_language: "Data language",
        theme: "Theme",
        theme_dark: "Dark",
        theme_light: "Light",
        api_base: "Data service URL",
        toggle_hint: "← → to change",
    },
    help: HelpTexts {
        title: "Help",
        nav_section: "Navigation",
        nav_lines: "↑/↓ select  Enter open  Tab switch focus",
        search_section: "Search pages",
        search_lines: "Type to edit the query  Enter search  Alt+D detail  Alt+T glossary  Alt+N/P page  Alt+G jump  Alt+1/2/3 filters",
        global_section: "Global",
        global_lines: "Esc back/close  Alt+R refresh  F1 help  Alt+Q quit  Ctrl+C force quit",
    },
    hints: HintTexts {
        select: "Select",
        open: "Open",
        search: "Search",
        detail: "Detail",
        glossary: "Glossary",
        pages: "Pages",
        jump: "Jump",
        filter: "Filter",
        order: "Order",
        toggle: "Change",
        scroll: "Scroll",
        back: "Back",
        help: "Help",
        quit: "Quit",
    },
};
