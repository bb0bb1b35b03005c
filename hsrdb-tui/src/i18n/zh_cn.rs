//! 简体中文翻译

use super::keys::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "HSRDB 数据浏览器",
        loading: "加载中...",
        error: "错误",
        no_results: "没有匹配的结果",
        confirm: "确认",
        cancel: "取消",
        close: "关闭",
        back: "返回",
        refresh: "刷新",
        quit: "退出",
    },
    nav: NavTexts {
        home: "首页",
        avatar: "角色",
        dialogue: "对话",
        mission: "任务",
        item: "物品",
        monster: "敌人",
        settings: "设置",
    },
    home: HomeTexts {
        welcome: "欢迎使用 HSRDB 数据浏览器",
        welcome_desc: "在左侧选择一个数据域开始检索游戏文本与数值。",
        dataset_stats: "数据集统计",
        build_at: "构建时间",
        monsters: "敌人",
        stats_unavailable: "统计信息不可用",
        quick_start: "按 Tab 切换焦点，Enter 进入页面，F1 查看帮助。",
    },
    search: SearchTexts {
        prompt: "搜索",
        placeholder: "输入关键词后按 Enter",
        filter: "筛选",
        filter_all: "全部",
        order: "顺序",
        order_asc: "ID 升序",
        order_desc: "ID 降序",
        results_for: "检索结果",
        sub_missions_more: "…还有 {count} 个子任务",
    },
    pager: PagerTexts {
        line: "第 {page}/{pages} 页 · 共 {total} 条",
        jump_title: "跳转到页",
        jump_hint: "输入页码，Enter 确认",
    },
    detail: DetailTexts {
        loading: "正在加载详情...",
        promotions: "晋阶",
        level_checkpoints: "等级数值",
        skills: "技能",
        ranks: "星魂",
        stories: "角色故事",
        sub_missions: "子任务",
        mission_packs: "任务包",
        story_refs: "剧情引用",
        dialogues: "对话记录",
        base_stats: "基础属性",
        scaled_stats: "修正属性",
        resistances: "属性抗性",
        weaknesses: "弱点",
        abilities: "特性",
        light_cone: "光锥",
        refs_title: "句子引用",
        level: "等级",
    },
    term: TermTexts {
        title: "词条解释",
        pending: "正在查询...",
        empty: "没有找到相关解释",
        fallback_notice: "当前语言没有结果，已回退到 {lang}",
        no_terms_in_row: "当前条目没有可查询的词条",
    },
    settings: SettingsTexts {
        title: "设置",
        ui_language: "界面语言",
        data_language: "数据语言",
        theme: "主题",
        theme_dark: "深色",
        theme_light: "浅色",
        api_base: "数据服务地址",
        toggle_hint: "← → 切换取值",
    },
    help: HelpTexts {
        title: "帮助",
        nav_section: "导航",
        nav_lines: "↑/↓ 选择  Enter 进入  Tab 切换焦点",
        search_section: "搜索页",
        search_lines: "输入文字编辑关键词  Enter 搜索  Alt+D 详情  Alt+T 词条  Alt+N/P 翻页  Alt+G 跳页  Alt+1/2/3 筛选",
        global_section: "全局",
        global_lines: "Esc 返回/关闭  Alt+R 刷新  F1 帮助  Alt+Q 退出  Ctrl+C 强制退出",
    },
    hints: HintTexts {
        select: "选择",
        open: "进入",
        search: "搜索",
        detail: "详情",
        glossary: "词条",
        pages: "翻页",
        jump: "跳页",
        filter: "筛选",
        order: "排序",
        toggle: "切换",
        scroll: "滚动",
        back: "返回",
        help: "帮助",
        quit: "退出",
    },
};
