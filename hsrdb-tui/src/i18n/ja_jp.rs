//! 日本語翻訳

use super::keys::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "HSRDB ブラウザ",
        loading: "読み込み中...",
        error: "エラー",
        no_results: "該当する結果がありません",
        confirm: "確定",
        cancel: "キャンセル",
        close: "閉じる",
        back: "戻る",
        refresh: "更新",
        quit: "終了",
    },
    nav: NavTexts {
        home: "ホーム",
        avatar: "キャラクター",
        dialogue: "会話",
        mission: "ミッション",
        item: "アイテム",
        monster: "敵",
        settings: "設定",
    },
    home: HomeTexts {
        welcome: "HSRDB ブラウザへようこそ",
        welcome_desc: "左側のデータ領域を選んでゲームテキストと数値を検索できます。",
        dataset_stats: "データセット統計",
        build_at: "ビルド日時",
        monsters: "敵",
        stats_unavailable: "統計情報を取得できません",
        quick_start: "Tab でフォーカス切替、Enter でページへ、F1 でヘルプ。",
    },
    search: SearchTexts {
        prompt: "検索",
        placeholder: "キーワードを入力して Enter",
        filter: "フィルター",
        filter_all: "すべて",
        order: "順序",
        order_asc: "ID 昇順",
        order_desc: "ID 降順",
        results_for: "検索結果",
        sub_missions_more: "…ほか {count} 件のサブミッション",
    },
    pager: PagerTexts {
        line: "{page}/{pages} ページ · 全 {total} 件",
        jump_title: "ページ移動",
        jump_hint: "ページ番号を入力して Enter",
    },
    detail: DetailTexts {
        loading: "詳細を読み込み中...",
        promotions: "昇格",
        level_checkpoints: "レベル別ステータス",
        skills: "スキル",
        ranks: "星魂",
        stories: "キャラクターストーリー",
        sub_missions: "サブミッション",
        mission_packs: "ミッションパック",
        story_refs: "ストーリー参照",
        dialogues: "会話記録",
        base_stats: "基礎ステータス",
        scaled_stats: "補正ステータス",
        resistances: "属性耐性",
        weaknesses: "弱点",
        abilities: "特性",
        light_cone: "光円錐",
        refs_title: "文章参照",
        level: "レベル",
    },
    term: TermTexts {
        title: "用語解説",
        pending: "検索中...",
        empty: "解説が見つかりません",
        fallback_notice: "現在の言語に結果がないため {lang} にフォールバックしました",
        no_terms_in_row: "選択中の項目に検索できる用語がありません",
    },
    settings: SettingsTexts {
        title: "設定",
        ui_language: "表示言語",
        data_language: "データ言語",
        theme: "テーマ",
        theme_dark: "ダーク",
        theme_light: "ライト",
        api_base: "データサービス URL",
        toggle_hint: "← → で切り替え",
    },
    help: HelpTexts {
        title: "ヘルプ",
        nav_section: "ナビゲーション",
        nav_lines: "↑/↓ 選択  Enter 開く  Tab フォーカス切替",
        search_section: "検索ページ",
        search_lines: "文字入力で編集  Enter 検索  Alt+D 詳細  Alt+T 用語  Alt+N/P ページ  Alt+G 移動  Alt+1/2/3 フィルター",
        global_section: "全体",
        global_lines: "Esc 戻る/閉じる  Alt+R 更新  F1 ヘルプ  Alt+Q 終了  Ctrl+C 強制終了",
    },
    hints: HintTexts {
        select: "選択",
        open: "開く",
        search: "検索",
        detail: "詳細",
        glossary: "用語",
        pages: "ページ",
        jump: "移動",
        filter: "フィルター",
        order: "並び順",
        toggle: "切替",
        scroll: "スクロール",
        back: "戻る",
        help: "ヘルプ",
        quit: "終了",
    },
};
