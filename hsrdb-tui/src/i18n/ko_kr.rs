//! 한국어 번역

use super::keys::*;

pub static TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "HSRDB 브라우저",
        loading: "불러오는 중...",
        error: "오류",
        no_results: "일치하는 결과가 없습니다",
        confirm: "확인",
        cancel: "취소",
        close: "닫기",
        back: "뒤로",
        refresh: "새로고침",
        quit: "종료",
    },
    nav: NavTexts {
        home: "홈",
        avatar: "캐릭터",
        dialogue: "대화",
        mission: "임무",
        item: "아이템",
        monster: "적",
        settings: "설정",
    },
    home: HomeTexts {
        welcome: "HSRDB 브라우저에 오신 것을 환영합니다",
        welcome_desc: "왼쪽에서 데이터 영역을 선택해 게임 텍스트와 수치를 검색하세요.",
        dataset_stats: "데이터셋 통계",
        build_at: "빌드 시각",
        monsters: "적",
        stats_unavailable: "통계 정보를 가져올 수 없습니다",
        quick_start: "Tab 포커스 전환, Enter 페이지 열기, F1 도움말.",
    },
    search: SearchTexts {
        prompt: "검색",
        placeholder: "키워드를 입력하고 Enter",
        filter: "필터",
        filter_all: "전체",
        order: "정렬",
        order_asc: "ID 오름차순",
        order_desc: "ID 내림차순",
        results_for: "검색 결과",
        sub_missions_more: "…하위 임무 {count}개 더 보기",
    },
    pager: PagerTexts {
        line: "{page}/{pages} 페이지 · 총 {total}건",
        jump_title: "페이지 이동",
        jump_hint: "페이지 번호 입력 후 Enter",
    },
    detail: DetailTexts {
        loading: "상세 정보를 불러오는 중...",
        promotions: "승급",
        level_checkpoints: "레벨별 능력치",
        skills: "스킬",
        ranks: "성혼",
        stories: "캐릭터 스토리",
        sub_missions: "하위 임무",
        mission_packs: "임무 팩",
        story_refs: "스토리 참조",
        dialogues: "대화 기록",
        base_stats: "기본 능력치",
        scaled_stats: "보정 능력치",
        resistances: "속성 저항",
        weaknesses: "약점",
        abilities: "특성",
        light_cone: "광추",
        refs_title: "문장 참조",
        level: "레벨",
    },
    term: TermTexts {
        title: "용어 설명",
        pending: "조회 중...",
        empty: "설명을 찾을 수 없습니다",
        fallback_notice: "현재 언어에 결과가 없어 {lang}(으)로 대체했습니다",
        no_terms_in_row: "선택한 항목에 조회할 용어가 없습니다",
    },
    settings: SettingsTexts {
        title: "설정",
        ui_language: "인터페이스 언어",
        data_language: "데이터 언어",
        theme: "테마",
        theme_dark: "다크",
        theme_light: "라이트",
        api_base: "데이터 서비스 URL",
        toggle_hint: "← → 값 변경",
    },
    help: HelpTexts {
        title: "도움말",
        nav_section: "탐색",
        nav_lines: "↑/↓ 선택  Enter 열기  Tab 포커스 전환",
        search_section: "검색 페이지",
        search_lines: "문자 입력으로 편집  Enter 검색  Alt+D 상세  Alt+T 용어  Alt+N/P 페이지  Alt+G 이동  Alt+1/2/3 필터",
        global_section: "전역",
        global_lines: "Esc 뒤로/닫기  Alt+R 새로고침  F1 도움말  Alt+Q 종료  Ctrl+C 강제 종료",
    },
    hints: HintTexts {
        select: "선택",
        open: "열기",
        search: "검색",
        detail: "상세",
        glossary: "용어",
        pages: "페이지",
        jump: "이동",
        filter: "필터",
        order: "정렬",
        toggle: "변경",
        scroll: "스크롤",
        back: "뒤로",
        help: "도움말",
        quit: "종료",
    },
};
