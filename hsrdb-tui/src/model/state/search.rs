//! 检索面板状态
//!
//! 五个数据域共用同一套状态机：输入关键词、分页检索、选中条目、
//! 打开详情。泛型参数 `I` 是该域的行类型，域间差异只在响应提交时
//! 通过 `DomainPage`/`DomainDetail` 的枚举分发出现。

use hsrdb_core::types::{DetailKey, DomainDetail, Facets, PageResult, SearchQuery};
use hsrdb_core::{Lang, RequestSeq, RequestToken};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// 详情面板状态
#[derive(Debug, Default)]
pub struct DetailPanel {
    /// 当前打开的详情键（None 表示面板关闭）
    pub key: Option<DetailKey>,
    /// 已加载的详情数据
    pub payload: Option<DomainDetail>,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 纵向滚动偏移
    pub scroll: u16,
    /// 请求序号（过期响应直接丢弃）
    pub seq: RequestSeq,
}

impl DetailPanel {
    /// 发起一次详情加载，返回用于提交响应的令牌
    pub fn begin(&mut self, key: DetailKey) -> RequestToken {
        self.key = Some(key);
        self.payload = None;
        self.loading = true;
        self.error = None;
        self.scroll = 0;
        self.seq.begin()
    }

    /// 提交详情响应；过期令牌返回 false
    pub fn commit(&mut self, token: RequestToken, payload: DomainDetail) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        self.payload = Some(payload);
        self.loading = false;
        self.error = None;
        true
    }

    /// 提交失败响应；过期令牌返回 false
    pub fn fail(&mut self, token: RequestToken, error: String) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        self.loading = false;
        self.error = Some(error);
        true
    }

    /// 关闭详情面板
    pub fn close(&mut self) {
        self.key = None;
        self.payload = None;
        self.loading = false;
        self.error = None;
        self.scroll = 0;
    }

    /// 面板是否打开
    pub fn is_open(&self) -> bool {
        self.key.is_some()
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }
}

/// 单个数据域的检索面板状态
#[derive(Debug)]
pub struct SearchPanel<I> {
    /// 输入框中的关键词（尚未提交）
    pub input: String,
    /// 最近一次提交的查询参数
    pub query: SearchQuery,
    /// 最近一次成功的检索结果
    pub result: Option<PageResult<I>>,
    /// 列表中选中的条目索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 请求序号（过期响应直接丢弃）
    pub seq: RequestSeq,
    /// 可用的筛选取值（item/monster 域）
    pub facets: Facets,
    /// 详情面板
    pub detail: DetailPanel,
}

impl<I> Default for SearchPanel<I> {
    fn default() -> Self {
        Self {
            input: String::new(),
            query: SearchQuery {
                page_size: DEFAULT_PAGE_SIZE,
                ..SearchQuery::default()
            },
            result: None,
            selected: 0,
            loading: false,
            error: None,
            seq: RequestSeq::default(),
            facets: Facets::default(),
            detail: DetailPanel::default(),
        }
    }
}

impl<I> SearchPanel<I> {
    /// 发起一次检索：把输入框内容、语言与页码写入查询参数，
    /// 返回用于提交响应的令牌
    pub fn begin_search(&mut self, lang: Lang, page: u32) -> RequestToken {
        self.query.q = self.input.clone();
        self.query.lang = lang;
        self.query.page = page.max(1);
        self.loading = true;
        self.error = None;
        self.seq.begin()
    }

    /// 以当前查询参数重新检索（语言切换、刷新时使用）
    pub fn begin_refresh(&mut self, lang: Lang) -> RequestToken {
        self.query.lang = lang;
        self.loading = true;
        self.error = None;
        self.seq.begin()
    }

    /// 提交检索结果；过期令牌返回 false
    pub fn commit(&mut self, token: RequestToken, result: PageResult<I>) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        let result = result.normalize();
        self.query.page = result.page;
        self.selected = 0;
        self.result = Some(result);
        self.loading = false;
        self.error = None;
        true
    }

    /// 提交失败响应；过期令牌返回 false。已有结果保留在屏幕上。
    pub fn fail(&mut self, token: RequestToken, error: String) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        self.loading = false;
        self.error = Some(error);
        true
    }

    /// 是否已发起过至少一次检索
    pub fn has_searched(&self) -> bool {
        self.seq.has_begun()
    }

    /// 当前页的条目数
    pub fn item_count(&self) -> usize {
        self.result.as_ref().map_or(0, |r| r.items.len())
    }

    /// 选中的条目
    pub fn selected_item(&self) -> Option<&I> {
        self.result.as_ref()?.items.get(self.selected)
    }

    /// 选择上一条
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一条
    pub fn select_next(&mut self) {
        let count = self.item_count();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一条
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一条
    pub fn select_last(&mut self) {
        self.selected = self.item_count().saturating_sub(1);
    }

    /// 当前分页窗口
    pub fn page_window(&self) -> Option<hsrdb_core::pagination::PageWindow> {
        let result = self.result.as_ref()?;
        Some(hsrdb_core::pagination::PageWindow {
            page: result.page,
            total_pages: result.total_pages,
            total: result.total,
        })
    }

    /// 循环切换某个筛选键的取值：空（全部）→ 第一个取值 → … → 空。
    /// `values` 来自 facets 响应。切换后由调用方重新发起检索。
    pub fn cycle_filter(&mut self, key: &str, values: &[String]) {
        if values.is_empty() {
            return;
        }
        let current = self.query.filters.get(key).cloned().unwrap_or_default();
        let next = if current.is_empty() {
            values.first().cloned().unwrap_or_default()
        } else {
            match values.iter().position(|v| *v == current) {
                Some(pos) if pos + 1 < values.len() => values[pos + 1].clone(),
                // 列表尾部或取值已失效（facets 刷新后消失）都回到“全部”
                _ => String::new(),
            }
        };
        if next.is_empty() {
            self.query.filters.remove(key);
        } else {
            self.query.filters.insert(key.to_string(), next);
        }
    }

    /// 某个筛选键当前的取值（空串表示“全部”）
    pub fn filter_value(&self, key: &str) -> &str {
        self.query.filters.get(key).map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsrdb_core::types::AvatarRow;

    fn page(items: Vec<AvatarRow>, page: u32, total: u64) -> PageResult<AvatarRow> {
        let total_pages =
            u32::try_from(total.div_ceil(u64::from(DEFAULT_PAGE_SIZE))).unwrap_or(u32::MAX);
        PageResult {
            items,
            page,
            page_size: DEFAULT_PAGE_SIZE,
            total,
            total_pages,
        }
    }

    fn row(id: i64) -> AvatarRow {
        serde_json::from_value(serde_json::json!({ "avatar_id": id })).unwrap()
    }

    #[test]
    fn stale_search_response_is_discarded() {
        let mut panel: SearchPanel<AvatarRow> = SearchPanel::default();
        let first = panel.begin_search(Lang::Chs, 1);
        let second = panel.begin_search(Lang::Chs, 2);

        // 第一次请求后到，必须被丢弃
        assert!(!panel.commit(first, page(vec![row(1)], 1, 1)));
        assert!(panel.result.is_none());

        assert!(panel.commit(second, page(vec![row(2)], 2, 40)));
        assert_eq!(panel.query.page, 2);
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut panel: SearchPanel<AvatarRow> = SearchPanel::default();
        let token = panel.begin_search(Lang::Chs, 1);
        assert!(panel.commit(token, page(vec![row(1)], 1, 1)));

        let token = panel.begin_search(Lang::Chs, 2);
        assert!(panel.fail(token, "timeout".to_string()));
        assert!(panel.result.is_some());
        assert_eq!(panel.error.as_deref(), Some("timeout"));
        assert!(!panel.loading);
    }

    #[test]
    fn selection_is_clamped_to_page() {
        let mut panel: SearchPanel<AvatarRow> = SearchPanel::default();
        let token = panel.begin_search(Lang::Chs, 1);
        panel.commit(token, page(vec![row(1), row(2), row(3)], 1, 3));

        panel.select_last();
        assert_eq!(panel.selected, 2);
        panel.select_next();
        assert_eq!(panel.selected, 2);
        panel.select_first();
        panel.select_previous();
        assert_eq!(panel.selected, 0);
    }

    #[test]
    fn cycle_filter_walks_values_and_wraps_to_all() {
        let mut panel: SearchPanel<AvatarRow> = SearchPanel::default();
        let values = vec!["Fire".to_string(), "Ice".to_string()];

        panel.cycle_filter("damage_type", &values);
        assert_eq!(panel.filter_value("damage_type"), "Fire");
        panel.cycle_filter("damage_type", &values);
        assert_eq!(panel.filter_value("damage_type"), "Ice");
        panel.cycle_filter("damage_type", &values);
        assert_eq!(panel.filter_value("damage_type"), "");
    }

    #[test]
    fn cycle_filter_with_vanished_value_resets_to_all() {
        let mut panel: SearchPanel<AvatarRow> = SearchPanel::default();
        panel
            .query
            .filters
            .insert("damage_type".to_string(), "Quantum".to_string());
        panel.cycle_filter("damage_type", &["Fire".to_string()]);
        assert_eq!(panel.filter_value("damage_type"), "");
    }

    #[test]
    fn stale_detail_response_is_discarded() {
        let mut panel = DetailPanel::default();
        let first = panel.begin(DetailKey::Id(1));
        let second = panel.begin(DetailKey::Id(2));

        assert!(!panel.fail(first, "late".to_string()));
        assert!(panel.loading);
        assert!(panel.fail(second, "real".to_string()));
        assert_eq!(panel.error.as_deref(), Some("real"));
    }
}
