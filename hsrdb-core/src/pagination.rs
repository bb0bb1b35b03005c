//! Pagination math
//!
//! Pure helpers shared by the five search panels and the dialogue reference
//! pager. Pages are 1-based everywhere; `total_pages` is always at least 1
//! so an empty result still renders as "page 1 of 1".

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.max(1).min(total_pages.max(1))
}

/// Parse jump-to-page input. Only unsigned decimal digits are accepted;
/// anything else (empty, signs, letters, whitespace inside) yields `None`
/// and the caller stays on the current page.
pub fn parse_jump(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Current position within a paginated result, driving the pager widget
/// and the prev/next/first/last keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

impl PageWindow {
    pub fn new(page: u32, total_pages: u32, total: u64) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            page: clamp_page(page, total_pages),
            total_pages,
            total,
        }
    }

    pub fn has_prev(self) -> bool {
        self.page > 1
    }

    pub fn has_next(self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev(self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    pub fn next(self) -> u32 {
        clamp_page(self.page + 1, self.total_pages)
    }

    pub fn first(self) -> u32 {
        1
    }

    pub fn last(self) -> u32 {
        self.total_pages
    }

    /// Clamped jump target, or `None` when the input is not a number.
    pub fn jump(self, input: &str) -> Option<u32> {
        parse_jump(input).map(|p| clamp_page(p, self.total_pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(99, 5), 5);
        // degenerate empty result
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn jump_to_page_99_of_5_lands_on_5() {
        let win = PageWindow::new(2, 5, 93);
        assert_eq!(win.jump("99"), Some(5));
        assert_eq!(win.jump("1"), Some(1));
        assert_eq!(win.jump("0"), Some(1));
    }

    #[test]
    fn non_numeric_jump_is_ignored() {
        let win = PageWindow::new(2, 5, 93);
        assert_eq!(win.jump("abc"), None);
        assert_eq!(win.jump(""), None);
        assert_eq!(win.jump("-3"), None);
        assert_eq!(win.jump("2x"), None);
    }

    #[test]
    fn edges_disable_movement() {
        let first = PageWindow::new(1, 4, 70);
        assert!(!first.has_prev());
        assert_eq!(first.prev(), 1);
        let last = PageWindow::new(4, 4, 70);
        assert!(!last.has_next());
        assert_eq!(last.next(), 4);
    }

    #[test]
    fn twenty_three_items_page_size_twenty_is_two_pages() {
        // 23 items at page size 20 -> ceil = 2 pages.
        let total: u64 = 23;
        let total_pages = u32::try_from(total.div_ceil(20)).unwrap_or(u32::MAX);
        let win = PageWindow::new(1, total_pages, total);
        assert_eq!((win.page, win.total_pages, win.total), (1, 2, 23));
        assert!(win.has_next());
    }
}
