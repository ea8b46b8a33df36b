/// Offset pagination over a total ordering. Pages are 1-based; anything
/// below 1 is clamped to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub size: i64,
    pub offset: i64,
}

#[must_use]
pub fn page_window(page: i64, size: i64) -> PageWindow {
    let page = page.max(1);
    let size = size.max(1);
    // Both values come straight from the query string; saturate instead
    // of overflowing on absurd pages.
    PageWindow {
        page,
        size,
        offset: page.saturating_sub(1).saturating_mul(size),
    }
}

#[must_use]
pub fn total_pages(total_elements: i64, size: i64) -> i64 {
    if total_elements <= 0 {
        return 0;
    }
    (total_elements + size - 1) / size
}

#[must_use]
pub fn has_next(page: i64, total_pages: i64) -> bool {
    page < total_pages
}

#[must_use]
pub fn has_prev(page: i64) -> bool {
    page > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 6, 0)]
    #[case(2, 6, 6)]
    #[case(3, 4, 8)]
    #[case(0, 6, 0)]
    #[case(-5, 6, 0)]
    fn window_clamps_and_offsets(#[case] page: i64, #[case] size: i64, #[case] offset: i64) {
        let window = page_window(page, size);
        assert_eq!(window.offset, offset);
        assert!(window.page >= 1);
    }

    #[rstest]
    #[case(0, 6, 0)]
    #[case(1, 6, 1)]
    #[case(6, 6, 1)]
    #[case(7, 6, 2)]
    #[case(6, 4, 2)]
    fn total_pages_rounds_up(#[case] total: i64, #[case] size: i64, #[case] expected: i64) {
        assert_eq!(total_pages(total, size), expected);
    }

    #[test]
    fn huge_page_saturates_instead_of_overflowing() {
        let window = page_window(i64::MAX, 64);
        assert_eq!(window.offset, i64::MAX);
        assert!(window.offset >= 0);
    }

    #[test]
    fn first_of_two_pages_has_next_but_no_prev() {
        // follows {A,B} with 3 posts each, size 4
        let window = page_window(1, 4);
        let pages = total_pages(6, window.size);
        assert_eq!(pages, 2);
        assert!(has_next(window.page, pages));
        assert!(!has_prev(window.page));
    }

    #[test]
    fn last_page_has_prev_but_no_next() {
        let window = page_window(2, 4);
        let pages = total_pages(6, window.size);
        assert!(!has_next(window.page, pages));
        assert!(has_prev(window.page));
    }
}
