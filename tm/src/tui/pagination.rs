//! Pagination windowing and the page-strip generator
//!
//! Pure index math over an already-loaded collection: no rendering,
//! no state. The view calls these on every frame.

use std::ops::Range;

/// Number of pages needed for `total` items at `page_size` per page.
///
/// Zero for an empty collection.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Index of the last valid page, saturating at 0 for an empty collection.
pub fn last_page(total: usize, page_size: usize) -> usize {
    page_count(total, page_size).saturating_sub(1)
}

/// Clamp a page cursor into the valid range. Never negative.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(last_page(total, page_size))
}

/// The visible slice of the collection for `page`:
/// `[page * size, min(page * size + size, total))`.
pub fn window(total: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    start..end
}

/// One element of the selectable page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A selectable zero-based page index
    Page(usize),
    /// A run of elided pages
    Ellipsis,
}

/// Build the page strip: the first and last `margin` pages, a run of
/// `range` pages around the active one, and an ellipsis for each gap.
pub fn page_tokens(page_count: usize, active: usize, margin: usize, range: usize) -> Vec<PageToken> {
    if page_count == 0 {
        return Vec::new();
    }

    // Centered range window, shifted to stay inside the strip
    let half = range / 2;
    let mut start = active.saturating_sub(half);
    if start + range > page_count {
        start = page_count.saturating_sub(range);
    }
    let end = (start + range).min(page_count);

    let shown = |i: usize| i < margin || i >= page_count.saturating_sub(margin) || (start..end).contains(&i);

    let mut tokens = Vec::new();
    for i in 0..page_count {
        if shown(i) {
            tokens.push(PageToken::Page(i));
        } else if tokens.last() != Some(&PageToken::Ellipsis) {
            tokens.push(PageToken::Ellipsis);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(page_count(1, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(7, 5), 2);
        assert_eq!(page_count(11, 5), 3);
    }

    #[test]
    fn test_window_partial_last_page() {
        // 7 tasks, page size 5: page 0 shows indices 0..5, page 1 shows 5..7
        assert_eq!(window(7, 0, 5), 0..5);
        assert_eq!(window(7, 1, 5), 5..7);
    }

    #[test]
    fn test_window_past_the_end_is_empty() {
        assert_eq!(window(3, 2, 5), 3..3);
        assert_eq!(window(0, 0, 5), 0..0);
    }

    #[test]
    fn test_clamp_page_never_negative() {
        assert_eq!(clamp_page(1, 6, 5), 1);
        assert_eq!(clamp_page(1, 5, 5), 0);
        assert_eq!(clamp_page(7, 0, 5), 0);
    }

    #[test]
    fn test_page_tokens_all_pages_when_short() {
        let tokens = page_tokens(3, 0, 2, 5);
        assert_eq!(
            tokens,
            vec![PageToken::Page(0), PageToken::Page(1), PageToken::Page(2)]
        );
    }

    #[test]
    fn test_page_tokens_elides_distant_pages() {
        // 20 pages, active in the middle: boundary pages, a gap, the
        // centered run, a gap, boundary pages.
        let tokens = page_tokens(20, 10, 2, 5);
        assert_eq!(
            tokens,
            vec![
                PageToken::Page(0),
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(8),
                PageToken::Page(9),
                PageToken::Page(10),
                PageToken::Page(11),
                PageToken::Page(12),
                PageToken::Ellipsis,
                PageToken::Page(18),
                PageToken::Page(19),
            ]
        );
    }

    #[test]
    fn test_page_tokens_active_at_edges() {
        let tokens = page_tokens(20, 0, 2, 5);
        assert!(tokens.contains(&PageToken::Page(0)));
        assert!(tokens.contains(&PageToken::Page(4)));
        assert!(tokens.contains(&PageToken::Page(19)));

        let tokens = page_tokens(20, 19, 2, 5);
        assert!(tokens.contains(&PageToken::Page(15)));
        assert!(tokens.contains(&PageToken::Page(19)));
        assert!(tokens.contains(&PageToken::Page(0)));
    }

    #[test]
    fn test_page_tokens_empty_strip() {
        assert!(page_tokens(0, 0, 2, 5).is_empty());
    }

    proptest! {
        /// The window for page p is exactly [5p, min(5p+5, N)).
        #[test]
        fn prop_window_matches_definition(total in 0usize..500, page in 0usize..120) {
            let w = window(total, page, 5);
            prop_assert_eq!(w.start, (page * 5).min(total));
            prop_assert_eq!(w.end, (page * 5 + 5).min(total).max(w.start));
            prop_assert!(w.len() <= 5);
        }

        /// Consecutive windows tile the collection without gaps or overlap.
        #[test]
        fn prop_windows_tile_collection(total in 0usize..500) {
            let mut covered = 0;
            for p in 0..page_count(total, 5) {
                let w = window(total, p, 5);
                prop_assert_eq!(w.start, covered);
                prop_assert!(w.end > w.start);
                covered = w.end;
            }
            prop_assert_eq!(covered, total);
        }

        /// The clamped cursor always addresses a valid (or the zeroth) page.
        #[test]
        fn prop_clamp_page_valid(total in 0usize..500, page in 0usize..120) {
            let clamped = clamp_page(page, total, 5);
            prop_assert!(clamped <= last_page(total, 5));
        }

        /// The strip always shows the active page, the boundary pages,
        /// and page indices in strictly increasing order.
        #[test]
        fn prop_page_tokens_well_formed(count in 1usize..60, active_raw in 0usize..60) {
            let active = active_raw % count;
            let tokens = page_tokens(count, active, 2, 5);

            prop_assert!(tokens.contains(&PageToken::Page(active)));
            prop_assert!(tokens.contains(&PageToken::Page(0)));
            prop_assert!(tokens.contains(&PageToken::Page(count - 1)));

            let pages: Vec<usize> = tokens
                .iter()
                .filter_map(|t| match t {
                    PageToken::Page(i) => Some(*i),
                    PageToken::Ellipsis => None,
                })
                .collect();
            prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
