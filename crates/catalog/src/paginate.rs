//! Paginate stage: window a sorted list into 1-based pages.

/// Slice of `items` shown on the given 1-based page. Out-of-range pages
/// (including page 0 or a zero page size) yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items at `per_page` per page.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_items_at_six_per_page_split_six_and_one() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(paginate(&items, 1, 6), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(paginate(&items, 2, 6), &[7]);
        assert_eq!(total_pages(7, 6), 2);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(total_pages(12, 6), 2);
        assert!(paginate(&items, 3, 6).is_empty());
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 5, 6).is_empty());
        assert!(paginate(&items, 0, 6).is_empty());
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let items: [u32; 0] = [];
        assert!(paginate(&items, 1, 6).is_empty());
        assert_eq!(total_pages(0, 6), 0);
    }

    #[test]
    fn concatenated_pages_reconstruct_the_list() {
        let items: Vec<u32> = (0..25).collect();
        let per_page = 4;
        let mut rebuilt = Vec::new();
        for page in 1..=total_pages(items.len(), per_page) {
            let window = paginate(&items, page, per_page);
            assert!(window.len() <= per_page);
            rebuilt.extend_from_slice(window);
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn zero_page_size_is_empty_not_panic() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 1, 0).is_empty());
        assert_eq!(total_pages(3, 0), 0);
    }
}
