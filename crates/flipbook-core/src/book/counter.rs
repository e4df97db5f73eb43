// book/counter.rs
//
// Page numbers shown under the book. Each leaf carries two printed pages
// and each cover counts as one.

/// Page number to display for a given position.
pub fn display_page(leaf_count: usize, position: usize) -> usize {
    if position == 0 {
        1
    } else if position >= leaf_count {
        leaf_count * 2 + 1
    } else {
        position * 2
    }
}

/// Total printed pages, covers included.
pub fn total_pages(leaf_count: usize) -> usize {
    leaf_count * 2 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_cover_is_page_one() {
        assert_eq!(display_page(3, 0), 1);
        assert_eq!(display_page(0, 0), 1);
    }

    #[test]
    fn back_cover_is_last_page() {
        assert_eq!(display_page(3, 3), 7);
        assert_eq!(display_page(3, 3), total_pages(3));
    }

    #[test]
    fn inner_spreads_count_in_pairs() {
        assert_eq!(display_page(3, 1), 2);
        assert_eq!(display_page(3, 2), 4);
        assert_eq!(display_page(10, 7), 14);
    }
}
