//! Pagination planning
//!
//! Maps a row count onto pages of [`PAGE_CAPACITY`] data rows. Both
//! renderers read page breaks from the same [`PaginationPlan`], so the grid
//! and the text cannot disagree about which rows land on which page.

use crate::constants::PAGE_CAPACITY;
use crate::types::PageIndex;

/// Number of pages needed for `row_count` rows.
///
/// Zero rows need zero pages.
pub fn page_count(row_count: usize) -> usize {
    row_count.div_ceil(PAGE_CAPACITY)
}

/// Number of rows on each page, in page order.
///
/// Every page but the last holds exactly [`PAGE_CAPACITY`] rows; the last
/// holds the remainder. The result always has `page_count(row_count)`
/// entries, so zero rows yield an empty list.
pub fn rows_per_page(row_count: usize) -> Vec<usize> {
    let mut counts = Vec::with_capacity(page_count(row_count));

    let mut remaining = row_count;
    while remaining >= PAGE_CAPACITY {
        counts.push(PAGE_CAPACITY);
        remaining -= PAGE_CAPACITY;
    }
    if remaining > 0 {
        counts.push(remaining);
    }

    counts
}

/// How a table's rows are spread across pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationPlan {
    rows_per_page: Vec<usize>,
}

impl PaginationPlan {
    pub fn new(row_count: usize) -> Self {
        Self {
            rows_per_page: rows_per_page(row_count),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.rows_per_page.len()
    }

    pub fn total_rows(&self) -> usize {
        self.rows_per_page.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows_per_page.is_empty()
    }

    pub fn rows_per_page(&self) -> &[usize] {
        &self.rows_per_page
    }

    /// Rows drawn on `page`, or 0 for a page outside the plan
    pub fn rows_on(&self, page: PageIndex) -> usize {
        self.rows_per_page.get(page.offset()).copied().unwrap_or(0)
    }

    /// All pages with their row counts
    pub fn pages(&self) -> impl Iterator<Item = (PageIndex, usize)> + '_ {
        self.rows_per_page
            .iter()
            .enumerate()
            .filter_map(|(offset, &rows)| PageIndex::new(offset + 1).map(|page| (page, rows)))
    }

    /// Page holding the zero-based data row `row`
    pub fn page_of_row(&self, row: usize) -> Option<PageIndex> {
        if row >= self.total_rows() {
            return None;
        }
        PageIndex::new(row / PAGE_CAPACITY + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_rows_than_capacity() {
        assert_eq!(page_count(14), 1);
        assert_eq!(rows_per_page(14), vec![14]);
    }

    #[test]
    fn test_exactly_one_full_page() {
        assert_eq!(page_count(15), 1);
        assert_eq!(rows_per_page(15), vec![15]);
    }

    #[test]
    fn test_one_row_spills_over() {
        assert_eq!(page_count(16), 2);
        assert_eq!(rows_per_page(16), vec![15, 1]);
    }

    #[test]
    fn test_two_full_pages() {
        assert_eq!(page_count(30), 2);
        assert_eq!(rows_per_page(30), vec![15, 15]);
    }

    #[test]
    fn test_zero_rows_means_zero_pages() {
        assert_eq!(page_count(0), 0);
        assert!(rows_per_page(0).is_empty());
        assert!(PaginationPlan::new(0).is_empty());
    }

    #[test]
    fn test_plan_is_consistent_for_many_row_counts() {
        for rows in 0..200 {
            let plan = PaginationPlan::new(rows);
            let counts = plan.rows_per_page();

            assert_eq!(plan.total_rows(), rows);
            assert_eq!(plan.total_pages(), page_count(rows));
            if let Some((last, full)) = counts.split_last() {
                assert!(full.iter().all(|&c| c == PAGE_CAPACITY));
                assert!(*last > 0 && *last <= PAGE_CAPACITY);
            }
        }
    }

    #[test]
    fn test_page_of_row() {
        let plan = PaginationPlan::new(31);
        assert_eq!(plan.page_of_row(0), PageIndex::new(1));
        assert_eq!(plan.page_of_row(14), PageIndex::new(1));
        assert_eq!(plan.page_of_row(15), PageIndex::new(2));
        assert_eq!(plan.page_of_row(30), PageIndex::new(3));
        assert_eq!(plan.page_of_row(31), None);
    }

    #[test]
    fn test_rows_on_page() {
        let plan = PaginationPlan::new(16);
        assert_eq!(plan.rows_on(PageIndex::FIRST), 15);
        assert_eq!(plan.rows_on(PageIndex::FIRST.next()), 1);
        assert_eq!(plan.rows_on(PageIndex::FIRST.next().next()), 0);
    }
}
