//! Abstract drawing primitives used by the report renderers
//!
//! Renderers never touch the PDF object model directly; they open one page
//! at a time, stroke lines and place text, then close the page again.

use crate::types::{FontStyle, PageIndex, Point, ReportError, Result};

/// A set of pages that can be drawn on, one page at a time.
///
/// Implementations must reject:
/// - opening a page while another one is still open
/// - drawing while no page is open
/// - page indices beyond `page_count()`
pub trait DrawingSurface {
    /// Number of pages allocated for this surface
    fn page_count(&self) -> usize;

    /// Acquire the drawing context of `page`
    fn open_page(&mut self, page: PageIndex) -> Result<()>;

    /// Release the currently open drawing context
    fn close_page(&mut self) -> Result<()>;

    /// Stroke a straight line on the open page
    fn stroke_line(&mut self, from: Point, to: Point) -> Result<()>;

    /// Place a single line of text with its baseline starting at `at`
    fn place_text(&mut self, at: Point, font: FontStyle, size: f32, text: &str) -> Result<()>;
}

/// Bookkeeping for the one-open-page rule, shared by surface implementations
#[derive(Debug, Clone, Copy, Default)]
pub struct PageCursor {
    open: Option<PageIndex>,
}

impl PageCursor {
    pub fn open(&mut self, page: PageIndex, page_count: usize) -> Result<()> {
        if let Some(open) = self.open {
            return Err(ReportError::PageAlreadyOpen {
                open: open.number(),
                requested: page.number(),
            });
        }
        if page.number() > page_count {
            return Err(ReportError::PageOutOfRange {
                page: page.number(),
                total: page_count,
            });
        }
        self.open = Some(page);
        Ok(())
    }

    pub fn close(&mut self) -> Result<PageIndex> {
        self.open.take().ok_or(ReportError::NoOpenPage)
    }

    /// The page drawing operations go to
    pub fn current(&self) -> Result<PageIndex> {
        self.open.ok_or(ReportError::NoOpenPage)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> PageIndex {
        PageIndex::new(n).unwrap()
    }

    #[test]
    fn test_open_close_cycle() {
        let mut cursor = PageCursor::default();
        cursor.open(page(1), 2).unwrap();
        assert_eq!(cursor.current().unwrap(), page(1));
        assert_eq!(cursor.close().unwrap(), page(1));
        assert!(!cursor.is_open());
        cursor.open(page(2), 2).unwrap();
    }

    #[test]
    fn test_second_open_is_rejected() {
        let mut cursor = PageCursor::default();
        cursor.open(page(1), 2).unwrap();
        match cursor.open(page(2), 2) {
            Err(ReportError::PageAlreadyOpen { open, requested }) => {
                assert_eq!(open, 1);
                assert_eq!(requested, 2);
            }
            _ => panic!("Expected PageAlreadyOpen error"),
        }
    }

    #[test]
    fn test_page_out_of_range() {
        let mut cursor = PageCursor::default();
        assert!(matches!(
            cursor.open(page(3), 2),
            Err(ReportError::PageOutOfRange { page: 3, total: 2 })
        ));
    }

    #[test]
    fn test_draw_without_open_page() {
        let mut cursor = PageCursor::default();
        assert!(matches!(cursor.current(), Err(ReportError::NoOpenPage)));
        assert!(matches!(cursor.close(), Err(ReportError::NoOpenPage)));
    }
}
