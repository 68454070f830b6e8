//! Table grid ruling
//!
//! Computes where every horizontal and vertical rule of the table lands on
//! each page, then strokes them through a [`DrawingSurface`].
//!
//! Page 1 carries the column header row in its first slot, so it holds one
//! more table row than its data row count. Every page starts its own grid
//! with a fresh top rule; no rule is shared across a page break.

use crate::constants::{CELL_MARGIN, PAGE_CAPACITY, ROW_HEIGHT, TABLE_TOP_Y, TABLE_WIDTH};
use crate::pagination::PaginationPlan;
use crate::surface::DrawingSurface;
use crate::types::{PageIndex, Point, Result};

// =============================================================================
// Geometry
// =============================================================================

/// Rules of the table grid on one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageGrid {
    pub page: PageIndex,
    /// Data rows on this page (header row excluded)
    pub data_rows: usize,
    /// Y coordinate of each horizontal rule, top to bottom
    pub horizontal_ys: Vec<f32>,
    /// X coordinate of each vertical rule, left to right
    pub vertical_xs: Vec<f32>,
    pub top_y: f32,
    pub bottom_y: f32,
}

impl PageGrid {
    /// Table rows occupying this page, including the header row on page 1
    pub fn table_rows(&self) -> usize {
        header_slots(self.page) + self.data_rows
    }
}

/// Vertical band occupied by one data row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBand {
    pub page: PageIndex,
    pub top_y: f32,
    pub bottom_y: f32,
}

impl RowBand {
    pub fn contains(&self, y: f32) -> bool {
        y < self.top_y && y > self.bottom_y
    }
}

/// Complete grid across all pages
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pages: Vec<PageGrid>,
}

impl GridLayout {
    pub fn pages(&self) -> &[PageGrid] {
        &self.pages
    }

    pub fn page(&self, page: PageIndex) -> Option<&PageGrid> {
        self.pages.get(page.offset())
    }

    pub fn horizontal_line_count(&self) -> usize {
        self.pages.iter().map(|p| p.horizontal_ys.len()).sum()
    }

    pub fn vertical_line_count(&self) -> usize {
        self.pages.iter().map(|p| p.vertical_xs.len()).sum()
    }

    /// Band between the two horizontal rules that bound data row `row`
    pub fn row_band(&self, row: usize) -> Option<RowBand> {
        let page_offset = row / PAGE_CAPACITY;
        let grid = self.pages.get(page_offset)?;
        let within_page = row % PAGE_CAPACITY;
        if within_page >= grid.data_rows {
            return None;
        }

        let slot = header_slots(grid.page) + within_page;
        Some(RowBand {
            page: grid.page,
            top_y: grid.horizontal_ys[slot],
            bottom_y: grid.horizontal_ys[slot + 1],
        })
    }
}

/// Table slots taken by the column header row on `page`
fn header_slots(page: PageIndex) -> usize {
    if page.is_first() { 1 } else { 0 }
}

/// Total number of horizontal rules the grid needs.
///
/// One rule per table row boundary (the header row counts as a table row),
/// plus one extra top rule for every page after the first.
pub fn horizontal_line_count(plan: &PaginationPlan) -> usize {
    if plan.is_empty() {
        return 0;
    }
    let table_rows = plan.total_rows() + 1;
    table_rows + 1 + (plan.total_pages() - 1)
}

/// Compute every rule position for the pages of `plan`.
pub fn layout_grid(plan: &PaginationPlan, column_widths: &[f32]) -> GridLayout {
    let vertical_xs = vertical_rule_positions(column_widths);

    let pages = plan
        .pages()
        .map(|(page, data_rows)| {
            let table_rows = header_slots(page) + data_rows;
            let horizontal_ys = (0..=table_rows)
                .map(|slot| TABLE_TOP_Y - ROW_HEIGHT * slot as f32)
                .collect();
            let bottom_y = TABLE_TOP_Y - ROW_HEIGHT * table_rows as f32;

            PageGrid {
                page,
                data_rows,
                horizontal_ys,
                vertical_xs: vertical_xs.clone(),
                top_y: TABLE_TOP_Y,
                bottom_y,
            }
        })
        .collect();

    GridLayout { pages }
}

/// Left edge of every column, followed by the right edge of the table
fn vertical_rule_positions(column_widths: &[f32]) -> Vec<f32> {
    let mut xs = Vec::with_capacity(column_widths.len() + 1);
    let mut next_x = CELL_MARGIN;
    for width in column_widths {
        xs.push(next_x);
        next_x += width;
    }
    xs.push(CELL_MARGIN + TABLE_WIDTH);
    xs
}

// =============================================================================
// Drawing
// =============================================================================

/// Stroke the whole grid: all horizontal rules page by page, then all
/// vertical rules page by page.
pub fn rule_grid(surface: &mut impl DrawingSurface, grid: &GridLayout) -> Result<()> {
    for page_grid in grid.pages() {
        if !page_grid.page.is_first() {
            log::debug!("Grid continues on page {}", page_grid.page);
        }
        surface.open_page(page_grid.page)?;
        for &y in &page_grid.horizontal_ys {
            surface.stroke_line(
                Point::new(CELL_MARGIN, y),
                Point::new(CELL_MARGIN + TABLE_WIDTH, y),
            )?;
        }
        surface.close_page()?;
    }

    for page_grid in grid.pages() {
        surface.open_page(page_grid.page)?;
        for &x in &page_grid.vertical_xs {
            surface.stroke_line(
                Point::new(x, page_grid.top_y),
                Point::new(x, page_grid.bottom_y),
            )?;
        }
        surface.close_page()?;
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
