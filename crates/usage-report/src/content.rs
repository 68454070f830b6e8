//! Table text flow
//!
//! Places the column header labels and every row's cell values inside the
//! grid cells. Rows are consumed page by page following the same
//! [`PaginationPlan`] the grid is built from.

use crate::constants::{CELL_MARGIN, CELL_PADDING, FONT_SIZE, ROW_HEIGHT, first_text_baseline};
use crate::pagination::PaginationPlan;
use crate::surface::DrawingSurface;
use crate::table::ReportTable;
use crate::types::{FontStyle, PageIndex, Point, Result};

/// One piece of text at its final position
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    /// Zero-based data row, `None` for the column header row
    pub row: Option<usize>,
    pub column: usize,
    pub position: Point,
    pub font: FontStyle,
    pub text: String,
}

/// All text placed on one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    pub page: PageIndex,
    pub placements: Vec<TextPlacement>,
}

/// Compute the position of every header label and cell value.
pub fn layout_content(
    table: &ReportTable,
    plan: &PaginationPlan,
    column_widths: &[f32],
) -> Vec<PageText> {
    let mut pages = Vec::with_capacity(plan.total_pages());
    let mut rows = table.rows().iter().enumerate();

    for (page, rows_on_page) in plan.pages() {
        let mut placements = Vec::new();
        let mut y = first_text_baseline();

        if page.is_first() {
            let headers = table.column_headers().iter().map(String::as_str);
            place_row(
                &mut placements,
                None,
                headers,
                column_widths,
                y,
                FontStyle::Bold,
            );
            y -= ROW_HEIGHT;
        } else {
            log::debug!("Row text continues on page {}", page);
        }

        for (idx, entry) in rows.by_ref().take(rows_on_page) {
            let cells = (0..column_widths.len()).map(|column| entry.cell(column));
            place_row(
                &mut placements,
                Some(idx),
                cells,
                column_widths,
                y,
                FontStyle::Regular,
            );
            y -= ROW_HEIGHT;
        }

        pages.push(PageText { page, placements });
    }

    pages
}

/// Lay out one row left to right, each cell at the left edge of its column
fn place_row<'a>(
    placements: &mut Vec<TextPlacement>,
    row: Option<usize>,
    cells: impl Iterator<Item = &'a str>,
    column_widths: &[f32],
    y: f32,
    font: FontStyle,
) {
    let mut x = CELL_MARGIN + CELL_PADDING;
    for (column, (text, width)) in cells.zip(column_widths).enumerate() {
        placements.push(TextPlacement {
            row,
            column,
            position: Point::new(x, y),
            font,
            text: text.to_string(),
        });
        x += width;
    }
}

/// Write every page's text through the surface, one page at a time.
pub fn write_content(surface: &mut impl DrawingSurface, pages: &[PageText]) -> Result<()> {
    for page_text in pages {
        surface.open_page(page_text.page)?;
        for placement in &page_text.placements {
            surface.place_text(placement.position, placement.font, FONT_SIZE, &placement.text)?;
        }
        surface.close_page()?;
    }
    Ok(())
}
