//! Fixed layout constants for the usage report
//!
//! Every coordinate here is in PDF points, measured in the rotated
//! (landscape) coordinate space established by the page preamble.
//! These values define the visual grammar of the report and must not drift.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Page Geometry
// =============================================================================

/// A4 width in millimeters (portrait)
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 height in millimeters (portrait)
pub const A4_HEIGHT_MM: f32 = 297.0;

/// Page rotation applied to every page (degrees, clockwise)
pub const PAGE_ROTATION_DEGREES: i64 = 90;

// =============================================================================
// Table Grid
// =============================================================================

/// Height of one table row, header row included
pub const ROW_HEIGHT: f32 = 25.0;

/// Space between a column rule and the text inside the cell
pub const CELL_PADDING: f32 = 5.0;

/// Left margin of the table
pub const CELL_MARGIN: f32 = 40.0;

/// Total table width; equals the sum of `COLUMN_WIDTHS`
pub const TABLE_WIDTH: f32 = 750.0;

/// Y coordinate of the top rule of the table on every page
pub const TABLE_TOP_Y: f32 = 480.0;

/// Width of each column, left to right
pub const COLUMN_WIDTHS: [f32; 6] = [40.0, 160.0, 70.0, 160.0, 160.0, 160.0];

/// Maximum number of data rows drawn on one page (the header row is extra)
pub const PAGE_CAPACITY: usize = 15;

// =============================================================================
// Fonts
// =============================================================================

/// Body text size for cells, page numbers and small header lines
pub const FONT_SIZE: f32 = 9.0;

/// Report title size
pub const TITLE_FONT_SIZE: f32 = 16.0;

/// Report period size
pub const PERIOD_FONT_SIZE: f32 = 14.0;

/// Height of the Helvetica font bounding box in glyph space (931 - -225)
pub const HELVETICA_BBOX_HEIGHT: f32 = 1156.0;

/// Baseline of the first text row inside the table.
///
/// Centers the row vertically and drops it by a quarter of the scaled
/// font bounding box so the glyphs sit in the middle of the cell.
pub fn first_text_baseline() -> f32 {
    TABLE_TOP_Y - ROW_HEIGHT / 2.0 - (HELVETICA_BBOX_HEIGHT / 1000.0 * FONT_SIZE) / 4.0
}

// =============================================================================
// Header Block
// =============================================================================

pub const TITLE_Y: f32 = 550.0;
pub const PERIOD_Y: f32 = 530.0;
pub const GENERATED_AT_Y: f32 = 510.0;
pub const RUNNING_TOTAL_Y: f32 = 490.0;

/// Y coordinate of the page number stamp
pub const PAGE_NUMBER_Y: f32 = ROW_HEIGHT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_fill_table() {
        let sum: f32 = COLUMN_WIDTHS.iter().sum();
        assert_eq!(sum, TABLE_WIDTH);
    }

    #[test]
    fn test_full_page_stays_above_page_number() {
        // Header row plus a full page of rows must end above the page number line
        let bottom = TABLE_TOP_Y - ROW_HEIGHT * (PAGE_CAPACITY as f32 + 1.0);
        assert!(bottom > PAGE_NUMBER_Y + FONT_SIZE);
    }

    #[test]
    fn test_first_text_baseline() {
        let baseline = first_text_baseline();
        assert!((baseline - 464.899).abs() < 1e-3);
    }
}
