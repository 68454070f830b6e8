//! Report generation session
//!
//! Drives the renderers over one document in a fixed order:
//! 1. Allocate every page the pagination plan needs
//! 2. Page numbers and the page 1 header block
//! 3. Grid rules across all pages
//! 4. Header labels and row text across all pages
//! 5. Running total on page 1
//! 6. Serialize

use crate::constants::COLUMN_WIDTHS;
use crate::content::{layout_content, write_content};
use crate::grid::{layout_grid, rule_grid};
use crate::header::{ReportHeader, stamp_running_total, write_page_headers};
use crate::options::ReportOptions;
use crate::pagination::PaginationPlan;
use crate::render::PdfCanvas;
use crate::surface::DrawingSurface;
use crate::table::ReportTable;
use crate::types::*;
use std::path::Path;

/// Generate the report PDF.
///
/// Returns `None` when the table has no rows: there is nothing to render
/// and no document is produced.
pub async fn generate_report(
    table: &ReportTable,
    header: &ReportHeader,
    options: &ReportOptions,
) -> Result<Option<Vec<u8>>> {
    options.validate()?;

    let table = table.clone();
    let header = header.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || render_report(&table, &header, &options)).await?
}

/// Save generated report bytes
pub async fn save_report(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Synchronous counterpart of [`generate_report`]
pub fn render_report(
    table: &ReportTable,
    header: &ReportHeader,
    options: &ReportOptions,
) -> Result<Option<Vec<u8>>> {
    options.validate()?;

    if table.is_empty() {
        log::info!("Report has no rows; nothing to render");
        return Ok(None);
    }

    log::debug!("Starting to generate PDF.");
    let plan = PaginationPlan::new(table.row_count());
    let mut canvas = PdfCanvas::new(plan.total_pages(), header.title.clone());

    draw_report(&mut canvas, table, header, options, &plan)?;

    let bytes = canvas.finish()?;
    log::debug!(
        "PDF generation complete: {} rows on {} pages, {} bytes",
        plan.total_rows(),
        plan.total_pages(),
        bytes.len()
    );
    Ok(Some(bytes))
}

/// Draw the full report onto a surface that already holds one page per
/// entry of `plan`.
///
/// The first failing primitive stops the whole drawing. The page it was
/// drawing on is closed before the error is returned.
pub fn draw_report(
    surface: &mut impl DrawingSurface,
    table: &ReportTable,
    header: &ReportHeader,
    options: &ReportOptions,
    plan: &PaginationPlan,
) -> Result<()> {
    if surface.page_count() != plan.total_pages() {
        return Err(ReportError::PageCountMismatch {
            expected: plan.total_pages(),
            actual: surface.page_count(),
        });
    }

    let result = draw_sections(surface, table, header, options, plan);
    if let Err(e) = &result {
        log::debug!("Report drawing aborted: {}", e);
        // Nothing may be open if the failure came from open/close itself
        let _ = surface.close_page();
    }
    result
}

fn draw_sections(
    surface: &mut impl DrawingSurface,
    table: &ReportTable,
    header: &ReportHeader,
    options: &ReportOptions,
    plan: &PaginationPlan,
) -> Result<()> {
    write_page_headers(surface, header)?;

    let grid = layout_grid(plan, &COLUMN_WIDTHS);
    rule_grid(surface, &grid)?;

    let content = layout_content(table, plan, &COLUMN_WIDTHS);
    write_content(surface, &content)?;

    stamp_running_total(surface, &options.running_total_line(table.running_total()))
}
