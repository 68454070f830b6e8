pub mod constants;
pub mod content;
pub mod grid;
mod header;
mod options;
pub mod pagination;
pub mod render;
mod session;
mod source;
pub mod surface;
mod table;
mod types;

pub use header::{
    ReportHeader, generated_at_label, period_label, stamp_running_total, write_page_headers,
};
pub use options::*;
pub use pagination::{PaginationPlan, page_count, rows_per_page};
pub use render::PdfCanvas;
pub use session::{draw_report, generate_report, render_report, save_report};
pub use source::{UsageRecord, load_usage_csv};
pub use surface::DrawingSurface;
pub use table::{ReportTable, RowEntry};
pub use types::*;
