use crate::constants::COLUMN_WIDTHS;
use crate::types::{ReportError, Result};

/// One table row: one cell per column, missing cells render as empty text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowEntry {
    cells: Vec<Option<String>>,
}

impl RowEntry {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(|c| Some(c.into())).collect(),
        }
    }

    /// Build a row where some cells may be missing
    pub fn from_optional(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Text of the cell at `column`; missing cells are empty
    pub fn cell(&self, column: usize) -> &str {
        self.cells
            .get(column)
            .and_then(|c| c.as_deref())
            .unwrap_or("")
    }

    fn fit_to(mut self, columns: usize) -> Self {
        self.cells.resize(columns, None);
        self
    }
}

/// The materialized report: column headers, ordered rows and the running total
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    column_headers: Vec<String>,
    rows: Vec<RowEntry>,
    running_total: u64,
}

impl ReportTable {
    /// Create a table laid out on the fixed column grid.
    ///
    /// The header count must match the number of column widths. Rows with a
    /// different arity are padded with empty cells or truncated.
    pub fn new(column_headers: Vec<String>, rows: Vec<RowEntry>, running_total: u64) -> Result<Self> {
        if column_headers.len() != COLUMN_WIDTHS.len() {
            return Err(ReportError::ColumnMismatch {
                headers: column_headers.len(),
                widths: COLUMN_WIDTHS.len(),
            });
        }

        let columns = column_headers.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                if row.len() != columns {
                    log::warn!(
                        "Row {} has {} cells, expected {}; fitting to the column grid",
                        idx + 1,
                        row.len(),
                        columns
                    );
                    row.fit_to(columns)
                } else {
                    row
                }
            })
            .collect();

        Ok(Self {
            column_headers,
            rows,
            running_total,
        })
    }

    pub fn column_headers(&self) -> &[String] {
        &self.column_headers
    }

    pub fn rows(&self) -> &[RowEntry] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn running_total(&self) -> u64 {
        self.running_total
    }
}
