use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("{headers} column headers do not match {widths} column widths")]
    ColumnMismatch { headers: usize, widths: usize },
    #[error("Surface has {actual} pages but the report needs {expected}")]
    PageCountMismatch { expected: usize, actual: usize },
    #[error("Page {page} is outside the document (1..={total})")]
    PageOutOfRange { page: usize, total: usize },
    #[error("Cannot open page {requested} while page {open} is still open")]
    PageAlreadyOpen { open: usize, requested: usize },
    #[error("No page is open for drawing")]
    NoOpenPage,
    #[error("Page {0} was still open when the document was finished")]
    PageLeftOpen(usize),
    #[error("Request count total overflows at record {record}")]
    TotalOverflow { record: usize },
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(usize);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(1);

    /// Create a page index. Page numbers start at 1.
    pub fn new(number: usize) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    pub fn number(self) -> usize {
        self.0
    }

    /// Position in a zero-based page collection
    pub fn offset(self) -> usize {
        self.0 - 1
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }
}

impl std::fmt::Display for PageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in the rotated page coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Font face used for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Helvetica
    Regular,
    /// Helvetica-Bold
    Bold,
}

impl FontStyle {
    /// Resource name of the font inside each page
    pub fn resource_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
        }
    }
}
