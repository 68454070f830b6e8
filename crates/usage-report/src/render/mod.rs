//! PDF output for the usage report
//!
//! This module handles all PDF-specific operations:
//! - Buffering content stream operations per page
//! - Encoding text for the standard Helvetica fonts
//! - Assembling and serializing the final lopdf document

mod canvas;
mod text;

pub use canvas::PdfCanvas;
pub use text::encode_literal;
