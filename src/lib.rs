//! # pdf-docx-reader
//!
//! Text and metadata extraction for PDF and DOCX files.
//!
//! This library reads a document through a format-specific backend,
//! normalizes the result into a [`Record`] and renders it as JSON or as a
//! fixed plain-text layout.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_docx_reader::{read_file, render};
//!
//! fn main() -> pdf_docx_reader::Result<()> {
//!     let record = read_file("document.pdf")?;
//!
//!     println!("{}", render::format(&record, "text")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **PDF**: page text with a layout-aware primary backend and a
//!   structural fallback, plus the document information dictionary
//! - **DOCX**: body paragraphs with style names and core properties
//! - **Output**: pretty JSON or a human-readable text layout
//! - **Cargo features**: `pdf-layout`, `pdf-lopdf` and `docx` pick the
//!   compiled backends; the reader only advertises what is available

pub mod backend;
pub mod error;
pub mod extract;
pub mod model;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{DocxExtractor, Extractor, PdfExtractor};
pub use model::{
    DocxMetadata, DocxRecord, FileType, MetadataValue, PageRecord, ParagraphRecord, PdfMetadata,
    PdfRecord, Record,
};
pub use reader::FileReader;
pub use render::{JsonFormat, OutputFormat};

use std::path::Path;

/// Read a PDF or DOCX file into a record.
///
/// Uses a [`FileReader`] over every backend compiled into this build.
///
/// # Example
///
/// ```no_run
/// use pdf_docx_reader::read_file;
///
/// let record = read_file("report.docx").unwrap();
/// println!("Paragraphs: {}", record.unit_count());
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Record> {
    FileReader::new().read(path)
}

/// Read a file and render it in one step.
///
/// # Example
///
/// ```no_run
/// use pdf_docx_reader::{read_and_render, OutputFormat};
///
/// let json = read_and_render("document.pdf", OutputFormat::Json).unwrap();
/// std::fs::write("output.json", json).unwrap();
/// ```
pub fn read_and_render<P: AsRef<Path>>(path: P, format: OutputFormat) -> Result<String> {
    let record = read_file(path)?;
    render::render(&record, format)
}

/// Extensions usable in this build, with their leading dot.
pub fn supported_extensions() -> Vec<String> {
    FileReader::new().supported_extensions()
}
