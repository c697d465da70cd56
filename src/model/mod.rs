//! Record types produced by the extractors.
//!
//! Each file type has its own record shape: PDF content is segmented into
//! pages, DOCX content into paragraphs. [`Record`] wraps both.

mod document;
mod metadata;
mod page;
mod paragraph;

pub use document::{FileType, Record};
pub use metadata::{DocxMetadata, MetadataValue, PdfMetadata};
pub use page::{PageRecord, PdfRecord};
pub use paragraph::{DocxRecord, ParagraphRecord, DEFAULT_STYLE};
