//! Format extractors turning backend output into normalized records.
//!
//! Each extractor owns the backends for one file type and implements
//! [`Extractor`]. The [`crate::reader::FileReader`] dispatches to them by
//! file extension.
//!
//! # Example
//!
//! ```no_run
//! use pdf_docx_reader::extract::{Extractor, PdfExtractor};
//! use std::path::Path;
//!
//! fn main() -> pdf_docx_reader::Result<()> {
//!     let extractor = PdfExtractor::detect()?;
//!     let record = extractor.extract(Path::new("document.pdf"))?;
//!     println!("{}", record.full_text());
//!     Ok(())
//! }
//! ```

mod docx;
mod pdf;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;

use crate::error::{Error, Result};
use crate::model::{FileType, Record};
use std::path::Path;

/// Trait for format extractors.
///
/// Implement this trait to add support for a new document format.
pub trait Extractor: Send + Sync {
    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract a record from the file at `path`.
    fn extract(&self, path: &Path) -> Result<Record>;
}

/// Lowercase extension of `path` without the leading dot, empty if none.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Extension of `path` as written, without the leading dot, empty if none.
pub(crate) fn suffix_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Verify that `path` exists and carries the extension of `file_type`.
pub(crate) fn check_input(path: &Path, file_type: FileType) -> Result<()> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    if extension_of(path) != file_type.extension() {
        return Err(Error::unsupported_type(
            &suffix_of(path),
            &[file_type.dotted_extension()],
        ));
    }

    Ok(())
}
