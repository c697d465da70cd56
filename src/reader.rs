//! Unified reader dispatching to format extractors by file extension.
//!
//! # Example
//!
//! ```no_run
//! use pdf_docx_reader::reader::FileReader;
//!
//! fn main() -> pdf_docx_reader::Result<()> {
//!     let reader = FileReader::new();
//!     println!("Supported: {}", reader.supported_extensions().join(", "));
//!
//!     let record = reader.read("report.docx")?;
//!     println!("{} {}", record.unit_count(), record.unit_label());
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::extract::{extension_of, suffix_of, DocxExtractor, Extractor, PdfExtractor};
use crate::model::{FileType, Record};

/// Registry of extractors keyed by lowercase extension.
///
/// Availability is decided when the reader is built; nothing is re-detected
/// afterwards.
#[derive(Clone)]
pub struct FileReader {
    extractors: HashMap<String, Arc<dyn Extractor>>,
}

impl FileReader {
    /// Create a reader with every extractor whose backends are compiled in.
    pub fn new() -> Self {
        let mut reader = Self::empty();

        match PdfExtractor::detect() {
            Ok(extractor) => {
                log::debug!("PDF backends: {}", extractor.backend_names().join(", "));
                reader.register(Arc::new(extractor));
            }
            Err(e) => log::debug!("{}", e),
        }

        match DocxExtractor::detect() {
            Ok(extractor) => {
                log::debug!("DOCX backend: {}", extractor.backend_name());
                reader.register(Arc::new(extractor));
            }
            Err(e) => log::debug!("{}", e),
        }

        reader
    }

    /// Create a reader with no extractors.
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Create a reader over the given extractors.
    pub fn with_extractors<I>(extractors: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Extractor>>,
    {
        let mut reader = Self::empty();
        for extractor in extractors {
            reader.register(extractor);
        }
        reader
    }

    /// Register an extractor for all its supported extensions.
    ///
    /// A later registration replaces an earlier one for the same extension.
    pub fn register(&mut self, extractor: Arc<dyn Extractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors
                .insert(normalize_extension(ext), extractor.clone());
        }
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn Extractor>> {
        self.extractors.get(&normalize_extension(ext)).cloned()
    }

    /// Check if an extension is usable, with or without the leading dot.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&normalize_extension(ext))
    }

    /// Usable extensions with their leading dot.
    ///
    /// Known file types come first in their fixed order (`.pdf`, `.docx`),
    /// followed by any other registered extension in sorted order.
    pub fn supported_extensions(&self) -> Vec<String> {
        let mut known: Vec<String> = FileType::ALL
            .into_iter()
            .filter(|t| self.extractors.contains_key(t.extension()))
            .map(|t| t.dotted_extension().to_string())
            .collect();

        let mut others: Vec<String> = self
            .extractors
            .keys()
            .filter(|ext| FileType::from_extension(ext).is_none())
            .map(|ext| format!(".{}", ext))
            .collect();
        others.sort();

        known.extend(others);
        known
    }

    /// Read the document at `path` with the extractor for its extension.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Record> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let ext = extension_of(path);
        match self.get_by_extension(&ext) {
            Some(extractor) => {
                log::debug!("Reading {} with {} extractor", path.display(), extractor.name());
                extractor.extract(path)
            }
            None => match FileType::from_extension(&ext) {
                Some(file_type) => Err(Error::BackendUnavailable(file_type)),
                None => Err(Error::unsupported_type(
                    &suffix_of(path),
                    &self.supported_extensions(),
                )),
            },
        }
    }
}

impl Default for FileReader {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_lowercase()
}
