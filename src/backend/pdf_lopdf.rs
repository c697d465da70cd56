//! Fallback PDF backend built on `lopdf`.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use super::info::read_info;
use super::{non_empty, KeyConvention, PdfBackend, RawPdf};
use crate::error::{Error, Result};

/// Fallback [`PdfBackend`] backed by `lopdf::Document`.
///
/// Text is decoded operator by operator without layout reconstruction.
/// Information-dictionary keys use [`KeyConvention::Slashed`].
#[derive(Debug, Clone, Default)]
pub struct LopdfBackend {
    _private: (),
}

impl LopdfBackend {
    /// Create a new lopdf backend.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn key_convention(&self) -> KeyConvention {
        KeyConvention::Slashed
    }

    fn load(&self, path: &Path) -> Result<RawPdf> {
        let doc = LopdfDocument::load(path)?;
        let info = read_info(&doc, self.key_convention());

        let page_ids = doc.get_pages();
        let mut pages = Vec::with_capacity(page_ids.len());
        for page_num in page_ids.keys() {
            let text = doc
                .extract_text(&[*page_num])
                .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))?;
            pages.push(non_empty(text));
        }

        log::debug!("lopdf read {} pages from {}", pages.len(), path.display());

        Ok(RawPdf { pages, info })
    }
}
