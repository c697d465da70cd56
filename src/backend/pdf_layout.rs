//! Layout-aware PDF backend built on `pdf-extract`.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document as LopdfDocument;

use super::info::read_info;
use super::{non_empty, KeyConvention, PdfBackend, RawPdf};
use crate::error::{Error, Result};

/// Primary [`PdfBackend`].
///
/// Page text comes from `pdf-extract`, which positions glyphs before joining
/// them. Information-dictionary keys use [`KeyConvention::Plain`].
#[derive(Debug, Clone, Default)]
pub struct LayoutBackend {
    _private: (),
}

impl LayoutBackend {
    /// Create a new layout-aware backend.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PdfBackend for LayoutBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn key_convention(&self) -> KeyConvention {
        KeyConvention::Plain
    }

    fn load(&self, path: &Path) -> Result<RawPdf> {
        let data = std::fs::read(path)?;

        let doc = LopdfDocument::load_mem(&data)?;
        let info = read_info(&doc, self.key_convention());
        drop(doc);

        // pdf-extract panics on some malformed fonts
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(&data)
        }))
        .map_err(|payload| {
            Error::TextExtract(format!("pdf-extract panicked: {}", panic_message(&*payload)))
        })??;

        log::debug!("pdf-extract read {} pages from {}", pages.len(), path.display());

        Ok(RawPdf {
            pages: pages.into_iter().map(non_empty).collect(),
            info,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
