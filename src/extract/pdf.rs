//! PDF extractor with ranked backend fallback.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::backend::{self, KeyConvention, PdfBackend};
use crate::error::{Error, Result};
use crate::model::{FileType, PdfMetadata, PdfRecord, Record};

use super::{check_input, Extractor};

/// PDF extractor.
///
/// Backends are tried in rank order. The first backend to load the document
/// wins; a failing backend is logged and the next one starts from scratch.
#[derive(Clone)]
pub struct PdfExtractor {
    backends: Vec<Arc<dyn PdfBackend>>,
}

impl PdfExtractor {
    /// Create an extractor over `backends`, highest rank first.
    ///
    /// Fails with [`Error::BackendUnavailable`] when `backends` is empty.
    pub fn new(backends: Vec<Arc<dyn PdfBackend>>) -> Result<Self> {
        if backends.is_empty() {
            return Err(Error::BackendUnavailable(FileType::Pdf));
        }
        Ok(Self { backends })
    }

    /// Create an extractor over the backends compiled into this build.
    pub fn detect() -> Result<Self> {
        Self::new(backend::pdf_backends())
    }

    /// Names of the backends in rank order.
    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    fn extract_with(&self, backend: &dyn PdfBackend, path: &Path) -> Result<PdfRecord> {
        let raw = backend.load(path)?;

        let mut record = PdfRecord::new(path.to_string_lossy());
        for text in raw.pages {
            record.push_page(text.unwrap_or_default());
        }

        if let Some(info) = raw.info {
            record.metadata = metadata_from_info(&info, backend.key_convention());
        }

        Ok(record)
    }
}

impl Extractor for PdfExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn extract(&self, path: &Path) -> Result<Record> {
        check_input(path, FileType::Pdf)?;

        let mut last_error = None;
        for (rank, backend) in self.backends.iter().enumerate() {
            match self.extract_with(backend.as_ref(), path) {
                Ok(record) => {
                    log::debug!(
                        "Read {} with {} ({} pages)",
                        path.display(),
                        backend.name(),
                        record.page_count
                    );
                    return Ok(record.into());
                }
                Err(e) => {
                    if let Some(next) = self.backends.get(rank + 1) {
                        log::warn!("{} failed, trying {}: {}", backend.name(), next.name(), e);
                    }
                    last_error = Some((backend.name(), e));
                }
            }
        }

        match last_error {
            Some((backend, source)) => Err(Error::Extraction {
                file_type: FileType::Pdf,
                backend,
                source: Box::new(source),
            }),
            None => Err(Error::BackendUnavailable(FileType::Pdf)),
        }
    }
}

/// Map an information dictionary onto the fixed metadata fields.
fn metadata_from_info(info: &BTreeMap<String, String>, convention: KeyConvention) -> PdfMetadata {
    let field = |name: &str| info.get(&convention.key(name)).cloned().unwrap_or_default();

    PdfMetadata {
        title: field("Title"),
        author: field("Author"),
        subject: field("Subject"),
        creator: field("Creator"),
        producer: field("Producer"),
        creation_date: field("CreationDate"),
        modification_date: field("ModDate"),
    }
}
