//! DOCX extractor.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::backend::{self, CoreProperties, DocxBackend};
use crate::error::{Error, Result};
use crate::model::{DocxMetadata, DocxRecord, FileType, Record};

use super::{check_input, Extractor};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// DOCX extractor over a single backend.
#[derive(Clone)]
pub struct DocxExtractor {
    backend: Arc<dyn DocxBackend>,
}

impl DocxExtractor {
    /// Create an extractor over `backend`.
    pub fn new(backend: Arc<dyn DocxBackend>) -> Self {
        Self { backend }
    }

    /// Create an extractor over the backend compiled into this build.
    pub fn detect() -> Result<Self> {
        backend::docx_backend()
            .map(Self::new)
            .ok_or(Error::BackendUnavailable(FileType::Docx))
    }

    /// Name of the underlying backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

impl Extractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract(&self, path: &Path) -> Result<Record> {
        check_input(path, FileType::Docx)?;

        let raw = self.backend.load(path).map_err(|e| Error::Extraction {
            file_type: FileType::Docx,
            backend: self.backend.name(),
            source: Box::new(e),
        })?;

        let mut record = DocxRecord::new(path.to_string_lossy());
        let mut skipped = 0usize;
        for (position, paragraph) in (1u32..).zip(&raw.paragraphs) {
            if !record.push_paragraph(position, &paragraph.text, paragraph.style.as_deref()) {
                skipped += 1;
            }
        }
        record.metadata = metadata_from_properties(raw.properties);

        log::debug!(
            "Read {} with {} ({} paragraphs, {} blank)",
            path.display(),
            self.backend.name(),
            record.paragraph_count,
            skipped
        );

        Ok(record.into())
    }
}

fn metadata_from_properties(props: CoreProperties) -> DocxMetadata {
    DocxMetadata {
        title: props.title.unwrap_or_default(),
        author: props.creator.unwrap_or_default(),
        subject: props.subject.unwrap_or_default(),
        keywords: props.keywords.unwrap_or_default(),
        comments: props.description.unwrap_or_default(),
        last_modified_by: props.last_modified_by.unwrap_or_default(),
        created: props.created.as_deref().map(normalize_date).unwrap_or_default(),
        modified: props.modified.as_deref().map(normalize_date).unwrap_or_default(),
        revision: props
            .revision
            .as_deref()
            .and_then(|r| r.trim().parse().ok())
            .unwrap_or(0),
    }
}

/// Render a W3CDTF property value as `YYYY-MM-DD HH:MM:SS`.
///
/// Offsets are converted to UTC. Values that are not W3C dates are returned
/// unchanged.
fn normalize_date(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.with_timezone(&Utc).format(DATE_TIME_FORMAT).to_string();
    }

    let naive = value.strip_suffix('Z').unwrap_or(value);
    if let Ok(dt) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DATE_TIME_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return dt.format(DATE_TIME_FORMAT).to_string();
        }
    }

    value.to_string()
}
