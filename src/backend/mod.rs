//! Document backend abstraction layer.
//!
//! Provides trait-based interfaces for the document libraries the extractors
//! depend on. A backend opens a file and returns its raw per-unit text and
//! document metadata; normalization into records happens in
//! [`crate::extract`].
//!
//! Which backends exist is decided at build time by cargo features:
//!
//! | Feature      | Backend            | Role              |
//! |--------------|--------------------|-------------------|
//! | `pdf-layout` | [`LayoutBackend`]  | primary PDF       |
//! | `pdf-lopdf`  | [`LopdfBackend`]   | fallback PDF      |
//! | `docx`       | [`OoxmlBackend`]   | DOCX              |

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

#[cfg(feature = "docx")]
mod docx;
#[cfg(any(feature = "pdf-layout", feature = "pdf-lopdf"))]
mod info;
#[cfg(feature = "pdf-layout")]
mod pdf_layout;
#[cfg(feature = "pdf-lopdf")]
mod pdf_lopdf;

#[cfg(feature = "docx")]
pub use docx::OoxmlBackend;
#[cfg(feature = "pdf-layout")]
pub use pdf_layout::LayoutBackend;
#[cfg(feature = "pdf-lopdf")]
pub use pdf_lopdf::LopdfBackend;

/// Naming scheme a PDF backend uses for information-dictionary keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyConvention {
    /// Bare names, e.g. `Title`, `CreationDate`
    Plain,
    /// Names with a leading slash, e.g. `/Title`, `/CreationDate`
    Slashed,
}

impl KeyConvention {
    /// Spell a bare information-dictionary name in this convention.
    pub fn key(self, name: &str) -> String {
        match self {
            KeyConvention::Plain => name.to_string(),
            KeyConvention::Slashed => format!("/{}", name),
        }
    }
}

/// Raw content of a PDF as returned by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPdf {
    /// Page texts in document order; `None` when a page has no extractable text.
    pub pages: Vec<Option<String>>,

    /// Information dictionary keyed by the backend's [`KeyConvention`],
    /// `None` when the document has no information dictionary.
    pub info: Option<BTreeMap<String, String>>,
}

/// Abstract interface for PDF text and metadata access.
pub trait PdfBackend: Send + Sync {
    /// Short backend name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Key naming used in [`RawPdf::info`].
    fn key_convention(&self) -> KeyConvention;

    /// Open `path` and read every page.
    fn load(&self, path: &Path) -> Result<RawPdf>;
}

/// A paragraph as seen by a DOCX backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParagraph {
    /// Untrimmed paragraph text
    pub text: String,

    /// Resolved style name, if the document declares one
    pub style: Option<String>,
}

/// DOCX core properties, each `None` when absent from the package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub last_modified_by: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub revision: Option<String>,
}

/// Raw content of a DOCX as returned by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocx {
    /// Every body paragraph in document order, blank ones included
    pub paragraphs: Vec<RawParagraph>,

    /// Core document properties
    pub properties: CoreProperties,
}

/// Abstract interface for DOCX paragraph and property access.
pub trait DocxBackend: Send + Sync {
    /// Short backend name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Open `path` and read its paragraphs and core properties.
    fn load(&self, path: &Path) -> Result<RawDocx>;
}

/// PDF backends compiled into this build, highest rank first.
pub fn pdf_backends() -> Vec<Arc<dyn PdfBackend>> {
    #[allow(unused_mut)]
    let mut backends: Vec<Arc<dyn PdfBackend>> = Vec::new();

    #[cfg(feature = "pdf-layout")]
    backends.push(Arc::new(LayoutBackend::new()));

    #[cfg(feature = "pdf-lopdf")]
    backends.push(Arc::new(LopdfBackend::new()));

    backends
}

/// The DOCX backend compiled into this build, if any.
pub fn docx_backend() -> Option<Arc<dyn DocxBackend>> {
    #[cfg(feature = "docx")]
    {
        Some(Arc::new(OoxmlBackend::new()))
    }

    #[cfg(not(feature = "docx"))]
    {
        None
    }
}

/// Treat empty page text as "no text". Whitespace is page content and is kept.
#[allow(dead_code)]
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_convention() {
        assert_eq!(KeyConvention::Plain.key("Title"), "Title");
        assert_eq!(KeyConvention::Slashed.key("ModDate"), "/ModDate");
    }

    #[test]
    fn test_non_empty_keeps_whitespace() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("   ".to_string()), Some("   ".to_string()));
        assert_eq!(non_empty(" \n\t".to_string()), Some(" \n\t".to_string()));
        assert_eq!(non_empty(" a ".to_string()), Some(" a ".to_string()));
    }

    #[test]
    fn test_compiled_backends_are_ranked() {
        let names: Vec<&str> = pdf_backends().iter().map(|b| b.name()).collect();

        #[cfg(all(feature = "pdf-layout", feature = "pdf-lopdf"))]
        assert_eq!(names, vec!["pdf-extract", "lopdf"]);

        #[cfg(not(any(feature = "pdf-layout", feature = "pdf-lopdf")))]
        assert!(names.is_empty());

        let _ = names;
    }

    #[test]
    fn test_docx_backend_follows_feature() {
        #[cfg(feature = "docx")]
        assert_eq!(docx_backend().map(|b| b.name()), Some("ooxml"));

        #[cfg(not(feature = "docx"))]
        assert!(docx_backend().is_none());
    }
}
