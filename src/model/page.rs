//! Page-level types for PDF records.

use super::PdfMetadata;
use serde::{Deserialize, Serialize};

/// Text of a single PDF page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page number (1-indexed, contiguous)
    pub page_number: u32,

    /// Extracted text, empty when the page has none
    pub text: String,

    /// Number of characters in `text`
    pub char_count: usize,
}

impl PageRecord {
    /// Create a page record, counting characters of `text`.
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            page_number,
            char_count: text.chars().count(),
            text,
        }
    }
}

/// Normalized content of a PDF file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfRecord {
    /// Path as given by the caller
    pub file_path: String,

    /// Pages in document order
    pub pages: Vec<PageRecord>,

    /// Every page's text followed by a newline
    pub full_text: String,

    /// Document information
    pub metadata: PdfMetadata,

    /// Number of pages
    pub page_count: usize,
}

impl PdfRecord {
    /// Create an empty record for `file_path`.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            pages: Vec::new(),
            full_text: String::new(),
            metadata: PdfMetadata::default(),
            page_count: 0,
        }
    }

    /// Append the next page.
    ///
    /// Page numbers are assigned in call order starting at 1.
    pub fn push_page(&mut self, text: impl Into<String>) {
        let page = PageRecord::new(self.pages.len() as u32 + 1, text);
        self.full_text.push_str(&page.text);
        self.full_text.push('\n');
        self.pages.push(page);
        self.page_count = self.pages.len();
    }

    /// Check if the record has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
