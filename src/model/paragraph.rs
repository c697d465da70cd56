//! Paragraph-level types for DOCX records.

use super::DocxMetadata;
use serde::{Deserialize, Serialize};

/// Style reported when a paragraph carries no resolvable style.
pub const DEFAULT_STYLE: &str = "Normal";

/// A non-blank DOCX paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Position among all body paragraphs, blank ones included (1-indexed)
    pub paragraph_number: u32,

    /// Trimmed paragraph text, never empty
    pub text: String,

    /// Number of characters in `text`
    pub char_count: usize,

    /// Paragraph style name
    pub style: String,
}

/// Normalized content of a DOCX file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocxRecord {
    /// Path as given by the caller
    pub file_path: String,

    /// Non-blank paragraphs in document order
    pub paragraphs: Vec<ParagraphRecord>,

    /// Every emitted paragraph's text followed by a newline
    pub full_text: String,

    /// Core document properties
    pub metadata: DocxMetadata,

    /// Number of emitted paragraphs
    pub paragraph_count: usize,
}

impl DocxRecord {
    /// Create an empty record for `file_path`.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            paragraphs: Vec::new(),
            full_text: String::new(),
            metadata: DocxMetadata::default(),
            paragraph_count: 0,
        }
    }

    /// Append the paragraph found at `position`.
    ///
    /// The text is trimmed first; blank paragraphs are dropped and `false`
    /// is returned. A missing or empty style falls back to [`DEFAULT_STYLE`].
    pub fn push_paragraph(&mut self, position: u32, text: &str, style: Option<&str>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let style = style
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_STYLE);

        self.full_text.push_str(text);
        self.full_text.push('\n');
        self.paragraphs.push(ParagraphRecord {
            paragraph_number: position,
            text: text.to_string(),
            char_count: text.chars().count(),
            style: style.to_string(),
        });
        self.paragraph_count = self.paragraphs.len();
        true
    }

    /// Check if the record has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
