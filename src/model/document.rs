//! Document-level types.

use super::{DocxRecord, MetadataValue, PdfRecord};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of documents the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    /// Portable Document Format
    #[serde(rename = "PDF")]
    Pdf,
    /// Office Open XML word-processing document
    #[serde(rename = "DOCX")]
    Docx,
}

impl FileType {
    /// All file types, in reporting order.
    pub const ALL: [FileType; 2] = [FileType::Pdf, FileType::Docx];

    /// Lowercase extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
        }
    }

    /// Lowercase extension with the leading dot (e.g. `.pdf`).
    pub fn dotted_extension(self) -> &'static str {
        match self {
            FileType::Pdf => ".pdf",
            FileType::Docx => ".docx",
        }
    }

    /// Look up a file type by extension, case-insensitive, with or without a dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_lowercase();
        Self::ALL.into_iter().find(|t| t.extension() == ext)
    }

    /// Label used in records and text output.
    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Docx => "DOCX",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized result of reading one document.
///
/// Serializes as a flat object that opens with `file_path` followed by the
/// `file_type` field selecting the variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "file_type")]
pub enum Record {
    /// Page-segmented PDF content
    #[serde(rename = "PDF")]
    Pdf(PdfRecord),
    /// Paragraph-segmented DOCX content
    #[serde(rename = "DOCX")]
    Docx(DocxRecord),
}

impl Record {
    /// The document kind.
    pub fn file_type(&self) -> FileType {
        match self {
            Record::Pdf(_) => FileType::Pdf,
            Record::Docx(_) => FileType::Docx,
        }
    }

    /// Path the record was read from.
    pub fn file_path(&self) -> &str {
        match self {
            Record::Pdf(r) => &r.file_path,
            Record::Docx(r) => &r.file_path,
        }
    }

    /// Concatenated text of every extraction unit.
    pub fn full_text(&self) -> &str {
        match self {
            Record::Pdf(r) => &r.full_text,
            Record::Docx(r) => &r.full_text,
        }
    }

    /// Number of extraction units (pages or emitted paragraphs).
    pub fn unit_count(&self) -> usize {
        match self {
            Record::Pdf(r) => r.page_count,
            Record::Docx(r) => r.paragraph_count,
        }
    }

    /// Label for the unit count ("Pages" or "Paragraphs").
    pub fn unit_label(&self) -> &'static str {
        match self {
            Record::Pdf(_) => "Pages",
            Record::Docx(_) => "Paragraphs",
        }
    }

    /// Metadata entries in their fixed order.
    pub fn metadata_entries(&self) -> Vec<(&'static str, MetadataValue)> {
        match self {
            Record::Pdf(r) => r.metadata.entries(),
            Record::Docx(r) => r.metadata.entries(),
        }
    }

    /// Borrow the PDF record, if this is one.
    pub fn as_pdf(&self) -> Option<&PdfRecord> {
        match self {
            Record::Pdf(r) => Some(r),
            Record::Docx(_) => None,
        }
    }

    /// Borrow the DOCX record, if this is one.
    pub fn as_docx(&self) -> Option<&DocxRecord> {
        match self {
            Record::Docx(r) => Some(r),
            Record::Pdf(_) => None,
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Record::Pdf(r) => {
                let mut state = serializer.serialize_struct("PdfRecord", 6)?;
                state.serialize_field("file_path", &r.file_path)?;
                state.serialize_field("file_type", &FileType::Pdf)?;
                state.serialize_field("pages", &r.pages)?;
                state.serialize_field("full_text", &r.full_text)?;
                state.serialize_field("metadata", &r.metadata)?;
                state.serialize_field("page_count", &r.page_count)?;
                state.end()
            }
            Record::Docx(r) => {
                let mut state = serializer.serialize_struct("DocxRecord", 6)?;
                state.serialize_field("file_path", &r.file_path)?;
                state.serialize_field("file_type", &FileType::Docx)?;
                state.serialize_field("paragraphs", &r.paragraphs)?;
                state.serialize_field("full_text", &r.full_text)?;
                state.serialize_field("metadata", &r.metadata)?;
                state.serialize_field("paragraph_count", &r.paragraph_count)?;
                state.end()
            }
        }
    }
}

impl From<PdfRecord> for Record {
    fn from(record: PdfRecord) -> Self {
        Record::Pdf(record)
    }
}

impl From<DocxRecord> for Record {
    fn from(record: DocxRecord) -> Self {
        Record::Docx(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_extension("pdf"), Some(FileType::Pdf));
        assert_eq!(FileType::from_extension(".PDF"), Some(FileType::Pdf));
        assert_eq!(FileType::from_extension("DocX"), Some(FileType::Docx));
        assert_eq!(FileType::from_extension("doc"), None);
        assert_eq!(FileType::from_extension(""), None);
    }

    #[test]
    fn test_file_type_display() {
        assert_eq!(FileType::Pdf.to_string(), "PDF");
        assert_eq!(FileType::Docx.to_string(), "DOCX");
        assert_eq!(FileType::Docx.dotted_extension(), ".docx");
    }

    #[test]
    fn test_record_accessors() {
        let mut pdf = PdfRecord::new("report.pdf");
        pdf.push_page("one");
        let record = Record::from(pdf);

        assert_eq!(record.file_type(), FileType::Pdf);
        assert_eq!(record.file_path(), "report.pdf");
        assert_eq!(record.full_text(), "one\n");
        assert_eq!(record.unit_count(), 1);
        assert_eq!(record.unit_label(), "Pages");
        assert_eq!(record.metadata_entries().len(), 7);
        assert!(record.as_docx().is_none());
    }

    #[test]
    fn test_record_serializes_with_file_type_tag() {
        let record = Record::from(DocxRecord::new("notes.docx"));
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["file_type"], "DOCX");
        assert_eq!(value["file_path"], "notes.docx");
        assert_eq!(value["paragraph_count"], 0);
        assert_eq!(value["metadata"]["revision"], 0);
    }

    #[test]
    fn test_record_json_opens_with_file_path() {
        let mut pdf = PdfRecord::new("a.pdf");
        pdf.push_page("x");
        let json = serde_json::to_string(&Record::from(pdf)).unwrap();
        assert!(json.starts_with(r#"{"file_path":"a.pdf","file_type":"PDF","pages":"#));

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back.file_type(), FileType::Pdf);
        assert_eq!(back.unit_count(), 1);
    }
}
