//! Plain text rendering for records.

use std::fmt::Write;

use crate::model::Record;

/// Convert a record to the fixed plain-text layout.
///
/// Empty metadata strings and a zero revision are left out; the content
/// section is `full_text` verbatim.
pub fn to_text(record: &Record) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "File: {}", record.file_path());
    let _ = writeln!(output, "Type: {}", record.file_type());
    let _ = writeln!(output, "{}: {}", record.unit_label(), record.unit_count());

    output.push_str("\nMetadata:\n");
    for (key, value) in record.metadata_entries() {
        if !value.is_empty() {
            let _ = writeln!(output, "  {}: {}", key, value);
        }
    }

    output.push_str("\nContent:\n");
    output.push_str(record.full_text());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocxRecord, PdfRecord};

    #[test]
    fn test_pdf_layout() {
        let mut record = PdfRecord::new("a.pdf");
        record.metadata.author = "Ada".to_string();
        record.push_page("One");
        record.push_page("");

        assert_eq!(
            to_text(&record.into()),
            "File: a.pdf\nType: PDF\nPages: 2\n\nMetadata:\n  author: Ada\n\nContent:\nOne\n\n"
        );
    }

    #[test]
    fn test_docx_layout_skips_zero_revision() {
        let mut record = DocxRecord::new("b.docx");
        record.metadata.title = "Plan".to_string();
        record.push_paragraph(1, "Body", None);

        let text = to_text(&record.clone().into());
        assert!(text.starts_with("File: b.docx\nType: DOCX\nParagraphs: 1\n"));
        assert!(text.contains("  title: Plan\n"));
        assert!(!text.contains("revision"));
        assert!(text.ends_with("\nContent:\nBody\n"));

        record.metadata.revision = 3;
        assert!(to_text(&record.into()).contains("  revision: 3\n"));
    }
}
