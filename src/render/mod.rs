//! Rendering module for converting records to output formats.

mod json;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::OutputFormat;
pub use text::to_text;

use crate::error::Result;
use crate::model::Record;

/// Render a record in the given mode.
///
/// JSON output is pretty-printed.
pub fn render(record: &Record, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(record, JsonFormat::Pretty),
        OutputFormat::Text => Ok(to_text(record)),
    }
}

/// Render a record in the mode named by `mode` (`"json"` or `"text"`).
///
/// Unknown modes fail with [`crate::Error::InvalidFormat`].
pub fn format(record: &Record, mode: &str) -> Result<String> {
    render(record, mode.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::PdfRecord;

    #[test]
    fn test_format_dispatch() {
        let record: Record = PdfRecord::new("a.pdf").into();

        assert!(format(&record, "json").unwrap().starts_with('{'));
        assert!(format(&record, "text").unwrap().starts_with("File: a.pdf"));
        assert!(matches!(
            format(&record, "yaml"),
            Err(Error::InvalidFormat(_))
        ));
    }
}
