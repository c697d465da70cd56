//! Error types for pdf-docx-reader.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::FileType;

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension is not handled.
    #[error("Unsupported file type: {extension}. Supported types: {supported}")]
    UnsupportedType {
        /// Extension as given, with its leading dot.
        extension: String,
        /// Comma-separated list of usable extensions.
        supported: String,
    },

    /// No backend is compiled in for the requested file type.
    #[error("{0} reader not available: no backend enabled for this file type")]
    BackendUnavailable(FileType),

    /// Every backend failed to read the document.
    #[error("Failed to read {file_type} file with {backend}: {source}")]
    Extraction {
        file_type: FileType,
        /// Name of the last backend tried.
        backend: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// Unknown output format string.
    #[error("Unsupported output format: {0}")]
    InvalidFormat(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error opening the DOCX package.
    #[error("DOCX package error: {0}")]
    Docx(String),

    /// Malformed XML inside a DOCX part.
    #[error("XML error: {0}")]
    Xml(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Build an [`Error::UnsupportedType`] from an extension and the usable set.
    pub fn unsupported_type<S: AsRef<str>>(extension: &str, supported: &[S]) -> Self {
        let extension = if extension.is_empty() {
            "(none)".to_string()
        } else if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };

        let supported = if supported.is_empty() {
            "none".to_string()
        } else {
            supported
                .iter()
                .map(|s| AsRef::<str>::as_ref(s))
                .collect::<Vec<&str>>()
                .join(", ")
        };

        Error::UnsupportedType {
            extension,
            supported,
        }
    }
}

#[cfg(any(feature = "pdf-layout", feature = "pdf-lopdf"))]
impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(feature = "pdf-layout")]
impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}

#[cfg(feature = "docx")]
impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::Docx(err.to_string())
    }
}

#[cfg(feature = "docx")]
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Docx(err.to_string()),
        }
    }
}

#[cfg(feature = "docx")]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
