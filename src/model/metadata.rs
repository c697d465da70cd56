//! Document metadata with a fixed key set per file type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single metadata value as shown in text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// String property
    Text(String),
    /// Integer property (DOCX revision)
    Integer(u64),
}

impl MetadataValue {
    /// True for the empty string and zero.
    pub fn is_empty(&self) -> bool {
        match self {
            MetadataValue::Text(s) => s.is_empty(),
            MetadataValue::Integer(n) => *n == 0,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Text(s) => f.write_str(s),
            MetadataValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// PDF document information.
///
/// Absent source fields are empty strings. Dates keep the raw
/// information-dictionary form (e.g. `D:20240115103045Z`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfMetadata {
    /// Document title
    pub title: String,

    /// Document author
    pub author: String,

    /// Document subject
    pub subject: String,

    /// Creator application
    pub creator: String,

    /// PDF producer
    pub producer: String,

    /// Creation date
    pub creation_date: String,

    /// Last modification date
    pub modification_date: String,
}

impl PdfMetadata {
    /// Metadata keys, in output order.
    pub const KEYS: [&'static str; 7] = [
        "title",
        "author",
        "subject",
        "creator",
        "producer",
        "creation_date",
        "modification_date",
    ];

    /// All entries in [`Self::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, MetadataValue)> {
        let values = [
            &self.title,
            &self.author,
            &self.subject,
            &self.creator,
            &self.producer,
            &self.creation_date,
            &self.modification_date,
        ];
        Self::KEYS
            .into_iter()
            .zip(values)
            .map(|(key, value)| (key, MetadataValue::Text(value.clone())))
            .collect()
    }
}

/// DOCX core properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocxMetadata {
    /// Document title
    pub title: String,

    /// Document author (`dc:creator`)
    pub author: String,

    /// Document subject
    pub subject: String,

    /// Keywords
    pub keywords: String,

    /// Comments (`dc:description`)
    pub comments: String,

    /// Last editor
    pub last_modified_by: String,

    /// Creation date
    pub created: String,

    /// Last modification date
    pub modified: String,

    /// Revision number, 0 when unknown
    pub revision: u64,
}

impl DocxMetadata {
    /// Metadata keys, in output order.
    pub const KEYS: [&'static str; 9] = [
        "title",
        "author",
        "subject",
        "keywords",
        "comments",
        "last_modified_by",
        "created",
        "modified",
        "revision",
    ];

    /// All entries in [`Self::KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, MetadataValue)> {
        let texts = [
            &self.title,
            &self.author,
            &self.subject,
            &self.keywords,
            &self.comments,
            &self.last_modified_by,
            &self.created,
            &self.modified,
        ];
        let mut entries: Vec<_> = Self::KEYS
            .into_iter()
            .zip(texts)
            .map(|(key, value)| (key, MetadataValue::Text(value.clone())))
            .collect();
        entries.push(("revision", MetadataValue::Integer(self.revision)));
        entries
    }
}
