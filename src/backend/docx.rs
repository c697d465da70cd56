//! DOCX backend built on `docx-rs`.
//!
//! Body paragraphs and style names come from [`docx_rs::read_docx`]. The
//! reader does not load `docProps/core.xml` back into its document model,
//! so the core properties are taken from that part directly.

use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use docx_rs::{read_docx, Document, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Styles};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::Value;
use zip::result::ZipError;
use zip::ZipArchive;

use super::{CoreProperties, DocxBackend, RawDocx, RawParagraph};
use crate::error::{Error, Result};

const CORE_PART: &str = "docProps/core.xml";

/// Style id word processors give the default paragraph style.
const DEFAULT_STYLE_ID: &str = "Normal";

/// Built-in style names stored in lowercase in `styles.xml`, with the
/// spelling word processors show.
const STYLE_ALIASES: &[(&str, &str)] = &[
    ("caption", "Caption"),
    ("footer", "Footer"),
    ("header", "Header"),
    ("heading 1", "Heading 1"),
    ("heading 2", "Heading 2"),
    ("heading 3", "Heading 3"),
    ("heading 4", "Heading 4"),
    ("heading 5", "Heading 5"),
    ("heading 6", "Heading 6"),
    ("heading 7", "Heading 7"),
    ("heading 8", "Heading 8"),
    ("heading 9", "Heading 9"),
];

/// [`DocxBackend`] for Office Open XML word-processing packages.
#[derive(Debug, Clone, Default)]
pub struct OoxmlBackend {
    _private: (),
}

impl OoxmlBackend {
    /// Create a new OOXML backend.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocxBackend for OoxmlBackend {
    fn name(&self) -> &'static str {
        "ooxml"
    }

    fn load(&self, path: &Path) -> Result<RawDocx> {
        let data = fs::read(path)?;
        let docx = read_docx(&data)?;

        let styles = StyleSheet::from_styles(&docx.styles);
        let paragraphs: Vec<RawParagraph> = body_paragraphs(&docx.document)
            .into_iter()
            .map(|p| RawParagraph {
                text: paragraph_text(p),
                style: styles.resolve(p.property.style.as_ref().map(|s| s.val.as_str())),
            })
            .collect();

        let properties = read_core_properties(&data)?;

        log::debug!(
            "ooxml read {} paragraphs from {}",
            paragraphs.len(),
            path.display()
        );

        Ok(RawDocx {
            paragraphs,
            properties,
        })
    }
}

/// Paragraphs that are direct children of the document body.
///
/// Paragraphs inside tables and other containers are not body paragraphs.
fn body_paragraphs(document: &Document) -> Vec<&Paragraph> {
    let mut paragraphs = Vec::new();
    for child in &document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let paragraph: &Paragraph = paragraph;
            paragraphs.push(paragraph);
        }
    }
    paragraphs
}

/// Concatenated run text of a paragraph, hyperlinked runs included.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

/// Paragraph style names keyed by style id.
#[derive(Debug, Default)]
struct StyleSheet {
    names: HashMap<String, String>,
}

impl StyleSheet {
    /// Collect paragraph styles through their serialized form, which is the
    /// stable read surface `docx-rs` exposes for styles.
    fn from_styles(styles: &Styles) -> Self {
        let mut sheet = StyleSheet::default();

        let value = match serde_json::to_value(styles) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("could not read style names: {}", e);
                return sheet;
            }
        };

        let entries = value
            .get("styles")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for entry in entries {
            let is_paragraph = entry
                .get("styleType")
                .and_then(Value::as_str)
                .map_or(true, |t| t.eq_ignore_ascii_case("paragraph"));
            if !is_paragraph {
                continue;
            }

            let id = entry.get("styleId").and_then(Value::as_str);
            let name = entry.get("name").and_then(style_name);
            if let (Some(id), Some(name)) = (id, name) {
                sheet
                    .names
                    .insert(id.to_string(), display_style_name(name));
            }
        }

        sheet
    }

    /// Resolve a paragraph's style id to a name.
    ///
    /// Unset or unknown ids resolve to the default paragraph style.
    fn resolve(&self, style_id: Option<&str>) -> Option<String> {
        style_id
            .and_then(|id| self.names.get(id))
            .or_else(|| self.names.get(DEFAULT_STYLE_ID))
            .cloned()
    }
}

/// A style's `w:name` value, serialized either as a bare string or wrapped.
fn style_name(value: &Value) -> Option<&str> {
    let name = match value {
        Value::String(name) => Some(name.as_str()),
        Value::Object(map) => map.get("name").and_then(Value::as_str),
        _ => None,
    };
    name.filter(|name| !name.is_empty())
}

fn display_style_name(name: &str) -> String {
    STYLE_ALIASES
        .iter()
        .find(|(stored, _)| *stored == name)
        .map(|(_, shown)| shown.to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Read `docProps/core.xml` from the package, all `None` when absent.
fn read_core_properties(data: &[u8]) -> Result<CoreProperties> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut entry = match archive.by_name(CORE_PART) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(CoreProperties::default()),
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    parse_core_properties(&xml)
}

fn core_slot<'a>(props: &'a mut CoreProperties, local_name: &[u8]) -> Option<&'a mut Option<String>> {
    let slot = match local_name {
        b"title" => &mut props.title,
        b"creator" => &mut props.creator,
        b"subject" => &mut props.subject,
        b"keywords" => &mut props.keywords,
        b"description" => &mut props.description,
        b"lastModifiedBy" => &mut props.last_modified_by,
        b"created" => &mut props.created,
        b"modified" => &mut props.modified,
        b"revision" => &mut props.revision,
        _ => return None,
    };
    Some(slot)
}

fn parse_core_properties(xml: &str) -> Result<CoreProperties> {
    let mut reader = Reader::from_str(xml);
    let mut props = CoreProperties::default();

    let mut field: Option<Vec<u8>> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                field = Some(e.local_name().as_ref().to_vec());
                text.clear();
            }
            Event::Text(ref e) if field.is_some() => {
                let unescaped = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => {
                if let Some(name) = field.take() {
                    if let Some(slot) = core_slot(&mut props, &name) {
                        *slot = Some(std::mem::take(&mut text));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(props)
}
