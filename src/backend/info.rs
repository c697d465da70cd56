//! Information-dictionary access shared by the lopdf-based backends.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document, Object};

use super::KeyConvention;

/// Read the trailer's `/Info` dictionary as strings.
///
/// Keys are spelled in `convention`. Entries whose values are not strings,
/// names or numbers are skipped. Returns `None` when the document has no
/// information dictionary.
pub(crate) fn read_info(doc: &Document, convention: KeyConvention) -> Option<BTreeMap<String, String>> {
    let info = doc.trailer.get(b"Info").ok()?;
    let dict: &Dictionary = match info {
        Object::Reference(r) => doc.get_dictionary(*r).ok()?,
        Object::Dictionary(d) => d,
        _ => return None,
    };

    let mut entries = BTreeMap::new();
    for (name, value) in dict.iter() {
        if let Some(text) = object_to_string(value) {
            let key = convention.key(&String::from_utf8_lossy(name));
            entries.insert(key, text);
        }
    }
    Some(entries)
}

/// Convert a scalar PDF object to text.
///
/// Text strings are decoded by their byte order mark (PDFDocEncoding when
/// there is none); undecodable strings fall back to lossy UTF-8.
fn object_to_string(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(
            lopdf::decode_text_string(obj)
                .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned()),
        ),
        Object::Name(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Object::Integer(i) => Some(i.to_string()),
        Object::Real(r) => Some(r.to_string()),
        Object::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
