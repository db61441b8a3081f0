//! Response normalization for documents
//!
//! ObjectIds and BSON dates have no JSON equivalent. Documents are rewritten
//! as relaxed Extended JSON: `{"$oid": "<hex>"}` for identifiers and
//! `{"$date": "<RFC 3339>"}` for dates in years 1970-9999 (`{"$date":
//! {"$numberLong": ..}}` otherwise). Field order is preserved.

use std::io;

use bridge_core::JsonDocument;
use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Convert one document to canonical JSON
pub fn normalize(document: Document) -> JsonDocument {
    Bson::Document(document).into_relaxed_extjson()
}

/// Serialize documents the way legacy clients expect them as a string:
/// `", "` and `": "` separators and non-ASCII characters escaped as `\uXXXX`.
pub fn encode_legacy_string(documents: &[JsonDocument]) -> Result<String, serde_json::Error> {
    let mut serializer = Serializer::with_formatter(Vec::new(), LegacyFormatter);
    documents.serialize(&mut serializer)?;
    // The formatter only ever writes ASCII.
    Ok(String::from_utf8_lossy(&serializer.into_inner()).into_owned())
}

/// Python-`json.dumps`-compatible layout
struct LegacyFormatter;

impl Formatter for LegacyFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                let mut buf = [0u8; 1];
                writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
