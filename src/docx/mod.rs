//! Minimal WordprocessingML package writer.
//!
//! Produces an unprotected `.docx` from a [`Document`]: the body, a style
//! sheet, list numbering and core properties, zipped with deflate.

mod body;
mod parts;

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::document::{Document, Element};
use crate::error::{Error, Result};

/// Escape XML special characters and drop characters XML 1.0 does not allow.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

/// The XML 1.0 `Char` production. Surrogates cannot occur in a `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Write `doc` as a `.docx` file at `path`, truncating any existing file.
pub fn write_package(doc: &Document, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let mut file = write_parts(doc, file)?;
    file.flush().map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `doc` to `.docx` bytes in memory.
pub fn package_bytes(doc: &Document) -> Result<Vec<u8>> {
    let cursor = write_parts(doc, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

fn write_parts<W: Write + Seek>(doc: &Document, writer: W) -> Result<W> {
    let mut table_styles: Vec<&str> = doc
        .elements()
        .iter()
        .filter_map(|element| match element {
            Element::Table(table) => Some(table.style()),
            Element::Paragraph(_) => None,
        })
        .collect();
    // Names differing only in spacing or punctuation share one style id.
    table_styles.sort_by_cached_key(|name| parts::table_style_id(name));
    table_styles.dedup_by_key(|name| parts::table_style_id(name));

    let parts = [
        (parts::CONTENT_TYPES_PART, parts::content_types_xml()),
        (parts::ROOT_RELS_PART, parts::root_rels_xml()),
        (parts::CORE_PART, parts::core_xml(doc.properties())),
        (parts::APP_PART, parts::app_xml()),
        (parts::DOCUMENT_PART, body::document_xml(doc)),
        (
            parts::STYLES_PART,
            parts::styles_xml(doc.default_font(), &table_styles),
        ),
        (parts::NUMBERING_PART, parts::numbering_xml()),
        (parts::DOCUMENT_RELS_PART, parts::document_rels_xml()),
    ];

    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in parts {
        log::trace!("Writing part {} ({} bytes)", name, content.len());
        zip.start_file(name, options)?;
        zip.write_all(content.as_bytes()).map_err(ZipError::from)?;
    }

    Ok(zip.finish()?)
}
