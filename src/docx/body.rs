//! `word/document.xml` serialization.

use crate::document::{Alignment, Document, Element, Paragraph, Run, Table};

use super::escape_xml;

/// Usable page width in twentieths of a point (8.5in minus 1in margins).
const TEXT_WIDTH_DXA: usize = 9360;

pub(super) fn document_xml(doc: &Document) -> String {
    let mut body = String::new();
    for element in doc.elements() {
        match element {
            Element::Paragraph(paragraph) => paragraph_xml(paragraph, &mut body),
            Element::Table(table) => table_xml(table, &mut body),
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>{body}<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/><w:cols w:space="708"/><w:docGrid w:linePitch="360"/></w:sectPr></w:body>
</w:document>"#
    )
}

fn paragraph_xml(paragraph: &Paragraph, xml: &mut String) {
    xml.push_str("<w:p>");

    let style = paragraph.style().style_id();
    let alignment = paragraph.alignment();
    if style.is_some() || alignment.is_some() {
        xml.push_str("<w:pPr>");
        if let Some(id) = style {
            xml.push_str(&format!(r#"<w:pStyle w:val="{id}"/>"#));
        }
        if let Some(Alignment::Center) = alignment {
            xml.push_str(r#"<w:jc w:val="center"/>"#);
        }
        xml.push_str("</w:pPr>");
    }

    for run in paragraph.runs() {
        run_xml(run, xml);
    }

    xml.push_str("</w:p>");
}

fn run_xml(run: &Run, xml: &mut String) {
    xml.push_str("<w:r>");

    let font = run.font_name();
    let size = run.font_size();
    if font.is_some() || size.is_some() || run.is_bold() {
        xml.push_str("<w:rPr>");
        if let Some(name) = font {
            let name = escape_xml(name);
            xml.push_str(&format!(
                r#"<w:rFonts w:ascii="{name}" w:hAnsi="{name}" w:cs="{name}"/>"#
            ));
        }
        if run.is_bold() {
            xml.push_str("<w:b/>");
        }
        if let Some(points) = size {
            let half = points * 2;
            xml.push_str(&format!(
                r#"<w:sz w:val="{half}"/><w:szCs w:val="{half}"/>"#
            ));
        }
        xml.push_str("</w:rPr>");
    }

    // Line breaks inside a run become explicit <w:br/> elements
    for (idx, line) in run.text().split('\n').enumerate() {
        if idx > 0 {
            xml.push_str("<w:br/>");
        }
        xml.push_str(r#"<w:t xml:space="preserve">"#);
        xml.push_str(&escape_xml(line));
        xml.push_str("</w:t>");
    }

    xml.push_str("</w:r>");
}

fn table_xml(table: &Table, xml: &mut String) {
    let columns = table.column_count();
    if columns == 0 {
        return;
    }
    let column_width = TEXT_WIDTH_DXA / columns;

    xml.push_str("<w:tbl><w:tblPr>");
    xml.push_str(&format!(
        r#"<w:tblStyle w:val="{}"/>"#,
        super::parts::table_style_id(table.style())
    ));
    xml.push_str(r#"<w:tblW w:w="5000" w:type="pct"/>"#);
    xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);
    xml.push_str("</w:tblPr><w:tblGrid>");
    for _ in 0..columns {
        xml.push_str(&format!(r#"<w:gridCol w:w="{column_width}"/>"#));
    }
    xml.push_str("</w:tblGrid>");

    for (row_idx, row) in table.rows.iter().enumerate() {
        xml.push_str("<w:tr>");
        if row_idx == 0 {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }
        for cell in row {
            xml.push_str(&format!(
                r#"<w:tc><w:tcPr><w:tcW w:w="{column_width}" w:type="dxa"/></w:tcPr><w:p>"#
            ));
            if !cell.text().is_empty() {
                let mut run = Run {
                    text: cell.text().to_string(),
                    ..Run::default()
                };
                run.bold(cell.is_bold());
                run_xml(&run, xml);
            }
            xml.push_str("</w:p></w:tc>");
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
}
