//! Package parts that do not depend on the body content.

use crate::document::{DefaultFont, Properties};

use super::escape_xml;

pub(super) const DOCUMENT_PART: &str = "word/document.xml";
pub(super) const STYLES_PART: &str = "word/styles.xml";
pub(super) const NUMBERING_PART: &str = "word/numbering.xml";
pub(super) const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub(super) const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub(super) const ROOT_RELS_PART: &str = "_rels/.rels";
pub(super) const CORE_PART: &str = "docProps/core.xml";
pub(super) const APP_PART: &str = "docProps/app.xml";

/// `numId` of the bullet list definition in `numbering.xml`.
pub(super) const BULLET_NUM_ID: u32 = 1;
/// `numId` of the decimal list definition in `numbering.xml`.
pub(super) const DECIMAL_NUM_ID: u32 = 2;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub(super) fn content_types_xml() -> String {
    format!(
        r#"{XML_DECLARATION}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/{DOCUMENT_PART}" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/{STYLES_PART}" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/{NUMBERING_PART}" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
  <Override PartName="/{CORE_PART}" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/{APP_PART}" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#
    )
}

pub(super) fn root_rels_xml() -> String {
    format!(
        r#"{XML_DECLARATION}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="{DOCUMENT_PART}"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="{CORE_PART}"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="{APP_PART}"/>
</Relationships>"#
    )
}

pub(super) fn document_rels_xml() -> String {
    format!(
        r#"{XML_DECLARATION}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#
    )
}

pub(super) fn core_xml(properties: &Properties) -> String {
    format!(
        r#"{XML_DECLARATION}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:creator>{}</dc:creator>
</cp:coreProperties>"#,
        escape_xml(&properties.title),
        escape_xml(&properties.author),
    )
}

pub(super) fn app_xml() -> String {
    format!(
        r#"{XML_DECLARATION}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">
  <Application>{} {}</Application>
  <DocSecurity>0</DocSecurity>
</Properties>"#,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}

/// Style id for a table style name, e.g. `Light Grid Accent 1` -> `LightGridAccent1`.
/// Style id used when a table style name has no ASCII letters or digits.
const FALLBACK_TABLE_STYLE_ID: &str = "TableStyle";

pub(super) fn table_style_id(name: &str) -> String {
    let id: String = name.chars().filter(char::is_ascii_alphanumeric).collect();
    if id.is_empty() {
        FALLBACK_TABLE_STYLE_ID.to_string()
    } else {
        id
    }
}

fn heading_style(id: &str, name: &str, size: u32, space_before: u32, color: &str) -> String {
    format!(
        r#"  <w:style w:type="paragraph" w:styleId="{id}">
    <w:name w:val="{name}"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:keepNext/><w:spacing w:before="{space_before}" w:after="80"/></w:pPr>
    <w:rPr><w:b/><w:color w:val="{color}"/><w:sz w:val="{half}"/><w:szCs w:val="{half}"/></w:rPr>
  </w:style>
"#,
        half = size * 2,
    )
}

fn list_style(id: &str, name: &str, num_id: u32) -> String {
    format!(
        r#"  <w:style w:type="paragraph" w:styleId="{id}">
    <w:name w:val="{name}"/>
    <w:basedOn w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:numPr><w:numId w:val="{num_id}"/></w:numPr><w:contextualSpacing/></w:pPr>
  </w:style>
"#
    )
}

/// Styles part: `Normal` from the default font, title, headings, lists and
/// the grid table style named by `table_styles`.
pub(super) fn styles_xml(font: &DefaultFont, table_styles: &[&str]) -> String {
    let font_name = escape_xml(&font.name);
    let half = font.size * 2;

    let mut xml = format!(
        r#"{XML_DECLARATION}
<w:styles xmlns:w="{W_NS}">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:rFonts w:ascii="{font_name}" w:hAnsi="{font_name}" w:cs="{font_name}"/><w:sz w:val="{half}"/><w:szCs w:val="{half}"/></w:rPr></w:rPrDefault>
    <w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
    <w:rPr><w:rFonts w:ascii="{font_name}" w:hAnsi="{font_name}" w:cs="{font_name}"/><w:sz w:val="{half}"/><w:szCs w:val="{half}"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:name w:val="Title"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:after="240"/><w:contextualSpacing/></w:pPr>
    <w:rPr><w:color w:val="17365D"/><w:kern w:val="28"/><w:sz w:val="52"/><w:szCs w:val="52"/></w:rPr>
  </w:style>
"#
    );

    xml.push_str(&heading_style("Heading1", "heading 1", 14, 480, "365F91"));
    xml.push_str(&heading_style("Heading2", "heading 2", 13, 200, "4F81BD"));
    xml.push_str(&heading_style("Heading3", "heading 3", 11, 200, "4F81BD"));
    xml.push_str(&list_style("ListBullet", "List Bullet", BULLET_NUM_ID));
    xml.push_str(&list_style("ListNumber", "List Number", DECIMAL_NUM_ID));

    for name in table_styles {
        xml.push_str(&format!(
            r#"  <w:style w:type="table" w:styleId="{id}">
    <w:name w:val="{name}"/>
    <w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr>
    <w:tblPr>
      <w:tblBorders>
        <w:top w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:left w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:bottom w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:right w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:insideH w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
        <w:insideV w:val="single" w:sz="8" w:space="0" w:color="4F81BD"/>
      </w:tblBorders>
      <w:tblCellMar><w:left w:w="108" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar>
    </w:tblPr>
    <w:tblStylePr w:type="firstRow">
      <w:rPr><w:b/></w:rPr>
      <w:tcPr><w:tcBorders><w:bottom w:val="single" w:sz="18" w:space="0" w:color="4F81BD"/></w:tcBorders></w:tcPr>
    </w:tblStylePr>
  </w:style>
"#,
            id = table_style_id(name),
            name = escape_xml(name),
        ));
    }

    xml.push_str("</w:styles>");
    xml
}

pub(super) fn numbering_xml() -> String {
    format!(
        r#"{XML_DECLARATION}
<w:numbering xmlns:w="{W_NS}">
  <w:abstractNum w:abstractNumId="0">
    <w:multiLevelType w:val="singleLevel"/>
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="bullet"/>
      <w:lvlText w:val="&#8226;"/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
      <w:rPr><w:rFonts w:ascii="Symbol" w:hAnsi="Symbol" w:hint="default"/></w:rPr>
    </w:lvl>
  </w:abstractNum>
  <w:abstractNum w:abstractNumId="1">
    <w:multiLevelType w:val="singleLevel"/>
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="decimal"/>
      <w:lvlText w:val="%1."/>
      <w:lvlJc w:val="left"/>
      <w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr>
    </w:lvl>
  </w:abstractNum>
  <w:num w:numId="{BULLET_NUM_ID}"><w:abstractNumId w:val="0"/></w:num>
  <w:num w:numId="{DECIMAL_NUM_ID}"><w:abstractNumId w:val="1"/></w:num>
</w:numbering>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_style_id_drops_spaces() {
        assert_eq!(table_style_id("Light Grid Accent 1"), "LightGridAccent1");
        assert_eq!(table_style_id("Table Grid"), "TableGrid");
    }

    #[test]
    fn table_style_id_is_never_empty() {
        assert_eq!(table_style_id("* - *"), "TableStyle");
        assert_eq!(table_style_id(""), "TableStyle");
        let xml = styles_xml(&DefaultFont::default(), &["* - *"]);
        assert!(xml.contains(r#"w:styleId="TableStyle""#));
        assert!(!xml.contains(r#"w:styleId="""#));
    }

    #[test]
    fn styles_use_default_font() {
        let font = DefaultFont {
            name: "Georgia".to_string(),
            size: 12,
        };
        let xml = styles_xml(&font, &["Light Grid Accent 1"]);
        assert!(xml.contains(r#"w:ascii="Georgia""#));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
        assert!(xml.contains(r#"w:styleId="LightGridAccent1""#));
        assert!(xml.contains(r#"<w:name w:val="Light Grid Accent 1"/>"#));
        for id in ["Title", "Heading1", "Heading2", "Heading3", "ListBullet", "ListNumber"] {
            assert!(xml.contains(&format!(r#"w:styleId="{id}""#)), "missing {id}");
        }
    }

    #[test]
    fn core_properties_are_escaped() {
        let xml = core_xml(&Properties {
            title: "Q&A <draft>".to_string(),
            author: String::new(),
        });
        assert!(xml.contains("<dc:title>Q&amp;A &lt;draft&gt;</dc:title>"));
        assert!(xml.contains("<dc:creator></dc:creator>"));
    }
}
