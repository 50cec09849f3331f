//! In-memory word-processor document.
//!
//! The builder API mirrors how the renderer thinks about output: append a
//! heading, append a paragraph and fill it with runs, append a table. Nothing
//! is written until [`Document::save`].

use std::path::Path;

use crate::error::Result;

/// Horizontal paragraph alignment. Paragraphs without one are left aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
}

/// Named paragraph styles understood by the `.docx` writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Normal,
    Title,
    /// Section heading, levels 1 to 3.
    Heading(u8),
    ListBullet,
    ListNumber,
}

impl ParagraphStyle {
    /// Style id referenced from `word/document.xml`. `Normal` needs no reference.
    pub fn style_id(self) -> Option<&'static str> {
        match self {
            ParagraphStyle::Normal => None,
            ParagraphStyle::Title => Some("Title"),
            ParagraphStyle::Heading(1) => Some("Heading1"),
            ParagraphStyle::Heading(2) => Some("Heading2"),
            ParagraphStyle::Heading(_) => Some("Heading3"),
            ParagraphStyle::ListBullet => Some("ListBullet"),
            ParagraphStyle::ListNumber => Some("ListNumber"),
        }
    }
}

/// A span of text sharing one character format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Run {
    pub(crate) text: String,
    pub(crate) bold: bool,
    pub(crate) font: Option<String>,
    /// Size in points
    pub(crate) size: Option<u32>,
}

impl Run {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn font(&mut self, name: &str) -> &mut Self {
        self.font = Some(name.to_string());
        self
    }

    /// Set font size in points.
    pub fn size(&mut self, points: u32) -> &mut Self {
        self.size = Some(points);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn font_name(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn font_size(&self) -> Option<u32> {
        self.size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub(crate) style: ParagraphStyle,
    pub(crate) alignment: Option<Alignment>,
    pub(crate) runs: Vec<Run>,
}

impl Paragraph {
    fn new(style: ParagraphStyle) -> Self {
        Self {
            style,
            alignment: None,
            runs: Vec::new(),
        }
    }

    pub fn add_run(&mut self, text: &str) -> &mut Run {
        self.runs.push(Run::new(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn style(&self) -> ParagraphStyle {
        self.style
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenated text of every run.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) text: String,
    pub(crate) bold: bool,
}

impl Cell {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

/// A table whose first row is the bold header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub(crate) style: String,
    pub(crate) rows: Vec<Vec<Cell>>,
}

impl Table {
    fn new(headers: &[String], style: &str) -> Self {
        let header_row = headers
            .iter()
            .map(|text| Cell {
                text: text.clone(),
                bold: true,
            })
            .collect();
        Self {
            style: style.to_string(),
            rows: vec![header_row],
        }
    }

    /// Append a data row. Missing cells are left empty and extra cells are
    /// ignored so every row spans exactly the header's columns.
    pub fn add_row(&mut self, cells: &[String]) -> &mut Self {
        let row = (0..self.column_count())
            .map(|idx| Cell {
                text: cells.get(idx).cloned().unwrap_or_default(),
                bold: false,
            })
            .collect();
        self.rows.push(row);
        self
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn headers(&self) -> &[Cell] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn data_rows(&self) -> &[Vec<Cell>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Paragraph(Paragraph),
    Table(Table),
}

/// Core properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Properties {
    pub title: String,
    pub author: String,
}

/// Font of the `Normal` style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFont {
    pub name: String,
    /// Size in points
    pub size: u32,
}

impl Default for DefaultFont {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11,
        }
    }
}

/// Append-only document builder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub(crate) properties: Properties,
    pub(crate) default_font: DefaultFont,
    pub(crate) elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_properties(&mut self, properties: Properties) -> &mut Self {
        self.properties = properties;
        self
    }

    pub fn set_default_font(&mut self, font: DefaultFont) -> &mut Self {
        self.default_font = font;
        self
    }

    /// Append a heading. Level 0 is the title; levels above 3 are clamped.
    pub fn add_heading(&mut self, text: &str, level: u8) -> &mut Paragraph {
        let style = match level {
            0 => ParagraphStyle::Title,
            level => ParagraphStyle::Heading(level.min(3)),
        };
        let paragraph = self.add_paragraph(style);
        if !text.is_empty() {
            paragraph.add_run(text);
        }
        paragraph
    }

    pub fn add_paragraph(&mut self, style: ParagraphStyle) -> &mut Paragraph {
        self.elements.push(Element::Paragraph(Paragraph::new(style)));
        match self.elements.last_mut() {
            Some(Element::Paragraph(paragraph)) => paragraph,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    pub fn add_table(&mut self, headers: &[String], style: &str) -> &mut Table {
        self.elements.push(Element::Table(Table::new(headers, style)));
        match self.elements.last_mut() {
            Some(Element::Table(table)) => table,
            _ => unreachable!("a table was just pushed"),
        }
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn default_font(&self) -> &DefaultFont {
        &self.default_font
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(|element| match element {
            Element::Paragraph(paragraph) => Some(paragraph),
            Element::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(|element| match element {
            Element::Table(table) => Some(table),
            Element::Paragraph(_) => None,
        })
    }

    /// Serialize to a `.docx` file, replacing any existing file at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        crate::docx::write_package(self, path)
    }

    /// Serialize to `.docx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::docx::package_bytes(self)
    }
}
