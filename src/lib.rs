mod block;
mod config;
mod convert;
mod document;
mod docx;
mod error;
mod inline;
mod parser;
mod render;

pub use block::{Block, Span};
pub use config::{
    CodeConfig, Config, DocumentConfig, FontConfig, HeadingsConfig, RuleConfig, TablesConfig,
};
pub use convert::{Converter, MakeWritable, PostSave, convert};
pub use document::{
    Alignment, Cell, DefaultFont, Document, Element, Paragraph, ParagraphStyle, Properties, Run,
    Table,
};
pub use error::{Error, Result};
pub use inline::split_bold;

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Convert markdown to a document using default config.
pub fn markdown_to_document(markdown: &str) -> Document {
    markdown_to_document_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to a document with custom config.
pub fn markdown_to_document_with_config(markdown: &str, config: &Config) -> Document {
    let blocks = parse(markdown);
    render::blocks_to_document(&blocks, config)
}

/// Convert markdown to `.docx` bytes using default config.
pub fn markdown_to_docx(markdown: &str) -> Result<Vec<u8>> {
    markdown_to_docx_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to `.docx` bytes with custom config.
pub fn markdown_to_docx_with_config(markdown: &str, config: &Config) -> Result<Vec<u8>> {
    markdown_to_document_with_config(markdown, config).to_bytes()
}
