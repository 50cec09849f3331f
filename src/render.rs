use crate::block::{Block, Span};
use crate::config::Config;
use crate::document::{Alignment, DefaultFont, Document, Paragraph, ParagraphStyle, Properties};

/// Build a document from parsed blocks
pub fn blocks_to_document(blocks: &[Block], config: &Config) -> Document {
    let mut doc = Document::new();
    doc.set_properties(Properties {
        title: config.document.title.clone(),
        author: config.document.author.clone(),
    })
    .set_default_font(DefaultFont {
        name: config.font.name.clone(),
        size: config.font.size,
    });

    for block in blocks {
        emit_block(block, config, &mut doc);
    }

    doc
}

fn emit_block(block: &Block, config: &Config, doc: &mut Document) {
    match block {
        Block::Heading { level, text } => {
            let centered = match *level {
                0 => !text.is_empty(),
                1 => config.headings.is_centered(text),
                _ => false,
            };
            let paragraph = doc.add_heading(text, *level);
            if centered {
                paragraph.set_alignment(Alignment::Center);
            }
        }
        Block::Paragraph { content } => {
            spans_to_runs(content, doc.add_paragraph(ParagraphStyle::Normal));
        }
        Block::ListItem { ordered, content } => {
            let style = if *ordered {
                ParagraphStyle::ListNumber
            } else {
                ParagraphStyle::ListBullet
            };
            spans_to_runs(content, doc.add_paragraph(style));
        }
        Block::CodeBlock { content, .. } => {
            doc.add_paragraph(ParagraphStyle::Normal)
                .add_run(content)
                .font(&config.code.font)
                .size(config.code.size);
        }
        Block::Table { headers, rows } => {
            let table = doc.add_table(headers, &config.tables.style);
            for row in rows {
                table.add_row(row);
            }
        }
        Block::Rule => {
            doc.add_paragraph(ParagraphStyle::Normal)
                .add_run(&"_".repeat(config.rule.width));
        }
    }
}

fn spans_to_runs(spans: &[Span], paragraph: &mut Paragraph) {
    for span in spans {
        paragraph.add_run(span.text()).bold(span.is_bold());
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::document::{Alignment, Element, ParagraphStyle};
    use crate::markdown_to_document;
    use pretty_assertions::assert_eq;

    fn runs(element: &Element) -> Vec<(String, bool)> {
        match element {
            Element::Paragraph(p) => p
                .runs()
                .iter()
                .map(|r| (r.text().to_string(), r.is_bold()))
                .collect(),
            Element::Table(_) => panic!("expected a paragraph"),
        }
    }

    fn paragraph(element: &Element) -> &crate::document::Paragraph {
        match element {
            Element::Paragraph(p) => p,
            Element::Table(_) => panic!("expected a paragraph"),
        }
    }

    #[test]
    fn title_and_bold_paragraph() {
        let doc = markdown_to_document("# Title\n\nHello **world**\n");
        let elements = doc.elements();
        assert_eq!(elements.len(), 2);

        let title = paragraph(&elements[0]);
        assert_eq!(title.style(), ParagraphStyle::Title);
        assert_eq!(title.alignment(), Some(Alignment::Center));
        assert_eq!(title.text(), "Title");

        assert_eq!(
            runs(&elements[1]),
            vec![("Hello ".to_string(), false), ("world".to_string(), true)]
        );
    }

    #[test]
    fn empty_title_is_not_centered() {
        let doc = markdown_to_document("#  \n# x");
        // "#  " trims to "#", which is not a title line
        assert_eq!(doc.elements().len(), 2);
        assert_eq!(paragraph(&doc.elements()[0]).style(), ParagraphStyle::Normal);

        let doc = markdown_to_document("# **");
        let title = paragraph(&doc.elements()[0]);
        assert_eq!(title.text(), "**");
        assert_eq!(title.alignment(), Some(Alignment::Center));
    }

    #[test]
    fn project_report_heading_is_centered() {
        let doc = markdown_to_document("## Project Report\n## Results");
        let centered = paragraph(&doc.elements()[0]);
        assert_eq!(centered.style(), ParagraphStyle::Heading(1));
        assert_eq!(centered.alignment(), Some(Alignment::Center));
        assert_eq!(paragraph(&doc.elements()[1]).alignment(), None);
    }

    #[test]
    fn centered_headings_follow_config() {
        let mut config = Config::compiled_default();
        config.headings.centered = vec!["Results".to_string()];
        let doc = crate::markdown_to_document_with_config("## Project Report\n## Results", &config);
        assert_eq!(paragraph(&doc.elements()[0]).alignment(), None);
        assert_eq!(
            paragraph(&doc.elements()[1]).alignment(),
            Some(Alignment::Center)
        );
    }

    #[test]
    fn lower_headings_are_never_centered() {
        let doc = markdown_to_document("### Project Report\n#### Project Report");
        for element in doc.elements() {
            assert_eq!(paragraph(element).alignment(), None);
        }
    }

    #[test]
    fn rule_is_eighty_underscores() {
        let doc = markdown_to_document("above\n---\nbelow");
        let rule = paragraph(&doc.elements()[1]);
        assert_eq!(rule.text(), "_".repeat(80));
        assert_eq!(rule.style(), ParagraphStyle::Normal);
    }

    #[test]
    fn list_styles() {
        let doc = markdown_to_document("- bullet\n1. number");
        assert_eq!(paragraph(&doc.elements()[0]).style(), ParagraphStyle::ListBullet);
        assert_eq!(paragraph(&doc.elements()[1]).style(), ParagraphStyle::ListNumber);
    }

    #[test]
    fn bullet_with_bold_has_multiple_runs() {
        let doc = markdown_to_document("- **Key:** value");
        assert_eq!(
            runs(&doc.elements()[0]),
            vec![("Key:".to_string(), true), (" value".to_string(), false)]
        );
    }

    #[test]
    fn code_block_is_one_fixed_width_run() {
        let doc = markdown_to_document("```python\nx = 1\ny = 2\n```");
        let code = paragraph(&doc.elements()[0]);
        assert_eq!(code.runs().len(), 1);
        let run = &code.runs()[0];
        assert_eq!(run.text(), "x = 1\ny = 2");
        assert_eq!(run.font_name(), Some("Courier New"));
        assert_eq!(run.font_size(), Some(9));
        assert!(!run.is_bold());
    }

    #[test]
    fn table_has_bold_headers_and_matching_rows() {
        let doc = markdown_to_document("| A | B |\n|---|---|\n| 1 | 2 |\n| 1 | 2 | 3 |");
        let table = doc.tables().next().unwrap();
        assert_eq!(table.style(), "Light Grid Accent 1");
        assert_eq!(table.column_count(), 2);

        let headers: Vec<_> = table.headers().iter().map(|c| c.text()).collect();
        assert_eq!(headers, vec!["A", "B"]);
        assert!(table.headers().iter().all(|c| c.is_bold()));

        let rows = table.data_rows();
        assert_eq!(rows.len(), 1);
        let cells: Vec<_> = rows[0].iter().map(|c| c.text()).collect();
        assert_eq!(cells, vec!["1", "2"]);
    }

    #[test]
    fn document_properties_from_config() {
        let mut config = Config::compiled_default();
        config.document.title = "Quarterly".to_string();
        config.font.name = "Arial".to_string();
        let doc = crate::markdown_to_document_with_config("text", &config);
        assert_eq!(doc.properties().title, "Quarterly");
        assert_eq!(doc.properties().author, "");
        assert_eq!(doc.default_font().name, "Arial");
        assert_eq!(doc.default_font().size, 11);
    }

    #[test]
    fn conversion_is_idempotent() {
        let md = "# T\n## Project Report\n| a | b | c |\n| 1 | 2 | 3 |\n- **x** y\n1. z\n```\ncode\n```\n---\n";
        assert_eq!(markdown_to_document(md), markdown_to_document(md));
    }
}
