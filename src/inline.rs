use crate::block::Span;

const BOLD_DELIMITER: &str = "**";

/// Split text into plain and bold spans on `**` delimiters.
///
/// Each `**` toggles bold. Empty spans are skipped. A trailing `**` with no
/// closing partner is not emphasis, so it and the text after it stay plain.
pub fn split_bold(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;
    let mut plain = String::new();

    while let Some(open) = rest.find(BOLD_DELIMITER) {
        let after_open = &rest[open + BOLD_DELIMITER.len()..];
        let Some(close) = after_open.find(BOLD_DELIMITER) else {
            break;
        };

        plain.push_str(&rest[..open]);
        let bold = &after_open[..close];
        // `****` carries no text and is dropped
        if !bold.is_empty() {
            push_text(&mut spans, std::mem::take(&mut plain));
            spans.push(Span::Bold(bold.to_string()));
        }
        rest = &after_open[close + BOLD_DELIMITER.len()..];
    }

    plain.push_str(rest);
    push_text(&mut spans, plain);
    spans
}

fn push_text(spans: &mut Vec<Span>, text: String) {
    if !text.is_empty() {
        spans.push(Span::Text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bold(s: &str) -> Span {
        Span::Bold(s.to_string())
    }

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(split_bold("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn alternating_bold_and_plain() {
        assert_eq!(
            split_bold("**a** b **c**"),
            vec![bold("a"), text(" b "), bold("c")]
        );
    }

    #[test]
    fn bold_in_the_middle() {
        assert_eq!(
            split_bold("Hello **world**!"),
            vec![text("Hello "), bold("world"), text("!")]
        );
    }

    #[test]
    fn empty_input_has_no_spans() {
        assert!(split_bold("").is_empty());
    }

    #[test]
    fn empty_bold_span_is_skipped() {
        assert_eq!(split_bold("a****b"), vec![text("ab")]);
    }

    #[test]
    fn unterminated_delimiter_stays_literal() {
        assert_eq!(
            split_bold("**a** and **b"),
            vec![bold("a"), text(" and **b")]
        );
        assert_eq!(split_bold("x ** y"), vec![text("x ** y")]);
    }

    #[test]
    fn bold_spanning_whole_text() {
        assert_eq!(split_bold("**Note:**"), vec![bold("Note:")]);
    }
}
