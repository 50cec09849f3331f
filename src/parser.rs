use crate::block::Block;
use crate::inline::split_bold;

const HEADING_PREFIXES: [(&str, u8); 4] = [("# ", 0), ("## ", 1), ("### ", 2), ("#### ", 3)];
const RULE: &str = "---";
const FENCE: &str = "```";
const MIN_TABLE_PIPES: usize = 3;

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut scanner = Scanner::new(markdown);
    let mut blocks = Vec::new();

    while !scanner.at_end() {
        if let Some(block) = scanner.scan_block() {
            blocks.push(block);
        }
    }

    blocks
}

/// Cursor over the materialized source lines.
///
/// Every call to `scan_block` advances the cursor by at least one line.
struct Scanner<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    fn new(markdown: &'a str) -> Self {
        Self {
            lines: markdown.split('\n').collect(),
            cursor: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    fn scan_block(&mut self) -> Option<Block> {
        let line: &'a str = self.lines[self.cursor].trim();

        if let Some(block) = heading(line) {
            self.cursor += 1;
            return Some(block);
        }

        if line == RULE {
            self.cursor += 1;
            return Some(Block::Rule);
        }

        if is_table_line(line)
            && let Some(block) = self.scan_table()
        {
            return Some(block);
        }

        if let Some(info) = line.strip_prefix(FENCE) {
            return self.scan_code_block(info);
        }

        self.cursor += 1;

        if let Some(text) = line.strip_prefix("- ") {
            return Some(Block::ListItem {
                ordered: false,
                content: split_bold(text.trim()),
            });
        }

        if let Some(text) = strip_number_prefix(line) {
            return Some(Block::ListItem {
                ordered: true,
                content: split_bold(text.trim()),
            });
        }

        if line.is_empty() {
            return None;
        }

        Some(Block::Paragraph {
            content: split_bold(line),
        })
    }

    /// Collect the contiguous run of table lines starting at the cursor.
    ///
    /// Separator rows are dropped, as are data rows whose cell count differs
    /// from the header. Returns `None` without moving the cursor when every
    /// line in the run was a separator.
    fn scan_table(&mut self) -> Option<Block> {
        let mut end = self.cursor;
        let mut kept = Vec::new();

        while end < self.lines.len() && is_table_line(self.lines[end]) {
            let row = self.lines[end];
            if !is_separator_row(row) {
                kept.push(row);
            }
            end += 1;
        }

        let (header, body) = kept.split_first()?;
        let headers = split_cells(header);
        let rows = body
            .iter()
            .map(|row| split_cells(row))
            .filter(|cells| cells.len() == headers.len())
            .collect();

        self.cursor = end;
        Some(Block::Table { headers, rows })
    }

    /// Consume a fenced code block. The cursor sits on the opening fence.
    fn scan_code_block(&mut self, info: &str) -> Option<Block> {
        self.cursor += 1;
        let mut code_lines = Vec::new();

        while !self.at_end() && !self.lines[self.cursor].trim().starts_with(FENCE) {
            code_lines.push(self.lines[self.cursor].trim_end());
            self.cursor += 1;
        }

        // Step past the closing fence, or past the end when there is none
        self.cursor += 1;

        if code_lines.is_empty() {
            return None;
        }

        let language = info.trim();
        Some(Block::CodeBlock {
            language: (!language.is_empty()).then(|| language.to_string()),
            content: code_lines.join("\n"),
        })
    }
}

fn heading(line: &str) -> Option<Block> {
    HEADING_PREFIXES.iter().find_map(|(prefix, level)| {
        line.strip_prefix(prefix).map(|text| Block::Heading {
            level: *level,
            text: text.trim().to_string(),
        })
    })
}

fn is_table_line(line: &str) -> bool {
    line.matches('|').count() >= MIN_TABLE_PIPES
}

fn is_separator_row(line: &str) -> bool {
    line.contains(RULE)
}

/// Split a table row on `|`, dropping the fields outside the edge pipes.
fn split_cells(line: &str) -> Vec<String> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 2 {
        return Vec::new();
    }
    fields[1..fields.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Strip a `<digits>. ` list marker.
fn strip_number_prefix(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}
