//! Single pass markdown to HTML renderer.

use regex::Regex;
use std::str::Split;
use std::sync::LazyLock;

use super::{apply_inline, escape_html};

/// Marker opening and closing a fenced code block.
const FENCE: &str = "```";

/// Byte order mark some editors write at the start of UTF-8 files.
const BOM: char = '\u{feff}';

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("ordered item pattern should compile"));

/// One rendered unit of a markdown document.
///
/// Every non-empty source line outside a fence maps to exactly one block.
/// Fenced code is the only block built from several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#` run followed by text. The level is the length of the run and is
    /// not capped at six.
    Heading { level: usize, text: &'a str },
    /// Line starting with `- `.
    UnorderedItem(&'a str),
    /// Line starting with digits, a dot and whitespace.
    OrderedItem(&'a str),
    /// Line starting with `> `.
    Quote(&'a str),
    /// Line that is exactly `---`.
    Rule,
    /// Any other non-empty line.
    Paragraph(&'a str),
    /// Content between two fence lines, one `\n` terminated line per source line.
    Code(String),
}

impl Block<'_> {
    /// Renders the block as a single HTML element without trailing newline.
    ///
    /// Text of headings, items, quotes and code is escaped before wrapping.
    /// Paragraph text is escaped and then passed through inline styling;
    /// no other block gets inline styling.
    pub fn to_html(&self) -> String {
        match self {
            Block::Heading { level, text } => {
                format!("<h{level}>{}</h{level}>", escape_html(text))
            }
            Block::UnorderedItem(text) | Block::OrderedItem(text) => {
                format!("<li>{}</li>", escape_html(text))
            }
            Block::Quote(text) => format!("<blockquote>{}</blockquote>", escape_html(text)),
            Block::Rule => "<hr>".to_string(),
            Block::Paragraph(text) => format!("<p>{}</p>", apply_inline(&escape_html(text))),
            Block::Code(code) => format!("<pre><code>{}</code></pre>", escape_html(code)),
        }
    }
}

/// Iterator over the blocks of a markdown document.
///
/// Holds the only state the renderer needs: whether a fence is open and the
/// code collected since it opened. A fence still open when the input ends
/// yields nothing; its content is dropped with the iterator.
pub struct Blocks<'a> {
    lines: Split<'a, char>,
    inside_fence: bool,
    fence_buffer: String,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        for raw in self.lines.by_ref() {
            let line = raw.trim();

            if line.starts_with(FENCE) {
                if self.inside_fence {
                    self.inside_fence = false;
                    return Some(Block::Code(std::mem::take(&mut self.fence_buffer)));
                }
                self.inside_fence = true;
                continue;
            }

            if self.inside_fence {
                // Keep indentation, drop trailing whitespace and any '\r'
                self.fence_buffer.push_str(raw.trim_end());
                self.fence_buffer.push('\n');
                continue;
            }

            if let Some(block) = classify(line) {
                return Some(block);
            }
        }

        None
    }
}

/// Splits a markdown document into blocks in source order.
///
/// A leading byte order mark is dropped so the first line is classified
/// like any other.
///
/// # Arguments
///
/// * `markdown`: Complete document, lines separated by `\n`
///
/// # Returns
///
/// Lazy iterator of blocks; empty lines produce no block
pub fn blocks(markdown: &str) -> Blocks<'_> {
    Blocks {
        lines: markdown.strip_prefix(BOM).unwrap_or(markdown).split('\n'),
        inside_fence: false,
        fence_buffer: String::new(),
    }
}

/// Renders a markdown document to an HTML fragment.
///
/// Each block becomes one element followed by `\n`, in source order. The
/// function accepts any input: lines that match no block rule fall back to
/// paragraphs, and an unterminated fence simply renders nothing for its
/// content.
///
/// # Arguments
///
/// * `markdown`: Markdown document to render
///
/// # Returns
///
/// HTML fragment, empty when the document has no content
///
/// # Examples
///
/// ```
/// assert_eq!(inkpost::render("# Title"), "<h1>Title</h1>\n");
/// assert_eq!(inkpost::render("- a\n- b"), "<li>a</li>\n<li>b</li>\n");
/// ```
pub fn render(markdown: &str) -> String {
    blocks(markdown).fold(String::with_capacity(markdown.len()), |mut html, block| {
        html.push_str(&block.to_html());
        html.push('\n');
        html
    })
}

/// Classifies a trimmed line outside any fence.
///
/// Rules are tried in priority order and the first match wins. Returns
/// `None` for empty lines.
fn classify(line: &str) -> Option<Block<'_>> {
    if line.is_empty() {
        return None;
    }

    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level > 0 {
        return Some(Block::Heading {
            level,
            text: line[level..].trim(),
        });
    }

    if let Some(text) = line.strip_prefix("- ") {
        return Some(Block::UnorderedItem(text));
    }

    if ORDERED_ITEM.is_match(line) {
        let text = line
            .split_once('.')
            .map_or(line, |(_, rest)| rest.trim_start());
        return Some(Block::OrderedItem(text));
    }

    if let Some(text) = line.strip_prefix("> ") {
        return Some(Block::Quote(text));
    }

    if line == "---" {
        return Some(Block::Rule);
    }

    Some(Block::Paragraph(line))
}
