//! Line oriented markdown rendering for blog posts.
//!
//! Posts are rendered with a small single pass renderer: every line is
//! classified into exactly one block (heading, list item, quote, rule,
//! paragraph) and fenced code is the only construct spanning lines. Inline
//! styling (bold, italic, strikethrough, underline, autolinks) applies to
//! paragraphs only.

mod escape;
mod inline;
mod renderer;

pub use escape::escape_html;
pub use inline::apply_inline;
pub use renderer::{Block, Blocks, blocks, render};
