//! Inline styling for paragraph text.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern and replacement for one inline style.
struct InlineRule {
    pattern: Regex,
    replacement: &'static str,
}

impl InlineRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("inline pattern should compile"),
            replacement,
        }
    }
}

/// Inline rules in application order.
///
/// Bold must run before italic: once `**` pairs are consumed the single
/// asterisk pattern only sees genuine emphasis delimiters.
static INLINE_RULES: LazyLock<[InlineRule; 5]> = LazyLock::new(|| {
    [
        InlineRule::new(r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        InlineRule::new(r"\*(.+?)\*", "<em>${1}</em>"),
        InlineRule::new(r"~~(.+?)~~", "<del>${1}</del>"),
        InlineRule::new(r"__(.+?)__", "<u>${1}</u>"),
        InlineRule::new(r"(https?://\S+)", r#"<a href="${1}">${1}</a>"#),
    ]
});

/// Applies inline styles to a single line of paragraph text.
///
/// Each rule rewrites the output of the previous one. Text is not escaped
/// here; callers escape the line before styling it. Link targets are
/// embedded exactly as matched, so a quote inside a URL ends the `href`
/// attribute early.
///
/// # Arguments
///
/// * `text`: Paragraph line, already HTML escaped
///
/// # Returns
///
/// Line with inline markup substituted
pub fn apply_inline(text: &str) -> String {
    INLINE_RULES.iter().fold(text.to_owned(), |styled, rule| {
        rule.pattern
            .replace_all(&styled, rule.replacement)
            .into_owned()
    })
}
