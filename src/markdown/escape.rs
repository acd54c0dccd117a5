//! HTML escaping for rendered text.

/// Escapes the three characters that can open markup.
///
/// Ampersands are replaced first so the entities produced for `<` and `>`
/// are not escaped twice. Quotes are left untouched.
///
/// # Arguments
///
/// * `text`: Plain text to escape
///
/// # Returns
///
/// Text safe to place between HTML tags
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
