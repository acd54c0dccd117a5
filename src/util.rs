//! Utility functions for inkpost

/// Derives a URL safe slug from a post file name.
///
/// Keeps ASCII letters and digits (lowercased) and collapses every run of
/// other characters into a single `-`. Leading and trailing dashes are
/// removed.
///
/// # Arguments
///
/// * `name`: File stem or title to convert
///
/// # Returns
///
/// Slug string, empty when the name has no ASCII alphanumerics
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Returns the `../` prefix leading from a page back to the site root.
///
/// # Arguments
///
/// * `depth`: Directory depth of the page below the site root
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Clips text to a maximum number of characters, appending an ellipsis.
///
/// Counts characters rather than bytes so multibyte text is never split.
/// Trailing whitespace before the ellipsis is dropped.
///
/// # Arguments
///
/// * `text`: Text to clip
/// * `limit`: Maximum number of characters kept before the ellipsis
pub fn clip_text(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
