//! Blog post storage on disk.
//!
//! A post is kept as its original markdown. HTML is produced on every read
//! through the markdown renderer and never stored alongside the source.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::markdown::{self, Block};
use crate::util::{clip_text, slugify};

/// Maximum characters of a post summary shown on the index page.
const SUMMARY_LIMIT: usize = 160;

/// File extension of post sources.
const POST_EXTENSION: &str = "md";

/// Blog post with its original markdown source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    slug: String,
    title: String,
    markdown: String,
}

impl Post {
    /// Creates a post from markdown source.
    ///
    /// The title is the text of the first heading in the document, or the
    /// slug when the document has none. Headings inside fenced code are
    /// not considered.
    ///
    /// # Arguments
    ///
    /// * `slug`: URL safe identifier of the post
    /// * `markdown`: Original markdown source
    pub fn from_markdown(slug: impl Into<String>, markdown: impl Into<String>) -> Self {
        let slug = slug.into();
        let markdown = markdown.into();

        let title = markdown::blocks(&markdown)
            .find_map(|block| match block {
                Block::Heading { text, .. } if !text.is_empty() => Some(text.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| slug.clone());

        Self {
            slug,
            title,
            markdown,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Renders the post body to an HTML fragment.
    pub fn html(&self) -> String {
        markdown::render(&self.markdown)
    }

    /// Returns the first paragraph line as plain text, clipped for listings.
    ///
    /// The line is taken from the markdown source, so inline markers such
    /// as `**` or `~~` are kept as written.
    pub fn summary(&self) -> Option<String> {
        markdown::blocks(&self.markdown).find_map(|block| match block {
            Block::Paragraph(text) => Some(clip_text(text, SUMMARY_LIMIT)),
            _ => None,
        })
    }
}

/// Loads a single post from a markdown file.
///
/// # Arguments
///
/// * `path`: Path to markdown file
///
/// # Returns
///
/// Post with slug derived from the file stem
///
/// # Errors
///
/// Returns error if:
/// - File name yields an empty slug
/// - File cannot be read or contains invalid UTF8
pub fn load_post(path: impl AsRef<Path>) -> Result<Post> {
    let path = path.as_ref();

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Cannot extract post name from path: {}", path.display()))?;

    let slug = slugify(stem);
    if slug.is_empty() {
        bail!("Post file name has no usable characters: {}", path.display());
    }

    let markdown = fs::read_to_string(path)
        .with_context(|| format!("Failed to read post: {}", path.display()))?;

    tracing::debug!(path = %path.display(), slug = %slug, "Loaded post");

    Ok(Post::from_markdown(slug, markdown))
}

/// Loads every markdown post in a directory.
///
/// Only files with the `.md` extension directly inside the directory are
/// read. Files that fail to load are logged and skipped. Posts are sorted
/// by slug. When several files map to the same slug, the file whose path
/// sorts first is kept and the others are logged and skipped, so every
/// returned post has its own page.
///
/// # Arguments
///
/// * `dir`: Directory containing post files
///
/// # Errors
///
/// Returns error if the directory cannot be listed
pub fn load_posts(dir: impl AsRef<Path>) -> Result<Vec<Post>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list posts directory: {}", dir.display()))?;

    let mut loaded = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in: {}", dir.display()))?
            .path();

        let is_post = path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some(POST_EXTENSION);
        if !is_post {
            continue;
        }

        match load_post(&path) {
            Ok(post) => loaded.push((path, post)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping post");
            }
        }
    }

    loaded.sort_by(|(a_path, a), (b_path, b)| {
        a.slug.cmp(&b.slug).then_with(|| a_path.cmp(b_path))
    });

    let mut posts: Vec<Post> = Vec::with_capacity(loaded.len());
    for (path, post) in loaded {
        if posts.last().is_some_and(|kept| kept.slug == post.slug) {
            tracing::warn!(
                path = %path.display(),
                slug = %post.slug,
                "Skipping post with duplicate slug"
            );
            continue;
        }
        posts.push(post);
    }

    tracing::info!(count = posts.len(), dir = %dir.display(), "Loaded posts");

    Ok(posts)
}
