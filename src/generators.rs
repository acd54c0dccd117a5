//! Static site generation for blog posts.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::pages::index::index_page;
use crate::pages::post::{PostPageData, post_page};
use crate::post::Post;

/// Directory below the output root holding one page per post.
const POSTS_DIR: &str = "posts";

/// Directory below the output root holding stylesheets.
const ASSETS_DIR: &str = "assets";

/// Outcome of a site generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Number of post pages written.
    pub pages: usize,
    /// Path of the generated index page.
    pub index_path: PathBuf,
}

/// Generates the full blog site.
///
/// Writes stylesheets, one page per post at `posts/{slug}.html` and an
/// `index.html` listing every post. Each post is rendered from its markdown
/// while its page is built.
///
/// # Arguments
///
/// * `posts`: Posts to publish, in index order
/// * `output`: Output directory, created when missing
/// * `blog_name`: Blog title used in page titles and headers
///
/// # Errors
///
/// Returns error if any directory or page cannot be written
///
/// # Examples
///
/// ```no_run
/// use inkpost::{generate_site, load_posts};
/// use std::path::Path;
///
/// let posts = load_posts("posts")?;
/// let summary = generate_site(&posts, Path::new("dist"), "My Blog")?;
/// println!("{} pages", summary.pages);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site(posts: &[Post], output: &Path, blog_name: &str) -> Result<SiteSummary> {
    prepare_output(output)?;

    let posts_dir = output.join(POSTS_DIR);
    fs::create_dir_all(&posts_dir).context("Failed to create posts directory")?;

    for post in posts {
        let page = post_page(PostPageData {
            blog_name,
            post,
            depth: 1,
            show_index_link: true,
        });

        let page_path = posts_dir.join(format!("{}.html", post.slug()));
        fs::write(&page_path, page.into_string())
            .with_context(|| format!("Failed to write post page: {}", page_path.display()))?;

        tracing::debug!(slug = post.slug(), path = %page_path.display(), "Wrote post page");
    }

    let index_path = output.join("index.html");
    fs::write(&index_path, index_page(blog_name, posts).into_string())
        .context("Failed to write index page")?;

    tracing::info!(pages = posts.len(), output = %output.display(), "Generated site");

    Ok(SiteSummary {
        pages: posts.len(),
        index_path,
    })
}

/// Generates a standalone preview page for a single post.
///
/// The page is written to `{output}/{slug}.html` with its stylesheet and no
/// link to an index page.
///
/// # Arguments
///
/// * `post`: Post to preview
/// * `output`: Output directory, created when missing
/// * `blog_name`: Blog title used in the page title
///
/// # Returns
///
/// Path of the written preview page
///
/// # Errors
///
/// Returns error if the output directory or page cannot be written
pub fn generate_preview(post: &Post, output: &Path, blog_name: &str) -> Result<PathBuf> {
    prepare_output(output)?;

    let page = post_page(PostPageData {
        blog_name,
        post,
        depth: 0,
        show_index_link: false,
    });

    let page_path = output.join(format!("{}.html", post.slug()));
    fs::write(&page_path, page.into_string())
        .with_context(|| format!("Failed to write preview page: {}", page_path.display()))?;

    tracing::info!(slug = post.slug(), path = %page_path.display(), "Generated preview");

    Ok(page_path)
}

/// Creates the output directory and writes stylesheets into it.
fn prepare_output(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let assets_dir = output.join(ASSETS_DIR);
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;

    write_css_assets(&assets_dir).context("Failed to write CSS assets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_site_writes_all_pages() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let output = dir.path().join("dist");
        let posts = vec![
            Post::from_markdown("one", "# One\nfirst"),
            Post::from_markdown("two", "# Two\nsecond"),
        ];

        // Act
        let summary = generate_site(&posts, &output, "Notes")?;

        // Assert
        assert_eq!(summary.pages, 2);
        assert_eq!(summary.index_path, output.join("index.html"));
        assert!(output.join("posts/one.html").exists());
        assert!(output.join("posts/two.html").exists());
        assert!(output.join("assets/post.css").exists());
        assert!(output.join("assets/index.css").exists());

        let index = fs::read_to_string(&summary.index_path)?;
        assert!(index.contains("posts/one.html"));
        assert!(index.contains("posts/two.html"));
        Ok(())
    }

    #[test]
    fn test_generate_site_without_posts() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;

        // Act
        let summary = generate_site(&[], dir.path(), "Empty")?;

        // Assert
        assert_eq!(summary.pages, 0);
        let index = fs::read_to_string(&summary.index_path)?;
        assert!(index.contains("No posts yet"));
        Ok(())
    }

    #[test]
    fn test_generate_preview_writes_page() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let post = Post::from_markdown("draft", "# Draft\n```\n<tag>\n```");

        // Act
        let path = generate_preview(&post, dir.path(), "Notes")?;

        // Assert
        assert_eq!(path, dir.path().join("draft.html"));
        let html = fs::read_to_string(&path)?;
        assert!(html.contains("<pre><code>&lt;tag&gt;\n</code></pre>"));
        assert!(dir.path().join("assets/post.css").exists());
        Ok(())
    }
}
