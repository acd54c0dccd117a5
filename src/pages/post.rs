//! Single post page.

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::post::Post;
use crate::util::root_prefix;

/// Data container for post page generation.
pub struct PostPageData<'a> {
    pub blog_name: &'a str,
    pub post: &'a Post,
    /// Directory depth of the page below the site root.
    pub depth: usize,
    /// Whether an index page exists to link back to.
    pub show_index_link: bool,
}

/// Generates the page for one post.
///
/// The post is rendered from its markdown when the page is built and the
/// resulting fragment is embedded without further escaping.
///
/// # Arguments
///
/// * `data`: Post page data container
///
/// # Returns
///
/// Complete HTML markup for the post page
pub fn post_page(data: PostPageData<'_>) -> Markup {
    let prefix = root_prefix(data.depth);
    let stylesheet = format!("{}assets/post.css", prefix);
    let index_href = format!("{}index.html", prefix);

    let body = html! {
        header class="post-header" {
            @if data.show_index_link {
                a href=(index_href) class="blog-link" { (data.blog_name) }
            } @else {
                span class="blog-link" { (data.blog_name) }
            }
        }
        article class="post-content" {
            (PreEscaped(data.post.html()))
        }
    };

    page_wrapper(data.post.title(), data.blog_name, &[stylesheet.as_str()], body)
}
