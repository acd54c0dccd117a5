//! Blog index page listing all posts.

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::post::Post;

/// Generates the blog index page.
///
/// Lists posts in the given order with a link to each post page and the
/// first paragraph as summary. Shows an empty state when there are no posts.
///
/// # Arguments
///
/// * `blog_name`: Blog title shown in the header
/// * `posts`: Posts to list
///
/// # Returns
///
/// Complete HTML markup for index page
pub fn index_page(blog_name: &str, posts: &[Post]) -> Markup {
    let body = html! {
        header class="blog-header" {
            h1 class="blog-name" { (blog_name) }
        }
        main class="post-list" {
            @if posts.is_empty() {
                p class="empty-state" { "No posts yet" }
            } @else {
                @for post in posts {
                    article class="post-entry" {
                        a href=(format!("posts/{}.html", post.slug())) class="post-title" {
                            (post.title())
                        }
                        @if let Some(summary) = post.summary() {
                            p class="post-summary" { (summary) }
                        }
                    }
                }
            }
        }
    };

    page_wrapper("Posts", blog_name, &["assets/index.css"], body)
}
