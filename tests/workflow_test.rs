//! Workflow integration tests for inkpost.
//!
//! Tests the pipeline from loading posts through page generation.

mod common;

use anyhow::Result;
use inkpost::{generate_preview, generate_site, load_post, load_posts};
use std::fs;

/// Tests loading a posts directory and generating the full site.
#[test]
fn test_workflow_posts_to_site() -> Result<()> {
    // Arrange
    let posts_dir = common::create_posts_dir(&[
        ("hello.md", "# Hello World\nFirst *post* here."),
        ("code.md", "# Code\n```\n<main>\n```"),
    ])?;
    let output = tempfile::TempDir::new()?;

    // Act
    let posts = load_posts(posts_dir.path())?;
    let summary = generate_site(&posts, output.path(), "Test Blog")?;

    // Assert
    assert_eq!(summary.pages, 2);

    let index = fs::read_to_string(&summary.index_path)?;
    assert!(index.contains("Test Blog"));
    assert!(index.contains(r#"href="posts/hello.html""#));
    assert!(index.contains("Hello World"));
    assert!(index.contains("First *post* here."));

    let hello = fs::read_to_string(output.path().join("posts/hello.html"))?;
    assert!(hello.contains("<p>First <em>post</em> here.</p>"));
    assert!(hello.contains(r#"href="../index.html""#));

    let code = fs::read_to_string(output.path().join("posts/code.html"))?;
    assert!(code.contains("<pre><code>&lt;main&gt;\n</code></pre>"));
    Ok(())
}

/// Tests generating a preview page for a single post file.
#[test]
fn test_workflow_single_post_preview() -> Result<()> {
    // Arrange
    let posts_dir = common::create_posts_dir(&[("Draft Idea.md", "# Idea\n> quoted")])?;
    let output = tempfile::TempDir::new()?;

    // Act
    let post = load_post(posts_dir.path().join("Draft Idea.md"))?;
    let page = generate_preview(&post, output.path(), "Drafts")?;

    // Assert
    assert_eq!(page, output.path().join("draft-idea.html"));
    let html = fs::read_to_string(&page)?;
    assert!(html.contains("<title>Idea - Drafts</title>"));
    assert!(html.contains("<blockquote>quoted</blockquote>"));
    assert!(output.path().join("assets/post.css").exists());
    Ok(())
}

/// Tests regenerating into an existing output directory.
#[test]
fn test_workflow_regenerate_overwrites() -> Result<()> {
    // Arrange
    let posts_dir = common::create_posts_dir(&[("entry.md", "# Before")])?;
    let output = tempfile::TempDir::new()?;
    generate_site(&load_posts(posts_dir.path())?, output.path(), "Blog")?;

    // Act
    common::write_file(posts_dir.path(), "entry.md", "# After")?;
    generate_site(&load_posts(posts_dir.path())?, output.path(), "Blog")?;

    // Assert
    let page = fs::read_to_string(output.path().join("posts/entry.html"))?;
    assert!(page.contains("<h1>After</h1>"));
    assert!(!page.contains("Before"));
    Ok(())
}

/// Tests that files sharing a slug produce a single page and index entry.
#[test]
fn test_workflow_colliding_slugs_one_page_each() -> Result<()> {
    // Arrange
    let posts_dir = common::create_posts_dir(&[
        ("Hello World.md", "# First"),
        ("hello-world.md", "# Second"),
    ])?;
    let output = tempfile::TempDir::new()?;

    // Act
    let posts = load_posts(posts_dir.path())?;
    let summary = generate_site(&posts, output.path(), "Blog")?;

    // Assert
    assert_eq!(summary.pages, 1);
    let written = fs::read_dir(output.path().join("posts"))?.count();
    assert_eq!(written, summary.pages, "Every reported page should exist on disk");

    let index = fs::read_to_string(&summary.index_path)?;
    assert_eq!(index.matches(r#"href="posts/hello-world.html""#).count(), 1);
    Ok(())
}
