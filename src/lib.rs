//! Markdown blog renderer and static page generator.

mod assets;
pub mod components;
mod config;
mod generators;
mod markdown;
pub mod pages;
mod post;
mod util;

pub use assets::write_css_assets;
pub use config::Config;
pub use generators::{SiteSummary, generate_preview, generate_site};
pub use markdown::{Block, Blocks, apply_inline, blocks, escape_html, render};
pub use post::{Post, load_post, load_posts};
pub use util::slugify;
