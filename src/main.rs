use anyhow::{Context, Result};
use inkpost::Config;
use tracing_subscriber::EnvFilter;

/// Renders a single post file to stdout as a bare HTML fragment.
fn print_fragment(config: &Config) -> Result<()> {
    let post = inkpost::load_post(&config.input).context("Failed to load post")?;
    print!("{}", post.html());
    Ok(())
}

/// Opens a generated page in the default browser unless disabled.
///
/// Failing to launch a browser is reported but does not fail the run; the
/// page has already been written.
fn open_page(config: &Config, page: &std::path::Path) {
    if config.no_open {
        return;
    }

    if let Err(e) = open::that(page) {
        tracing::warn!(page = %page.display(), error = %e, "Failed to open browser");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    if config.fragment {
        return print_fragment(&config);
    }

    let blog_name = config.blog_name().context("Failed to determine blog name")?;

    if config.input.is_file() {
        let post = inkpost::load_post(&config.input).context("Failed to load post")?;
        let page = inkpost::generate_preview(&post, &config.output, &blog_name)
            .context("Failed to generate preview")?;

        println!("Generated: {}", page.display());
        open_page(&config, &page);
        return Ok(());
    }

    let posts = inkpost::load_posts(&config.input).context("Failed to load posts")?;
    let summary = inkpost::generate_site(&posts, &config.output, &blog_name)
        .context("Failed to generate site")?;

    println!("Generated {} post pages", summary.pages);
    println!("Generated: {}", summary.index_path.display());
    open_page(&config, &summary.index_path);

    Ok(())
}
