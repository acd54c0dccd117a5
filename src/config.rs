//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command line configuration for inkpost.
#[derive(Debug, Clone, Parser)]
#[command(name = "inkpost", version, about, long_about = None)]
pub struct Config {
    /// Markdown post file or directory of posts
    #[arg(default_value = "posts")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Blog name
    #[arg(long)]
    pub name: Option<String>,

    /// Print the rendered HTML fragment of a single post to stdout
    #[arg(long)]
    pub fragment: bool,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if input path does not exist, or if fragment output is
    /// requested for a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input path does not exist: {}", self.input.display());
        }

        if self.fragment && self.input.is_dir() {
            bail!(
                "Fragment output needs a single post file, got directory: {}",
                self.input.display()
            );
        }

        Ok(())
    }

    /// Returns blog name from configuration or the posts directory name.
    ///
    /// For a single post file the directory containing it is used.
    ///
    /// # Errors
    ///
    /// Returns error if the directory has no name component or contains invalid UTF8.
    pub fn blog_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let path = self
            .input
            .canonicalize()
            .unwrap_or_else(|_| self.input.clone());

        let dir: &Path = if path.is_file() {
            path.parent().unwrap_or(&path)
        } else {
            &path
        };

        dir.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract blog name from path: {}", dir.display()))
            .map(String::from)
    }
}
