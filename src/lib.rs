//! mdxpress: content pipeline for MDX blogs
//!
//! Parses `.mdx` files with YAML frontmatter into validated post records,
//! exposes listing and lookup queries over them, ranks related posts by
//! content similarity, and exports the payloads an external rendering
//! framework consumes (post JSON, sitemap, robots).

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;

use anyhow::Result;
use std::path::Path;

/// The blog instance: configuration plus resolved directories.
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the `.mdx` content files
    pub posts_dir: std::path::PathBuf,
    /// Output directory for generated payloads
    pub public_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a blog instance rooted at a directory. Reads `_config.yml`
    /// when present, otherwise uses defaults.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            public_dir,
        })
    }
}
