//! CLI entry point for mdxpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdxpress")]
#[command(version)]
#[command(about = "Content pipeline for MDX blogs", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site content
    List {
        /// Type of content to list (post, category, tag, slug)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Validate all content files and report rejections
    Check,

    /// Show posts related to a slug
    Related {
        /// Slug of the reference post
        slug: String,

        /// Maximum number of related posts
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export post payloads, sitemap and robots directives
    #[command(alias = "g")]
    Generate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdxpress=debug,info"
    } else {
        "mdxpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| {
        std::env::current_dir().expect("cannot determine current directory")
    });

    let blog = mdxpress::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List { r#type } => {
            mdxpress::commands::list::run(&blog, &r#type)?;
        }

        Commands::Check => {
            mdxpress::commands::check::run(&blog)?;
        }

        Commands::Related { slug, limit } => {
            let limit = limit.unwrap_or(blog.config.related_limit);
            mdxpress::commands::related::run(&blog, &slug, limit)?;
        }

        Commands::Generate => {
            tracing::info!("Generating content payloads...");
            mdxpress::commands::generate::run(&blog)?;
        }
    }

    Ok(())
}
