//! Post repository - enumerates, parses and queries content files
//!
//! Every operation re-reads the content directory; there is no cache, so
//! listings always reflect what is on disk. Failures never escape: an
//! unreadable or invalid file is logged, reported through the scan
//! diagnostics and excluded from results.

use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use super::{
    related, Category, MarkdownRenderer, Post, RawFrontmatter, ValidationReport,
};
use crate::Blog;

/// File extension for content files.
const CONTENT_EXTENSION: &str = ".mdx";

/// Why a content file was excluded from the listings.
#[derive(Debug)]
pub enum RejectReason {
    /// The file could not be read
    Read(std::io::Error),
    /// The frontmatter block was not parseable at all
    Malformed(String),
    /// The frontmatter parsed but violated schema rules
    Invalid(ValidationReport),
}

/// One rejected content file, surfaced by [`PostRepository::scan`] so
/// callers and tests can see what was dropped without scraping logs.
#[derive(Debug)]
pub struct Rejection {
    pub filename: String,
    pub reason: RejectReason,
}

impl Rejection {
    fn log(&self) {
        match &self.reason {
            RejectReason::Read(e) => {
                tracing::error!("Error reading {}: {}", self.filename, e);
            }
            RejectReason::Malformed(e) => {
                tracing::error!("Error parsing {}: {}", self.filename, e);
            }
            RejectReason::Invalid(report) => {
                for error in &report.errors {
                    tracing::error!("Frontmatter validation error: {}", error);
                }
            }
        }
    }
}

/// Result of one full content-directory scan.
#[derive(Debug)]
pub struct Scan {
    /// Valid posts, date descending
    pub posts: Vec<Post>,
    /// Files that were dropped, in enumeration order
    pub rejections: Vec<Rejection>,
}

/// Read-only view over the posts directory.
pub struct PostRepository<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> PostRepository<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            blog,
            renderer: MarkdownRenderer::new(),
        }
    }

    fn posts_dir(&self) -> &PathBuf {
        &self.blog.posts_dir
    }

    /// Enumerate content filenames in deterministic (alphabetical) order.
    /// A missing directory is an empty listing, not an error.
    pub fn list_filenames(&self) -> Vec<String> {
        let posts_dir = self.posts_dir();
        if !posts_dir.exists() {
            return Vec::new();
        }

        WalkDir::new(posts_dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter(|name| name.ends_with(CONTENT_EXTENSION))
            .collect()
    }

    /// Parse one content file. Any failure is logged and becomes `None`;
    /// parsing never propagates an error to callers.
    pub fn parse_post(&self, filename: &str, include_content: bool) -> Option<Post> {
        match self.try_parse(filename, include_content) {
            Ok(post) => Some(post),
            Err(rejection) => {
                rejection.log();
                None
            }
        }
    }

    fn try_parse(&self, filename: &str, include_content: bool) -> Result<Post, Rejection> {
        let reject = |reason| Rejection {
            filename: filename.to_string(),
            reason,
        };

        let full_path = self.posts_dir().join(filename);
        let file_contents =
            fs::read_to_string(&full_path).map_err(|e| reject(RejectReason::Read(e)))?;

        let (raw, body) = RawFrontmatter::split(&file_contents)
            .map_err(|e| reject(RejectReason::Malformed(e.to_string())))?;

        let fm = raw
            .validate(filename)
            .map_err(|report| reject(RejectReason::Invalid(report)))?;

        // Filenames are the uniqueness source for slugs
        let slug = filename
            .strip_suffix(CONTENT_EXTENSION)
            .unwrap_or(filename)
            .to_string();

        let reading_time =
            super::markdown::reading_time(body, self.blog.config.words_per_minute);

        let content = if include_content {
            Some(self.renderer.render(body))
        } else {
            None
        };

        Ok(Post {
            slug,
            title: fm.title,
            description: fm.description,
            date: fm.date,
            date_parsed: fm.date_parsed,
            category: fm.category,
            tags: fm.tags,
            reading_time,
            author: fm.author.unwrap_or_else(|| self.blog.config.author.clone()),
            content,
        })
    }

    /// Parse every content file and report both survivors and rejections.
    /// Posts come back date descending; equal dates keep enumeration order.
    pub fn scan(&self) -> Scan {
        let mut posts = Vec::new();
        let mut rejections = Vec::new();

        for filename in self.list_filenames() {
            match self.try_parse(&filename, false) {
                Ok(post) => posts.push(post),
                Err(rejection) => rejections.push(rejection),
            }
        }

        // Stable sort keeps enumeration order for equal dates
        posts.sort_by(|a, b| b.date_parsed.cmp(&a.date_parsed));

        Scan { posts, rejections }
    }

    /// All valid posts, newest first. Rejected files are logged and dropped.
    pub fn all_posts(&self) -> Vec<Post> {
        let scan = self.scan();
        for rejection in &scan.rejections {
            rejection.log();
        }
        scan.posts
    }

    /// Look up a single post by slug, with rendered content attached.
    pub fn post_by_slug(&self, slug: &str) -> Option<Post> {
        let filename = format!("{}{}", slug, CONTENT_EXTENSION);
        self.parse_post(&filename, true)
    }

    /// Posts filtered by category. `"all"` passes everything through; a
    /// value outside the closed set logs a warning and yields nothing.
    pub fn posts_by_category(&self, category: &str) -> Vec<Post> {
        let all_posts = self.all_posts();

        if category == "all" {
            return all_posts;
        }

        let Ok(wanted) = category.parse::<Category>() else {
            tracing::warn!("Invalid category: {}", category);
            return Vec::new();
        };

        all_posts
            .into_iter()
            .filter(|post| post.category == wanted)
            .collect()
    }

    /// The fixed category set. Defined by the schema, not computed from
    /// whatever categories the current posts happen to use.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Slugs of all valid posts, for the page-generation boundary.
    pub fn post_slugs(&self) -> Vec<String> {
        self.all_posts().into_iter().map(|post| post.slug).collect()
    }

    /// Posts most similar to `reference`, best first, at most `limit`.
    pub fn related_posts(&self, reference: &Post, limit: usize) -> Vec<Post> {
        related::related_posts(
            reference,
            self.all_posts(),
            limit,
            &self.blog.config.ranking,
        )
    }
}
