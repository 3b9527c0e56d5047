//! Content ingestion pipeline: frontmatter, posts, repository and ranking

pub mod frontmatter;
pub mod markdown;
pub mod post;
pub mod related;
pub mod repository;

pub use frontmatter::{RawFrontmatter, ValidFrontmatter, ValidationError, ValidationReport};
pub use markdown::MarkdownRenderer;
pub use post::{Author, Category, Post};
pub use related::{related_posts, similarity_score, RankingConfig};
pub use repository::{PostRepository, RejectReason, Rejection, Scan};
