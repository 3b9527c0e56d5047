//! Show posts related to a given slug

use anyhow::{bail, Result};

use crate::content::{similarity_score, PostRepository};
use crate::Blog;

/// Print the ranked related posts for one slug, with their scores.
pub fn run(blog: &Blog, slug: &str, limit: usize) -> Result<()> {
    let repo = PostRepository::new(blog);

    let Some(reference) = repo.post_by_slug(slug) else {
        bail!("No post found for slug: {}", slug);
    };

    let related = repo.related_posts(&reference, limit);
    if related.is_empty() {
        println!("No related posts for \"{}\"", reference.title);
        return Ok(());
    }

    println!("Related to \"{}\":", reference.title);
    for post in related {
        let score = similarity_score(&reference, &post, &blog.config.ranking);
        println!("  {:>3}  {} - {} [{}]", score, post.date, post.title, post.category);
    }

    Ok(())
}
