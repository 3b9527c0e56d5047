//! List site content

use anyhow::Result;
use chrono::Local;

use crate::content::PostRepository;
use crate::helpers::date::relative_date;
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let repo = PostRepository::new(blog);

    match content_type {
        "post" | "posts" => {
            let posts = repo.all_posts();
            let today = Local::now().date_naive();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}] ({} min read, {})",
                    post.date,
                    post.title,
                    post.category,
                    post.reading_time,
                    relative_date(post.date_parsed, today)
                );
            }
        }
        "category" | "categories" => {
            let posts = repo.all_posts();
            let categories = repo.categories();
            println!("Categories ({}):", categories.len());
            for category in categories {
                let count = posts.iter().filter(|p| p.category == *category).count();
                println!("  {} ({})", category, count);
            }
        }
        "tag" | "tags" => {
            let posts = repo.all_posts();
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "slug" | "slugs" => {
            let slugs = repo.post_slugs();
            println!("Slugs ({}):", slugs.len());
            for slug in slugs {
                println!("  {}", slug);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown list type: {} (expected post, category, tag or slug)",
                content_type
            );
        }
    }

    Ok(())
}
