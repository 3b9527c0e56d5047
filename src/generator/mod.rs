//! Generator module - materializes the data the rendering boundary consumes
//!
//! The crate does not own presentation; the generate step emits structured
//! payloads for an external renderer: a list-view posts.json, one detail
//! JSON per post (rendered content plus ranked related posts), sitemap.xml
//! and robots.txt.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::fs;

use crate::content::{Post, PostRepository};
use crate::Blog;

/// How often a sitemap URL is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        };
        f.write_str(s)
    }
}

/// One sitemap URL entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Robots directives: a single allow-all rule plus the sitemap location.
#[derive(Debug, Clone, Serialize)]
pub struct RobotsPayload {
    pub rules: RobotsRule,
    pub sitemap: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: String,
}

/// Detail-view payload: the full post plus its ranked related posts.
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub related: Vec<Post>,
}

/// Build sitemap entries: the site root first, then one entry per post.
pub fn sitemap_entries(base_url: &str, posts: &[Post]) -> Vec<SitemapEntry> {
    sitemap_entries_at(base_url, posts, Local::now().date_naive())
}

fn sitemap_entries_at(base_url: &str, posts: &[Post], today: NaiveDate) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');

    let mut entries = vec![SitemapEntry {
        url: format!("{}/", base_url),
        last_modified: today,
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
    }];

    entries.extend(posts.iter().map(|post| SitemapEntry {
        url: format!("{}/{}", base_url, post.slug),
        last_modified: post.date_parsed,
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.8,
    }));

    entries
}

/// Build the robots payload for a site.
pub fn robots(base_url: &str) -> RobotsPayload {
    let base_url = base_url.trim_end_matches('/');
    RobotsPayload {
        rules: RobotsRule {
            user_agent: "*".to_string(),
            allow: "/".to_string(),
        },
        sitemap: format!("{}/sitemap.xml", base_url),
    }
}

/// Render sitemap entries as XML.
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render the robots payload in robots.txt syntax.
pub fn robots_txt(payload: &RobotsPayload) -> String {
    format!(
        "User-agent: {}\nAllow: {}\n\nSitemap: {}\n",
        payload.rules.user_agent, payload.rules.allow, payload.sitemap
    )
}

/// Writes all payloads into the public directory.
pub struct Generator<'a> {
    blog: &'a Blog,
}

impl<'a> Generator<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Generate every payload. Returns the number of posts exported.
    pub fn generate(&self) -> Result<usize> {
        let repo = PostRepository::new(self.blog);
        let posts = repo.all_posts();
        let public_dir = &self.blog.public_dir;

        fs::create_dir_all(public_dir.join("posts"))?;

        // List-view payload, without content
        let list_json = serde_json::to_string_pretty(&posts)?;
        fs::write(public_dir.join("posts.json"), list_json)?;
        tracing::info!("Generated posts.json ({} posts)", posts.len());

        // Detail payloads, with rendered content and related posts
        for slug in posts.iter().map(|p| &p.slug) {
            // Re-parse with content; skip posts that vanished mid-run
            let Some(post) = repo.post_by_slug(slug) else {
                continue;
            };
            let related = repo.related_posts(&post, self.blog.config.related_limit);
            let detail = PostDetail { post, related };
            let detail_json = serde_json::to_string_pretty(&detail)?;
            fs::write(public_dir.join("posts").join(format!("{}.json", slug)), detail_json)?;
        }
        tracing::info!("Generated post detail payloads");

        let entries = sitemap_entries(&self.blog.config.url, &posts);
        fs::write(public_dir.join("sitemap.xml"), sitemap_xml(&entries))?;
        tracing::info!("Generated sitemap.xml");

        let robots = robots(&self.blog.config.url);
        fs::write(public_dir.join("robots.txt"), robots_txt(&robots))?;
        tracing::info!("Generated robots.txt");

        Ok(posts.len())
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{Author, Category};

    fn post(slug: &str, date: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_string(),
            description: String::new(),
            date: date.to_string(),
            date_parsed: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: Category::Builds,
            tags: Vec::new(),
            reading_time: 1,
            author: Author::default(),
            content: None,
        }
    }

    #[test]
    fn test_sitemap_root_entry_first() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let posts = vec![post("hello", "2024-01-10")];
        let entries = sitemap_entries_at("https://blog.example.dev/", &posts, today);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "https://blog.example.dev/");
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[1].url, "https://blog.example.dev/hello");
        assert_eq!(entries[1].change_frequency, ChangeFrequency::Monthly);
        assert_eq!(entries[1].priority, 0.8);
        assert_eq!(entries[1].last_modified, posts[0].date_parsed);
    }

    #[test]
    fn test_sitemap_xml_output() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let posts = vec![post("hello", "2024-01-10")];
        let xml = sitemap_xml(&sitemap_entries_at("https://blog.example.dev", &posts, today));

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://blog.example.dev/hello</loc>"));
        assert!(xml.contains("<lastmod>2024-01-10</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
    }

    #[test]
    fn test_robots_txt_output() {
        let payload = robots("https://blog.example.dev");
        let txt = robots_txt(&payload);
        assert_eq!(
            txt,
            "User-agent: *\nAllow: /\n\nSitemap: https://blog.example.dev/sitemap.xml\n"
        );
    }

    #[test]
    fn test_generate_writes_all_payloads() {
        let tmp = tempfile::tempdir().unwrap();
        let posts_dir = tmp.path().join("content/posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(
            posts_dir.join("hello.mdx"),
            "---\ntitle: Hello\ndescription: D\ndate: 2024-01-10\ncategory: ai\n---\n\nBody.\n",
        )
        .unwrap();

        let blog = Blog {
            config: SiteConfig::default(),
            base_dir: tmp.path().to_path_buf(),
            posts_dir,
            public_dir: tmp.path().join("public"),
        };

        let count = Generator::new(&blog).generate().unwrap();
        assert_eq!(count, 1);

        let list = fs::read_to_string(blog.public_dir.join("posts.json")).unwrap();
        assert!(list.contains("\"slug\": \"hello\""));
        assert!(!list.contains("\"content\""));

        let detail = fs::read_to_string(blog.public_dir.join("posts/hello.json")).unwrap();
        assert!(detail.contains("\"content\""));
        assert!(detail.contains("\"related\""));

        assert!(blog.public_dir.join("sitemap.xml").exists());
        assert!(blog.public_dir.join("robots.txt").exists());
    }
}
