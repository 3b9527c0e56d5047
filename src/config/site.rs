//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::{Author, RankingConfig};

/// Main site configuration. Every field has a default, so a site without a
/// `_config.yml` works out of the box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: Author,

    // URL
    pub url: String,

    // Directory
    pub posts_dir: String,
    pub public_dir: String,

    // Reading time heuristic
    pub words_per_minute: u32,

    // Related posts
    pub related_limit: usize,
    pub ranking: RankingConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: Author::default(),

            url: "http://example.com".to_string(),

            posts_dir: "content/posts".to_string(),
            public_dir: "public".to_string(),

            words_per_minute: 200,

            related_limit: 2,
            ranking: RankingConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "content/posts");
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.related_limit, 2);
        assert_eq!(config.ranking.same_category_weight, 10);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: AI Experiments & Builds
url: https://blog.example.dev
author:
  name: Test User
  url: https://example.dev
ranking:
  same_category_weight: 20
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "AI Experiments & Builds");
        assert_eq!(config.author.name, "Test User");
        assert_eq!(config.ranking.same_category_weight, 20);
        // Unspecified ranking fields keep their defaults
        assert_eq!(config.ranking.shared_tag_weight, 3);
    }
}
