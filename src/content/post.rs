//! Post model and the closed category set

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of post categories. Categories are defined by the schema,
/// not by whatever happens to exist in the content directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ai,
    Salesforce,
    Builds,
    Random,
}

impl Category {
    /// Every valid category, in schema order.
    pub const ALL: [Category; 4] = [
        Category::Ai,
        Category::Salesforce,
        Category::Builds,
        Category::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Salesforce => "salesforce",
            Category::Builds => "builds",
            Category::Random => "random",
        }
    }

    /// Comma-separated list of accepted values, for error messages.
    pub fn accepted_values() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ai" => Ok(Category::Ai),
            "salesforce" => Ok(Category::Salesforce),
            "builds" => Ok(Category::Builds),
            "random" => Ok(Category::Random),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post author, either from frontmatter or the site-wide default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            url: None,
        }
    }
}

/// A blog post, reconstructed fresh from its source file on every read.
///
/// `content` is only populated when the caller asks for it (single-post
/// view); list views skip the rendering cost entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier, derived from the source filename minus extension
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short description for listings and metadata
    pub description: String,

    /// Publication date exactly as authored in the frontmatter
    pub date: String,

    /// Parsed form of `date`, used for sorting and recency scoring
    #[serde(skip)]
    pub date_parsed: NaiveDate,

    /// Category from the closed set
    pub category: Category,

    /// Ordered tags, empty when not authored
    pub tags: Vec<String>,

    /// Estimated minutes to read the body, always at least 1
    pub reading_time: u32,

    /// Author from frontmatter, or the site default
    pub author: Author,

    /// Rendered HTML body, present only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!("bogus".parse::<Category>(), Err(()));
    }

    #[test]
    fn test_accepted_values_lists_whole_set() {
        assert_eq!(
            Category::accepted_values(),
            "ai, salesforce, builds, random"
        );
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Salesforce).unwrap();
        assert_eq!(json, "\"salesforce\"");
    }

    #[test]
    fn test_content_omitted_from_serialization_when_absent() {
        let post = Post {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            description: "A post".to_string(),
            date: "2024-01-10".to_string(),
            date_parsed: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            category: Category::Ai,
            tags: vec!["llm".to_string()],
            reading_time: 1,
            author: Author::default(),
            content: None,
        };
        let json = serde_json::to_string(&post).unwrap();
        assert!(!json.contains("content"));
        assert!(json.contains("\"readingTime\":1"));
    }
}
