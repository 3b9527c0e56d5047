//! Front-matter splitting and schema validation

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde_yaml::Value;
use thiserror::Error;

use super::{Author, Category};

/// A single violated frontmatter rule. Messages name the offending file so
/// content authors can find it from the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing or invalid title in {file}")]
    Title { file: String },

    #[error("missing or invalid description in {file}")]
    Description { file: String },

    #[error("missing date in {file}")]
    MissingDate { file: String },

    #[error("invalid date format in {file}, use YYYY-MM-DD")]
    InvalidDate { file: String },

    #[error("missing category in {file}")]
    MissingCategory { file: String },

    #[error("invalid category \"{value}\" in {file}, valid categories: {accepted}")]
    InvalidCategory {
        value: String,
        file: String,
        accepted: String,
    },

    #[error("tags must be a list of strings in {file}")]
    Tags { file: String },

    #[error("author must have a name field in {file}")]
    Author { file: String },
}

impl ValidationError {
    /// Which frontmatter field the rule belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Title { .. } => "title",
            ValidationError::Description { .. } => "description",
            ValidationError::MissingDate { .. } | ValidationError::InvalidDate { .. } => "date",
            ValidationError::MissingCategory { .. } | ValidationError::InvalidCategory { .. } => {
                "category"
            }
            ValidationError::Tags { .. } => "tags",
            ValidationError::Author { .. } => "author",
        }
    }
}

/// All rules violated by one raw metadata block. Every rule is checked
/// independently; nothing short-circuits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Frontmatter that passed every schema rule. Downstream code never touches
/// the raw key/value form.
#[derive(Debug, Clone)]
pub struct ValidFrontmatter {
    pub title: String,
    pub description: String,
    /// Date string exactly as authored
    pub date: String,
    pub date_parsed: NaiveDate,
    pub category: Category,
    pub tags: Vec<String>,
    pub author: Option<Author>,
}

/// Untyped key/value metadata decoded from a content file. Lives only for
/// the duration of one parse.
#[derive(Debug, Clone, Default)]
pub struct RawFrontmatter {
    mapping: serde_yaml::Mapping,
}

impl RawFrontmatter {
    /// Split a content file into its frontmatter block and body.
    ///
    /// The block is delimited by `---` lines at the top of the file. A file
    /// without a block yields an empty mapping, which then fails validation
    /// on every required field. A block that is not parseable YAML is an
    /// error here, caught at the parse boundary.
    pub fn split(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start_matches('\u{feff}');

        let Some(rest) = content.strip_prefix("---") else {
            return Ok((Self::default(), content));
        };
        let rest = rest.trim_start_matches(['\r', '\n']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing delimiter, treat the whole file as body
            return Ok((Self::default(), content));
        };

        let yaml_block = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\r', '\n']);

        if yaml_block.trim().is_empty() {
            return Ok((Self::default(), body));
        }

        let mapping: serde_yaml::Mapping = serde_yaml::from_str(yaml_block)
            .map_err(|e| anyhow!("malformed frontmatter: {}", e))?;

        Ok((Self { mapping }, body))
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.mapping.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Check every schema rule and collect all violations. Returns the typed
    /// frontmatter only when the error list is empty.
    pub fn validate(&self, file: &str) -> Result<ValidFrontmatter, ValidationReport> {
        let mut errors = Vec::new();

        // Required strings must be present, string-typed and non-empty
        let title = self
            .get_str("title")
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        if title.is_none() {
            errors.push(ValidationError::Title {
                file: file.to_string(),
            });
        }

        let description = self
            .get_str("description")
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        if description.is_none() {
            errors.push(ValidationError::Description {
                file: file.to_string(),
            });
        }

        let date = match self.get("date") {
            None => {
                errors.push(ValidationError::MissingDate {
                    file: file.to_string(),
                });
                None
            }
            Some(value) => match scalar_to_string(value)
                .and_then(|s| parse_date_string(&s).map(|parsed| (s, parsed)))
            {
                Some(pair) => Some(pair),
                None => {
                    errors.push(ValidationError::InvalidDate {
                        file: file.to_string(),
                    });
                    None
                }
            },
        };

        let category = match self.get("category") {
            None => {
                errors.push(ValidationError::MissingCategory {
                    file: file.to_string(),
                });
                None
            }
            Some(value) => {
                let raw = scalar_to_string(value).unwrap_or_default();
                match raw.parse::<Category>() {
                    Ok(category) => Some(category),
                    Err(()) => {
                        errors.push(ValidationError::InvalidCategory {
                            value: raw,
                            file: file.to_string(),
                            accepted: Category::accepted_values(),
                        });
                        None
                    }
                }
            }
        };

        let tags = match self.get("tags") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(seq)) => {
                let mut tags = Vec::with_capacity(seq.len());
                let mut all_scalars = true;
                for item in seq {
                    match scalar_to_string(item) {
                        Some(tag) => tags.push(tag),
                        None => all_scalars = false,
                    }
                }
                if !all_scalars {
                    errors.push(ValidationError::Tags {
                        file: file.to_string(),
                    });
                }
                tags
            }
            Some(_) => {
                errors.push(ValidationError::Tags {
                    file: file.to_string(),
                });
                Vec::new()
            }
        };

        let author = match self.get("author") {
            None | Some(Value::Null) => None,
            Some(Value::Mapping(map)) => {
                match map.get("name").and_then(Value::as_str) {
                    Some(name) => Some(Author {
                        name: name.to_string(),
                        url: map.get("url").and_then(Value::as_str).map(str::to_string),
                    }),
                    None => {
                        errors.push(ValidationError::Author {
                            file: file.to_string(),
                        });
                        None
                    }
                }
            }
            Some(_) => {
                errors.push(ValidationError::Author {
                    file: file.to_string(),
                });
                None
            }
        };

        match (title, description, date, category) {
            (Some(title), Some(description), Some((date, date_parsed)), Some(category))
                if errors.is_empty() =>
            {
                Ok(ValidFrontmatter {
                    title,
                    description,
                    date,
                    date_parsed,
                    category,
                    tags,
                    author,
                })
            }
            _ => Err(ValidationReport { errors }),
        }
    }
}

/// Render a scalar YAML value as a string. Mappings and sequences are not
/// scalars and yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a date string in the formats content authors actually use.
pub fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 with an offset
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
