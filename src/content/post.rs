//! Post model

use chrono::NaiveDate;
use serde::Serialize;

/// Display format of post dates, e.g. "May 18, 2025"
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Unique identifier, also the URL segment
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date as displayed
    pub date: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Raw markdown content
    pub content: String,

    /// Cover image reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Post tags
    pub tags: Vec<String>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(slug: &str, title: &str, date: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            excerpt: String::new(),
            content: String::new(),
            image: None,
            tags: Vec::new(),
        }
    }

    /// Parse the display date, if it is in the expected format
    pub fn published_on(&self) -> Option<NaiveDate> {
        parse_date(&self.date, DATE_FORMAT)
    }

    /// Whether the post carries the given tag (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parse a display date with a chrono format string
///
/// Surrounding whitespace is ignored and a missing leading zero on the day
/// is accepted ("May 5, 2025").
pub fn parse_date(date: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), format).ok()
}
