//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    pub blog_dir: String,
    pub tag_dir: String,
    /// Markdown posts to load instead of the built-in ones
    pub posts_dir: Option<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Fresh Static Website".to_string(),
            description: "Insights, tutorials, and thoughts on modern web development, \
                          API security, and technology trends."
                .to_string(),

            url: "http://localhost:5876".to_string(),
            root: "/".to_string(),

            public_dir: "build".to_string(),
            blog_dir: "blog".to_string(),
            tag_dir: "tags".to_string(),
            posts_dir: None,

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
        assert_eq!(config.title, "Fresh Static Website");
        assert_eq!(config.public_dir, "build");
        assert_eq!(config.blog_dir, "blog");
        assert!(config.posts_dir.is_none());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
public_dir: out
posts_dir: posts
analytics: off
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.public_dir, "out");
        assert_eq!(config.posts_dir.as_deref(), Some("posts"));
        assert_eq!(config.tag_dir, "tags");
        assert!(config.extra.contains_key("analytics"));
    }
}
