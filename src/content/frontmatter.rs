//! Front-matter parsing for file-backed posts

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer};

use super::post::{parse_date, DATE_FORMAT};

/// Output format for reformatted ISO dates, day without padding
const ISO_DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Accept either a single string or a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a tag or a list of tags")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut tags = Vec::new();
            while let Some(tag) = seq.next_element::<String>()? {
                tags.push(tag);
            }
            Ok(tags)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter of a post file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub image: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Split a `---` delimited YAML header from the body
    ///
    /// Content without a header yields the default front-matter and the
    /// whole input as body.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();
        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let (yaml, body) = match rest.strip_prefix("---") {
            // Empty header: the closing marker follows the opening one
            Some(body) => ("", body),
            None => {
                let Some(end_pos) = rest.find("\n---") else {
                    return Err(anyhow!("Unterminated front-matter"));
                };
                (&rest[..end_pos], &rest[end_pos + 4..])
            }
        };
        let body = body.trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml)
            .map_err(|e| anyhow!("Failed to parse front-matter: {}", e))?;
        Ok((fm, body))
    }

    /// The date in display form
    ///
    /// ISO dates (`2025-05-18`) are reformatted to the display format; any
    /// other value is kept as written.
    pub fn display_date(&self) -> Option<String> {
        let date = self.date.as_deref()?.trim();
        if parse_date(date, DATE_FORMAT).is_some() {
            return Some(date.to_string());
        }
        match parse_date(date, "%Y-%m-%d") {
            Some(d) => Some(d.format(ISO_DISPLAY_FORMAT).to_string()),
            None => Some(date.to_string()),
        }
    }
}
