//! In-memory post repository
//!
//! The collection is built once and never mutated, so a repository can be
//! shared freely between threads.

use lazy_static::lazy_static;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::Post;

/// Errors raised while building a repository
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Duplicate post slug: {slug}")]
    DuplicateSlug { slug: String },
}

lazy_static! {
    static ref SEED: PostRepository = PostRepository::seed();
}

/// Read-only collection of posts in insertion order
#[derive(Debug, Clone, Default)]
pub struct PostRepository {
    posts: Vec<Post>,
}

impl PostRepository {
    /// Build a repository, rejecting duplicate slugs
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(RepositoryError::DuplicateSlug {
                    slug: post.slug.clone(),
                });
            }
        }
        Ok(Self { posts })
    }

    /// The compiled-in posts
    pub fn seed() -> Self {
        Self {
            posts: seed_posts(),
        }
    }

    /// Shared seed repository, built on first use
    pub fn global() -> &'static PostRepository {
        &SEED
    }

    /// All posts, newest first
    ///
    /// Posts with equal dates keep their insertion order. Posts whose date
    /// cannot be parsed come last.
    pub fn list_all(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by_cached_key(|p| Reverse(p.published_on()));
        posts
    }

    /// Look up a post by its exact slug
    pub fn get_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Posts carrying the given tag, in insertion order
    pub fn get_by_tag(&self, tag: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Distinct tags with the number of posts using them, most used first
    pub fn tags(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for post in &self.posts {
            let unique: HashSet<&str> = post.tags.iter().map(String::as_str).collect();
            for tag in unique {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let mut tags: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        tags
    }

    /// The older and newer posts around `slug` in `list_all` order
    pub fn neighbors(&self, slug: &str) -> (Option<&Post>, Option<&Post>) {
        let posts = self.list_all();
        let Some(pos) = posts.iter().position(|p| p.slug == slug) else {
            return (None, None);
        };
        let older = posts.get(pos + 1).copied();
        let newer = pos.checked_sub(1).and_then(|i| posts.get(i).copied());
        (older, newer)
    }

    /// Posts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            slug: "react-api-best-practices".to_string(),
            title: "Best Practices for Using APIs in React Applications".to_string(),
            date: "May 18, 2025".to_string(),
            excerpt: "Discover essential patterns and techniques for efficiently integrating APIs \
                      into your React applications while maintaining clean, maintainable code."
                .to_string(),
            content: include_str!("seed/react-api-best-practices.md").to_string(),
            image: Some("/images/react-api.svg".to_string()),
            tags: tags(&["React", "API", "Frontend", "Best Practices"]),
        },
        Post {
            slug: "securing-apis-best-practices".to_string(),
            title: "Securing APIs: Essential Best Practices for Modern Web Development"
                .to_string(),
            date: "May 15, 2025".to_string(),
            excerpt: "Learn the fundamental security practices every developer should implement \
                      when building and maintaining APIs in production environments."
                .to_string(),
            content: include_str!("seed/securing-apis-best-practices.md").to_string(),
            image: Some("/images/api-security.svg".to_string()),
            tags: tags(&["API", "Security", "Web Development", "Best Practices"]),
        },
    ]
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}
