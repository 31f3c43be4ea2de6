//! Content loader - builds a post repository from a directory of markdown files

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, Post, PostRepository};

/// Loads posts from a posts directory
pub struct PostLoader {
    posts_dir: PathBuf,
}

impl PostLoader {
    /// Create a new loader for the given directory
    pub fn new<P: AsRef<Path>>(posts_dir: P) -> Self {
        Self {
            posts_dir: posts_dir.as_ref().to_path_buf(),
        }
    }

    /// Load all posts into a repository
    ///
    /// Files that cannot be read or parsed are skipped with a warning.
    /// Duplicate slugs are an error.
    pub fn load(&self) -> Result<PostRepository> {
        if !self.posts_dir.exists() {
            anyhow::bail!("Posts directory not found: {:?}", self.posts_dir);
        }

        let mut posts = Vec::new();

        // Sorted walk keeps insertion order independent of the file system
        for entry in WalkDir::new(&self.posts_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.posts_dir);
        Ok(PostRepository::from_posts(posts)?)
    }
}

/// Load a single post from a file
fn load_post(path: &Path) -> Result<Post> {
    let content = fs::read_to_string(path)?;
    let (fm, body) = FrontMatter::parse(&content)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let date = fm.display_date().unwrap_or_default();
    if date.is_empty() {
        tracing::warn!("Post {:?} has no date, it will be listed last", path);
    }

    let slug = fm.slug.unwrap_or_else(|| stem.clone());
    if !is_valid_slug(&slug) {
        anyhow::bail!("Invalid slug {:?}", slug);
    }

    Ok(Post {
        slug,
        title: fm.title.unwrap_or(stem),
        date,
        excerpt: fm.excerpt.unwrap_or_default(),
        content: body.to_string(),
        image: fm.image,
        tags: fm.tags,
    })
}

/// A slug must name exactly one path segment below the blog directory
fn is_valid_slug(slug: &str) -> bool {
    !slug.trim().is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RepositoryError;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_posts_dir() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "older.md",
            "---\ntitle: Older\ndate: May 1, 2025\ntags: [API]\n---\n# Older\n",
        );
        write(
            dir.path(),
            "newer.markdown",
            "---\nslug: brand-new\ntitle: Newer\ndate: 2025-06-02\nexcerpt: Fresh\n---\nText\n",
        );
        write(dir.path(), "notes.txt", "ignored");
        write(dir.path(), "broken.md", "---\ntitle: [unclosed\n---\nBody\n");

        let repo = PostLoader::new(dir.path()).load().unwrap();
        assert_eq!(repo.len(), 2);

        let newer = repo.get_by_slug("brand-new").unwrap();
        assert_eq!(newer.date, "June 2, 2025");
        assert_eq!(newer.excerpt, "Fresh");

        let older = repo.get_by_slug("older").unwrap();
        assert_eq!(older.title, "Older");
        assert_eq!(older.tags, vec!["API"]);
        assert_eq!(older.content, "# Older\n");

        let slugs: Vec<_> = repo.list_all().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["brand-new", "older"]);
    }

    #[test]
    fn test_duplicate_slug_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.md", "---\nslug: same\ntitle: A\n---\n");
        write(dir.path(), "b.md", "---\nslug: same\ntitle: B\n---\n");

        let err = PostLoader::new(dir.path()).load().unwrap_err();
        assert_eq!(
            err.downcast_ref::<RepositoryError>(),
            Some(&RepositoryError::DuplicateSlug {
                slug: "same".to_string()
            })
        );
    }

    #[test]
    fn test_empty_frontmatter_header() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "bare.md", "---\n---\nBody text\n");

        let repo = PostLoader::new(dir.path()).load().unwrap();
        let post = repo.get_by_slug("bare").unwrap();
        assert_eq!(post.title, "bare");
        assert_eq!(post.content, "Body text\n");
    }

    #[test]
    fn test_unsafe_slugs_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "escape.md", "---\nslug: ../../escaped\ntitle: Escape\n---\nBody\n");
        write(dir.path(), "empty.md", "---\nslug: \"\"\ntitle: Empty\n---\nBody\n");
        write(dir.path(), "dot.md", "---\nslug: \"..\"\ntitle: Dot\n---\nBody\n");
        write(dir.path(), "backslash.md", "---\nslug: a\\b\ntitle: Win\n---\nBody\n");
        write(dir.path(), "kept.md", "---\ntitle: Kept\n---\nBody\n");

        let repo = PostLoader::new(dir.path()).load().unwrap();
        let slugs: Vec<_> = repo.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["kept"]);
    }

    #[test]
    fn test_valid_slug() {
        assert!(is_valid_slug("react-api-best-practices"));
        assert!(is_valid_slug("v1.2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("  "));
        assert!(!is_valid_slug(".."));
        assert!(!is_valid_slug("../x"));
        assert!(!is_valid_slug("a/b"));
        assert!(!is_valid_slug("a\\b"));
    }

    #[test]
    fn test_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(PostLoader::new(dir.path().join("nope")).load().is_err());
    }
}
