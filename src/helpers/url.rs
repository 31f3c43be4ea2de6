//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/images/a.svg") // -> "/images/a.svg"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// URL of the blog listing
pub fn blog_url(config: &SiteConfig) -> String {
    url_for(config, &format!("{}/", config.blog_dir))
}

/// URL of a single post
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("{}/{}/", config.blog_dir, slug))
}

/// Absolute URL of a single post
pub fn permalink(config: &SiteConfig, slug: &str) -> String {
    format!("{}{}", config.url.trim_end_matches('/'), post_url(config, slug))
}

/// URL of a tag page; tag names are slugified
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    url_for(
        config,
        &format!("{}/{}/{}/", config.blog_dir, config.tag_dir, slug::slugify(tag)),
    )
}

/// Whether a reference points off-site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}
