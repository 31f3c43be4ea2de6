//! Generator module - writes the static blog pages

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::content::{render, Post, PostRepository};
use crate::helpers::{
    blog_url, html_escape, image_tag, iso_date, link_to, permalink, post_url, render_blocks,
    tag_list, tag_url, time_tag, url_for,
};
use crate::Site;

/// Static blog generator
pub struct Generator {
    site: Site,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self { site: site.clone() }
    }

    /// Generate the entire blog
    pub fn generate(&self, repo: &PostRepository) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        let posts = repo.list_all();

        self.generate_blog_index(&posts)?;
        self.generate_post_pages(repo, &posts)?;
        self.generate_tag_pages(repo)?;
        self.generate_not_found_page()?;
        self.generate_search_index(&posts)?;

        Ok(())
    }

    /// Blog listing, newest first
    fn generate_blog_index(&self, posts: &[&Post]) -> Result<()> {
        let config = &self.site.config;
        let mut body = format!(
            "<h1>Blog</h1>\n<p>{}</p>\n",
            html_escape(&config.description)
        );
        for post in posts {
            body.push_str(&self.post_card(post));
        }

        let html = self.layout(&format!("Blog | {}", config.title), &body);
        self.write_page(&Path::new(&config.blog_dir).join("index.html"), &html)?;
        tracing::info!("Generated blog index with {} posts", posts.len());
        Ok(())
    }

    /// One page per post
    fn generate_post_pages(&self, repo: &PostRepository, posts: &[&Post]) -> Result<()> {
        let config = &self.site.config;

        for post in posts {
            let blocks = render(&post.content);
            let (older, newer) = repo.neighbors(&post.slug);
            let back = format!(
                r#"<a class="back" href="{}">Back to Blog</a>"#,
                blog_url(config)
            );

            let mut body = String::from("<article class=\"post\">\n");
            body.push_str(&back);
            body.push('\n');
            body.push_str(&tag_list(config, &post.tags));
            body.push_str(&format!("\n<h1>{}</h1>\n", html_escape(&post.title)));
            body.push_str(&time_tag(post));
            body.push_str("\n<div class=\"content\">\n");
            body.push_str(&render_blocks(&blocks));
            body.push_str("\n</div>\n<nav class=\"post-nav\">");
            if let Some(newer) = newer {
                body.push_str(&link_to(&post_url(config, &newer.slug), &newer.title));
            }
            if let Some(older) = older {
                body.push_str(&link_to(&post_url(config, &older.slug), &older.title));
            }
            body.push_str("</nav>\n");
            body.push_str(&back);
            body.push_str("\n</article>\n");

            let html = self.layout(&format!("{} | {}", post.title, config.title), &body);
            let output_path = Path::new(&config.blog_dir)
                .join(&post.slug)
                .join("index.html");
            self.write_page(&output_path, &html)?;
            tracing::debug!("Generated post: {:?}", output_path);
        }

        tracing::info!("Generated {} post pages", posts.len());
        Ok(())
    }

    /// One page per tag, posts in repository order
    fn generate_tag_pages(&self, repo: &PostRepository) -> Result<()> {
        let config = &self.site.config;
        let mut written = HashSet::new();

        for (tag, _) in repo.tags() {
            let tag_slug = slug::slugify(&tag);
            if tag_slug.is_empty() {
                continue;
            }
            if !written.insert(tag_slug.clone()) {
                tracing::warn!("Tag {:?} maps to an existing tag page, skipping", tag);
                continue;
            }

            let mut body = format!("<h1>Posts tagged {}</h1>\n", html_escape(&tag));
            for post in repo.get_by_tag(&tag) {
                body.push_str(&self.post_card(post));
            }

            let html = self.layout(&format!("{} | {}", tag, config.title), &body);
            let output_path = Path::new(&config.blog_dir)
                .join(&config.tag_dir)
                .join(&tag_slug)
                .join("index.html");
            self.write_page(&output_path, &html)?;
        }

        tracing::info!("Generated {} tag pages", written.len());
        Ok(())
    }

    /// Page served for unknown posts
    fn generate_not_found_page(&self) -> Result<()> {
        let config = &self.site.config;
        let body = format!(
            "<h1>Post Not Found</h1>\n<p>The article you are looking for does not exist.</p>\n{}\n",
            link_to(&blog_url(config), "Back to Blog")
        );
        let html = self.layout(&format!("Post Not Found | {}", config.title), &body);
        self.write_page(Path::new("404.html"), &html)
    }

    /// Search index (JSON)
    fn generate_search_index(&self, posts: &[&Post]) -> Result<()> {
        let config = &self.site.config;
        let search_data: Vec<serde_json::Value> = posts
            .iter()
            .map(|p| {
                serde_json::json!({
                    "title": p.title,
                    "url": post_url(config, &p.slug),
                    "permalink": permalink(config, &p.slug),
                    "date": iso_date(p),
                    "tags": p.tags,
                    "excerpt": p.excerpt,
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&search_data)?;
        self.write_page(&Path::new(&config.blog_dir).join("search.json"), &json)?;
        tracing::info!("Generated search.json");
        Ok(())
    }

    /// Listing entry for a post
    fn post_card(&self, post: &Post) -> String {
        let config = &self.site.config;
        let url = post_url(config, &post.slug);

        let mut html = String::from("<article class=\"post-card\">\n");
        if let Some(image) = &post.image {
            html.push_str(&image_tag(config, image, Some(&post.title)));
            html.push('\n');
        }
        html.push_str(&tag_list(config, &post.tags));
        html.push_str(&format!("\n<h2>{}</h2>\n", link_to(&url, &post.title)));
        html.push_str(&time_tag(post));
        html.push_str(&format!("\n<p>{}</p>\n", html_escape(&post.excerpt)));
        html.push_str(&link_to(&url, "Read full article"));
        html.push_str("\n</article>\n");
        html
    }

    /// Wrap a page body in the shared layout
    fn layout(&self, title: &str, body: &str) -> String {
        let config = &self.site.config;
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{}</title>
</head>
<body>
<header>{} <nav>{}</nav></header>
<main>
{}</main>
</body>
</html>
"#,
            html_escape(title),
            link_to(&url_for(config, "/"), &config.title),
            link_to(&blog_url(config), "Blog"),
            body
        )
    }

    /// Write a file below the public directory
    fn write_page(&self, relative: &Path, content: &str) -> Result<()> {
        let output_path = self.site.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        Ok(())
    }
}

/// Path of a tag page relative to the site root, for logging and listings
pub fn tag_page_path(site: &Site, tag: &str) -> String {
    tag_url(&site.config, tag)
}
