//! Show a single rendered post

use anyhow::Result;

use crate::content::{render, PostRepository};
use crate::helpers::render_blocks;
use crate::Site;

/// Print one post as HTML, or its blocks as JSON
pub fn run(site: &Site, slug: &str, json: bool) -> Result<()> {
    let repo = site.repository()?;
    println!("{}", render_post(&repo, slug, json)?);
    Ok(())
}

/// Render the post with the given slug
pub fn render_post(repo: &PostRepository, slug: &str, json: bool) -> Result<String> {
    let Some(post) = repo.get_by_slug(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };

    let blocks = render(&post.content);
    tracing::debug!("Rendered {} into {} blocks", slug, blocks.len());

    if json {
        Ok(serde_json::to_string_pretty(&blocks)?)
    } else {
        Ok(render_blocks(&blocks))
    }
}
