//! List site content

use anyhow::Result;

use crate::content::PostRepository;
use crate::generator::tag_page_path;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let repo = site.repository()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", repo.len());
            for line in post_lines(&repo) {
                println!("  {}", line);
            }
        }
        "tag" | "tags" => {
            let tags = repo.tags();
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({}) {}", tag, count, tag_page_path(site, &tag));
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}

/// One line per post, newest first
fn post_lines(repo: &PostRepository) -> Vec<String> {
    repo.list_all()
        .iter()
        .map(|post| format!("{} - {} [{}]", post.date, post.title, post.slug))
        .collect()
}
