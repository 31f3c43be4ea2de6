//! Content module - posts, the post repository, and markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod repository;

pub use frontmatter::FrontMatter;
pub use markdown::{render, render_inline, Block};
pub use post::{parse_date, Post, DATE_FORMAT};
pub use repository::{PostRepository, RepositoryError};
