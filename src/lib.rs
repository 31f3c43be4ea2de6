//! fresh-blog: a small static blog generator
//!
//! Posts live in an immutable [`content::PostRepository`], either the
//! compiled-in seed posts or a directory of markdown files. Each post body
//! goes through a minimal line-based markdown renderer that produces a flat
//! sequence of [`content::Block`]s, which the generator turns into static
//! HTML pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;

use anyhow::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use content::loader::PostLoader;
use content::PostRepository;

/// The blog application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
        })
    }

    /// The posts of this site
    ///
    /// Without a configured `posts_dir` this is the shared seed repository.
    pub fn repository(&self) -> Result<Cow<'static, PostRepository>> {
        match &self.config.posts_dir {
            Some(dir) => {
                let repo = PostLoader::new(self.base_dir.join(dir)).load()?;
                Ok(Cow::Owned(repo))
            }
            None => Ok(Cow::Borrowed(PostRepository::global())),
        }
    }

    /// Generate the static blog
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
