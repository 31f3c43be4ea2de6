//! Helper functions for page generation
//!
//! URL building, HTML tags, and the mapping from rendered blocks to markup.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
