//! HTML helper functions
//!
//! Maps rendered blocks to markup and builds the small tags shared by the
//! generated pages.

use super::url::{is_external, tag_url, url_for};
use crate::config::SiteConfig;
use crate::content::Block;

/// Render a block sequence to HTML
///
/// Inline-rendered text already is markup and is inserted as is. Code and
/// image attributes are escaped; image sources are kept as written.
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single block to HTML
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
        Block::Paragraph { text } => format!("<p>{}</p>", text),
        Block::CodeBlock { lang, code } => match lang {
            Some(lang) => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                html_escape(lang),
                html_escape(code)
            ),
            None => format!("<pre><code>{}</code></pre>", html_escape(code)),
        },
        Block::List { items } => {
            let mut html = String::from("<ul>");
            for item in items {
                html.push_str(&format!("<li>{}</li>", item));
            }
            html.push_str("</ul>");
            html
        }
        Block::Image { alt, src } => format!(
            r#"<img src="{}" alt="{}">"#,
            html_escape(src),
            html_escape(alt)
        ),
    }
}

/// Generate an anchor tag with escaped text
pub fn link_to(href: &str, text: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, html_escape(href), html_escape(text))
}

/// Generate an image tag for a site asset, resolved against the site root
///
/// # Examples
/// ```ignore
/// image_tag(&config, "/images/photo.svg", Some("My Photo"))
/// ```
pub fn image_tag(config: &SiteConfig, path: &str, alt: Option<&str>) -> String {
    let src = if is_external(path) {
        path.to_string()
    } else {
        url_for(config, path)
    };

    format!(
        r#"<img src="{}" alt="{}">"#,
        html_escape(&src),
        html_escape(alt.unwrap_or(""))
    )
}

/// Generate the tag badges of a post, each linking to its tag page
pub fn tag_list(config: &SiteConfig, tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<ul class="tags">"#);
    for tag in tags {
        html.push_str(&format!("<li>{}</li>", link_to(&tag_url(config, tag), tag)));
    }
    html.push_str("</ul>");
    html
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
