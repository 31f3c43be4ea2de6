//! Date helper functions

use crate::content::Post;

/// Generate a <time> element for a post date
///
/// Dates that do not parse are shown as written, without a `datetime`
/// attribute.
pub fn time_tag(post: &Post) -> String {
    let display = super::html_escape(&post.date);
    match post.published_on() {
        Some(date) => format!(
            r#"<time datetime="{}">{}</time>"#,
            date.format("%Y-%m-%d"),
            display
        ),
        None => format!("<time>{}</time>", display),
    }
}

/// ISO form of a post date, empty when it does not parse
pub fn iso_date(post: &Post) -> String {
    post.published_on()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_tag() {
        let post = Post::new("a", "A", "May 18, 2025");
        assert_eq!(
            time_tag(&post),
            r#"<time datetime="2025-05-18">May 18, 2025</time>"#
        );
        assert_eq!(iso_date(&post), "2025-05-18");
    }

    #[test]
    fn test_time_tag_unparseable() {
        let post = Post::new("a", "A", "Soon <ish>");
        assert_eq!(time_tag(&post), "<time>Soon &lt;ish&gt;</time>");
        assert_eq!(iso_date(&post), "");
    }
}
