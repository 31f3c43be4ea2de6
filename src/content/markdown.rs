//! Line-based markdown rendering into structured blocks
//!
//! This is a deliberately small renderer: it understands headings (levels
//! 1-3), paragraphs, flat `- ` lists, fenced code blocks and standalone
//! image lines. Inline markup (code spans, bold, links) is handled by three
//! sequential text substitutions with no escaping and no nesting.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Code fence marker
const FENCE: &str = "```";

/// List item marker
const LIST_MARKER: &str = "- ";

/// Heading markers, checked in order
const HEADINGS: [(u8, &str); 3] = [(1, "# "), (2, "## "), (3, "### ")];

lazy_static! {
    static ref IMAGE_RE: Regex = Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap();
    static ref CODE_SPAN_RE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
}

/// A rendered block element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Heading with level 1 to 3 and inline-rendered text
    Heading { level: u8, text: String },

    /// Paragraph with inline-rendered text
    Paragraph { text: String },

    /// Fenced code, lines joined with `\n`
    CodeBlock { lang: Option<String>, code: String },

    /// Flat list of inline-rendered items
    List { items: Vec<String> },

    /// Standalone image line
    Image { alt: String, src: String },
}

/// Render markdown-like text into an ordered sequence of blocks
///
/// Never fails: malformed image lines are dropped, unterminated code fences
/// are emitted with whatever they collected, and malformed inline markup is
/// left as literal text.
pub fn render(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.trim().lines().collect();
    let mut state = RenderState::default();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];
        cursor += 1;

        if let Some(rest) = line.strip_prefix(FENCE) {
            if state.in_code_block {
                state.close_code_block();
            } else {
                state.open_code_block(rest);
            }
            continue;
        }

        if state.in_code_block {
            state.code.push(line);
            continue;
        }

        if let Some((level, rest)) = heading(line) {
            state.flush_paragraph();
            state.blocks.push(Block::Heading {
                level,
                text: render_inline(rest),
            });
        } else if line.starts_with("![") {
            state.flush_paragraph();
            if let Some(caps) = IMAGE_RE.captures(line) {
                state.blocks.push(Block::Image {
                    alt: caps[1].to_string(),
                    src: caps[2].to_string(),
                });
            } else {
                tracing::debug!("Dropping malformed image line: {}", line);
            }
        } else if let Some(first) = line.strip_prefix(LIST_MARKER) {
            state.flush_paragraph();
            let mut items = vec![render_inline(first)];
            while let Some(item) = lines
                .get(cursor)
                .and_then(|next| next.strip_prefix(LIST_MARKER))
            {
                items.push(render_inline(item));
                cursor += 1;
            }
            state.blocks.push(Block::List { items });
        } else if line.trim().is_empty() {
            state.flush_paragraph();
        } else {
            state.paragraph.push(line.trim());
        }
    }

    state.finish()
}

/// Apply the inline passes: code spans, then bold, then links
///
/// The passes are plain global replacements run one after another, so
/// markup inside a code span is still rewritten by the later passes and
/// raw HTML in the input passes through untouched.
pub fn render_inline(text: &str) -> String {
    flag_code_span_markup(text);

    let text = CODE_SPAN_RE.replace_all(text, "<code>${1}</code>");
    let text = BOLD_RE.replace_all(&text, "<strong>${1}</strong>");
    let text = LINK_RE.replace_all(&text, r#"<a href="${2}">${1}</a>"#);
    text.into_owned()
}

/// Report code spans whose content the bold or link pass will rewrite
fn flag_code_span_markup(text: &str) {
    for caps in CODE_SPAN_RE.captures_iter(text) {
        let span = &caps[1];
        if BOLD_RE.is_match(span) || LINK_RE.is_match(span) {
            tracing::debug!("Inline markup inside code span will be rewritten: `{}`", span);
        }
    }
}

/// Match a heading line, returning its level and text
fn heading(line: &str) -> Option<(u8, &str)> {
    HEADINGS
        .iter()
        .find_map(|(level, marker)| line.strip_prefix(*marker).map(|rest| (*level, rest)))
}

/// Accumulators for a single render pass
#[derive(Default)]
struct RenderState<'a> {
    blocks: Vec<Block>,
    paragraph: Vec<&'a str>,
    in_code_block: bool,
    code: Vec<&'a str>,
    lang: Option<String>,
}

impl<'a> RenderState<'a> {
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        let text = text.trim();
        if !text.is_empty() {
            self.blocks.push(Block::Paragraph {
                text: render_inline(text),
            });
        }
        self.paragraph.clear();
    }

    fn open_code_block(&mut self, info: &str) {
        self.flush_paragraph();
        self.in_code_block = true;
        let info = info.trim();
        self.lang = (!info.is_empty()).then(|| info.to_string());
    }

    fn close_code_block(&mut self) {
        self.flush_code_block();
        self.in_code_block = false;
    }

    /// Emit the collected code lines; an empty block emits nothing
    fn flush_code_block(&mut self) {
        if self.code.is_empty() {
            self.lang = None;
            return;
        }
        self.blocks.push(Block::CodeBlock {
            lang: self.lang.take(),
            code: self.code.join("\n"),
        });
        self.code.clear();
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        self.flush_code_block();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_heading_then_paragraph() {
        let blocks = render("# Title\n\nSome text.");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 1,
                    text: "Title".to_string()
                },
                paragraph("Some text."),
            ]
        );
    }

    #[test]
    fn test_heading_levels() {
        let blocks = render("# One\n## Two\n### Three\n#### Four\n#NoSpace");
        assert_eq!(blocks.len(), 4);
        assert!(matches!(&blocks[0], Block::Heading { level: 1, text } if text == "One"));
        assert!(matches!(&blocks[1], Block::Heading { level: 2, text } if text == "Two"));
        assert!(matches!(&blocks[2], Block::Heading { level: 3, text } if text == "Three"));
        assert_eq!(blocks[3], paragraph("#### Four #NoSpace"));
    }

    #[test]
    fn test_heading_text_is_inline_rendered() {
        let blocks = render("## Using `fetch` safely");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 2,
                text: "Using <code>fetch</code> safely".to_string()
            }]
        );
    }

    #[test]
    fn test_bold() {
        let blocks = render("This is **bold** text.");
        assert_eq!(blocks, vec![paragraph("This is <strong>bold</strong> text.")]);
    }

    #[test]
    fn test_link_and_code() {
        let html = render_inline("See [docs](https://example.com) and `npm i`.");
        assert_eq!(
            html,
            r#"See <a href="https://example.com">docs</a> and <code>npm i</code>."#
        );
    }

    #[test]
    fn test_inline_passes_do_not_respect_code_spans() {
        assert_eq!(
            render_inline("`**not bold**`"),
            "<code><strong>not bold</strong></code>"
        );
        assert_eq!(
            render_inline("**[label](/x)**"),
            r#"<strong><a href="/x">label</a></strong>"#
        );
    }

    #[test]
    fn test_inline_leaves_malformed_markup_and_html_alone() {
        assert_eq!(render_inline("**open and `tick"), "**open and `tick");
        assert_eq!(render_inline("<em>raw</em> [x]"), "<em>raw</em> [x]");
    }

    #[test]
    fn test_paragraph_lines_are_joined() {
        let blocks = render("first line  \n   second line\n\nnext");
        assert_eq!(
            blocks,
            vec![paragraph("first line second line"), paragraph("next")]
        );
    }

    #[test]
    fn test_code_block_is_opaque() {
        let blocks = render("```\n# fake heading\n- not a list\n\n**kept**\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lang: None,
                code: "# fake heading\n- not a list\n\n**kept**".to_string()
            }]
        );
    }

    #[test]
    fn test_code_block_language_and_indent() {
        let blocks = render("Intro\n```javascript\nfunction f() {\n  return 1;\n}\n```\nAfter");
        assert_eq!(
            blocks,
            vec![
                paragraph("Intro"),
                Block::CodeBlock {
                    lang: Some("javascript".to_string()),
                    code: "function f() {\n  return 1;\n}".to_string()
                },
                paragraph("After"),
            ]
        );
    }

    #[test]
    fn test_empty_code_block_emits_nothing() {
        assert!(render("```rust\n```").is_empty());
    }

    #[test]
    fn test_unterminated_fence() {
        let blocks = render("Text\n```\nlet a = 1;\nlet b = 2;");
        assert_eq!(
            blocks,
            vec![
                paragraph("Text"),
                Block::CodeBlock {
                    lang: None,
                    code: "let a = 1;\nlet b = 2;".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_list_grouping() {
        let blocks = render("- one\n- two\n- three\n\nA paragraph.");
        assert_eq!(
            blocks,
            vec![
                Block::List {
                    items: vec!["one".to_string(), "two".to_string(), "three".to_string()]
                },
                paragraph("A paragraph."),
            ]
        );
    }

    #[test]
    fn test_list_stops_at_first_non_item_line() {
        let blocks = render("Lead in:\n- **a** first\n- b\nTrailing text");
        assert_eq!(
            blocks,
            vec![
                paragraph("Lead in:"),
                Block::List {
                    items: vec!["<strong>a</strong> first".to_string(), "b".to_string()]
                },
                paragraph("Trailing text"),
            ]
        );
    }

    #[test]
    fn test_image_line() {
        let blocks = render("Before\n![Alt text](/images/a.svg)\nAfter");
        assert_eq!(
            blocks,
            vec![
                paragraph("Before"),
                Block::Image {
                    alt: "Alt text".to_string(),
                    src: "/images/a.svg".to_string()
                },
                paragraph("After"),
            ]
        );
    }

    #[test]
    fn test_malformed_image_is_dropped() {
        let blocks = render("![broken](\n\nStill here");
        assert_eq!(blocks, vec![paragraph("Still here")]);
    }

    #[test]
    fn test_blank_input() {
        assert!(render("").is_empty());
        assert!(render("  \n\n \t\n").is_empty());
    }

    #[test]
    fn test_block_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Block::List {
            items: vec!["a".to_string()],
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"list","items":["a"]}"#);
    }
}
