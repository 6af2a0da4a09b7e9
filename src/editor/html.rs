// ABOUTME: HTML serialization and tolerant parsing for the editor's document model
// ABOUTME: Covers paragraphs, headings, lists, inline marks, and links; unknown tags keep their text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::document::{Block, BlockKind, Document, Marks, Run, Style, StyledChar};
use std::fmt::Write as _;

const NBSP: char = '\u{a0}';

/// Inline tags in nesting order, outermost first
const MARK_TAGS: [(Marks, &str); 5] = [
    (Marks::BOLD, "strong"),
    (Marks::ITALIC, "em"),
    (Marks::UNDERLINE, "u"),
    (Marks::STRIKE, "s"),
    (Marks::CODE, "code"),
];

/// Render the document. An empty document renders as `<p></p>`.
#[must_use]
pub fn to_html(document: &Document) -> String {
    let mut html = String::new();
    let mut open_list: Option<BlockKind> = None;

    for block in document.blocks() {
        let list = block.kind.is_list_item().then_some(block.kind);
        if open_list != list {
            if let Some(kind) = open_list {
                html.push_str(list_close(kind));
            }
            if let Some(kind) = list {
                html.push_str(list_open(kind));
            }
            open_list = list;
        }

        match block.kind {
            BlockKind::Paragraph => {
                html.push_str("<p>");
                write_runs(&mut html, block);
                html.push_str("</p>");
            }
            BlockKind::Heading(level) => {
                let _ = write!(html, "<h{level}>");
                write_runs(&mut html, block);
                let _ = write!(html, "</h{level}>");
            }
            BlockKind::BulletItem | BlockKind::OrderedItem => {
                html.push_str("<li><p>");
                write_runs(&mut html, block);
                html.push_str("</p></li>");
            }
        }
    }
    if let Some(kind) = open_list {
        html.push_str(list_close(kind));
    }
    html
}

const fn list_open(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::OrderedItem => "<ol>",
        _ => "<ul>",
    }
}

const fn list_close(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::OrderedItem => "</ol>",
        _ => "</ul>",
    }
}

fn write_runs(html: &mut String, block: &Block) {
    for Run { text, style } in block.runs() {
        if let Some(href) = &style.link {
            let _ = write!(
                html,
                r#"<a target="_blank" rel="noopener noreferrer nofollow" href="{}">"#,
                html_escape::encode_double_quoted_attribute(href)
            );
        }
        for (mark, tag) in MARK_TAGS {
            if style.marks.contains(mark) {
                let _ = write!(html, "<{tag}>");
            }
        }
        html.push_str(&encode_text(&text));
        for (mark, tag) in MARK_TAGS.iter().rev() {
            if style.marks.contains(*mark) {
                let _ = write!(html, "</{tag}>");
            }
        }
        if style.link.is_some() {
            html.push_str("</a>");
        }
    }
}

/// Escape text content, writing non-breaking spaces as `&nbsp;`
#[must_use]
pub fn encode_text(text: &str) -> String {
    html_escape::encode_text(text).replace(NBSP, "&nbsp;")
}

struct InlineTag {
    name: String,
    marks: Marks,
    link: Option<String>,
}

#[derive(Default)]
struct Parser {
    blocks: Vec<Block>,
    current: Option<Block>,
    lists: Vec<BlockKind>,
    in_item: bool,
    inline: Vec<InlineTag>,
}

impl Parser {
    fn style(&self) -> Style {
        self.inline.iter().fold(Style::default(), |mut style, tag| {
            style.marks |= tag.marks;
            if tag.link.is_some() {
                style.link.clone_from(&tag.link);
            }
            style
        })
    }

    fn item_kind(&self) -> BlockKind {
        self.lists.last().copied().unwrap_or(BlockKind::BulletItem)
    }

    fn finish_block(&mut self) {
        if let Some(block) = self.current.take() {
            self.blocks.push(block);
        }
    }

    fn start_block(&mut self, kind: BlockKind) {
        self.finish_block();
        self.current = Some(Block::new(kind));
    }

    fn text(&mut self, raw: &str) {
        let decoded = html_escape::decode_html_entities(raw);
        if self.current.is_none() {
            if decoded.trim().is_empty() {
                return;
            }
            let kind = if self.in_item {
                self.item_kind()
            } else {
                BlockKind::Paragraph
            };
            self.start_block(kind);
        }
        let style = self.style();
        if let Some(block) = self.current.as_mut() {
            block.chars.extend(decoded.chars().map(|ch| StyledChar {
                ch,
                style: style.clone(),
            }));
        }
    }

    fn open(&mut self, name: &str, attributes: &str) {
        match name {
            "p" => {
                let kind = if self.in_item {
                    self.item_kind()
                } else {
                    BlockKind::Paragraph
                };
                self.start_block(kind);
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name[1..].parse().unwrap_or(1);
                self.start_block(BlockKind::Heading(level));
            }
            "ul" => {
                self.finish_block();
                self.lists.push(BlockKind::BulletItem);
            }
            "ol" => {
                self.finish_block();
                self.lists.push(BlockKind::OrderedItem);
            }
            "li" => {
                self.finish_block();
                self.in_item = true;
            }
            _ => {
                let marks = match name {
                    "strong" | "b" => Marks::BOLD,
                    "em" | "i" => Marks::ITALIC,
                    "u" => Marks::UNDERLINE,
                    "s" | "strike" | "del" => Marks::STRIKE,
                    "code" => Marks::CODE,
                    _ => Marks::empty(),
                };
                let link = (name == "a").then(|| attribute(attributes, "href")).flatten();
                if !marks.is_empty() || link.is_some() {
                    self.inline.push(InlineTag {
                        name: name.to_owned(),
                        marks,
                        link,
                    });
                }
            }
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.finish_block(),
            "li" => {
                self.finish_block();
                self.in_item = false;
            }
            "ul" | "ol" => {
                self.finish_block();
                self.lists.pop();
            }
            _ => {
                if let Some(index) = self.inline.iter().rposition(|tag| tag.name == name) {
                    self.inline.remove(index);
                }
            }
        }
    }
}

/// Value of `name="..."` (or single-quoted) inside a tag's attribute text
fn attribute(attributes: &str, name: &str) -> Option<String> {
    let mut rest = attributes;
    while let Some(found) = rest.find(name) {
        let after = rest[found + name.len()..].trim_start();
        let preceded_ok = found == 0
            || rest[..found]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
        if preceded_ok {
            if let Some(value) = after.strip_prefix('=') {
                let value = value.trim_start();
                let quote = value.chars().next()?;
                let raw = if quote == '"' || quote == '\'' {
                    let body = &value[1..];
                    &body[..body.find(quote)?]
                } else {
                    value.split_whitespace().next()?
                };
                return Some(html_escape::decode_html_entities(raw).into_owned());
            }
        }
        rest = &rest[found + name.len()..];
    }
    None
}

/// Parse the supported HTML subset. Unknown tags are dropped and their text kept.
#[must_use]
pub fn from_html(html: &str) -> Document {
    let mut parser = Parser::default();
    let mut rest = html;

    while !rest.is_empty() {
        let Some(open) = rest.find('<') else {
            parser.text(rest);
            break;
        };
        if open > 0 {
            parser.text(&rest[..open]);
        }
        let tag_source = &rest[open + 1..];
        let Some(close) = tag_source.find('>') else {
            parser.text(&rest[open..]);
            break;
        };
        let tag = tag_source[..close].trim();
        rest = &tag_source[close + 1..];

        if tag.starts_with('!') || tag.starts_with('?') {
            continue;
        }
        let (closing, body) = tag
            .strip_prefix('/')
            .map_or((false, tag), |body| (true, body.trim_start()));
        let body = body.trim_end_matches('/').trim_end();
        let name_end = body
            .find(|c: char| c.is_whitespace())
            .unwrap_or(body.len());
        let name = body[..name_end].to_ascii_lowercase();
        let attributes = &body[name_end..];

        if closing {
            parser.close(&name);
        } else {
            parser.open(&name, attributes);
        }
    }

    parser.finish_block();
    Document::from_blocks(parser.blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_empty_paragraph() {
        assert_eq!(to_html(&Document::default()), "<p></p>");
        assert!(from_html("").is_empty());
        assert!(from_html("<p></p>").is_empty());
    }

    #[test]
    fn test_nbsp_round_trips_as_entity() {
        let doc = from_html("<p>a&nbsp; b</p>");
        assert_eq!(doc.blocks()[0].text(), "a\u{a0} b");
        assert_eq!(to_html(&doc), "<p>a&nbsp; b</p>");
    }

    #[test]
    fn test_lists_group_items() {
        let html = "<ul><li><p>Flour</p></li><li><p>Milk</p></li></ul><ol><li><p>Mix</p></li></ol>";
        let doc = from_html(html);
        assert_eq!(doc.blocks().len(), 3);
        assert_eq!(doc.blocks()[0].kind, BlockKind::BulletItem);
        assert_eq!(doc.blocks()[2].kind, BlockKind::OrderedItem);
        assert_eq!(to_html(&doc), html);
    }

    #[test]
    fn test_unknown_tags_keep_text() {
        let doc = from_html("<div><p>Hello <span class=\"x\">world</span></p></div>");
        assert_eq!(doc.text(), "Hello world");
    }

    #[test]
    fn test_marks_and_links() {
        let html = r#"<p><strong>Bold</strong> and <a target="_blank" rel="noopener noreferrer nofollow" href="https://example.com/?a=1&amp;b=2">link</a></p>"#;
        let doc = from_html(html);
        let runs = doc.blocks()[0].runs();
        assert_eq!(runs[0].style.marks, Marks::BOLD);
        assert_eq!(runs[2].style.link.as_deref(), Some("https://example.com/?a=1&b=2"));
        assert_eq!(to_html(&doc), html);
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = from_html("<p>1 &lt; 2 &amp; 3</p>");
        assert_eq!(doc.text(), "1 < 2 & 3");
        assert_eq!(to_html(&doc), "<p>1 &lt; 2 &amp; 3</p>");
    }
}
