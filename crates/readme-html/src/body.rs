//! Task body rendering.
//!
//! A task body is rendered from its direct element children only. Each child
//! is classified into a [`BodyKind`]; anything outside that set is dropped.
//! Content nested inside a paragraph or list item is carried over inline and
//! never dispatched again, except nested lists which recurse.

use readme_core::{Block, Inline, ListItem};
use scraper::{ElementRef, Node};

use crate::html::first_descendant;
use crate::utilities::{code_language, stripped_text, text_content};

/// The node kinds a task body is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// `<p>`
    Paragraph,
    /// `<ul>`
    List,
    /// `<pre>` wrapping a `<code>`
    CodeBlock,
    /// `<strong>`
    Strong,
    /// `<em>`
    Emphasis,
}

impl BodyKind {
    /// Classify an element by tag name
    pub fn of(element: &ElementRef) -> Option<Self> {
        match element.value().name() {
            "p" => Some(BodyKind::Paragraph),
            "ul" => Some(BodyKind::List),
            "pre" => Some(BodyKind::CodeBlock),
            "strong" => Some(BodyKind::Strong),
            "em" => Some(BodyKind::Emphasis),
            _ => None,
        }
    }
}

/// Render the direct children of a task body container, in document order
pub fn render_body(body: ElementRef) -> Vec<Block> {
    body.children()
        .filter_map(ElementRef::wrap)
        .filter_map(render_element)
        .collect()
}

/// Render one body element; `None` when it contributes nothing
pub fn render_element(element: ElementRef) -> Option<Block> {
    match BodyKind::of(&element)? {
        BodyKind::Paragraph => Some(Block::Paragraph(collect_inlines(
            element,
            BodyKind::Paragraph,
        ))),
        BodyKind::List => Some(Block::List(collect_list_items(element))),
        BodyKind::CodeBlock => {
            let code = first_descendant(element, "code")?;
            Some(Block::CodeBlock {
                language: code_language(code.value().attr("class")),
                code: text_content(code),
            })
        }
        BodyKind::Strong => Some(Block::Strong(stripped_text(element))),
        BodyKind::Emphasis => Some(Block::Emphasis(stripped_text(element))),
    }
}

/// Collect the direct `li` children of a list
fn collect_list_items(list: ElementRef) -> Vec<ListItem> {
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li")
        .map(|li| ListItem::new(collect_inlines(li, BodyKind::List)))
        .collect()
}

/// Collect inline content of a paragraph or list item.
///
/// Paragraphs turn `<br>` into a line break; list items turn a nested `<ul>`
/// into a nested list. Every other element is kept as HTML.
fn collect_inlines(element: ElementRef, container: BodyKind) -> Vec<Inline> {
    let mut inlines = Vec::new();

    for child in element.children() {
        match child.value() {
            Node::Text(text) => inlines.push(Inline::Text(String::from(&**text))),
            // Comment bodies are joined like text, delimiters dropped
            Node::Comment(comment) => inlines.push(Inline::Text(String::from(&**comment))),
            Node::Element(_) => {
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                let inline = match (container, child_element.value().name()) {
                    (BodyKind::Paragraph, "br") => Inline::LineBreak,
                    (BodyKind::List, "ul") => Inline::List(collect_list_items(child_element)),
                    _ => Inline::Html(child_element.html()),
                };
                inlines.push(inline);
            }
            _ => {}
        }
    }

    inlines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use readme_core::{serialize_blocks, Options};
    use scraper::{Html, Selector};

    fn render(html: &str) -> String {
        let document = Html::parse_document(&format!(r#"<div class="panel-body">{html}</div>"#));
        let selector = Selector::parse("div.panel-body").unwrap();
        let body = document.select(&selector).next().unwrap();
        serialize_blocks(&render_body(body), &Options::default())
    }

    #[test]
    fn test_body_kind() {
        let document = Html::parse_fragment("<p>a</p><div>b</div>");
        let p = document.select(&Selector::parse("p").unwrap()).next().unwrap();
        let div = document.select(&Selector::parse("div").unwrap()).next().unwrap();
        assert_eq!(BodyKind::of(&p), Some(BodyKind::Paragraph));
        assert_eq!(BodyKind::of(&div), None);
    }

    #[test]
    fn test_paragraph_line_breaks() {
        assert_eq!(render("<p>\n  Line one<br>Line two\n</p>"), "Line one\nLine two\n\n");
    }

    #[test]
    fn test_paragraph_keeps_inline_markup() {
        assert_eq!(
            render("<p>Compile with <code>gcc</code> now</p>"),
            "Compile with <code>gcc</code> now\n\n"
        );
    }

    #[test]
    fn test_comment_text_joined() {
        assert_eq!(render("<p>a<!-- hidden -->b</p>"), "a hidden b\n\n");
        assert_eq!(render("<ul><li>x<!--y--></li></ul>"), "* xy\n\n");
    }

    #[test]
    fn test_list_nested_indentation() {
        let html = "<ul><li>Parent<ul><li>Child</li><li>Other</li></ul></li><li>Next</li></ul>";
        assert_eq!(render(html), "* Parent\n  * Child\n  * Other\n* Next\n\n");
    }

    #[test]
    fn test_list_item_line_break_stays_html() {
        assert_eq!(render("<ul><li>a<br>b</li></ul>"), "* a<br>b\n\n");
    }

    #[test]
    fn test_code_block_language() {
        assert_eq!(
            render(r#"<pre><code class="language-python">print(1)</code></pre>"#),
            "```python\nprint(1)\n```\n\n"
        );
    }

    #[test]
    fn test_code_block_keeps_inner_text() {
        let html = "<pre><code>\n$ cat main.c\n#include &lt;stdio.h&gt;\n</code></pre>";
        assert_eq!(render(html), "```\n$ cat main.c\n#include <stdio.h>\n```\n\n");
    }

    #[test]
    fn test_pre_without_code_is_dropped() {
        assert_eq!(render("<pre>raw</pre><p>after</p>"), "after\n\n");
    }

    #[test]
    fn test_inline_emphasis() {
        assert_eq!(
            render("<strong> Note: </strong><em> mandatory </em><p>x</p>"),
            "**Note:***mandatory*x\n\n"
        );
    }

    #[test]
    fn test_other_elements_ignored() {
        assert_eq!(render("<div><p>inside</p></div><h4>Repo</h4><p>kept</p>"), "kept\n\n");
    }
}
