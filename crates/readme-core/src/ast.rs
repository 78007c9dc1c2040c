//! README Abstract Syntax Tree
//!
//! This module defines the nodes a project page is extracted into before it is
//! written out as Markdown. The HTML side only ever builds these values; all
//! Markdown syntax lives in the serializer.

/// The whole README, section by section, in output order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Readme {
    /// Project title (already trimmed, or a placeholder)
    pub title: String,

    /// `Resources` section, present only when the page has that heading
    pub resources: Option<Section<Link>>,

    /// `Learning Objectives` section
    pub learning_objectives: Option<Section<String>>,

    /// `Requirements` section
    pub requirements: Option<Section<String>>,

    /// Task cards, footer card already removed
    pub tasks: Vec<Task>,
}

/// A section introduced by a heading on the page.
///
/// `items` is `None` when the heading exists but no list follows it; the
/// section heading is still written in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub items: Option<Vec<T>>,
}

impl<T> Section<T> {
    pub fn new(items: Option<Vec<T>>) -> Self {
        Self { items }
    }

    /// A heading with nothing underneath it
    pub fn heading_only() -> Self {
        Self { items: None }
    }
}

/// A resource link with its resolved target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// One exercise card
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Title with its numeric prefix stripped
    pub title: String,
    /// Rendered body, empty when the card has no body container
    pub body: Vec<Block>,
}

impl Task {
    pub fn new(title: impl Into<String>, body: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}

/// A top-level node of a task body
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Paragraph; inline content is trimmed as a whole when written
    Paragraph(Vec<Inline>),

    /// Unordered list
    List(Vec<ListItem>),

    /// Fenced code block; `language` is empty when the page gives none
    CodeBlock { language: String, code: String },

    /// Bold text written inline, without a trailing newline
    Strong(String),

    /// Italic text written inline, without a trailing newline
    Emphasis(String),
}

/// A list item: its inline content in document order, nested lists included
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub content: Vec<Inline>,
}

impl ListItem {
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }
}

/// An inline node inside a paragraph or list item
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Text exactly as it appears on the page
    Text(String),

    /// Explicit `<br>`
    LineBreak,

    /// Inline element carried over as raw HTML (`<code>`, `<a>`, ...)
    Html(String),

    /// Nested unordered list, written one level deeper
    List(Vec<ListItem>),
}

impl Block {
    /// Check if this block writes nothing but whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            Block::Paragraph(inlines) => inlines.iter().all(|i| i.is_blank()),
            Block::List(items) => items.is_empty(),
            Block::CodeBlock { .. } => false,
            Block::Strong(_) | Block::Emphasis(_) => false,
        }
    }
}

impl Inline {
    /// Check if this inline is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Text(text) => text.trim().is_empty(),
            Inline::LineBreak => true,
            Inline::Html(html) => html.trim().is_empty(),
            Inline::List(items) => items.is_empty(),
        }
    }
}
