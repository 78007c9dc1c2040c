//! HTML parsing support.
//!
//! This module wraps the parsed project page and exposes the handful of
//! lookups the extractor needs: by id, by selector, by heading text, and
//! "next element after" in document order.

use scraper::{ElementRef, Html, Selector};

use crate::utilities::text_content;

/// Tag of the headings that introduce page sections
const SECTION_HEADING_TAG: &str = "h2";

/// A parsed, read-only project page.
///
/// # Example
///
/// ```rust
/// use readme_html::Page;
///
/// let page = Page::parse(r#"<h2>Resources</h2><ul><li>One</li></ul>"#);
/// let heading = page.section_heading("Resources").unwrap();
/// let list = page.find_next(heading, "ul").unwrap();
/// assert_eq!(list.value().name(), "ul");
/// ```
pub struct Page {
    document: Html,
}

impl Page {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Every element of the page in document order
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    /// Get the element with the given `id` attribute
    pub fn element_by_id(&self, id: &str) -> Option<ElementRef<'_>> {
        self.elements().find(|el| el.value().id() == Some(id))
    }

    /// Get all elements matching a selector
    pub fn select_all<'a>(&'a self, selector: &'a Selector) -> Vec<ElementRef<'a>> {
        self.document.select(selector).collect()
    }

    /// First section heading whose text is exactly `text`, whitespace included
    pub fn section_heading(&self, text: &str) -> Option<ElementRef<'_>> {
        self.elements().find(|el| {
            el.value().name() == SECTION_HEADING_TAG && text_content(*el) == text
        })
    }

    /// First element named `tag` that comes after `anchor` in document order.
    ///
    /// The anchor's own descendants count as "after" it.
    pub fn find_next<'a>(&'a self, anchor: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
        self.elements()
            .skip_while(|el| *el != anchor)
            .skip(1)
            .find(|el| el.value().name() == tag)
    }
}

/// First descendant of `element` named `tag`, `element` itself excluded
pub fn first_descendant<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
}
