//! # readme-html
//!
//! Turn an exported project page into a Markdown README.
//!
//! The page is expected to follow a fixed layout: a `#project-description`
//! block with the title and the `Resources`, `Learning Objectives` and
//! `Requirements` sections, followed by one card per task. The last card is
//! the page footer and is left out by default.
//!
//! ## Design
//!
//! Parsing is done once with `scraper`. Extraction walks the parsed page and
//! builds a [`readme_core::Readme`]; only the serializer in `readme-core`
//! knows Markdown syntax.
//!
//! - **Section lookups** are "first `h2` with text X" queries whose texts live
//!   in [`SectionHeadings`]
//! - **Task bodies** are dispatched over the closed [`BodyKind`] set, with
//!   nested lists as explicit recursion
//! - **Absence is tolerated**: a missing section is omitted, a missing title
//!   becomes a placeholder
//!
//! ## Example
//!
//! ```rust
//! use readme_html::ReadmeService;
//!
//! let html = r#"
//!     <div id="project-description"><h2>Shell, basics</h2></div>
//!     <div class="panel panel-default task-card">
//!       <h3 class="panel-title">0. Where am I?</h3>
//!       <div class="panel-body"><p>Print the working directory.</p></div>
//!     </div>
//!     <div class="panel panel-default task-card"><h3 class="panel-title">Done</h3></div>
//! "#;
//!
//! let service = ReadmeService::new();
//! let markdown = service.convert(html).unwrap();
//! assert!(markdown.contains("# Shell, basics"));
//! assert!(markdown.contains("  - [0. Where am I?](#subparagraph0)"));
//! assert!(markdown.contains("Print the working directory."));
//! ```

mod body;
pub mod html;
mod service;
mod utilities;

use std::path::PathBuf;

pub use body::{render_body, render_element, BodyKind};
pub use html::Page;
pub use service::{read_input, ExtractOptions, ReadmeService, SectionHeadings};
pub use utilities::*;

/// Error type for README generation
#[derive(Debug, thiserror::Error)]
pub enum ReadmeError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, ReadmeError>;
