//! readme-core - README AST and serialization
//!
//! This crate provides the document model a project page is extracted into,
//! and the serializer that turns it into a Markdown README. It knows nothing
//! about HTML; `readme-html` builds the AST from a parsed page.
//!
//! # Architecture
//!
//! ```text
//! HTML page ──readme-html──▶ ┌────────────┐
//!                            │ README AST │ ──serialize──▶ Markdown String
//!                            └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use readme_core::{serialize, Block, Inline, Options, Readme, Task};
//!
//! let readme = Readme {
//!     title: "C - Hello, World".to_string(),
//!     tasks: vec![Task::new(
//!         "Preprocessor",
//!         vec![Block::Paragraph(vec![Inline::Text("Write a script.".to_string())])],
//!     )],
//!     ..Default::default()
//! };
//!
//! let markdown = serialize(&readme, &Options::default());
//! assert!(markdown.contains("### 0. Preprocessor <a name='subparagraph0'></a>"));
//! ```

mod ast;
mod options;
mod serialize;

pub use ast::{Block, Inline, Link, ListItem, Readme, Section, Task};
pub use options::{Options, DEFAULT_AUTHOR, DEFAULT_BANNER};
pub use serialize::{serialize, serialize_blocks};
