//! ReadmeService - the main entry point for project page to README conversion.

use std::io::ErrorKind;
use std::path::Path;

use readme_core::{serialize, Block, Link, Options, Readme, Section, Task};
use scraper::{ElementRef, Selector};
use tracing::{debug, info, warn};

use crate::body::render_body;
use crate::html::{first_descendant, Page};
use crate::utilities::{resolve_href, strip_title_prefix, stripped_text, text_content};
use crate::{ReadmeError, Result};

/// Texts of the headings that introduce the optional sections
#[derive(Debug, Clone)]
pub struct SectionHeadings {
    pub resources: String,
    pub learning_objectives: String,
    pub requirements: String,
}

impl Default for SectionHeadings {
    fn default() -> Self {
        Self {
            resources: "Resources".to_string(),
            learning_objectives: "Learning Objectives".to_string(),
            requirements: "Requirements".to_string(),
        }
    }
}

/// Where things are found on the project page
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// `id` of the element holding the project title
    pub project_description_id: String,

    /// Selector of a task card candidate
    pub task_card_selector: String,

    /// Exact `class` value of a task card: same classes, same order, no others
    pub task_card_class: String,

    /// Selector of a card's title, relative to the card
    pub task_title_selector: String,

    /// Selector of a card's body, relative to the card
    pub task_body_selector: String,

    /// Section heading texts
    pub headings: SectionHeadings,

    /// Title used when the page has none
    pub placeholder_title: String,

    /// Treat the last card as a footer and leave it out
    pub drop_last_card: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            project_description_id: "project-description".to_string(),
            task_card_selector: "div".to_string(),
            task_card_class: "panel panel-default task-card".to_string(),
            task_title_selector: "h3.panel-title".to_string(),
            task_body_selector: "div.panel-body".to_string(),
            headings: SectionHeadings::default(),
            placeholder_title: "Project title (to be replaced)".to_string(),
            drop_last_card: true,
        }
    }
}

/// Compiled selectors for one conversion
struct Selectors {
    card: Selector,
    title: Selector,
    body: Selector,
    item: Selector,
    link: Selector,
}

impl Selectors {
    fn compile(options: &ExtractOptions) -> Result<Self> {
        Ok(Self {
            card: parse_selector(&options.task_card_selector)?,
            title: parse_selector(&options.task_title_selector)?,
            body: parse_selector(&options.task_body_selector)?,
            item: parse_selector("li")?,
            link: parse_selector("a")?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ReadmeError::InvalidSelector(format!("`{selector}`: {e:?}")))
}

/// The main service for converting a project page to a README
pub struct ReadmeService {
    extract: ExtractOptions,
    options: Options,
}

impl ReadmeService {
    /// Create a new ReadmeService with default options
    pub fn new() -> Self {
        Self {
            extract: ExtractOptions::default(),
            options: Options::default(),
        }
    }

    /// Create a ReadmeService with custom options
    pub fn with_options(extract: ExtractOptions, options: Options) -> Self {
        Self { extract, options }
    }

    /// Get the serialization options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to serialization options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Get the extraction options
    pub fn extract_options(&self) -> &ExtractOptions {
        &self.extract
    }

    /// Get mutable access to extraction options
    pub fn extract_options_mut(&mut self) -> &mut ExtractOptions {
        &mut self.extract
    }

    /// Convert page HTML to README Markdown
    pub fn convert(&self, html: &str) -> Result<String> {
        let page = Page::parse(html);
        let readme = self.extract(&page)?;
        Ok(serialize(&readme, &self.options))
    }

    /// Read `input`, convert it and write the README to `output`.
    ///
    /// Nothing is written unless the input was read in full. Returns the
    /// number of bytes written.
    pub fn generate(&self, input: &Path, output: &Path) -> Result<usize> {
        let html = read_input(input)?;
        let markdown = self.convert(&html)?;

        std::fs::write(output, &markdown).map_err(|source| ReadmeError::Write {
            path: output.to_path_buf(),
            source,
        })?;

        info!(
            input = %input.display(),
            output = %output.display(),
            bytes = markdown.len(),
            "README written"
        );
        Ok(markdown.len())
    }

    /// Extract the README AST from a parsed page
    pub fn extract(&self, page: &Page) -> Result<Readme> {
        let selectors = Selectors::compile(&self.extract)?;
        let headings = &self.extract.headings;

        Ok(Readme {
            title: self.project_title(page),
            resources: self.resources(page, &headings.resources, &selectors),
            learning_objectives: self.bullets(page, &headings.learning_objectives, &selectors),
            requirements: self.bullets(page, &headings.requirements, &selectors),
            tasks: self.tasks(page, &selectors),
        })
    }

    fn project_title(&self, page: &Page) -> String {
        let title = page
            .element_by_id(&self.extract.project_description_id)
            .and_then(|description| first_descendant(description, "h2"))
            .map(|h2| text_content(h2).trim().to_string());

        match title {
            Some(title) => {
                debug!(%title, "found project title");
                title
            }
            None => {
                warn!(
                    id = %self.extract.project_description_id,
                    "no project title found, using placeholder"
                );
                self.extract.placeholder_title.clone()
            }
        }
    }

    /// The list following a section heading, if the heading exists
    fn section_list<'a>(&self, page: &'a Page, heading: &str) -> Option<Option<ElementRef<'a>>> {
        let Some(anchor) = page.section_heading(heading) else {
            debug!(heading, "section not on page");
            return None;
        };
        let list = page.find_next(anchor, "ul");
        if list.is_none() {
            warn!(heading, "section heading has no list after it");
        }
        Some(list)
    }

    fn resources(&self, page: &Page, heading: &str, selectors: &Selectors) -> Option<Section<Link>> {
        let list = self.section_list(page, heading)?;

        let links = list.map(|ul| {
            ul.select(&selectors.item)
                .filter_map(|li| li.select(&selectors.link).next())
                .map(|a| {
                    let href = a.value().attr("href").unwrap_or("#");
                    Link::new(text_content(a), resolve_href(href))
                })
                .collect::<Vec<_>>()
        });

        if let Some(links) = &links {
            debug!(count = links.len(), "extracted resource links");
        }
        Some(Section::new(links))
    }

    fn bullets(&self, page: &Page, heading: &str, selectors: &Selectors) -> Option<Section<String>> {
        let list = self.section_list(page, heading)?;

        let items = list.map(|ul| {
            ul.select(&selectors.item)
                .map(stripped_text)
                .collect::<Vec<_>>()
        });

        if let Some(items) = &items {
            debug!(heading, count = items.len(), "extracted section items");
        }
        Some(Section::new(items))
    }

    fn tasks(&self, page: &Page, selectors: &Selectors) -> Vec<Task> {
        let mut cards: Vec<_> = page
            .select_all(&selectors.card)
            .into_iter()
            .filter(|card| self.is_task_card(card))
            .collect();
        if cards.is_empty() {
            warn!(class = %self.extract.task_card_class, "no task cards found");
        }
        if self.extract.drop_last_card && cards.pop().is_some() {
            debug!("dropped last card as page footer");
        }

        cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| self.task(i, card, selectors))
            .collect()
    }

    fn is_task_card(&self, card: &ElementRef) -> bool {
        let expected = self.extract.task_card_class.split_whitespace();
        card.value()
            .attr("class")
            .is_some_and(|class| class.split_whitespace().eq(expected))
    }

    fn task(&self, index: usize, card: ElementRef, selectors: &Selectors) -> Task {
        let raw_title = match card.select(&selectors.title).next() {
            Some(title) => stripped_text(title),
            None => {
                warn!(index, "task card has no title, using placeholder");
                format!("Task {} title (to be replaced)", index + 1)
            }
        };
        let title = strip_title_prefix(&raw_title);

        let body = match card.select(&selectors.body).next() {
            Some(body) => render_body(body),
            None => Vec::new(),
        };
        if body.iter().all(Block::is_blank) {
            warn!(index, %title, "task has an empty body");
        }

        debug!(index, %title, blocks = body.len(), "extracted task");
        Task::new(title, body)
    }
}

impl Default for ReadmeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the whole input page as UTF-8 text
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ReadmeError::NotFound(path.to_path_buf()),
        _ => ReadmeError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(title: &str, body: &str) -> String {
        format!(
            r#"<div class="panel panel-default task-card">
                 <div class="panel-heading"><h3 class="panel-title">{title}</h3></div>
                 <div class="panel-body">{body}</div>
               </div>"#
        )
    }

    fn page(cards: &[String]) -> String {
        format!(
            r#"<html><body>
                 <div id="project-description">
                   <h1>Project</h1>
                   <h2>C - Arrays</h2>
                   <h2>Resources</h2>
                   <p><strong>Read or watch</strong>:</p>
                   <ul>
                     <li><a href="/redirect?url=https%3A%2F%2Fexample.com">Example</a></li>
                     <li><a href="https://man7.org/linux/man-pages/">man pages</a></li>
                     <li>no link here</li>
                   </ul>
                   <h2>Learning Objectives</h2>
                   <ul>
                     <li> What are arrays </li>
                     <li>How to use <code>malloc</code></li>
                   </ul>
                   <h2>Requirements</h2>
                   <ul><li>Allowed editors: vi, vim, emacs</li></ul>
                 </div>
                 {}
               </body></html>"#,
            cards.join("\n")
        )
    }

    fn three_cards() -> Vec<String> {
        vec![
            card("0. Arrays", "<p>Write a function.</p>"),
            card("3. Pointers", r#"<pre><code class="language-c">int *p;</code></pre>"#),
            card("Done?", "<p>Footer</p>"),
        ]
    }

    #[test]
    fn test_drops_last_card() {
        let service = ReadmeService::new();
        let readme = service.extract(&Page::parse(&page(&three_cards()))).unwrap();

        let titles: Vec<_> = readme.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Arrays", "Pointers"]);
    }

    #[test]
    fn test_card_class_must_match_exactly() {
        let html = r#"
            <div class="panel panel-default task-card extra"><h3 class="panel-title">A</h3></div>
            <div class="task-card panel panel-default"><h3 class="panel-title">B</h3></div>
            <div class="panel  panel-default task-card"><h3 class="panel-title">C</h3></div>
            <div class="panel panel-default task-card"><h3 class="panel-title">D</h3></div>
        "#;
        let readme = ReadmeService::new().extract(&Page::parse(html)).unwrap();

        let titles: Vec<_> = readme.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["C"]);
    }

    #[test]
    fn test_keep_last_card() {
        let mut service = ReadmeService::new();
        service.extract_options_mut().drop_last_card = false;
        let readme = service.extract(&Page::parse(&page(&three_cards()))).unwrap();
        assert_eq!(readme.tasks.len(), 3);
    }

    #[test]
    fn test_anchors_match_in_toc_and_tasks() {
        let service = ReadmeService::new();
        let markdown = service.convert(&page(&three_cards())).unwrap();

        assert!(markdown.contains("  - [0. Arrays](#subparagraph0)\n"));
        assert!(markdown.contains("  - [1. Pointers](#subparagraph1)\n"));
        assert!(markdown.contains("### 0. Arrays <a name='subparagraph0'></a>\n"));
        assert!(markdown.contains("### 1. Pointers <a name='subparagraph1'></a>\n"));
        assert!(!markdown.contains("subparagraph2"));
        assert!(!markdown.contains("Footer"));

        let toc = markdown.find("#subparagraph1").unwrap();
        let task = markdown.find("name='subparagraph0'").unwrap();
        assert!(toc < task);
    }

    #[test]
    fn test_sections() {
        let service = ReadmeService::new();
        let markdown = service.convert(&page(&three_cards())).unwrap();

        let expected = "
## Resources
### Read or watch:
* [Example](https://example.com)
* [man pages](https://man7.org/linux/man-pages/)

## Learning Objectives
At the end of this project, you are expected to be able to explain to anyone, without the help of Google:
* What are arrays
* How to usemalloc

## Requirements
### General
* Allowed editors: vi, vim, emacs

## Task
";
        assert!(markdown.contains(expected), "got:\n{markdown}");
        assert!(markdown.starts_with(readme_core::DEFAULT_BANNER));
        assert!(markdown.contains("\n\n# C - Arrays\n\n## Table of Contents :\n\n"));
    }

    #[test]
    fn test_task_bodies() {
        let service = ReadmeService::new();
        let markdown = service.convert(&page(&three_cards())).unwrap();

        assert!(markdown.contains(
            "### 0. Arrays <a name='subparagraph0'></a>\n\nWrite a function.\n\n---\n\n"
        ));
        assert!(markdown.contains(
            "### 1. Pointers <a name='subparagraph1'></a>\n\n```c\nint *p;\n```\n\n---\n\n"
        ));
        assert!(markdown.ends_with(
            "---\n\n\n## Authors\nvtiquet - [GitHub Profile](https://github.com/vtiquet)\n"
        ));
    }

    #[test]
    fn test_missing_sections_and_title() {
        let html = format!("<html><body>{}</body></html>", card("0. Only", "<p>x</p>"));
        let service = ReadmeService::new();
        let markdown = service.convert(&html).unwrap();

        assert!(markdown.contains("# Project title (to be replaced)\n"));
        assert!(!markdown.contains("## Resources"));
        assert!(!markdown.contains("## Learning Objectives"));
        assert!(!markdown.contains("## Requirements"));
        assert!(markdown.contains("## Table of Contents :\n\n\n## Task\n\n## Authors\n"));
    }

    #[test]
    fn test_card_without_title() {
        let html = r#"<div class="panel panel-default task-card"><div class="panel-body"><p>x</p></div></div>
                      <div class="panel panel-default task-card"></div>"#;
        let readme = ReadmeService::new().extract(&Page::parse(html)).unwrap();
        assert_eq!(readme.tasks[0].title, "Task 1 title (to be replaced)");
    }

    #[test]
    fn test_heading_without_list() {
        let html = "<html><body><h2>Requirements</h2><p>none</p></body></html>";
        let readme = ReadmeService::new().extract(&Page::parse(html)).unwrap();
        assert_eq!(readme.requirements, Some(Section::heading_only()));
        assert_eq!(readme.resources, None);
    }

    #[test]
    fn test_custom_headings() {
        let mut service = ReadmeService::new();
        service.extract_options_mut().headings.resources = "Ressources".to_string();
        let html = r#"<h2>Ressources</h2><ul><li><a href="https://a.example">A</a></li></ul>"#;
        let readme = service.extract(&Page::parse(html)).unwrap();
        assert_eq!(
            readme.resources,
            Some(Section::new(Some(vec![Link::new("A", "https://a.example")])))
        );
    }

    #[test]
    fn test_invalid_selector() {
        let mut service = ReadmeService::new();
        service.extract_options_mut().task_card_selector = "div[".to_string();
        let err = service.convert("<p>x</p>").unwrap_err();
        assert!(matches!(err, ReadmeError::InvalidSelector(_)));
    }

    #[test]
    fn test_generate_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("projet.html");
        let output = dir.path().join("README.md");
        std::fs::write(&input, page(&three_cards())).unwrap();

        let service = ReadmeService::new();
        let bytes = service.generate(&input, &output).unwrap();
        let written = std::fs::read_to_string(&output).unwrap();

        assert_eq!(bytes, written.len());
        assert_eq!(written, service.convert(&page(&three_cards())).unwrap());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("projet.html");
        let output = dir.path().join("README.md");
        std::fs::write(&input, page(&three_cards())).unwrap();

        let service = ReadmeService::new();
        service.generate(&input, &output).unwrap();
        let first = std::fs::read(&output).unwrap();
        service.generate(&input, &output).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.html");
        let output = dir.path().join("README.md");

        let err = ReadmeService::new().generate(&input, &output).unwrap_err();

        assert!(matches!(err, ReadmeError::NotFound(ref p) if *p == input));
        assert!(err.to_string().contains("missing.html"));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.html");
        let output = dir.path().join("README.md");
        std::fs::write(&output, "previous").unwrap();

        assert!(ReadmeService::new().generate(&input, &output).is_err());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_undecodable_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("projet.html");
        let output = dir.path().join("README.md");
        std::fs::write(&input, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = ReadmeService::new().generate(&input, &output).unwrap_err();
        assert!(matches!(err, ReadmeError::Read { .. }));
        assert!(!output.exists());
    }
}
