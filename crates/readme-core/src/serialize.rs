//! README AST serialization
//!
//! Converts a [`Readme`] into Markdown text. Output is appended to a single
//! buffer in document order and never revisited.

use crate::ast::{Block, Inline, Link, ListItem, Readme, Section, Task};
use crate::options::Options;

/// Line introducing the learning objectives list
const OBJECTIVES_INTRO: &str =
    "At the end of this project, you are expected to be able to explain to anyone, without the help of Google:";

/// Serialize a README to Markdown string
pub fn serialize(readme: &Readme, options: &Options) -> String {
    let mut output = String::with_capacity(4096);

    output.push_str(&options.banner);
    output.push_str("\n\n");

    output.push_str("# ");
    output.push_str(&readme.title);
    output.push_str("\n\n");

    serialize_toc(&readme.tasks, options, &mut output);

    if let Some(section) = &readme.resources {
        serialize_resources(section, options, &mut output);
    }
    if let Some(section) = &readme.learning_objectives {
        serialize_bullets("Learning Objectives", Some(OBJECTIVES_INTRO), section, options, &mut output);
    }
    if let Some(section) = &readme.requirements {
        serialize_bullets("Requirements", Some("### General"), section, options, &mut output);
    }

    output.push_str("\n## Task\n");
    for (i, task) in readme.tasks.iter().enumerate() {
        serialize_task(i, task, options, &mut output);
    }

    output.push_str("\n## Authors\n");
    output.push_str(&options.author);
    output.push('\n');

    output
}

/// Serialize the body blocks of a single task, as they appear under its heading
pub fn serialize_blocks(blocks: &[Block], options: &Options) -> String {
    let mut output = String::new();
    for block in blocks {
        serialize_block(block, options, &mut output);
    }
    output
}

fn serialize_toc(tasks: &[Task], options: &Options, out: &mut String) {
    out.push_str("## Table of Contents :\n\n");
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format!(
            "  - [{}. {}](#{})\n",
            i,
            task.title,
            options.anchor(i)
        ));
    }
}

fn serialize_resources(section: &Section<Link>, options: &Options, out: &mut String) {
    out.push_str("\n## Resources\n");
    let Some(links) = &section.items else {
        return;
    };

    out.push_str("### Read or watch:\n");
    for link in links {
        out.push(options.bullet_list_marker);
        out.push_str(&format!(" [{}]({})\n", link.text, link.url));
    }
}

fn serialize_bullets(
    heading: &str,
    intro: Option<&str>,
    section: &Section<String>,
    options: &Options,
    out: &mut String,
) {
    out.push_str("\n## ");
    out.push_str(heading);
    out.push('\n');

    let Some(items) = &section.items else {
        return;
    };

    if let Some(intro) = intro {
        out.push_str(intro);
        out.push('\n');
    }
    for item in items {
        out.push(options.bullet_list_marker);
        out.push(' ');
        out.push_str(item);
        out.push('\n');
    }
}

fn serialize_task(index: usize, task: &Task, options: &Options, out: &mut String) {
    out.push_str(&format!(
        "### {}. {} <a name='{}'></a>\n\n",
        index,
        task.title,
        options.anchor(index)
    ));

    for block in &task.body {
        serialize_block(block, options, out);
    }

    out.push_str(&options.hr);
    out.push_str("\n\n");
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    match block {
        Block::Paragraph(inlines) => {
            let mut text = String::new();
            serialize_inlines(inlines, options, 0, &mut text);
            out.push_str(text.trim());
            out.push_str("\n\n");
        }

        Block::List(items) => {
            serialize_list(items, options, 0, out);
            out.push('\n');
        }

        Block::CodeBlock { language, code } => {
            out.push_str(&options.fence);
            out.push_str(language);
            out.push('\n');
            out.push_str(code.trim());
            out.push('\n');
            out.push_str(&options.fence);
            out.push_str("\n\n");
        }

        Block::Strong(text) => {
            out.push_str(&options.strong_delimiter);
            out.push_str(text.trim());
            out.push_str(&options.strong_delimiter);
        }

        Block::Emphasis(text) => {
            out.push(options.em_delimiter);
            out.push_str(text.trim());
            out.push(options.em_delimiter);
        }
    }
}

fn serialize_list(items: &[ListItem], options: &Options, depth: usize, out: &mut String) {
    let indent = options.list_indent.repeat(depth);

    for item in items {
        let mut content = String::new();
        serialize_inlines(&item.content, options, depth, &mut content);

        out.push_str(&indent);
        out.push(options.bullet_list_marker);
        out.push(' ');
        out.push_str(content.trim());
        out.push('\n');
    }
}

fn serialize_inlines(inlines: &[Inline], options: &Options, depth: usize, out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) | Inline::Html(text) => out.push_str(text),
            Inline::LineBreak => out.push('\n'),
            Inline::List(items) => {
                // Nested list keeps the blank line a top-level list would get;
                // it only survives when more content follows in the item.
                out.push('\n');
                serialize_list(items, options, depth + 1, out);
                out.push('\n');
            }
        }
    }
}
