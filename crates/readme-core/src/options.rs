//! Configuration options for README serialization

/// Banner written at the very top of every README
pub const DEFAULT_BANNER: &str = r#"<div align="center"><img src="https://github.com/vtiquet/holbertonschool-resources/blob/main/image/Holberton-Logo.svg" width=40% height=40%/></div>"#;

/// Attribution line of the `Authors` section
pub const DEFAULT_AUTHOR: &str = "vtiquet - [GitHub Profile](https://github.com/vtiquet)";

/// Options for README serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Raw HTML banner line
    pub banner: String,

    /// Line written under `## Authors`
    pub author: String,

    /// Prefix of the in-document anchors; the task index is appended
    pub anchor_prefix: String,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Indentation added per nested list level
    pub list_indent: String,

    /// Fence string for code blocks
    pub fence: String,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,

    /// Separator written after each task
    pub hr: String,
}

impl Options {
    /// Anchor name of the task at `index`
    pub fn anchor(&self, index: usize) -> String {
        format!("{}{}", self.anchor_prefix, index)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            anchor_prefix: "subparagraph".to_string(),
            bullet_list_marker: '*',
            list_indent: "  ".to_string(),
            fence: "```".to_string(),
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
            hr: "---".to_string(),
        }
    }
}
