//! Configuration for `readme-gen`.
//!
//! Parses an optional `readme.toml` with serde. CLI settings are applied on
//! top of the file via [`CliSettings`].

use std::path::{Path, PathBuf};

use readme_core::Options;
use readme_html::{ExtractOptions, ReadmeService};
use serde::Deserialize;

/// Configuration filename looked up in the current directory.
const CONFIG_FILENAME: &str = "readme.toml";

/// Page read when no input is given.
const DEFAULT_INPUT: &str = "projet.html";

/// README written when no output is given.
const DEFAULT_OUTPUT: &str = "README.md";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub(crate) struct CliSettings {
    /// Override input page.
    pub input: Option<PathBuf>,
    /// Override output README.
    pub output: Option<PathBuf>,
    /// Override footer card dropping.
    pub drop_last_card: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Exported project page.
    pub input: PathBuf,
    /// README destination, overwritten on success.
    pub output: PathBuf,
    /// Banner line replacing the default logo.
    pub banner: Option<String>,
    /// Line of the `Authors` section.
    pub author: Option<String>,
    /// Title used when the page has none.
    pub placeholder_title: Option<String>,
    /// Leave out the last task card.
    pub drop_last_card: bool,
    /// Section heading texts to look for.
    pub headings: HeadingsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[headings]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct HeadingsConfig {
    pub resources: Option<String>,
    pub learning_objectives: Option<String>,
    pub requirements: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            banner: None,
            author: None,
            placeholder_title: None,
            drop_last_card: true,
            headings: HeadingsConfig::default(),
            config_path: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `config_path` must exist. Without one, `readme.toml` in the
    /// current directory is used if present, otherwise defaults.
    pub(crate) fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        Ok(config)
    }

    fn discover_config() -> Option<PathBuf> {
        let candidate = std::env::current_dir().ok()?.join(CONFIG_FILENAME);
        candidate.is_file().then_some(candidate)
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(input) = &settings.input {
            self.input.clone_from(input);
        }
        if let Some(output) = &settings.output {
            self.output.clone_from(output);
        }
        if let Some(drop_last_card) = settings.drop_last_card {
            self.drop_last_card = drop_last_card;
        }
    }

    /// Build the conversion service from this configuration.
    pub(crate) fn service(&self) -> ReadmeService {
        let mut extract = ExtractOptions {
            drop_last_card: self.drop_last_card,
            ..ExtractOptions::default()
        };
        if let Some(title) = &self.placeholder_title {
            extract.placeholder_title.clone_from(title);
        }
        if let Some(text) = &self.headings.resources {
            extract.headings.resources.clone_from(text);
        }
        if let Some(text) = &self.headings.learning_objectives {
            extract.headings.learning_objectives.clone_from(text);
        }
        if let Some(text) = &self.headings.requirements {
            extract.headings.requirements.clone_from(text);
        }

        let mut options = Options::default();
        if let Some(banner) = &self.banner {
            options.banner.clone_from(banner);
        }
        if let Some(author) = &self.author {
            options.author.clone_from(author);
        }

        ReadmeService::with_options(extract, options)
    }
}
