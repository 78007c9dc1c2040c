//! CLI error types.

use readme_html::ReadmeError;

use crate::config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Readme(#[from] ReadmeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
