//! readme-gen - generate a README.md from an exported project page.
//!
//! Reads the page (default `projet.html`), extracts title, table of contents,
//! resources, learning objectives, requirements and tasks, and writes them as
//! Markdown (default `README.md`). Nothing is written if the page cannot be
//! read.

mod config;
mod error;
mod output;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use readme_html::read_input;
use tracing_subscriber::EnvFilter;

use config::{CliSettings, Config};
use error::CliError;
use output::Output;

/// Generate a README.md from an exported project page.
#[derive(Parser)]
#[command(name = "readme-gen", version, about)]
struct Cli {
    /// Exported project page (default: projet.html).
    input: Option<PathBuf>,

    /// README to write (default: README.md).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: readme.toml if present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep the last task card instead of treating it as the page footer.
    #[arg(long)]
    keep_last_card: bool,

    /// Print the README to stdout instead of writing a file.
    #[arg(long)]
    stdout: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli, &output) {
        output.failed(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<(), CliError> {
    let settings = CliSettings {
        input: cli.input,
        output: cli.output,
        drop_last_card: cli.keep_last_card.then_some(false),
    };
    let config = Config::load(cli.config.as_deref(), Some(&settings))?;
    if let Some(path) = &config.config_path {
        tracing::info!(path = %path.display(), "loaded configuration");
    }
    let service = config.service();

    if cli.stdout {
        let html = read_input(&config.input)?;
        let markdown = service.convert(&html)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(markdown.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    output.plan(&config.input, &config.output);
    let bytes = service.generate(&config.input, &config.output)?;
    output.generated(&config.output, bytes);
    Ok(())
}
