//! Status lines printed around a README run.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Writes run status to stderr, leaving stdout free for `--stdout`.
pub(crate) struct Output {
    term: Term,
    done: Style,
    failed: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            done: Style::new().green().bold(),
            failed: Style::new().red(),
        }
    }

    /// Announce which page is read and where the README goes.
    pub(crate) fn plan(&self, input: &Path, output: &Path) {
        let _ = self.term.write_line(&plan_line(input, output));
    }

    /// Report a written README.
    pub(crate) fn generated(&self, output: &Path, bytes: usize) {
        let line = generated_line(output, bytes);
        let _ = self.term.write_line(&self.done.apply_to(line).to_string());
    }

    /// Report the error that stopped the run.
    pub(crate) fn failed(&self, err: &dyn Display) {
        let line = format!("Error: {err}");
        let _ = self.term.write_line(&self.failed.apply_to(line).to_string());
    }
}

fn plan_line(input: &Path, output: &Path) -> String {
    format!("{} -> {}", input.display(), output.display())
}

fn generated_line(output: &Path, bytes: usize) -> String {
    format!("{} generated successfully ({bytes} bytes)", output.display())
}
