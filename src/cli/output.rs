//! Colored terminal output for build progress.

use owo_colors::OwoColorize;

/// Writes user-facing build progress to stderr.
///
/// Log records (via `log`/`env_logger`) carry the detailed trace; this
/// type prints the short human summary lines.
#[derive(Clone, Debug)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an info message.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "✓".green().bold(), message);
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a progress message.
    pub fn progress(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "→".cyan().bold(), message);
        }
    }

    /// Print a section header.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            eprintln!();
            eprintln!("{}", title.bold());
        }
    }

    /// Print indented detail text.
    pub fn indent(&self, message: &str) {
        if !self.quiet {
            eprintln!("  {}", message);
        }
    }

    /// Print a message only in verbose mode.
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", "◆".dimmed(), message.dimmed());
        }
    }
}
