//! Output formatting module

pub mod menu_view;
pub mod progress;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, is_tty }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty
    }

    /// Print a plain line.
    pub fn line(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print a success message prefixed with `✓`.
    pub fn success(&self, msg: &str) {
        println!("  {} {msg}", "✓".style(self.styles.success));
    }

    /// Print a `[ WARNING ]` banner followed by the message on stderr.
    pub fn warn(&self, msg: &str) {
        println!("{}", "[ WARNING ]".style(self.styles.warning));
        eprintln!("{msg}");
    }

    /// Print an error message prefixed with `✗` to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print a reminder to stderr.
    pub fn reminder(&self, msg: &str) {
        eprintln!("{}", msg.style(self.styles.reminder));
    }

    /// Print a section header.
    pub fn header(&self, msg: &str) {
        println!("{}", msg.style(self.styles.header));
    }

    /// Print a key-value pair with the key dimmed.
    pub fn kv(&self, key: &str, value: &str) {
        println!("  {}  {value}", key.style(self.styles.dim));
    }
}
