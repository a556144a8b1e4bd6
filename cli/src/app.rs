//! Application context: the resolved configuration and terminal output,
//! built once in `Cli::run()` and passed to every command handler.

use crate::domain::InstallerConfig;
use crate::output::OutputContext;
use crate::output::reporter::TerminalReporter;

pub struct AppContext {
    /// Immutable run configuration.
    pub config: InstallerConfig,
    /// Terminal output context (colors, TTY detection).
    pub output: OutputContext,
}

impl AppContext {
    #[must_use]
    pub fn new(config: InstallerConfig, no_color: bool) -> Self {
        Self {
            config,
            output: OutputContext::new(no_color),
        }
    }

    /// Returns a `TerminalReporter` wrapping this context's output.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
