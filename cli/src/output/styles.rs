//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;
use pcinstaller_common::InstallState;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages (green)
    pub success: Style,
    /// Warning messages (yellow)
    pub warning: Style,
    /// Error messages (red)
    pub error: Style,
    /// Step and info messages (cyan)
    pub info: Style,
    /// Reminders such as "Invalid option." (magenta)
    pub reminder: Style,
    /// Dimmed/secondary text
    pub dim: Style,
    /// Headers/section titles
    pub header: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.info = Style::new().cyan();
        self.reminder = Style::new().magenta();
        self.dim = Style::new().dimmed();
        self.header = Style::new().bold();
    }

    /// Menu row color for an install state.
    #[must_use]
    pub fn state(&self, state: InstallState) -> Style {
        match state {
            InstallState::New => self.success,
            InstallState::Incomplete => self.warning,
            InstallState::Installed => Style::new(),
        }
    }
}
