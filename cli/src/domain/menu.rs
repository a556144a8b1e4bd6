//! Pure helpers for the interactive installer menu.

use pcinstaller_common::InstallState;

/// Inputs that end the session, compared case-insensitively.
pub const QUIT_KEYWORDS: [&str; 3] = ["quit", "q", "exit"];

const INDEX_PAD: usize = 7;
const NAME_PAD: usize = 30;
const STATE_PAD: usize = 12;

/// One line of the menu table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub index: usize,
    pub app: String,
    pub state: InstallState,
    pub date: Option<String>,
}

impl MenuRow {
    /// Fixed-column text of this row, without styling.
    #[must_use]
    pub fn render(&self) -> String {
        format_columns(
            &format!("({})", self.index),
            &self.app,
            self.state.label(),
            self.date.as_deref().unwrap_or(""),
        )
    }
}

/// Column header matching [`MenuRow::render`].
#[must_use]
pub fn header() -> String {
    format_columns("Option", "Name", "State", "Date")
}

fn format_columns(index: &str, name: &str, state: &str, date: &str) -> String {
    format!("{index:<INDEX_PAD$} {name:<NAME_PAD$} {state:<STATE_PAD$} {date}")
        .trim_end()
        .to_string()
}

#[must_use]
pub fn is_quit(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    QUIT_KEYWORDS.contains(&input.as_str())
}

/// Parse a menu selection. Accepts only integers in `[0, count)`.
#[must_use]
pub fn parse_selection(input: &str, count: usize) -> Option<usize> {
    let value: i64 = input.trim().parse().ok()?;
    let index = usize::try_from(value).ok()?;
    (index < count).then_some(index)
}

/// Parse a yes/no answer. Empty input takes `default`; anything
/// unrecognised is `None`.
#[must_use]
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "yes" | "ye" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
