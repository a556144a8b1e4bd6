//! Operator prompts.
//!
//! `TerminalPrompter` uses dialoguer when attached to a terminal;
//! `LinePrompter` reads plain lines and serves pipes and tests.

use std::cell::RefCell;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::application::ports::Prompter;
use crate::domain::PromptError;
use crate::domain::menu::parse_answer;

const BLANK_REMINDER: &str = "The value cannot be blank.";
const YES_NO_REMINDER: &str = "Please respond with \"yes\" or \"no\" (or \"y\" or \"n\").";

/// Interactive prompts via dialoguer.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str) -> Result<String, PromptError> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map(|s| s.trim().to_string())
            .map_err(from_dialoguer)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(from_dialoguer)
    }
}

#[allow(unreachable_patterns)] // dialoguer::Error has a single variant today
fn from_dialoguer(err: dialoguer::Error) -> PromptError {
    match err {
        dialoguer::Error::IO(e) => from_io(&e),
        other => PromptError::Io(other.to_string()),
    }
}

fn from_io(err: &io::Error) -> PromptError {
    match err.kind() {
        io::ErrorKind::Interrupted => PromptError::Interrupted,
        io::ErrorKind::UnexpectedEof => PromptError::Closed,
        _ => PromptError::Io(err.to_string()),
    }
}

/// Line-buffered prompts over any reader/writer pair.
pub struct LinePrompter<R, W> {
    reader: RefCell<R>,
    writer: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect what was prompted.
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }

    fn say(&self, text: &str) -> Result<(), PromptError> {
        let mut w = self.writer.borrow_mut();
        w.write_all(text.as_bytes())
            .and_then(|()| w.flush())
            .map_err(|e| from_io(&e))
    }

    fn read_line(&self) -> Result<String, PromptError> {
        let mut line = String::new();
        let n = self
            .reader
            .borrow_mut()
            .read_line(&mut line)
            .map_err(|e| from_io(&e))?;
        if n == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn input(&self, prompt: &str) -> Result<String, PromptError> {
        loop {
            self.say(&format!("{prompt}\n"))?;
            let line = self.read_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.say(&format!("{BLANK_REMINDER}\n"))?;
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            self.say(&format!("{prompt} {hint} "))?;
            if let Some(answer) = parse_answer(&self.read_line()?, default) {
                return Ok(answer);
            }
            self.say(&format!("{YES_NO_REMINDER}\n"))?;
        }
    }
}

/// dialoguer on a terminal, plain stdin/stdout otherwise.
#[must_use]
pub fn default_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() && console::Term::stdout().is_term() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::BufReader::new(io::stdin()), io::stdout()))
    }
}
