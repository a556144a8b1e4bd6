//! Application service: the interactive install session.
//!
//! Each iteration re-reads state, renders the menu, takes one selection and,
//! once confirmed, runs the installer and persists the full state map. The
//! session ends on a quit keyword or when input is closed, and returns the
//! number of successful installs.
//!
//! Installer failures are contained: resolution errors and errors raised
//! inside an installer mark the application `Incomplete` and the session
//! continues. Only a user interrupt escapes.

use anyhow::Result;
use pcinstaller_common::{Agent, InstallState, StateMap};

use crate::application::ports::{InstallStateStore, MenuView, Prompter};
use crate::application::services::dispatch::Dispatcher;
use crate::domain::error::is_interrupt;
use crate::domain::menu::{MenuRow, is_quit, parse_selection};
use crate::domain::state::{record_attempt, state_of};
use crate::domain::{AppDescriptor, Catalog, PromptError};

pub const SELECTION_PROMPT: &str = "Which installer would you like to run?";
pub const CONFIRM_PROMPT: &str = "Would you like to proceed with the configurator?";

/// Wall-clock source for attempt timestamps.
pub trait Clock {
    fn now(&self) -> String;
}

/// Local time in the `%c` format.
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> String {
        chrono::Local::now().format("%c").to_string()
    }
}

/// Everything one interactive session needs.
pub struct MenuSession<'a, P: ?Sized, S, V, C> {
    pub agent: Agent,
    pub apps: &'a [String],
    pub catalog: &'a Catalog,
    pub prompter: &'a P,
    pub store: &'a S,
    pub view: &'a V,
    pub dispatcher: &'a Dispatcher<'a>,
    pub clock: &'a C,
}

impl<P, S, V, C> MenuSession<'_, P, S, V, C>
where
    P: Prompter + ?Sized,
    S: InstallStateStore,
    V: MenuView,
    C: Clock,
{
    /// Run until the operator quits. Returns the number of successful
    /// installs.
    ///
    /// # Errors
    ///
    /// Returns an error if state cannot be loaded, or on user interrupt.
    pub fn run(&self) -> Result<usize> {
        let mut installed = 0;
        self.view.intro();

        loop {
            let mut states = self.store.load(self.agent, self.apps)?;
            self.view.menu(&self.rows(&states));

            let answer = match self.prompter.input(SELECTION_PROMPT) {
                Ok(answer) => answer,
                Err(PromptError::Closed) => break,
                Err(e) => return Err(e.into()),
            };
            if is_quit(&answer) {
                break;
            }
            let Some(index) = parse_selection(&answer, self.apps.len()) else {
                self.view.invalid_option();
                continue;
            };

            let id = &self.apps[index];
            self.view.selected(index, id);
            let Some(app) = self.catalog.get(id) else {
                self.view.warn(&format!("'{id}' is no longer in the catalog."));
                continue;
            };

            if state_of(&states, self.agent, id) == InstallState::Installed {
                self.view.overwrite_warning(&app.conf_name);
            }
            let proceed = match self.prompter.confirm(CONFIRM_PROMPT, true) {
                Ok(proceed) => proceed,
                Err(PromptError::Closed) => false,
                Err(e) => return Err(e.into()),
            };
            if !proceed {
                continue;
            }

            let succeeded = self.attempt(app)?;
            if succeeded {
                installed += 1;
            }
            record_attempt(&mut states, self.agent, id, succeeded, &self.clock.now());
            let state = state_of(&states, self.agent, id);
            tracing::info!(app = %id, agent = %self.agent, ?state, "install attempt recorded");
            self.view.outcome(id, state);

            if let Err(e) = self.store.save(&states) {
                tracing::warn!(error = %e, "install state not saved");
                self.view.warn(&format!("{e:#}"));
            }
        }

        Ok(installed)
    }

    fn rows(&self, states: &StateMap) -> Vec<MenuRow> {
        self.apps
            .iter()
            .enumerate()
            .map(|(index, id)| {
                let record = states.record(self.agent, id);
                MenuRow {
                    index,
                    app: id.clone(),
                    state: record.map(|r| r.state).unwrap_or_default(),
                    date: record.and_then(|r| r.date.clone()),
                }
            })
            .collect()
    }

    fn attempt(&self, app: &AppDescriptor) -> Result<bool> {
        match self.dispatcher.install(app) {
            Ok(succeeded) => Ok(succeeded),
            Err(e) if is_interrupt(&e) => Err(e),
            Err(e) => {
                tracing::warn!(app = %app.id, error = %e, "installer failed");
                self.view
                    .warn(&format!("The {} installer failed: {e:#}", app.id));
                Ok(false)
            }
        }
    }
}
