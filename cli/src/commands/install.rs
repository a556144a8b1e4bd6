//! Interactive install session.

use std::process::ExitCode;

use anyhow::Result;
use tokio::runtime::Handle;

use crate::app::AppContext;
use crate::application::ports::InstallEnv;
use crate::application::services::dispatch::{Dispatcher, InstallerRegistry};
use crate::application::services::menu::{LocalClock, MenuSession};
use crate::infra::prompt::default_prompter;
use crate::infra::state::JsonStateStore;
use crate::output::menu_view::TerminalMenuView;

/// Detect applications and run the menu until the operator quits.
///
/// Succeeds when at least one install completed, or when nothing was
/// detected.
///
/// # Errors
///
/// Returns an error on fatal preflight, catalog or state failures, and on
/// user interrupt.
pub fn run(app: &AppContext, handle: &Handle) -> Result<ExitCode> {
    let detected = super::prepare(app, handle)?;
    if detected.apps.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let config = &app.config;
    let prompter = default_prompter();
    let registry = InstallerRegistry::builtin();
    let dispatcher = Dispatcher::new(
        &registry,
        config,
        InstallEnv { runner: &detected.runner },
    );
    let store = JsonStateStore::new(config.state_file.clone());
    let view = TerminalMenuView::new(&app.output);

    let session = MenuSession {
        agent: config.agent,
        apps: &detected.apps,
        catalog: &detected.catalog,
        prompter: prompter.as_ref(),
        store: &store,
        view: &view,
        dispatcher: &dispatcher,
        clock: &LocalClock,
    };
    let installed = session.run()?;
    tracing::info!(installed, state_file = %store.path().display(), "install session finished");

    if installed > 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
