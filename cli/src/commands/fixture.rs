//! Unattended fixture run (`--test`).

use std::process::ExitCode;

use anyhow::Result;
use tokio::runtime::Handle;

use crate::app::AppContext;
use crate::application::ports::InstallEnv;
use crate::application::services::dispatch::{Dispatcher, InstallerRegistry};
use crate::application::services::fixture_run::run_fixtures;

/// Run every detected application through its fixture installer. Install
/// state is neither read nor written.
///
/// # Errors
///
/// Returns an error on fatal preflight or catalog failures, and on user
/// interrupt.
pub fn run(app: &AppContext, handle: &Handle) -> Result<ExitCode> {
    let detected = super::prepare(app, handle)?;
    if detected.apps.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    let registry = InstallerRegistry::builtin();
    let dispatcher = Dispatcher::new(
        &registry,
        &app.config,
        InstallEnv { runner: &detected.runner },
    );
    let reporter = app.terminal_reporter();
    let report = run_fixtures(&detected.apps, &detected.catalog, &dispatcher, &reporter)?;
    tracing::info!(passed = ?report.passed, failed = ?report.failed, "fixture run finished");

    if report.all_passed() {
        app.output.success(&format!("{} fixture install(s) passed", report.passed.len()));
        Ok(ExitCode::SUCCESS)
    } else {
        app.output.error(&format!("Fixture installs failed: {}", report.failed.join(", ")));
        Ok(ExitCode::FAILURE)
    }
}
