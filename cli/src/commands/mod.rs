//! Command implementations

pub mod fixture;
pub mod install;

use anyhow::Result;
use tokio::runtime::Handle;

use crate::app::AppContext;
use crate::application::ports::ProgressReporter;
use crate::application::services::detection::detect_applications;
use crate::application::services::preflight::check_agent;
use crate::domain::Catalog;
use crate::infra::catalog::load_catalog;
use crate::infra::command_runner::{DEFAULT_CMD_TIMEOUT, TokioCommandRunner};
use crate::infra::process::{PsProcessLister, WhichProbe};

/// Preflight, catalog and detection shared by both run modes.
pub(crate) struct Detected {
    pub catalog: Catalog,
    pub apps: Vec<String>,
    pub runner: TokioCommandRunner,
}

/// # Errors
///
/// Returns an error if the agent is missing, the catalog cannot be loaded, or
/// the process list cannot be read.
pub(crate) fn prepare(app: &AppContext, handle: &Handle) -> Result<Detected> {
    let config = &app.config;
    let probe = WhichProbe;
    let reporter = app.terminal_reporter();

    reporter.step("Checking agent prerequisites");
    check_agent(&probe, config.agent)?;
    reporter.success("Agent prerequisites satisfied");

    let catalog = load_catalog(&config.catalog_file)?;
    let runner = TokioCommandRunner::new(handle.clone(), DEFAULT_CMD_TIMEOUT);
    let apps = detect_applications(
        &PsProcessLister::new(&runner),
        &probe,
        &catalog,
        config,
        &reporter,
    )?;

    Ok(Detected {
        catalog,
        apps,
        runner,
    })
}
