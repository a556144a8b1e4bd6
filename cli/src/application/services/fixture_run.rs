//! Application service: unattended validation run.
//!
//! Runs every detected application through its fixture installer without
//! prompting and without touching install state.

use anyhow::Result;

use crate::application::ports::ProgressReporter;
use crate::application::services::dispatch::Dispatcher;
use crate::domain::Catalog;
use crate::domain::error::is_interrupt;

/// Outcome of a fixture run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FixtureReport {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl FixtureReport {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }
}

/// # Errors
///
/// Returns an error only on user interrupt; installer failures are recorded
/// in the report.
pub fn run_fixtures(
    apps: &[String],
    catalog: &Catalog,
    dispatcher: &Dispatcher<'_>,
    reporter: &impl ProgressReporter,
) -> Result<FixtureReport> {
    let mut report = FixtureReport::default();
    for id in apps {
        reporter.step(&format!("Running {id} fixture installer"));
        let outcome = match catalog.get(id) {
            Some(app) => dispatcher.install_fixture(app),
            None => Err(anyhow::anyhow!("'{id}' is not in the catalog")),
        };
        match outcome {
            Ok(true) => {
                reporter.success(&format!("{id} fixture installed"));
                report.passed.push(id.clone());
            }
            Ok(false) => {
                reporter.warn(&format!("{id} fixture installer reported failure"));
                report.failed.push(id.clone());
            }
            Err(e) if is_interrupt(&e) => return Err(e),
            Err(e) => {
                tracing::warn!(app = %id, error = %e, "fixture installer failed");
                reporter.warn(&format!("{id} fixture installer failed: {e:#}"));
                report.failed.push(id.clone());
            }
        }
    }
    Ok(report)
}
