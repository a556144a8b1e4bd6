//! Application service: detect supported applications on this host.

use anyhow::{Context, Result};

use crate::application::ports::{CommandProbe, ProcessLister, ProgressReporter};
use crate::domain::{Catalog, InstallerConfig, detect};

/// Capture the process list and match it against `catalog`.
///
/// An empty result is not an error; the caller decides what "nothing to do"
/// means.
///
/// # Errors
///
/// Returns an error if the process list cannot be captured.
pub fn detect_applications(
    lister: &impl ProcessLister,
    probe: &impl CommandProbe,
    catalog: &Catalog,
    config: &InstallerConfig,
    reporter: &impl ProgressReporter,
) -> Result<Vec<String>> {
    reporter.step("Begin app detection");
    let snapshot = lister
        .snapshot()
        .context("Unable to read process off the machine")?;
    let found = detect(
        &snapshot,
        catalog,
        config.agent,
        &config.self_signature,
        |cmd| probe.command_exists(cmd),
    );
    tracing::info!(agent = %config.agent, detected = ?found, "application detection finished");
    if found.is_empty() {
        reporter.warn("No supported app plugin is detected.");
    } else {
        reporter.success(&format!("Detected {} supported application(s)", found.len()));
    }
    Ok(found)
}
