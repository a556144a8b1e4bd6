//! Host inspection: process snapshot and PATH probe.

use anyhow::{Result, bail};

use crate::application::ports::{CommandProbe, CommandRunner, ProcessLister};

/// Lists processes with `ps -ef`.
pub struct PsProcessLister<'a, R> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> PsProcessLister<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> ProcessLister for PsProcessLister<'_, R> {
    fn snapshot(&self) -> Result<String> {
        let output = self.runner.run("ps", &["-ef"])?;
        if !output.status.success() {
            bail!(
                "ps -ef exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolves commands on PATH with the `which` crate.
pub struct WhichProbe;

impl CommandProbe for WhichProbe {
    fn command_exists(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}
