//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.
//!
//! Every port is synchronous: the session runs on one blocking thread and
//! each external call blocks until it completes.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;
use pcinstaller_common::{Agent, InstallState, OperatingSystem, StateMap};

use crate::domain::{MenuRow, PromptError};

// ── Host inspection ports ─────────────────────────────────────────────────────

/// Snapshot of the running process list.
pub trait ProcessLister {
    /// Full process listing as text, one process per line.
    fn snapshot(&self) -> Result<String>;
}

/// PATH resolvability probe.
pub trait CommandProbe {
    fn command_exists(&self, name: &str) -> bool;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or faked.
pub trait CommandRunner {
    /// Run a program and capture its output.
    fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a command line through `bash -c`.
    fn run_shell(&self, command: &str) -> Result<Output> {
        self.run("bash", &["-c", command])
    }
}

// ── Operator interaction ports ────────────────────────────────────────────────

/// Line-oriented operator input.
pub trait Prompter {
    /// Ask for a non-blank line of input.
    ///
    /// # Errors
    ///
    /// [`PromptError::Closed`] when input is exhausted,
    /// [`PromptError::Interrupted`] on Ctrl-C.
    fn input(&self, prompt: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question; an empty answer takes `default`.
    ///
    /// # Errors
    ///
    /// Same as [`Prompter::input`].
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Presentation of the interactive menu.
pub trait MenuView {
    /// Shown once when the session starts.
    fn intro(&self);
    /// Render the option table.
    fn menu(&self, rows: &[MenuRow]);
    fn selected(&self, index: usize, app: &str);
    /// Shown before confirming a reinstall.
    fn overwrite_warning(&self, conf_name: &str);
    fn invalid_option(&self);
    fn outcome(&self, app: &str, state: InstallState);
    fn warn(&self, message: &str);
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── State Port ────────────────────────────────────────────────────────────────

/// Install-state persistence.
pub trait InstallStateStore {
    /// Read persisted state and reconcile `app_ids` into it for `agent`.
    ///
    /// Missing or unreadable storage yields a map with every id `New`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage exists but cannot be parsed.
    fn load(&self, agent: Agent, app_ids: &[String]) -> Result<StateMap>;

    /// Overwrite storage with the full multi-agent map.
    fn save(&self, map: &StateMap) -> Result<()>;
}

// ── Installer Port ────────────────────────────────────────────────────────────

/// Construction parameters shared by every installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerParams {
    pub os: OperatingSystem,
    pub agent: Agent,
    /// Agent-side plugin name from the catalog.
    pub plugin_name: String,
    /// Configuration file the installer writes.
    pub conf_name: String,
    /// Application directory; fixture installers write beneath it.
    pub app_dir: PathBuf,
}

/// Collaborators available to a running installer.
pub struct InstallEnv<'a> {
    pub runner: &'a dyn CommandRunner,
}

/// One application's integration installer.
pub trait Installer {
    /// Install the integration. `Ok(false)` is a handled failure; `Err` is
    /// an unexpected one.
    fn install(&self, env: &InstallEnv<'_>) -> Result<bool>;
}

/// Builds an installer from its parameters.
pub type InstallerFactory = fn(InstallerParams) -> Box<dyn Installer>;
