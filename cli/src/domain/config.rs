//! Runtime configuration for one installer run.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};

use pcinstaller_common::{Agent, OperatingSystem};

use crate::domain::detect::SelfSignature;
use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Catalog file name inside the application directory.
pub const CATALOG_FILE_NAME: &str = "support_plugins.json";

/// State file name used inside the application directory in debug runs.
pub const DEBUG_STATE_FILE_NAME: &str = "install_state.json";

pub const COLLECTD_STATE_FILE: &str = "/etc/collectd/install_state.json";
pub const TELEGRAF_STATE_FILE: &str = "/etc/telegraf/install_state.json";

// ── Config value ─────────────────────────────────────────────────────────────

/// Raw selections as given on the command line.
#[derive(Debug, Clone)]
pub struct ConfigInput {
    pub os: OperatingSystem,
    pub agent: Agent,
    pub app_dir: PathBuf,
    pub log_file: PathBuf,
    pub debug: bool,
    pub fixture_mode: bool,
    pub state_file: Option<PathBuf>,
    pub self_pattern: String,
}

/// Immutable configuration, built once and passed by reference.
#[derive(Debug, Clone)]
pub struct InstallerConfig {
    pub os: OperatingSystem,
    pub agent: Agent,
    pub app_dir: PathBuf,
    pub log_file: PathBuf,
    pub debug: bool,
    /// Run every detected application unattended through fixture installers.
    pub fixture_mode: bool,
    pub catalog_file: PathBuf,
    pub state_file: PathBuf,
    pub self_signature: SelfSignature,
}

impl InstallerConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSelfPattern`] if the self-detection
    /// pattern does not compile.
    pub fn resolve(input: ConfigInput) -> Result<Self, ConfigError> {
        let self_signature = SelfSignature::new(&input.self_pattern)?;
        let state_file = resolve_state_file(
            input.agent,
            input.debug,
            &input.app_dir,
            input.state_file,
        );
        Ok(Self {
            catalog_file: input.app_dir.join(CATALOG_FILE_NAME),
            state_file,
            self_signature,
            os: input.os,
            agent: input.agent,
            app_dir: input.app_dir,
            log_file: input.log_file,
            debug: input.debug,
            fixture_mode: input.fixture_mode,
        })
    }
}

/// Explicit override wins; debug runs keep state next to the catalog;
/// otherwise each agent has its own system location.
#[must_use]
pub fn resolve_state_file(
    agent: Agent,
    debug: bool,
    app_dir: &Path,
    explicit: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if debug {
        return app_dir.join(DEBUG_STATE_FILE_NAME);
    }
    match agent {
        Agent::Collectd => PathBuf::from(COLLECTD_STATE_FILE),
        Agent::Telegraf => PathBuf::from(TELEGRAF_STATE_FILE),
    }
}
