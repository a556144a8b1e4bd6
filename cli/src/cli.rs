//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pcinstaller_common::{Agent, OperatingSystem};
use tokio::runtime::Handle;

use crate::app::AppContext;
use crate::commands;
use crate::domain::{ConfigInput, DEFAULT_SELF_PATTERN, InstallerConfig};
use crate::infra::logging;

/// Detect supported applications and configure metrics integrations for
/// the host's collection agent
#[derive(Parser)]
#[command(name = "pcinstaller", version)]
pub struct Cli {
    /// Operating system family of this host
    #[arg(long, value_enum)]
    pub os: OperatingSystem,

    /// Metrics collection agent to configure
    #[arg(long, value_enum)]
    pub agent: Agent,

    /// Installer directory holding support_plugins.json
    #[arg(long)]
    pub app_dir: PathBuf,

    /// File diagnostic logs are appended to
    #[arg(long)]
    pub log_file: PathBuf,

    /// Verbose logging; keep install state inside the installer directory
    #[arg(long)]
    pub debug: bool,

    /// Run every detected application through its test installer unattended
    #[arg(long)]
    pub test: bool,

    /// Install state file (overrides the per-agent default)
    #[arg(long, env = "PCINSTALLER_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Process lines matching this pattern (anchored at line start) are
    /// ignored during detection
    #[arg(long, env = "PCINSTALLER_SELF_PATTERN", default_value = DEFAULT_SELF_PATTERN)]
    pub self_pattern: String,

    /// Disable colored output. Any non-empty `NO_COLOR` other than a
    /// false-like word turns it on.
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,
}

impl Cli {
    /// Execute the installer. Blocks; call from a blocking task on the
    /// runtime `handle` belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid configuration and on every fatal failure
    /// of the selected mode.
    pub fn run(self, handle: &Handle) -> Result<ExitCode> {
        let Cli {
            os,
            agent,
            app_dir,
            log_file,
            debug,
            test,
            state_file,
            self_pattern,
            no_color,
        } = self;
        let config = InstallerConfig::resolve(ConfigInput {
            os,
            agent,
            app_dir,
            log_file,
            debug,
            fixture_mode: test,
            state_file,
            self_pattern,
        })?;
        let app = AppContext::new(config, no_color);

        if let Err(e) = logging::init(&app.config.log_file, app.config.debug) {
            app.output.warn(&format!("Logging disabled: {e:#}"));
        }
        if app.config.debug {
            app.output.warn("DEBUG IS ON");
            app.output.kv("Catalog", &app.config.catalog_file.display().to_string());
            app.output.kv("State file", &app.config.state_file.display().to_string());
            app.output.kv("Self pattern", app.config.self_signature.pattern());
        }
        tracing::info!(
            os = %app.config.os,
            agent = %app.config.agent,
            fixture_mode = app.config.fixture_mode,
            "installer starting"
        );

        if app.config.fixture_mode {
            commands::fixture::run(&app, handle)
        } else {
            commands::install::run(&app, handle)
        }
    }
}
