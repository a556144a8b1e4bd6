//! Installer that writes a rendered plugin configuration file and restarts
//! the agent.

use std::path::PathBuf;

use anyhow::{Context, Result};
use pcinstaller_common::{Agent, OperatingSystem};

use super::templates::Template;
use crate::application::ports::{InstallEnv, Installer, InstallerParams};

pub const COLLECTD_DEBIAN_DIR: &str = "/etc/collectd/managed_config";
pub const COLLECTD_REDHAT_DIR: &str = "/etc/collectd.d/managed_config";
pub const TELEGRAF_DIR: &str = "/etc/telegraf/telegraf.d";

/// Fixture installers write beneath `<app-dir>/test/`.
pub const FIXTURE_DIR: &str = "test";

/// Agent configuration directory for `os`.
#[must_use]
pub fn agent_config_dir(agent: Agent, os: OperatingSystem) -> PathBuf {
    match (agent, os) {
        (Agent::Collectd, OperatingSystem::Debian) => PathBuf::from(COLLECTD_DEBIAN_DIR),
        (Agent::Collectd, OperatingSystem::Redhat) => PathBuf::from(COLLECTD_REDHAT_DIR),
        (Agent::Telegraf, _) => PathBuf::from(TELEGRAF_DIR),
    }
}

pub struct ConfigFileInstaller {
    template: &'static Template,
    params: InstallerParams,
    fixture: bool,
}

impl ConfigFileInstaller {
    #[must_use]
    pub fn new(template: &'static Template, params: InstallerParams, fixture: bool) -> Self {
        Self {
            template,
            params,
            fixture,
        }
    }

    /// Where the configuration file is written.
    #[must_use]
    pub fn target(&self) -> PathBuf {
        let dir = if self.fixture {
            self.params
                .app_dir
                .join(FIXTURE_DIR)
                .join(self.params.agent.binary())
        } else {
            agent_config_dir(self.params.agent, self.params.os)
        };
        dir.join(&self.params.conf_name)
    }

    #[must_use]
    pub fn render(&self) -> String {
        match self.params.agent {
            Agent::Collectd => self.template.collectd(&self.params.plugin_name),
            Agent::Telegraf => self.template.telegraf(&self.params.plugin_name),
        }
    }

    fn restart(&self, env: &InstallEnv<'_>) -> Result<bool> {
        let service = self.params.agent.binary();
        let output = env
            .runner
            .run("service", &[service, "restart"])
            .with_context(|| format!("restarting {service}"))?;
        if output.status.success() {
            return Ok(true);
        }
        tracing::warn!(
            service,
            status = ?output.status.code(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "agent restart failed"
        );
        Ok(false)
    }
}

impl Installer for ConfigFileInstaller {
    fn install(&self, env: &InstallEnv<'_>) -> Result<bool> {
        let target = self.target();
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        std::fs::write(&target, self.render())
            .with_context(|| format!("writing {}", target.display()))?;
        tracing::info!(
            path = %target.display(),
            plugin = %self.params.plugin_name,
            fixture = self.fixture,
            "plugin configuration written"
        );

        if self.fixture {
            return Ok(true);
        }
        self.restart(env)
    }
}
