use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Metrics-collection daemon family an integration targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "UPPER"))]
pub enum Agent {
    Collectd,
    Telegraf,
}

impl Agent {
    /// Identifier used as the key in catalog and state files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Agent::Collectd => "COLLECTD",
            Agent::Telegraf => "TELEGRAF",
        }
    }

    /// Binary name, also used as the init service name.
    #[must_use]
    pub fn binary(self) -> &'static str {
        match self {
            Agent::Collectd => "collectd",
            Agent::Telegraf => "telegraf",
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target operating system family; selects installer control flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "UPPER"))]
pub enum OperatingSystem {
    Debian,
    Redhat,
}

impl OperatingSystem {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OperatingSystem::Debian => "DEBIAN",
            OperatingSystem::Redhat => "REDHAT",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle stage of one application's integration for one agent.
///
/// A closed set with no ordering: states are compared for equality only.
/// Serialized as a lowercase name. Older state files stored integers
/// (`INSTALLED = 0`, `NEW = 1`, `INCOMPLETE = 2`); those are still accepted
/// on read.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstallState {
    #[default]
    New,
    Incomplete,
    Installed,
}

impl InstallState {
    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InstallState::New => "New",
            InstallState::Incomplete => "Incomplete",
            InstallState::Installed => "Installed",
        }
    }

    /// Map a legacy integer encoding.
    #[must_use]
    pub fn from_legacy(code: u64) -> Option<Self> {
        match code {
            0 => Some(InstallState::Installed),
            1 => Some(InstallState::New),
            2 => Some(InstallState::Incomplete),
            _ => None,
        }
    }
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown install state '{0}' (expected new, incomplete or installed)")]
pub struct UnknownInstallState(pub String);

impl FromStr for InstallState {
    type Err = UnknownInstallState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(InstallState::New),
            "incomplete" => Ok(InstallState::Incomplete),
            "installed" => Ok(InstallState::Installed),
            _ => Err(UnknownInstallState(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for InstallState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Legacy(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
            Raw::Legacy(code) => InstallState::from_legacy(code).ok_or_else(|| {
                serde::de::Error::custom(format!("unknown legacy install state {code}"))
            }),
        }
    }
}

/// Install state of one application for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StateRecord {
    pub state: InstallState,
    /// Local time of the last install attempt. Never set on detection alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl StateRecord {
    /// A freshly detected application.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of an install attempt made at `date`.
    #[must_use]
    pub fn attempted(succeeded: bool, date: impl Into<String>) -> Self {
        let state = if succeeded {
            InstallState::Installed
        } else {
            InstallState::Incomplete
        };
        Self {
            state,
            date: Some(date.into()),
        }
    }
}
