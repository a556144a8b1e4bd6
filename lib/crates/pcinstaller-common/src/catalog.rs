//! Wire schema of `support_plugins.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Agent;

/// Top-level catalog document.
///
/// The plugin map is normally nested under `data`; a bare `{"plugins": …}`
/// document is accepted as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    Wrapped { data: CatalogData },
    Bare(CatalogData),
}

impl CatalogFile {
    #[must_use]
    pub fn into_data(self) -> CatalogData {
        match self {
            CatalogFile::Wrapped { data } | CatalogFile::Bare(data) => data,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    /// Supported applications keyed by id.
    pub plugins: BTreeMap<String, PluginEntry>,
}

/// One supported application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginEntry {
    /// Pattern searched for in each process line.
    pub app_search: String,
    /// `|`-separated fallback commands; `None` means no fallback.
    pub command: String,
    /// Name of the configuration file the installer writes.
    pub conf_name: String,
    pub module: String,
    pub class_name: String,
    #[serde(rename = "COLLECTD", default, skip_serializing_if = "Option::is_none")]
    pub collectd: Option<AgentPlugin>,
    #[serde(rename = "TELEGRAF", default, skip_serializing_if = "Option::is_none")]
    pub telegraf: Option<AgentPlugin>,
}

impl PluginEntry {
    /// Per-agent sub-record; `None` when the application is not installable
    /// for `agent`.
    #[must_use]
    pub fn agent_plugin(&self, agent: Agent) -> Option<&AgentPlugin> {
        match agent {
            Agent::Collectd => self.collectd.as_ref(),
            Agent::Telegraf => self.telegraf.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPlugin {
    pub plugin_name: String,
}
