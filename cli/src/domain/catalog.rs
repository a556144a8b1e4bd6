//! Catalog of supported applications.
//!
//! Built once from the parsed `support_plugins.json` and read-only afterward.
//! Iteration order is ascending application id.

use pcinstaller_common::{Agent, AgentPlugin, CatalogData, CatalogFile, PluginEntry};
use regex::Regex;

use crate::domain::error::CatalogError;

/// Fallback-command entry meaning "do not probe PATH".
pub const NO_FALLBACK: &str = "None";

/// Separator between fallback commands.
pub const COMMAND_SEPARATOR: char = '|';

pub const FIXTURE_CONF_PREFIX: &str = "test_";
pub const FIXTURE_MODULE_SUFFIX: &str = "_test";
pub const FIXTURE_CLASS_SUFFIX: &str = "Test";

/// One supported application, with its search pattern compiled.
#[derive(Debug, Clone)]
pub struct AppDescriptor {
    pub id: String,
    pub search: Regex,
    /// Fallback command names in catalog order; may contain [`NO_FALLBACK`].
    pub commands: Vec<String>,
    pub conf_name: String,
    pub module: String,
    pub class_name: String,
    pub collectd: Option<AgentPlugin>,
    pub telegraf: Option<AgentPlugin>,
}

impl AppDescriptor {
    fn from_entry(id: String, entry: PluginEntry) -> Result<Self, CatalogError> {
        let search = Regex::new(&entry.app_search).map_err(|e| CatalogError::InvalidPattern {
            app: id.clone(),
            reason: e.to_string(),
        })?;
        let commands = entry
            .command
            .split(COMMAND_SEPARATOR)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self {
            id,
            search,
            commands,
            conf_name: entry.conf_name,
            module: entry.module,
            class_name: entry.class_name,
            collectd: entry.collectd,
            telegraf: entry.telegraf,
        })
    }

    #[must_use]
    pub fn agent_plugin(&self, agent: Agent) -> Option<&AgentPlugin> {
        match agent {
            Agent::Collectd => self.collectd.as_ref(),
            Agent::Telegraf => self.telegraf.as_ref(),
        }
    }

    /// Installable for `agent` only when the per-agent sub-record exists.
    #[must_use]
    pub fn is_eligible(&self, agent: Agent) -> bool {
        self.agent_plugin(agent).is_some()
    }

    /// Commands worth probing on PATH. Empty when the only entry is the
    /// no-fallback sentinel.
    pub fn fallback_commands(&self) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .map(String::as_str)
            .filter(|c| *c != NO_FALLBACK)
    }

    /// Same application remapped into the fixture namespace used by
    /// unattended validation runs.
    #[must_use]
    pub fn fixture(&self) -> Self {
        Self {
            conf_name: format!("{FIXTURE_CONF_PREFIX}{}", self.conf_name),
            module: format!("{}{FIXTURE_MODULE_SUFFIX}", self.module),
            class_name: format!("{}{FIXTURE_CLASS_SUFFIX}", self.class_name),
            ..self.clone()
        }
    }
}

/// The full set of supported applications.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    apps: Vec<AppDescriptor>,
}

impl Catalog {
    /// Parse catalog JSON. `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if the text is not a catalog
    /// document, or [`CatalogError::InvalidPattern`] if a search pattern does
    /// not compile.
    pub fn parse(json: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Malformed {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
        Self::from_data(file.into_data())
    }

    /// Compile parsed catalog data.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPattern`] if a search pattern does not
    /// compile.
    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        let apps = data
            .plugins
            .into_iter()
            .map(|(id, entry)| AppDescriptor::from_entry(id, entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { apps })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}
