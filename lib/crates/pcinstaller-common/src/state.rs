//! Persisted install-state schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Agent, StateRecord};

/// Current on-disk layout version. Files without a `version` field are the
/// legacy layout (version 0).
pub const STATE_FILE_VERSION: u32 = 1;

/// Human-readable description written alongside the data.
pub const STATE_FILE_COMMENT: &str = "data.<AGENT>.<APP>.state is one of new | incomplete | installed; \
date is the local time of the last install attempt";

/// Per-application records for one agent.
pub type AppStates = BTreeMap<String, StateRecord>;

/// Install state for every agent, keyed by agent identifier then app id.
///
/// Agents the current run does not know about are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateMap(BTreeMap<String, AppStates>);

impl StateMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn agent(&self, agent: Agent) -> Option<&AppStates> {
        self.0.get(agent.as_str())
    }

    /// Records for `agent`, created empty if absent.
    pub fn agent_mut(&mut self, agent: Agent) -> &mut AppStates {
        self.0.entry(agent.as_str().to_string()).or_default()
    }

    #[must_use]
    pub fn record(&self, agent: Agent, app: &str) -> Option<&StateRecord> {
        self.agent(agent).and_then(|apps| apps.get(app))
    }

    /// Agent identifiers present in the map.
    pub fn agents(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Document written to the state file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFile {
    #[serde(default)]
    pub version: u32,
    /// Always rewritten on save; whatever was read is discarded.
    #[serde(default, skip_deserializing)]
    pub comment: String,
    pub data: StateMap,
}

impl StateFile {
    #[must_use]
    pub fn new(data: StateMap) -> Self {
        Self {
            version: STATE_FILE_VERSION,
            comment: STATE_FILE_COMMENT.to_string(),
            data,
        }
    }
}
