//! Process-signature matching.
//!
//! Pure: the process snapshot and the PATH probe are handed in by the caller.

use pcinstaller_common::Agent;
use regex::Regex;

use crate::domain::catalog::{AppDescriptor, Catalog};
use crate::domain::error::ConfigError;

/// Default exclusion: the one-line launcher script, which embeds every
/// application name in its own command line.
pub const DEFAULT_SELF_PATTERN: &str =
    r"root(.*)bash -c #!/bin/bash(.*)Install Wavefront Proxy and configures(.*)function logo";

/// Pattern identifying the installer's own invocation in the process list.
///
/// Matched at the start of a line; lines it matches are never evidence.
#[derive(Debug, Clone)]
pub struct SelfSignature {
    pattern: String,
    regex: Regex,
}

impl SelfSignature {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSelfPattern`] if `pattern` does not compile.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|e| {
            ConfigError::InvalidSelfPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Return the ids of the applications present on the host, in catalog order.
///
/// An application is present when its search pattern matches a process line
/// that is not the installer itself, or else when one of its fallback
/// commands resolves (`command_exists`). Applications without a sub-record for
/// `agent` are never reported.
pub fn detect(
    process_text: &str,
    catalog: &Catalog,
    agent: Agent,
    self_signature: &SelfSignature,
    command_exists: impl Fn(&str) -> bool,
) -> Vec<String> {
    let evidence: Vec<&str> = process_text
        .lines()
        .filter(|line| {
            let is_self = self_signature.matches(line);
            if is_self {
                tracing::debug!(line, "skipping self-detection match");
            }
            !is_self
        })
        .collect();

    catalog
        .iter()
        .filter(|app| app.is_eligible(agent))
        .filter(|app| is_present(app, &evidence, &command_exists))
        .map(|app| app.id.clone())
        .collect()
}

fn is_present(app: &AppDescriptor, evidence: &[&str], command_exists: impl Fn(&str) -> bool) -> bool {
    if let Some(line) = evidence.iter().find(|line| app.search.is_match(line)) {
        tracing::debug!(app = %app.id, line, "matched running process");
        return true;
    }
    app.fallback_commands().any(|cmd| {
        let found = command_exists(cmd);
        tracing::debug!(app = %app.id, command = cmd, found, "probed fallback command");
        found
    })
}
