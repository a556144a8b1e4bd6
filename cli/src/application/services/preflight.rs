//! Application service: agent checks run before detection.

use anyhow::Result;
use pcinstaller_common::Agent;

use crate::application::ports::CommandProbe;
use crate::domain::AgentError;

/// Collectd integrations need the daemon installed first; telegraf is
/// checked by its own installer script.
///
/// # Errors
///
/// Returns [`AgentError::NotInstalled`] if the agent binary is not on PATH.
pub fn check_agent(probe: &impl CommandProbe, agent: Agent) -> Result<()> {
    if agent == Agent::Collectd && !probe.command_exists(agent.binary()) {
        return Err(AgentError::NotInstalled {
            agent: agent.to_string(),
            binary: agent.binary().to_string(),
        }
        .into());
    }
    Ok(())
}
