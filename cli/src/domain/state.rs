//! Install-state reconciliation.
//!
//! Reconciliation is an additive merge: it only ever inserts `New` records for
//! detected applications missing from the active agent. Records for other
//! agents and for applications no longer detected are left untouched.

use pcinstaller_common::{Agent, InstallState, StateMap, StateRecord};

/// Insert a `New` record for every id in `app_ids` missing under `agent`.
///
/// Returns the number of records inserted.
pub fn reconcile(map: &mut StateMap, agent: Agent, app_ids: &[String]) -> usize {
    let records = map.agent_mut(agent);
    let mut inserted = 0;
    for id in app_ids {
        if !records.contains_key(id) {
            records.insert(id.clone(), StateRecord::new());
            inserted += 1;
        }
    }
    inserted
}

/// A map holding only `New` records for `agent`.
#[must_use]
pub fn fresh(agent: Agent, app_ids: &[String]) -> StateMap {
    let mut map = StateMap::new();
    reconcile(&mut map, agent, app_ids);
    map
}

/// Record the outcome of an install attempt made at `date`.
pub fn record_attempt(map: &mut StateMap, agent: Agent, app: &str, succeeded: bool, date: &str) {
    map.agent_mut(agent)
        .insert(app.to_string(), StateRecord::attempted(succeeded, date));
}

/// Current state of `app`, `New` when unknown.
#[must_use]
pub fn state_of(map: &StateMap, agent: Agent, app: &str) -> InstallState {
    map.record(agent, app).map(|r| r.state).unwrap_or_default()
}
