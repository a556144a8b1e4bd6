//! Interactive session scenarios driven through scripted prompts.

#![allow(clippy::expect_used)]

use anyhow::Result;
use pcinstaller_cli::application::ports::InstallEnv;
use pcinstaller_cli::application::services::dispatch::{Dispatcher, InstallerRegistry, Namespace};
use pcinstaller_cli::application::services::menu::{CONFIRM_PROMPT, MenuSession, SELECTION_PROMPT};
use pcinstaller_cli::domain::error::is_interrupt;
use pcinstaller_cli::domain::state::{record_attempt, state_of};
use pcinstaller_common::{Agent, InstallState, StateMap};

use crate::fakes::{
    Behaviour, FixedClock, Log, MemoryStore, RecordingRunner, RecordingView, ScriptedPrompter,
    catalog, config, fake_factory, ids, set_behaviour,
};

fn registry(with_apache: bool) -> InstallerRegistry {
    let mut registry = InstallerRegistry::new();
    registry.register(
        Agent::Collectd,
        Namespace::Production,
        "mysql_plugin",
        "MySQLConfigurator",
        fake_factory,
    );
    if with_apache {
        registry.register(
            Agent::Collectd,
            Namespace::Production,
            "apache_plugin",
            "ApacheConfigurator",
            fake_factory,
        );
    }
    registry
}

/// Run a collectd session over `apache` (0) and `mysql` (1).
fn run_session(
    prompter: &ScriptedPrompter,
    store: &MemoryStore,
    registry: &InstallerRegistry,
    log: &Log,
) -> (Result<usize>, RecordingView) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config(Agent::Collectd, tmp.path());
    let catalog = catalog();
    let runner = RecordingRunner {
        log: log.clone(),
        code: 0,
    };
    let dispatcher = Dispatcher::new(registry, &config, InstallEnv { runner: &runner });
    let view = RecordingView::new(log);
    let apps = ids(&["apache", "mysql"]);
    let result = MenuSession {
        agent: Agent::Collectd,
        apps: &apps,
        catalog: &catalog,
        prompter,
        store,
        view: &view,
        dispatcher: &dispatcher,
        clock: &FixedClock,
    }
    .run();
    (result, view)
}

fn installed(app: &str) -> StateMap {
    let mut map = StateMap::new();
    record_attempt(&mut map, Agent::Collectd, app, true, "Thu Oct 15 08:00:00 2026");
    map
}

#[test]
fn confirmed_install_is_recorded_and_counted() {
    set_behaviour(Behaviour::Succeed);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["1", "yes"], &log);
    let store = MemoryStore::default();

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(result.expect("session"), 1);
    let map = store.map.borrow();
    let record = map.record(Agent::Collectd, "mysql").expect("mysql record");
    assert_eq!(record.state, InstallState::Installed);
    assert_eq!(record.date.as_deref(), Some("Fri Oct 16 09:30:00 2026"));
    assert_eq!(state_of(&map, Agent::Collectd, "apache"), InstallState::New);
    assert_eq!(store.saves.get(), 1);
    assert_eq!(log.count("run: fake-install mysql"), 1);
    assert!(log.events().contains(&"outcome: mysql Installed".to_string()));
}

#[test]
fn prompts_use_fixed_wording() {
    set_behaviour(Behaviour::Succeed);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", "n"], &log);

    let _ = run_session(&prompter, &MemoryStore::default(), &registry(true), &log);

    let events = log.events();
    assert!(events.contains(&format!("input: {SELECTION_PROMPT}")));
    assert!(events.contains(&format!("confirm: {CONFIRM_PROMPT}")));
    assert!(events.contains(&"selected: (0) apache".to_string()));
}

#[test]
fn reinstall_warns_about_overwrite_before_confirming() {
    set_behaviour(Behaviour::Succeed);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["1", "y"], &log);
    let store = MemoryStore::with(installed("mysql"));

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(result.expect("session"), 1);
    let warning = log.position("overwrite: mysql.conf").expect("overwrite warning");
    let confirm = log.position("confirm: ").expect("confirm prompt");
    assert!(warning < confirm);
}

#[test]
fn fresh_install_shows_no_overwrite_warning() {
    set_behaviour(Behaviour::Succeed);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", "y"], &log);

    let _ = run_session(&prompter, &MemoryStore::default(), &registry(true), &log);

    assert_eq!(log.count("overwrite: "), 0);
}

#[test]
fn invalid_selections_change_nothing() {
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["7", "abc", "-1", "1.0", "QUIT"], &log);
    let store = MemoryStore::default();

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(result.expect("session"), 0);
    assert_eq!(log.count("invalid"), 4);
    assert_eq!(log.count("confirm: "), 0);
    assert_eq!(store.saves.get(), 0);
}

#[test]
fn declining_skips_the_installer() {
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", "no", "exit"], &log);
    let store = MemoryStore::default();

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(result.expect("session"), 0);
    assert_eq!(log.count("run: "), 0);
    assert_eq!(store.saves.get(), 0);
    assert_eq!(log.count("menu"), 2);
}

#[test]
fn failed_install_is_incomplete() {
    set_behaviour(Behaviour::Fail);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", ""], &log);
    let store = MemoryStore::default();

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(result.expect("session"), 0);
    let map = store.map.borrow();
    let record = map.record(Agent::Collectd, "apache").expect("apache record");
    assert_eq!(record.state, InstallState::Incomplete);
    assert!(record.date.is_some());
}

#[test]
fn installer_error_is_contained() {
    set_behaviour(Behaviour::Raise);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", "y", "q"], &log);
    let store = MemoryStore::default();

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(result.expect("session continues"), 0);
    assert_eq!(
        state_of(&store.map.borrow(), Agent::Collectd, "apache"),
        InstallState::Incomplete
    );
    assert!(log.position("warn: The apache installer failed").is_some());
    assert_eq!(log.count("menu"), 2);
}

#[test]
fn unresolvable_installer_is_contained() {
    set_behaviour(Behaviour::Succeed);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", "y", "1", "y"], &log);
    let store = MemoryStore::default();

    let (result, _) = run_session(&prompter, &store, &registry(false), &log);

    assert_eq!(result.expect("session continues"), 1);
    let map = store.map.borrow();
    assert_eq!(state_of(&map, Agent::Collectd, "apache"), InstallState::Incomplete);
    assert_eq!(state_of(&map, Agent::Collectd, "mysql"), InstallState::Installed);
    assert!(
        log.events()
            .iter()
            .any(|e| e.contains("No installer registered for COLLECTD apache_plugin.ApacheConfigurator"))
    );
}

#[test]
fn interrupt_inside_installer_ends_session() {
    set_behaviour(Behaviour::Interrupt);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", "y"], &log);
    let store = MemoryStore::default();

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    let err = result.expect_err("interrupt escapes");
    assert!(is_interrupt(&err));
    assert_eq!(store.saves.get(), 0);
}

#[test]
fn interrupt_at_prompt_ends_session() {
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&[], &log).then_interrupt();

    let (result, _) = run_session(&prompter, &MemoryStore::default(), &registry(true), &log);

    assert!(is_interrupt(&result.expect_err("interrupt escapes")));
}

#[test]
fn closed_input_ends_session() {
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&[], &log);

    let (result, _) = run_session(&prompter, &MemoryStore::default(), &registry(true), &log);

    assert_eq!(result.expect("session"), 0);
    assert_eq!(log.events()[..2], ["intro".to_string(), "menu".to_string()]);
}

#[test]
fn closed_input_at_confirmation_declines() {
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["1"], &log);
    let store = MemoryStore::default();

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(result.expect("session"), 0);
    assert_eq!(log.count("run: "), 0);
}

#[test]
fn save_failure_warns_and_continues() {
    set_behaviour(Behaviour::Succeed);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", "y", "1", "y"], &log);
    let store = MemoryStore::default();
    store.fail_saves.set(true);

    let (result, _) = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(result.expect("session"), 2);
    assert_eq!(log.count("warn: Cannot write to"), 2);
    assert_eq!(log.count("menu"), 3);
}

#[test]
fn menu_reflects_previous_iteration() {
    set_behaviour(Behaviour::Succeed);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["1", "y"], &log);
    let store = MemoryStore::default();

    let (_, view) = run_session(&prompter, &store, &registry(true), &log);

    let rows = view.last_menu();
    assert_eq!(rows[0].app, "apache");
    assert_eq!(rows[0].state, InstallState::New);
    assert_eq!(rows[1].state, InstallState::Installed);
    assert_eq!(rows[1].date.as_deref(), Some("Fri Oct 16 09:30:00 2026"));
}

#[test]
fn other_agents_survive_a_save() {
    set_behaviour(Behaviour::Succeed);
    let log = Log::default();
    let prompter = ScriptedPrompter::new(&["0", "y"], &log);
    let mut map = StateMap::new();
    record_attempt(&mut map, Agent::Telegraf, "redis", true, "earlier");
    let store = MemoryStore::with(map);

    let _ = run_session(&prompter, &store, &registry(true), &log);

    assert_eq!(
        state_of(&store.map.borrow(), Agent::Telegraf, "redis"),
        InstallState::Installed
    );
}
