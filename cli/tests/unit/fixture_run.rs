//! Unattended fixture runs.

#![allow(clippy::expect_used)]

use pcinstaller_cli::application::ports::InstallEnv;
use pcinstaller_cli::application::services::dispatch::{Dispatcher, InstallerRegistry, Namespace};
use pcinstaller_cli::application::services::fixture_run::run_fixtures;
use pcinstaller_common::Agent;

use crate::fakes::{
    Behaviour, Log, RecordingReporter, RecordingRunner, catalog, config,
    fake_factory, ids, set_behaviour,
};

#[test]
fn reports_passed_and_unresolvable_fixtures() {
    set_behaviour(Behaviour::Succeed);
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config(Agent::Collectd, tmp.path());
    let log = Log::default();
    let runner = RecordingRunner { log: log.clone(), code: 0 };
    let mut registry = InstallerRegistry::new();
    registry.register(
        Agent::Collectd,
        Namespace::Fixture,
        "mysql_plugin_test",
        "MySQLConfiguratorTest",
        fake_factory,
    );
    let dispatcher = Dispatcher::new(&registry, &config, InstallEnv { runner: &runner });

    let report = run_fixtures(
        &ids(&["apache", "mysql"]),
        &catalog(),
        &dispatcher,
        &RecordingReporter(log.clone()),
    )
    .expect("fixture run");

    assert_eq!(report.passed, vec!["mysql"]);
    assert_eq!(report.failed, vec!["apache"]);
    assert!(!report.all_passed());
}

#[test]
fn builtin_fixtures_write_under_app_dir() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = config(Agent::Collectd, tmp.path());
    let log = Log::default();
    let runner = RecordingRunner { log: log.clone(), code: 0 };
    let registry = InstallerRegistry::builtin();
    let dispatcher = Dispatcher::new(&registry, &config, InstallEnv { runner: &runner });

    let report = run_fixtures(
        &ids(&["apache", "mysql"]),
        &catalog(),
        &dispatcher,
        &RecordingReporter(log.clone()),
    )
    .expect("fixture run");

    assert!(report.all_passed());
    let written = tmp.path().join("test").join("collectd").join("test_mysql.conf");
    let body = std::fs::read_to_string(written).expect("fixture config written");
    assert!(body.starts_with("LoadPlugin mysql"));
    assert!(tmp.path().join("test/collectd/test_apache.conf").exists());
    assert_eq!(log.count("run: "), 0, "fixtures never restart the agent");
}
