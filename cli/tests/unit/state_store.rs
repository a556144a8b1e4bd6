//! `JsonStateStore` against real files in temporary directories.

#![allow(clippy::expect_used)]

use pcinstaller_cli::application::ports::InstallStateStore;
use pcinstaller_cli::domain::state::{record_attempt, state_of};
use pcinstaller_cli::infra::state::JsonStateStore;
use pcinstaller_common::{Agent, InstallState, StateMap};

use crate::fakes::ids;

fn store_in(dir: &tempfile::TempDir) -> JsonStateStore {
    JsonStateStore::new(dir.path().join("install_state.json"))
}

#[test]
fn missing_file_yields_new_records_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);

    let map = store
        .load(Agent::Collectd, &ids(&["mysql", "apache"]))
        .expect("load");

    assert_eq!(state_of(&map, Agent::Collectd, "mysql"), InstallState::New);
    assert_eq!(state_of(&map, Agent::Collectd, "apache"), InstallState::New);
    assert!(!store.path().exists());
}

#[test]
fn saved_state_is_read_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    let mut map = store.load(Agent::Collectd, &ids(&["mysql"])).expect("load");
    record_attempt(&mut map, Agent::Collectd, "mysql", true, "Fri Oct 16 09:30:00 2026");
    record_attempt(&mut map, Agent::Telegraf, "redis", false, "Fri Oct 16 09:31:00 2026");

    store.save(&map).expect("save");
    let reread = store.load(Agent::Collectd, &ids(&["mysql"])).expect("reload");

    assert_eq!(reread, map);
    let text = std::fs::read_to_string(store.path()).expect("read file");
    let json: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(json["version"], 1);
    assert_eq!(json["data"]["COLLECTD"]["mysql"]["state"], "installed");
    assert_eq!(json["data"]["TELEGRAF"]["redis"]["state"], "incomplete");
}

#[test]
fn load_adds_newly_detected_apps_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    let mut map = StateMap::new();
    record_attempt(&mut map, Agent::Collectd, "mysql", true, "earlier");
    record_attempt(&mut map, Agent::Collectd, "nginx", false, "earlier");
    store.save(&map).expect("save");

    let loaded = store
        .load(Agent::Collectd, &ids(&["mysql", "redis"]))
        .expect("load");

    assert_eq!(state_of(&loaded, Agent::Collectd, "mysql"), InstallState::Installed);
    assert_eq!(state_of(&loaded, Agent::Collectd, "nginx"), InstallState::Incomplete);
    let redis = loaded.record(Agent::Collectd, "redis").expect("redis added");
    assert_eq!(redis.state, InstallState::New);
    assert_eq!(redis.date, None);
}

#[test]
fn repeated_loads_agree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    let apps = ids(&["mysql", "apache"]);

    let first = store.load(Agent::Telegraf, &apps).expect("first");
    let second = store.load(Agent::Telegraf, &apps).expect("second");

    assert_eq!(first, second);
}

#[test]
fn legacy_integer_states_are_understood() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    std::fs::write(
        store.path(),
        r#"{
            "_comment": "INSTALLED = 0, NEW = 1, INCOMPLETE = 2",
            "data": {
                "COLLECTD": {
                    "mysql": {"state": 0, "date": "Mon Jan  4 10:00:00 2016"},
                    "apache": {"state": 2, "date": "Mon Jan  4 10:05:00 2016"},
                    "nginx": {"state": 1}
                }
            }
        }"#,
    )
    .expect("seed legacy file");

    let map = store
        .load(Agent::Collectd, &ids(&["mysql", "apache", "nginx"]))
        .expect("load");

    assert_eq!(state_of(&map, Agent::Collectd, "mysql"), InstallState::Installed);
    assert_eq!(state_of(&map, Agent::Collectd, "apache"), InstallState::Incomplete);
    assert_eq!(state_of(&map, Agent::Collectd, "nginx"), InstallState::New);
}

#[test]
fn corrupt_file_fails_closed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    std::fs::write(store.path(), "{\"data\": {\"COLLECTD\": ").expect("seed");

    let err = store
        .load(Agent::Collectd, &ids(&["mysql"]))
        .expect_err("parse failure");

    assert!(format!("{err}").contains("Invalid install state file"));
}

#[test]
fn newer_layout_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    std::fs::write(store.path(), r#"{"version": 9, "data": {}}"#).expect("seed");

    let err = store
        .load(Agent::Collectd, &ids(&["mysql"]))
        .expect_err("unsupported version");

    assert!(format!("{err}").contains("version 9"));
}

#[test]
fn unreadable_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A directory in place of the file cannot be read as a file.
    let path = dir.path().join("install_state.json");
    std::fs::create_dir(&path).expect("mkdir");
    let store = JsonStateStore::new(path);

    let map = store.load(Agent::Collectd, &ids(&["mysql"])).expect("load");

    assert_eq!(state_of(&map, Agent::Collectd, "mysql"), InstallState::New);
}

#[test]
fn unwritable_destination_reports_write_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").expect("seed file");
    let store = JsonStateStore::new(blocker.join("install_state.json"));

    let err = store.save(&StateMap::new()).expect_err("write failure");

    let msg = format!("{err}");
    assert!(msg.starts_with("Cannot write to"));
    assert!(msg.contains("Installed state is not updated."));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStateStore::new(dir.path().join("etc/collectd/install_state.json"));

    store.save(&StateMap::new()).expect("save");

    assert!(store.path().exists());
}

#[test]
fn non_utf8_content_fails_closed_and_keeps_other_agents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    let mut seed =
        br#"{"version": 1, "data": {"TELEGRAF": {"redis": {"state": "installed", "date": "caf"#
            .to_vec();
    seed.push(0xE9);
    seed.extend_from_slice(br#""}}}}"#);
    std::fs::write(store.path(), &seed).expect("seed");

    let err = store
        .load(Agent::Collectd, &ids(&["mysql"]))
        .expect_err("invalid bytes are not an empty state");

    assert!(format!("{err}").contains("Invalid install state file"));
    assert_eq!(std::fs::read(store.path()).expect("read back"), seed);
}

#[cfg(unix)]
#[test]
fn save_writes_through_a_symlinked_state_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let real = dir.path().join("real_state.json");
    std::fs::write(&real, "{}").expect("seed target");
    let link = dir.path().join("install_state.json");
    std::os::unix::fs::symlink(&real, &link).expect("symlink");
    let store = JsonStateStore::new(link.clone());
    let mut map = StateMap::new();
    record_attempt(&mut map, Agent::Telegraf, "redis", true, "Fri Oct 16 09:30:00 2026");

    store.save(&map).expect("save");

    let meta = std::fs::symlink_metadata(&link).expect("link metadata");
    assert!(meta.file_type().is_symlink());
    let text = std::fs::read_to_string(&real).expect("read target");
    assert!(text.contains("TELEGRAF"));
}

#[cfg(unix)]
#[test]
fn save_keeps_existing_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    std::fs::write(store.path(), "{}").expect("seed");
    std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o640))
        .expect("chmod");

    store.save(&StateMap::new()).expect("save");

    let mode = std::fs::metadata(store.path()).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o640);
}
