use chrono::{Duration, TimeZone, Utc};
use pinbook::clock::ManualClock;
use pinbook::store::backend::StorageBackend;
use pinbook::store::fs_backend::FsBackend;
use pinbook::store::record_store::RecordStore;
use pinbook::store::DataStore;
use std::fs;
use std::rc::Rc;
use tempfile::TempDir;

fn open(dir: &TempDir) -> RecordStore<FsBackend> {
    let mut store = RecordStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
    store.load().unwrap();
    store
}

#[test]
fn records_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let clock = Rc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    ));

    let mut store = RecordStore::with_backend(FsBackend::new(dir.path().to_path_buf()))
        .with_clock(clock.clone());
    store.load().unwrap();
    let jane = store.add("Jane Doe", "A123456789").unwrap();
    store.add("Short", "12345").unwrap();
    clock.advance(Duration::milliseconds(1500));
    store.update(&jane.id, "Jane Smith", "A123456789").unwrap();

    let reopened = open(&dir);
    assert_eq!(reopened.list(), store.list());
    assert_eq!(reopened.list()[0].name, "Jane Smith");
    assert_eq!(reopened.list()[0].identifier, "A12 3456 789");
}

#[test]
fn slot_file_holds_the_collection() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let a = store.add("A", "1").unwrap();
    store.add("B", "2").unwrap();
    store.delete(&a.id).unwrap();

    let raw = fs::read_to_string(dir.path().join("slot-pins.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "B");
    assert_eq!(items[0]["pin"], "2");
    assert!(items[0]["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn corrupt_file_is_kept_aside() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("slot-pins.json"), "not json at all").unwrap();

    let mut store = RecordStore::with_backend(FsBackend::new(dir.path().to_path_buf()));
    let report = store.load().unwrap();
    assert!(store.list().is_empty());

    let backup = report.backup_key.unwrap();
    let backup_file = dir.path().join(format!("slot-{}.json", backup));
    assert_eq!(fs::read_to_string(backup_file).unwrap(), "not json at all");

    store.add("A", "1").unwrap();
    assert_eq!(open(&dir).list().len(), 1);
}

#[test]
fn legacy_identifier_field_is_read() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("slot-pins.json"),
        r#"[{"id":"legacy-1","name":"Old","identifier":"12345",
            "createdAt":"2023-01-01T00:00:00Z","updatedAt":"2023-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    let store = open(&dir);
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].identifier, "12345");
}

#[test]
fn repeated_sessions_over_a_corrupt_file_back_it_up_once() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("slot-pins.json"), "garbage").unwrap();
    let clock = Rc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
    ));

    for session in 0..5 {
        clock.advance(Duration::seconds(1));
        let mut store = RecordStore::with_backend(FsBackend::new(dir.path().to_path_buf()))
            .with_clock(clock.clone());
        let report = store.load().unwrap();
        assert!(store.list().is_empty());
        assert_eq!(report.backup_key.is_some(), session == 0);
    }

    let keys = FsBackend::new(dir.path().to_path_buf()).slot_keys().unwrap();
    assert_eq!(keys, vec!["pins", "pins.corrupt-20240501T093001000Z"]);
    assert_eq!(
        fs::read_to_string(dir.path().join("slot-pins.corrupt-20240501T093001000Z.json")).unwrap(),
        "garbage"
    );
}
