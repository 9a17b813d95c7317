use pinbook::store::backend::StorageBackend;
use pinbook::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("data"));
    (dir, backend)
}

#[test]
fn test_fs_backend_slot_io() {
    let (_dir, backend) = setup();

    // 1. Missing slot
    assert_eq!(backend.read_slot("pins").unwrap(), None);

    // 2. Write creates the directory
    backend.write_slot("pins", "[]").unwrap();
    assert!(backend.root().is_dir());
    assert_eq!(backend.read_slot("pins").unwrap().as_deref(), Some("[]"));

    // 3. Overwrite
    backend.write_slot("pins", "[1]").unwrap();
    assert_eq!(backend.read_slot("pins").unwrap().as_deref(), Some("[1]"));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.write_slot("pins", "Atomic").unwrap();

    let expected_path = backend.root().join("slot-pins.json");
    assert_eq!(backend.slot_path("pins").unwrap(), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "Atomic");

    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_slot_keys() {
    let (_dir, backend) = setup();
    assert!(backend.slot_keys().unwrap().is_empty());

    backend.write_slot("pins", "[]").unwrap();
    backend
        .write_slot("pins.corrupt-20240501T093000000Z", "{")
        .unwrap();
    fs::write(backend.root().join("config.json"), "{}").unwrap();
    fs::write(backend.root().join("notes.txt"), "x").unwrap();

    assert_eq!(
        backend.slot_keys().unwrap(),
        vec!["pins", "pins.corrupt-20240501T093000000Z"]
    );
}

#[test]
fn test_fs_backend_rejects_unsafe_keys() {
    let (dir, backend) = setup();
    assert!(backend.write_slot("../escape", "x").is_err());
    assert!(backend.read_slot("a/b").is_err());
    assert!(!dir.path().join("escape").exists());
    assert!(!dir.path().join("slot-..").exists());
}
