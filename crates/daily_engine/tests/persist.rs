use std::fs;

use daily_core::AskedMemory;
use daily_engine::{AtomicFileWriter, InMemoryStore, JsonFileStore, MemoryStore};
use tempfile::TempDir;

fn init_logging() {
    daily_logging::initialize_for_tests();
}

#[test]
fn saved_history_round_trips_in_order() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path().join("asked_questions.json"));

    store.save(&AskedMemory::from(vec![1, 2, 3])).unwrap();
    assert_eq!(store.load().into_vec(), vec![1, 2, 3]);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "[1,2,3]");
}

#[test]
fn missing_file_loads_as_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path().join("absent.json"));
    assert!(store.load().is_empty());
}

#[test]
fn corrupt_file_loads_as_empty() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("asked_questions.json");
    let store = JsonFileStore::new(&path);

    for content in ["not json", "", "{\"ids\": [1]}", "[1, -2]", "[1, \"two\"]"] {
        fs::write(&path, content).unwrap();
        assert!(store.load().is_empty(), "content {content:?} should be ignored");
    }
}

#[test]
fn save_overwrites_corrupt_history() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("asked_questions.json");
    fs::write(&path, "not json").unwrap();

    let store = JsonFileStore::new(&path);
    store.save(&AskedMemory::from(vec![9])).unwrap();
    assert_eq!(store.load().into_vec(), vec![9]);
}

#[test]
fn history_tolerates_duplicates_and_python_spacing() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("asked_questions.json");
    fs::write(&path, "[4, 4, 17]").unwrap();

    let memory = JsonFileStore::new(&path).load();
    assert_eq!(memory.ids(), &[4, 4, 17]);
}

#[test]
fn save_creates_missing_parent_directory() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("state").join("asked.json");
    let store = JsonFileStore::new(&path);

    store.save(&AskedMemory::from(vec![5])).unwrap();
    assert!(path.is_file());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("doc.json");
    let writer = AtomicFileWriter::new(target.clone());

    writer.write(b"[1]").unwrap();
    writer.write(b"[1,2]").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "[1,2]");

    let leftovers = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let writer = AtomicFileWriter::new(blocker.join("asked.json"));
    assert!(writer.write(b"[1]").is_err());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
}

#[test]
fn in_memory_store_counts_saves() {
    let store = InMemoryStore::new(AskedMemory::from(vec![1]));
    assert_eq!(store.load().ids(), &[1]);

    store.save(&AskedMemory::from(vec![1, 2])).unwrap();
    assert_eq!(store.snapshot().ids(), &[1, 2]);
    assert_eq!(store.save_count(), 1);
}
