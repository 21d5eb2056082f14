use oasis_core::db::open_db;
use oasis_core::{
    default_records, ContentRecord, ContentStore, FileSnapshotRepository, LoadOutcome,
    MemorySnapshotRepository, RecordPatch, SnapshotStorage, SqliteSnapshotRepository,
};

fn scenario_defaults() -> Vec<ContentRecord> {
    vec![
        ContentRecord::new("a", "Archway", "d1", "u1"),
        ContentRecord::new("b", "Tents", "d2", "u2"),
    ]
}

/// Reloads a fresh store over the same storage, as a page reload would.
fn reload<S: SnapshotStorage>(storage: S, defaults: Vec<ContentRecord>) -> ContentStore<S> {
    let mut store = ContentStore::with_defaults(storage, defaults);
    store.load();
    store
}

#[test]
fn scenario_update_then_reset() {
    let storage = MemorySnapshotRepository::new();
    let mut store = ContentStore::with_defaults(&storage, scenario_defaults());
    store.load();

    store.update("b", &RecordPatch::default().description("d2-new"));
    assert_eq!(
        store.records(),
        [
            ContentRecord::new("a", "Archway", "d1", "u1"),
            ContentRecord::new("b", "Tents", "d2-new", "u2"),
        ]
    );

    store.reset();
    assert_eq!(store.records(), scenario_defaults().as_slice());
}

#[test]
fn update_changes_only_the_target_field() {
    let mut store = ContentStore::open(MemorySnapshotRepository::new());
    let before = store.records().to_vec();

    store.update("4", &RecordPatch::default().description("Smaller feast"));

    for (old, new) in before.iter().zip(store.records()) {
        if old.id == "4" {
            assert_eq!(new.description, "Smaller feast");
            assert_eq!(
                ContentRecord {
                    description: old.description.clone(),
                    ..new.clone()
                },
                *old
            );
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn unknown_id_update_leaves_sequence_and_storage_untouched() {
    let storage = MemorySnapshotRepository::new();
    let mut store = ContentStore::new(&storage);
    store.update("4", &RecordPatch::default().image("x"));
    let snapshot_before = storage.raw();
    let records_before = store.records().to_vec();

    store.update("404", &RecordPatch::default().description("nobody"));

    assert_eq!(store.records(), records_before.as_slice());
    assert_eq!(storage.raw(), snapshot_before);
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn every_update_rewrites_the_full_sequence() {
    let storage = MemorySnapshotRepository::new();
    let mut store = ContentStore::new(&storage);
    store.update("1", &RecordPatch::default().description("one"));
    store.update("2", &RecordPatch::default().description("two"));

    let stored: serde_json::Value = serde_json::from_str(&storage.raw().unwrap()).unwrap();
    let stored = stored.as_array().unwrap();
    assert_eq!(stored.len(), default_records().len());
    assert_eq!(stored[0]["description"], "one");
    assert_eq!(stored[1]["description"], "two");
    assert_eq!(stored[7]["subItems"][0]["id"], "8-1");
}

#[test]
fn update_round_trips_through_sqlite_reload() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("oasis.sqlite3")).unwrap();

    let patch = RecordPatch::default()
        .description("Now with six games")
        .image("data:image/webp;base64,UklGRg==")
        .sub_image("8-3", "https://example.test/soccer.jpg");
    let expected = {
        let mut store = ContentStore::open(SqliteSnapshotRepository::new(&conn));
        store.update("8", &patch);
        store.records().to_vec()
    };

    let reloaded = ContentStore::open(SqliteSnapshotRepository::new(&conn));
    assert_eq!(reloaded.records(), expected.as_slice());
    assert_eq!(
        reloaded.get("8").unwrap().sub_item("8-3").unwrap().image,
        "https://example.test/soccer.jpg"
    );
}

#[test]
fn reset_clears_the_file_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("snapshot.json");

    let mut store = reload(FileSnapshotRepository::new(&path), scenario_defaults());
    store.update("a", &RecordPatch::default().image("fresh"));
    assert!(path.exists());

    let mut reloaded = reload(FileSnapshotRepository::new(&path), scenario_defaults());
    assert_eq!(reloaded.get("a").unwrap().image, "fresh");

    reloaded.reset();
    assert_eq!(reloaded.records(), scenario_defaults().as_slice());
    assert!(!path.exists());

    let mut after_reset = ContentStore::with_defaults(
        FileSnapshotRepository::new(&path),
        scenario_defaults(),
    );
    assert_eq!(after_reset.load(), LoadOutcome::NoSnapshot);
    assert_eq!(after_reset.records(), scenario_defaults().as_slice());
}

#[test]
fn reset_clears_the_sqlite_slot() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("oasis.sqlite3")).unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let mut store = ContentStore::new(&repo);
    store.update("10", &RecordPatch::default().description("Cacti only"));
    assert!(repo.raw().unwrap().is_some());

    store.reset();
    assert_eq!(repo.raw().unwrap(), None);
    assert_eq!(ContentStore::open(&repo).records(), default_records());
}

#[test]
fn stores_with_different_keys_do_not_share_slots() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("oasis.sqlite3")).unwrap();

    let mut main = ContentStore::new(SqliteSnapshotRepository::new(&conn));
    main.update("1", &RecordPatch::default().description("main edit"));

    let other = ContentStore::open(SqliteSnapshotRepository::with_key(&conn, "staging_items"));
    assert_eq!(other.records(), default_records());
    assert_eq!(other.storage().key(), "staging_items");
}
