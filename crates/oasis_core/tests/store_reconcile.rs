use oasis_core::{
    default_records, reconcile, ContentRecord, ContentStore, LoadOutcome,
    MemorySnapshotRepository, PersistedRecord, RecordPatch, RepoError, RepoResult,
    SnapshotStorage, SubRecord,
};
use std::cell::Cell;
use std::collections::HashSet;

fn scenario_defaults() -> Vec<ContentRecord> {
    vec![
        ContentRecord::new("a", "Archway", "d1", "u1"),
        ContentRecord::new("b", "Tents", "d2", "u2"),
    ]
}

fn ids(records: &[ContentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

/// Storage whose every operation fails, counting attempts.
#[derive(Default)]
struct BrokenStorage {
    attempts: Cell<usize>,
}

impl BrokenStorage {
    fn fail<T>(&self) -> RepoResult<T> {
        self.attempts.set(self.attempts.get() + 1);
        Err(RepoError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "quota exceeded",
        )))
    }
}

impl SnapshotStorage for BrokenStorage {
    fn load(&self) -> RepoResult<Option<Vec<PersistedRecord>>> {
        self.fail()
    }

    fn save(&self, _records: &[ContentRecord]) -> RepoResult<()> {
        self.fail()
    }

    fn clear(&self) -> RepoResult<()> {
        self.fail()
    }
}

#[test]
fn load_without_snapshot_yields_defaults_in_order() {
    let mut store = ContentStore::new(MemorySnapshotRepository::new());
    assert_eq!(store.load(), LoadOutcome::NoSnapshot);
    assert_eq!(store.records(), default_records());
}

#[test]
fn stored_values_win_for_mutable_fields_but_not_for_name() {
    let storage = MemorySnapshotRepository::with_raw(
        r#"[{"id":"b","name":"Hijacked","description":"stored","image":"data:image/png;base64,AA=="}]"#,
    );
    let mut store = ContentStore::with_defaults(&storage, scenario_defaults());

    assert_eq!(store.load(), LoadOutcome::Restored { matched: 1 });
    let b = store.get("b").unwrap();
    assert_eq!(b.name, "Tents");
    assert_eq!(b.description, "stored");
    assert_eq!(b.image, "data:image/png;base64,AA==");
    assert_eq!(store.get("a").unwrap(), &scenario_defaults()[0]);
}

#[test]
fn id_set_is_closed_over_arbitrary_snapshots() {
    let snapshots = [
        r#"[]"#,
        r#"[{"id":"x"},{"id":"y","description":"extra"}]"#,
        r#"[{"id":"b"},{"id":"a"},{"id":"b"},{"id":"c"}]"#,
        r#"[{"id":"a","description":"only a"}]"#,
    ];
    let expected: HashSet<&str> = ["a", "b"].into_iter().collect();

    for raw in snapshots {
        let storage = MemorySnapshotRepository::with_raw(raw);
        let mut store = ContentStore::with_defaults(&storage, scenario_defaults());
        store.load();
        let actual: HashSet<&str> = ids(store.records()).into_iter().collect();
        assert_eq!(actual, expected, "snapshot {raw}");
        assert_eq!(ids(store.records()), ["a", "b"], "order for snapshot {raw}");
    }
}

#[test]
fn sub_item_shape_comes_from_defaults() {
    let storage = MemorySnapshotRepository::with_raw(
        r#"[{"id":"8","subItems":[{"id":"8-2","name":"Renamed","image":"new"},{"id":"8-99","name":"Ghost","image":"ghost"}]}]"#,
    );
    let store = {
        let mut store = ContentStore::new(&storage);
        store.load();
        store
    };

    let games = store.get("8").unwrap();
    let sub_ids: Vec<&str> = games.sub_items().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(sub_ids, ["8-1", "8-2", "8-3", "8-4"]);
    assert_eq!(games.sub_item("8-2").unwrap().image, "new");
    assert_eq!(games.sub_item("8-2").unwrap().name, "Table Tennis");
}

#[test]
fn stored_sub_items_on_a_record_without_them_are_ignored() {
    let storage =
        MemorySnapshotRepository::with_raw(r#"[{"id":"a","subItems":[{"id":"a-1","image":"x"}]}]"#);
    let mut store = ContentStore::with_defaults(&storage, scenario_defaults());
    store.load();
    assert_eq!(store.get("a").unwrap().sub_items, None);
}

#[test]
fn malformed_snapshot_is_discarded_without_touching_storage() {
    for raw in ["{not json", r#"{"id":"a"}"#, r#"[{"id":"a","description":7}]"#] {
        let storage = MemorySnapshotRepository::with_raw(raw);
        let mut store = ContentStore::with_defaults(&storage, scenario_defaults());

        assert_eq!(store.load(), LoadOutcome::Discarded, "snapshot {raw}");
        assert_eq!(store.records(), scenario_defaults().as_slice());
        assert_eq!(storage.raw().as_deref(), Some(raw));
    }
}

#[test]
fn storage_failures_never_reach_the_caller() {
    let storage = BrokenStorage::default();
    let mut store = ContentStore::with_defaults(&storage, scenario_defaults());

    assert_eq!(store.load(), LoadOutcome::Discarded);
    store.update("a", &RecordPatch::default().description("kept in memory"));
    assert_eq!(store.get("a").unwrap().description, "kept in memory");

    store.reset();
    assert_eq!(store.records(), scenario_defaults().as_slice());
    assert_eq!(storage.attempts.get(), 3);
}

#[test]
fn reconcile_is_pure_over_the_default_dataset() {
    let games = ContentRecord::new("g", "Games", "d", "u")
        .with_sub_items(vec![SubRecord::new("g-1", "Carrom", "u1")]);
    let defaults = vec![games];
    let stored: Vec<PersistedRecord> =
        serde_json::from_str(r#"[{"id":"g","image":"new"}]"#).unwrap();

    let merged = reconcile(&defaults, &stored);
    assert_eq!(merged[0].image, "new");
    assert_eq!(merged[0].sub_items(), defaults[0].sub_items());
    assert_eq!(defaults[0].image, "u");
}
