use orggest_core::{
    export_file_name, ImportMode, MemorySlot, NewRecord, RecordSeed, RecordStore, StoreError,
    DEFAULT_CATEGORY, DEFAULT_TITLE,
};
use std::collections::HashSet;

fn draft(title: &str, category: &str) -> NewRecord {
    NewRecord {
        title: title.to_string(),
        category: category.to_string(),
        ..NewRecord::default()
    }
}

fn seed(id: Option<&str>, title: Option<&str>) -> RecordSeed {
    RecordSeed {
        id: id.map(str::to_string),
        title: title.map(str::to_string),
        ..RecordSeed::default()
    }
}

#[test]
fn import_normalizes_missing_fields() {
    let mut store = RecordStore::open(MemorySlot::new());

    let count = store
        .import_merge(vec![RecordSeed::default()], ImportMode::Replace)
        .unwrap();
    assert_eq!(count, 1);

    let record = &store.list_all()[0];
    assert!(!record.id.is_empty());
    assert_eq!(record.title, DEFAULT_TITLE);
    assert_eq!(record.category, DEFAULT_CATEGORY);
    assert_eq!(record.owner, "");
    assert_eq!(record.date, "");
    assert_eq!(record.description, "");
    assert!(!record.created_at.is_empty());
}

#[test]
fn import_preserves_supplied_identity() {
    let mut store = RecordStore::open(MemorySlot::new());

    store
        .import_merge(
            vec![RecordSeed {
                id: Some("imported-1".to_string()),
                title: Some("Ledger".to_string()),
                category: Some("Finance".to_string()),
                created_at: Some("2025-06-01T00:00:00.000Z".to_string()),
                ..RecordSeed::default()
            }],
            ImportMode::Merge,
        )
        .unwrap();

    let record = store.get("imported-1").expect("imported id should survive");
    assert_eq!(record.created_at, "2025-06-01T00:00:00.000Z");
}

#[test]
fn replace_mode_swaps_the_whole_list() {
    let mut store = RecordStore::open(MemorySlot::new());
    store.create(draft("Old", "General")).unwrap();

    let count = store
        .import_merge(
            vec![seed(Some("a"), Some("First")), seed(Some("b"), Some("Second"))],
            ImportMode::Replace,
        )
        .unwrap();

    assert_eq!(count, 2);
    let titles: Vec<&str> = store.list_all().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[test]
fn merge_mode_keeps_existing_and_drops_colliding_ids() {
    let mut store = RecordStore::open(MemorySlot::new());
    let existing = store.create(draft("Existing", "General")).unwrap();

    let count = store
        .import_merge(
            vec![
                seed(Some(existing.id.as_str()), Some("Impostor")),
                seed(Some("fresh"), Some("Newcomer")),
            ],
            ImportMode::Merge,
        )
        .unwrap();

    assert_eq!(count, 1);
    assert_eq!(store.list_all().len(), 2);
    // The colliding import never overwrites the existing record.
    assert_eq!(store.get(&existing.id).unwrap().title, "Existing");
    assert_eq!(store.get("fresh").unwrap().title, "Newcomer");

    let ids: HashSet<&str> = store.list_all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), store.list_all().len());
}

#[test]
fn merge_mode_never_collides_generated_ids_within_one_batch() {
    let mut store = RecordStore::open(MemorySlot::new());

    let count = store
        .import_merge(
            vec![RecordSeed::default(), RecordSeed::default(), RecordSeed::default()],
            ImportMode::Merge,
        )
        .unwrap();

    assert_eq!(count, 3);
    let ids: HashSet<&str> = store.list_all().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn import_json_accepts_a_list_document() {
    let mut store = RecordStore::open(MemorySlot::new());

    let count = store
        .import_json(
            r#"[{"title": "From file", "category": "Imports"}, {}]"#,
            ImportMode::Merge,
        )
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(store.list_all()[0].title, "From file");
    assert_eq!(store.list_all()[1].title, DEFAULT_TITLE);
}

#[test]
fn import_json_rejects_non_list_content() {
    let mut store = RecordStore::open(MemorySlot::new());
    store.create(draft("Untouched", "General")).unwrap();

    let err = store
        .import_json(r#"{"title": "not a list"}"#, ImportMode::Replace)
        .unwrap_err();
    assert!(matches!(err, StoreError::ImportFormat(_)));

    let err = store.import_json("not json at all", ImportMode::Merge).unwrap_err();
    assert!(matches!(err, StoreError::ImportFormat(_)));

    // Aborted imports leave the list untouched.
    assert_eq!(store.list_all().len(), 1);
    assert_eq!(store.list_all()[0].title, "Untouched");
}

#[test]
fn export_round_trips_through_import() {
    let mut store = RecordStore::open(MemorySlot::new());
    store.create(draft("Report", "Finance")).unwrap();
    store.create(draft("Inventory", "Operations")).unwrap();
    let exported = store.export_json().unwrap();

    let mut other = RecordStore::open(MemorySlot::new());
    let count = other.import_json(&exported, ImportMode::Replace).unwrap();

    assert_eq!(count, 2);
    assert_eq!(other.list_all(), store.list_all());
}

#[test]
fn export_file_name_carries_the_current_date() {
    let name = export_file_name();
    assert!(name.starts_with("orggest_records_"));
    assert!(name.ends_with(".json"));

    // orggest_records_YYYY-MM-DD.json
    let date = &name["orggest_records_".len()..name.len() - ".json".len()];
    assert_eq!(date.len(), 10);
    assert_eq!(date.as_bytes()[4], b'-');
    assert_eq!(date.as_bytes()[7], b'-');
}
