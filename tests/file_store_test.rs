use catalog::error::{CatalogError, StorageError};
use catalog::model::Product;
use catalog::query::Snapshot;
use catalog::repository::snapshot::SnapshotRepository;
use catalog::repository::ProductRepository;
use catalog::service::CatalogService;
use catalog::store::fs::FileStore;
use catalog::store::ProductStore;
use std::fs;
use tempfile::TempDir;

const SEED: &str = r#"[
  {"id": 1, "name": "Oil - Margarine", "quantity": 439, "code_value": "S82254D",
   "is_published": true, "expiration": "15/12/2021", "price": 71.42},
  {"id": 2, "name": "Pineapple - Canned", "quantity": 345, "code_value": "M4637HX",
   "is_published": true, "expiration": "27/09/2021", "price": 352.79},
  {"id": 3, "name": "Shrimp - Tiger", "quantity": 168, "code_value": "1ACF4HB",
   "is_published": false, "expiration": "30/05/2022", "price": 10.5}
]"#;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");
    fs::write(&path, SEED).unwrap();
    (dir, FileStore::new(path))
}

#[test]
fn test_read_all_keys_by_id() {
    let (_dir, store) = setup();
    let snapshot = store.read_all().unwrap();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[&2].code_value, "M4637HX");
    assert!(!snapshot[&3].is_published);
}

#[test]
fn test_write_read_roundtrip() {
    let (_dir, store) = setup();
    let before = store.read_all().unwrap();
    store.write_all(&before).unwrap();
    assert_eq!(store.read_all().unwrap(), before);
}

#[test]
fn test_write_leaves_no_tmp_files() {
    let (dir, store) = setup();
    store.write_all(&store.read_all().unwrap()).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_compact_output() {
    let (_dir, store) = setup();
    let compact = FileStore::new(store.path()).with_pretty(false);
    compact.write_all(&store.read_all().unwrap()).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw.lines().count(), 1);
    assert!(raw.starts_with("[{\"id\":1,"));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("missing").join("products.json"));
    assert!(matches!(
        store.write_all(&Snapshot::new()),
        Err(StorageError::Io { .. })
    ));
}

#[test]
fn test_repository_persists_every_mutation() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();
    let mut repo = SnapshotRepository::new(store);

    let saved = repo
        .insert(Product::new("Salt", 5, "SALT01", "01/01/2023", 1.25))
        .unwrap();
    assert_eq!(saved.id, 4);

    // A fresh store over the same file sees the insert
    let reopened = SnapshotRepository::new(FileStore::new(&path));
    assert_eq!(reopened.find_by_id(4).unwrap(), saved);

    repo.delete(1).unwrap();
    let ids: Vec<_> = reopened.list_all().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn test_repository_sees_external_edits() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();
    let repo = SnapshotRepository::new(store);
    assert_eq!(repo.list_all().unwrap().len(), 3);

    fs::write(&path, "[]").unwrap();
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn test_service_over_file_store() {
    let (_dir, store) = setup();
    let mut service = CatalogService::new(SnapshotRepository::new(store));

    let found = service.find_by_price_above(100.0).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 2);

    assert!(matches!(
        service.insert(Product::new("Dup", 1, "S82254D", "01/01/2020", 1.0)),
        Err(CatalogError::AlreadyExists(_))
    ));
    assert_eq!(service.list_all().unwrap().len(), 3);
}

#[test]
fn test_non_finite_price_keeps_file_readable() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();
    let before = fs::read_to_string(&path).unwrap();
    let mut service = CatalogService::new(SnapshotRepository::new(store));

    for price in [f64::NAN, f64::INFINITY] {
        assert!(matches!(
            service.insert(Product::new("Bad", 1, "BAD", "01/01/2020", price)),
            Err(CatalogError::InvalidPrice(_))
        ));
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert_eq!(service.list_all().unwrap().len(), 3);
}

#[test]
fn test_insert_after_max_id_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("products.json");
    let seed = format!(
        r#"[{{"id": {}, "name": "Last", "quantity": 1, "code_value": "LAST",
             "is_published": false, "expiration": "01/01/2020", "price": 1.0}}]"#,
        u64::MAX
    );
    fs::write(&path, &seed).unwrap();
    let mut service = CatalogService::new(SnapshotRepository::new(FileStore::new(&path)));

    assert!(matches!(
        service.insert(Product::new("Next", 1, "NEXT", "01/01/2020", 1.0)),
        Err(CatalogError::IdsExhausted)
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), seed);
}

#[test]
fn test_corrupt_file_surfaces_storage_error() {
    let (_dir, store) = setup();
    fs::write(store.path(), "[{\"id\": 1,").unwrap();
    let service = CatalogService::new(SnapshotRepository::new(store));
    assert!(matches!(
        service.list_all(),
        Err(CatalogError::Storage(StorageError::Serialization { .. }))
    ));
}
