// Store handle tests
// Open/close lifecycle, point operations and the has() conflation.

use batchbench::{Error, KeyValueWriter, LevelDb, Store, StoreOptions};

fn mem_store() -> Store<LevelDb> {
    Store::open_with("mem_store", &StoreOptions::in_memory()).unwrap()
}

// =============================================================================
// Test 1: Opening at a creatable path succeeds
// =============================================================================
#[test]
fn open_creates_missing_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    assert!(!path.exists());

    let store = Store::<LevelDb>::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
    assert!(!store.is_closed());
}

// =============================================================================
// Test 2: Put, get, delete
// =============================================================================
#[test]
fn put_get_delete() {
    let store = mem_store();

    store.put(b"key", b"value").unwrap();
    assert_eq!(store.get(b"key").unwrap(), Some(b"value".to_vec()));
    assert!(store.has(b"key").unwrap());

    store.delete(b"key").unwrap();
    assert_eq!(store.get(b"key").unwrap(), None);
    assert!(!store.has(b"key").unwrap());
}

// =============================================================================
// Test 3: Overwrite returns newest value
// =============================================================================
#[test]
fn put_overwrites_previous_value() {
    let store = mem_store();
    store.put(b"key", b"first").unwrap();
    store.put(b"key", b"second").unwrap();

    assert_eq!(store.get(b"key").unwrap(), Some(b"second".to_vec()));
}

// =============================================================================
// Test 4: has() is false for missing keys AND for empty values
// =============================================================================
// Empty values are indistinguishable from absent keys through has().
#[test]
fn has_conflates_missing_and_empty() {
    let store = mem_store();
    assert!(!store.has(b"never_written").unwrap());

    store.put(b"empty", b"").unwrap();
    assert!(!store.has(b"empty").unwrap());

    store.put(b"full", b"x").unwrap();
    assert!(store.has(b"full").unwrap());
}

// =============================================================================
// Test 5: Delete of a missing key succeeds
// =============================================================================
#[test]
fn delete_nonexistent_key_succeeds() {
    let store = mem_store();
    store.delete(b"never_existed").unwrap();
    assert_eq!(store.get(b"never_existed").unwrap(), None);
}

// =============================================================================
// Test 6: Close is idempotent and later operations fail with Closed
// =============================================================================
#[test]
fn close_is_idempotent() {
    let mut store = mem_store();
    store.put(b"key", b"value").unwrap();

    store.close().unwrap();
    assert!(store.is_closed());
    store.close().unwrap();

    assert!(matches!(store.get(b"key"), Err(Error::Closed)));
    assert!(matches!(store.put(b"key", b"v"), Err(Error::Closed)));
    assert!(matches!(store.delete(b"key"), Err(Error::Closed)));
    assert!(matches!(store.has(b"key"), Err(Error::Closed)));
}

// =============================================================================
// Test 7: Data survives close and reopen
// =============================================================================
#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");

    {
        let mut store = Store::<LevelDb>::open(&path).unwrap();
        store.put(b"durable", b"data").unwrap();
        store.put(b"gone", b"soon").unwrap();
        store.delete(b"gone").unwrap();
        store.close().unwrap();
    }

    let store = Store::<LevelDb>::open(&path).unwrap();
    assert_eq!(store.get(b"durable").unwrap(), Some(b"data".to_vec()));
    assert_eq!(store.get(b"gone").unwrap(), None);
}

// =============================================================================
// Test 8: Corrupted database fails with Open error
// =============================================================================
#[test]
fn open_corrupted_store_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db");
    std::fs::create_dir(&path).unwrap();
    // CURRENT names a manifest that does not exist
    std::fs::write(path.join("CURRENT"), b"MANIFEST-000099\n").unwrap();

    match Store::<LevelDb>::open(&path) {
        Err(Error::Open { path: failed, message }) => {
            assert_eq!(failed, path);
            assert!(!message.is_empty());
        }
        Err(other) => panic!("expected Open error, got {other}"),
        Ok(_) => panic!("corrupted store should not open"),
    }
}

// =============================================================================
// Test 9: Path occupied by a regular file fails with Open error
// =============================================================================
#[test]
fn open_over_regular_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_a_dir");
    std::fs::write(&path, b"plain file").unwrap();

    let result = Store::<LevelDb>::open(&path);
    assert!(matches!(result, Err(Error::Open { .. })));
}

// =============================================================================
// Test 10: Missing store without create_if_missing fails
// =============================================================================
#[test]
fn open_without_create_fails_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let options = StoreOptions {
        create_if_missing: false,
        ..StoreOptions::default()
    };

    let result = Store::<LevelDb>::open_with(dir.path().join("absent"), &options);
    assert!(matches!(result, Err(Error::Open { .. })));
}

// =============================================================================
// Test 11: Store works as a replay target
// =============================================================================
#[test]
fn store_as_key_value_writer() {
    let mut store = mem_store();
    {
        let sink: &mut dyn KeyValueWriter = &mut store;
        sink.put(b"a", b"1").unwrap();
        sink.put(b"b", b"2").unwrap();
        sink.delete(b"a").unwrap();
    }

    assert_eq!(store.get(b"a").unwrap(), None);
    assert_eq!(store.get(b"b").unwrap(), Some(b"2".to_vec()));
}
