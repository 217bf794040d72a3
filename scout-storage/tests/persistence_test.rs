//! File-backed persistence tests: restart survival, corrupt/missing state
//! recovery, atomic overwrite behavior.

use scout_core::traits::IStateStore;
use scout_storage::JsonStateStore;

#[test]
fn state_survives_store_reopen() {
    let dir = tempfile::tempdir().unwrap();

    // Session 1: write state.
    {
        let store = JsonStateStore::open(dir.path()).unwrap();
        store
            .save("confidence_thresholds", r#"[[{"sport":"football","platform":"email"},0.65]]"#)
            .unwrap();
        // Store drops here.
    }

    // Session 2: verify state survived.
    {
        let store = JsonStateStore::open(dir.path()).unwrap();
        let loaded = store.load("confidence_thresholds").unwrap();
        assert!(loaded.is_some(), "state must survive reopen");
        assert!(loaded.unwrap().contains("football"));
    }
}

#[test]
fn missing_store_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("data").join("cache");
    let store = JsonStateStore::open(&nested).unwrap();
    store.save("k", "v").unwrap();
    assert!(nested.join("k.json").exists());
}

#[test]
fn keys_are_isolated_documents() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStateStore::open(dir.path()).unwrap();
    store.save("verification_history", "{}").unwrap();
    store.save("pattern_cache", "[]").unwrap();
    assert_eq!(store.load("verification_history").unwrap().as_deref(), Some("{}"));
    assert_eq!(store.load("pattern_cache").unwrap().as_deref(), Some("[]"));
}

#[test]
fn no_temp_files_left_after_save() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStateStore::open(dir.path()).unwrap();
    store.save("k", "v1").unwrap();
    store.save("k", "v2").unwrap();
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files must be renamed away");
}
