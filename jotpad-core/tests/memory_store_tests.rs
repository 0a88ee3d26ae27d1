use jotpad_core::{memory::MemoryStore, CoreError, StorageMode, Store, WritePolicy};

#[test]
fn default_policies_per_mode() {
    assert_eq!(
        StorageMode::Internal.default_policy(),
        WritePolicy::Overwrite
    );
    assert_eq!(StorageMode::External.default_policy(), WritePolicy::Append);
}

#[tokio::test]
async fn overwrite_roundtrip_appends_newline() {
    let store = MemoryStore::new(WritePolicy::Overwrite);
    store.save("hello").await.unwrap();
    assert_eq!(store.load().await.unwrap(), "hello\n");
}

#[tokio::test]
async fn append_keeps_entries_in_order() {
    let store = MemoryStore::new(WritePolicy::Append);
    store.save("first").await.unwrap();
    store.save("second").await.unwrap();
    assert_eq!(store.load().await.unwrap(), "first\nsecond\n");
}

#[tokio::test]
async fn load_before_save_is_not_found() {
    let store = MemoryStore::new(WritePolicy::Append);
    assert!(matches!(
        store.load().await.unwrap_err(),
        CoreError::NotFound(_)
    ));
}

#[tokio::test]
async fn empty_overwrite_is_a_no_op() {
    let store = MemoryStore::new(WritePolicy::Overwrite);
    store.save("keep me").await.unwrap();
    store.save("").await.unwrap();
    assert_eq!(store.load().await.unwrap(), "keep me\n");
}

#[tokio::test]
async fn share_is_unsupported() {
    let store = MemoryStore::new(WritePolicy::Append);
    assert!(matches!(
        store.share().await.unwrap_err(),
        CoreError::Unsupported(_)
    ));
}

#[tokio::test]
async fn info_tracks_writes() {
    let store = MemoryStore::new(WritePolicy::Append);

    let before = store.info().await.unwrap();
    assert!(!before.exists);
    assert!(before.location.is_none());

    store.save("hi").await.unwrap();

    let after = store.info().await.unwrap();
    assert!(after.exists);
    assert_eq!(after.bytes, 3); // "hi\n"
    assert!(after.modified_at.is_some());
}
