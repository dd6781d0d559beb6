//! Data survives a snapshot round trip between runs.

use notnotion_store::{MemoryDocumentStore, snapshot};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_tree_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("store.json");

    let first = TestApp::new();
    let tree = first.seed_tree().await;
    snapshot::save(&first.store, &file).await.unwrap();

    let restored = MemoryDocumentStore::new();
    assert_eq!(snapshot::load(&restored, &file).await.unwrap(), 7);

    let second = TestApp::with_store(restored);
    assert_eq!(second.folders.count_children(&tree.a.id).await.unwrap(), 2);
    let report = second.folders.delete_recursive(&tree.a.id).await.unwrap();
    assert_eq!(report.notes_deleted, 3);

    snapshot::save(&second.store, &file).await.unwrap();
    let empty = MemoryDocumentStore::new();
    assert_eq!(snapshot::load(&empty, &file).await.unwrap(), 0);
}
