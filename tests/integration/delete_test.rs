//! Recursive folder deletion end to end.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use notnotion_core::error::ErrorKind;
use notnotion_core::traits::store::DocumentStore;
use notnotion_core::types::{DocumentPath, FolderId};
use notnotion_service::SubtreeDeleter;
use notnotion_store::MemoryDocumentStore;

use crate::helpers::{FlakyStore, TestApp, uid};

fn position(ids: &[FolderId], id: &FolderId) -> usize {
    ids.iter().position(|x| x == id).expect("folder reported as deleted")
}

#[tokio::test]
async fn test_delete_tree_removes_everything() {
    let app = TestApp::new();
    let tree = app.seed_tree().await;
    let other = app.folder("Other", None).await;
    app.note(&other, "keep me").await;

    let report = app.folders.delete_recursive(&tree.a.id).await.unwrap();

    assert_eq!(report.folders_deleted, 4);
    assert_eq!(report.notes_deleted, 3);

    let ids = &report.deleted_folder_ids;
    assert_eq!(ids.last(), Some(&tree.a.id));
    assert!(position(ids, &tree.d.id) < position(ids, &tree.c.id));
    assert!(position(ids, &tree.b.id) < position(ids, &tree.a.id));

    // only the unrelated folder and its note remain
    assert_eq!(app.store.document_count(), 2);
    let roots = app.folders.list_roots().await.unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, other.id);
    assert_eq!(app.notes.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_leaf_folder() {
    let app = TestApp::new();
    let tree = app.seed_tree().await;

    let report = app.folders.delete_recursive(&tree.b.id).await.unwrap();
    assert_eq!(report.folders_deleted, 1);
    assert_eq!(report.notes_deleted, 2);
    assert_eq!(app.folders.count_children(&tree.a.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let app = TestApp::new();
    let tree = app.seed_tree().await;

    app.folders.delete_recursive(&tree.a.id).await.unwrap();
    let err = app.folders.delete_recursive(&tree.a.id).await.unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[tokio::test]
async fn test_signed_out_touches_nothing() {
    let app = TestApp::new();
    let tree = app.seed_tree().await;
    let before = app.store.document_count();

    app.session.sign_out();
    let err = app.folders.delete_recursive(&tree.a.id).await.unwrap_err();

    assert!(err.is(ErrorKind::Authentication));
    assert_eq!(app.store.document_count(), before);
}

#[tokio::test]
async fn test_children_written_by_other_clients_are_deleted() {
    let app = TestApp::new();
    let a = app.folder("A", None).await;

    // minimal record, no timestamps
    let legacy = FolderId::parse("legacy").unwrap();
    app.store
        .set(
            &DocumentPath::folder(&uid(), &legacy),
            json!({"name": "legacy", "parentFolderId": a.id.as_str()}),
        )
        .await
        .unwrap();

    let report = app.folders.delete_recursive(&a.id).await.unwrap();
    assert_eq!(report.folders_deleted, 2);
    assert_eq!(app.store.document_count(), 0);
}

#[tokio::test]
async fn test_failed_branch_keeps_ancestors() {
    let store = MemoryDocumentStore::new();
    let flaky = FlakyStore::new(store.clone());
    let app = TestApp::with_backend(store.clone(), flaky.clone());
    let tree = app.seed_tree().await;

    flaky.fail_delete(&DocumentPath::folder(&uid(), &tree.d.id));

    let err = app.folders.delete_recursive(&tree.a.id).await.unwrap_err();
    assert!(err.is(ErrorKind::RemoteOperation));

    // B's branch completed; D, C and A are still there
    let remaining: Vec<FolderId> = app
        .folders
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.id)
        .collect();
    assert!(!remaining.contains(&tree.b.id));
    for kept in [&tree.a.id, &tree.c.id, &tree.d.id] {
        assert!(remaining.contains(kept));
    }

    // D's note went before D's record failed
    assert!(app.notes.list_by_folder(&tree.d.id).await.unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_siblings_overlap_under_latency() {
    let latency = Duration::from_millis(100);
    let app = TestApp::with_store(MemoryDocumentStore::new().with_latency(latency));

    let root = app.folder("root", None).await;
    for i in 0..8 {
        let child = app.folder(&format!("child-{i}"), Some(&root)).await;
        app.note(&child, "n").await;
    }

    let started = tokio::time::Instant::now();
    let report = app.folders.delete_recursive(&root.id).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(report.folders_deleted, 9);
    assert_eq!(report.notes_deleted, 8);
    // sequential deletion would take well over 8 * 4 round trips
    assert!(elapsed < latency * 16, "took {elapsed:?}");
}

#[tokio::test]
async fn test_spawned_delete_signals_completion() {
    let app = TestApp::new();
    let tree = app.seed_tree().await;

    let deleter = app.folders.deleter().clone();
    let rx = deleter.spawn_delete_subtree(tree.a.id.clone());
    let report = rx.await.unwrap().unwrap();

    assert_eq!(report.folders_deleted, 4);
    assert_eq!(app.store.document_count(), 0);
}

#[tokio::test]
async fn test_standalone_deleter_matches_service() {
    let store = MemoryDocumentStore::new();
    let app = TestApp::with_store(store.clone());
    let tree = app.seed_tree().await;

    let deleter = SubtreeDeleter::new(Arc::new(store.clone()), Arc::new(app.session.clone()));
    let report = deleter.delete_subtree(&tree.c.id).await.unwrap();

    assert_eq!(report.deleted_folder_ids, vec![tree.d.id.clone(), tree.c.id.clone()]);
    assert_eq!(report.notes_deleted, 1);
}
