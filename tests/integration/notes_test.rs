//! Notes, search filtering and profiles across services.

use std::sync::Arc;

use notnotion_core::error::ErrorKind;
use notnotion_entity::profile::Avatar;
use notnotion_service::{NotesAdapter, ProfileService, filter_notes};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_search_over_all_notes() {
    let app = TestApp::new();
    let tree = app.seed_tree().await;
    app.note(&tree.c, "Weekly Review").await;
    app.note(&tree.a, "review backlog").await;

    let all = app.notes.list_all().await.unwrap();
    assert_eq!(all.len(), 5);

    let mut adapter = NotesAdapter::new();
    adapter.set_notes(all.clone());
    adapter.filter("REVIEW");
    assert_eq!(adapter.item_count(), 2);
    assert_eq!(adapter.visible(), filter_notes(&all, "review").as_slice());

    adapter.filter("  ");
    assert_eq!(adapter.item_count(), all.len());
}

#[tokio::test]
async fn test_favorites_survive_update() {
    let app = TestApp::new();
    let tree = app.seed_tree().await;

    let mut note = app.note(&tree.b, "star me").await;
    assert!(app.notes.list_favorites(&tree.b.id).await.unwrap().is_empty());

    note.is_favorite = true;
    let saved = app.notes.update_note(note).await.unwrap();
    assert!(saved.updated_at >= saved.created_at);

    let favorites = app.notes.list_favorites(&tree.b.id).await.unwrap();
    assert_eq!(favorites, vec![saved]);
}

#[tokio::test]
async fn test_note_needs_existing_folder_after_delete() {
    let app = TestApp::new();
    let tree = app.seed_tree().await;
    app.folders.delete_recursive(&tree.c.id).await.unwrap();

    let err = app.notes.add_note("late", "", &tree.d.id, false).await.unwrap_err();
    assert!(err.is(ErrorKind::NotFound));
}

#[tokio::test]
async fn test_profile_falls_back_to_session() {
    let app = TestApp::new();
    let profiles = ProfileService::new(Arc::new(app.store.clone()), Arc::new(app.session.clone()));

    let profile = profiles.load_profile().await;
    assert_eq!(profile.display_name, "Alice");
    assert_eq!(profile.avatar, Avatar::Default);

    profiles.save_profile(Some("alice_w"), Some(&b"png"[..])).await.unwrap();
    let profile = profiles.load_profile().await;
    assert_eq!(profile.display_name, "alice_w");
    assert_eq!(profile.avatar, Avatar::Embedded(b"png".to_vec()));

    app.session.sign_out();
    assert_eq!(profiles.load_profile().await.display_name, "Unavailable");
}
