mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::ScriptedAssistant;
use tutor_completion::ThreadStore;
use tutor_persist::{InMemoryThreadRepo, ThreadRepo};

#[tokio::test]
async fn get_or_create_is_idempotent() {
    let repo = Arc::new(InMemoryThreadRepo::new());
    let client = Arc::new(ScriptedAssistant::new([]).with_thread_ids(["thread_1", "thread_2"]));
    let store = ThreadStore::new(repo, client.clone());

    let first = store.get_or_create(7).await.unwrap();
    let second = store.get_or_create(7).await.unwrap();

    assert_eq!(first, "thread_1");
    assert_eq!(first, second);
    // Only the first call reaches the provider.
    assert_eq!(client.create_thread_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn different_users_get_different_threads() {
    let repo = Arc::new(InMemoryThreadRepo::new());
    let client = Arc::new(ScriptedAssistant::new([]).with_thread_ids(["thread_1", "thread_2"]));
    let store = ThreadStore::new(repo, client);

    let a = store.get_or_create(1).await.unwrap();
    let b = store.get_or_create(2).await.unwrap();
    assert_ne!(a, b);
}

#[tokio::test]
async fn recreate_replaces_the_stored_mapping() {
    let repo = Arc::new(InMemoryThreadRepo::new());
    repo.upsert(7, "thread_stale").await.unwrap();
    let client = Arc::new(ScriptedAssistant::new([]).with_thread_ids(["thread_fresh"]));
    let store = ThreadStore::new(repo.clone(), client);

    let fresh = store.recreate(7).await.unwrap();

    assert_eq!(fresh, "thread_fresh");
    let record = repo.find(7).await.unwrap().unwrap();
    assert_eq!(record.provider_thread_id, "thread_fresh");
}
