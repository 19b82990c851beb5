use item_registry::{ItemInput, ItemStore, ItemsError, MemoryStore};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

fn input(name: &str, cents: i64) -> ItemInput {
    ItemInput::new(Some(name), Decimal::new(cents, 2))
}

#[tokio::test]
async fn test_create_assigns_distinct_ids_in_order() {
    let store = MemoryStore::new();

    let a = store.create(input("a", 100)).await.unwrap();
    let b = store.create(input("b", 200)).await.unwrap();
    let c = store.create(input("a", 100)).await.unwrap();

    assert_ne!(a.id, b.id);
    assert_ne!(a.id, c.id);

    let listed = store.list().await.unwrap();
    assert_eq!(listed, vec![a, b, c]);
}

#[tokio::test]
async fn test_get_round_trips_input() {
    let store = MemoryStore::new();
    let created = store.create(input("Apple", 99)).await.unwrap();

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched.name.as_deref(), Some("Apple"));
    assert_eq!(fetched.price, Decimal::new(99, 2));
    assert_eq!(fetched, created);

    let missing = Uuid::new_v4();
    assert!(matches!(
        store.get(missing).await,
        Err(ItemsError::NotFound(id)) if id == missing
    ));
}

#[tokio::test]
async fn test_update_keeps_id_and_replaces_fields() {
    let store = MemoryStore::new();
    let created = store.create(input("Apple", 99)).await.unwrap();

    store
        .update(created.id, ItemInput::new(None, Decimal::new(150, 2)))
        .await
        .unwrap();

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, None);
    assert_eq!(fetched.price, Decimal::new(15, 1));
}

#[tokio::test]
async fn test_update_unknown_leaves_store_unchanged() {
    let store = MemoryStore::new();
    store.create(input("Apple", 99)).await.unwrap();
    let before = store.list().await.unwrap();

    let result = store.update(Uuid::new_v4(), input("Ghost", 1)).await;
    assert!(matches!(result, Err(ItemsError::NotFound(_))));
    assert_eq!(store.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let store = MemoryStore::new();
    let a = store.create(input("a", 1)).await.unwrap();
    let b = store.create(input("b", 2)).await.unwrap();
    let c = store.create(input("c", 3)).await.unwrap();

    store.delete(b.id).await.unwrap();
    assert_eq!(store.list().await.unwrap(), vec![a, c]);

    assert!(matches!(
        store.delete(b.id).await,
        Err(ItemsError::NotFound(_))
    ));
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_concurrent_creates_are_all_kept() {
    let store = Arc::new(MemoryStore::new());

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move { store.create(input("item", i)).await.unwrap() })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().id);
    }

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 32);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 32);
}
