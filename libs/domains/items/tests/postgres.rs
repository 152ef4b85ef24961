//! Integration tests for the PostgreSQL item store
//!
//! These tests use real PostgreSQL via testcontainers to ensure the
//! persistent backend honors the same contract as the in-memory one.
//!
//! All tests are ignored by default because they require a Docker daemon:
//! run them with `cargo test -p domain_items -- --ignored`.

use domain_items::{CreateItem, ItemStore, PgItemStore, UpdateItem};
use test_utils::{assertions::assert_some, TestDataBuilder, TestDatabase};

fn create(name: String) -> CreateItem {
    CreateItem {
        name,
        description: "Integration test item".to_string(),
    }
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_init_and_add_assigns_identifier() {
    let db = TestDatabase::new().await;
    let store = PgItemStore::new(db.connection());
    let builder = TestDataBuilder::from_test_name("init_and_add");

    store.init().await.unwrap();

    let item = store.add(create(builder.name("item", "main"))).await.unwrap();
    assert!(item.id > 0);

    let found = store.find_by_id(item.id).await.unwrap();
    let found = assert_some(found, "item should exist");
    assert_eq!(found.name, item.name);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_replace_and_delete_roundtrip() {
    let db = TestDatabase::new().await;
    let store = PgItemStore::new(db.connection());
    let builder = TestDataBuilder::from_test_name("replace_and_delete");

    let item = store.add(create(builder.name("item", "main"))).await.unwrap();

    let replaced = store
        .replace(
            item.id,
            UpdateItem {
                name: builder.name("item", "renamed"),
                description: String::new(),
            },
        )
        .await
        .unwrap();
    assert!(replaced);

    let found = assert_some(
        store.find_by_id(item.id).await.unwrap(),
        "replaced item should exist",
    );
    assert_eq!(found.name, builder.name("item", "renamed"));
    assert_eq!(found.created, item.created);

    assert!(store.delete(item.id).await.unwrap());
    assert!(store.find_by_id(item.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_replace_and_delete_unknown_id_return_false() {
    let db = TestDatabase::new().await;
    let store = PgItemStore::new(db.connection());

    let replaced = store
        .replace(
            424242,
            UpdateItem {
                name: "whatever".to_string(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
    assert!(!replaced);

    assert!(!store.delete(424242).await.unwrap());
    assert!(store.find_by_id(424242).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_all_in_creation_order() {
    let db = TestDatabase::new().await;
    let store = PgItemStore::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all_order");

    let first = store.add(create(builder.name("item", "a"))).await.unwrap();
    let second = store.add(create(builder.name("item", "b"))).await.unwrap();
    let third = store.add(create(builder.name("item", "c"))).await.unwrap();

    let all = store.find_all().await.unwrap();
    let ids: Vec<_> = all.iter().map(|i| i.id).collect();
    assert_eq!(ids, [first.id, second.id, third.id]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_by_key_in_name_is_case_sensitive_substring() {
    let db = TestDatabase::new().await;
    let store = PgItemStore::new(db.connection());

    store.add(create("fix build".to_string())).await.unwrap();
    store.add(create("write docs".to_string())).await.unwrap();
    store.add(create("Fix tests".to_string())).await.unwrap();

    let matches = store.find_by_key_in_name("fix").await.unwrap();
    let names: Vec<_> = matches.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["fix build"]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_delete_all_empties_store() {
    let db = TestDatabase::new().await;
    let store = PgItemStore::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete_all");

    store.add(create(builder.name("item", "a"))).await.unwrap();
    store.add(create(builder.name("item", "b"))).await.unwrap();

    store.delete_all().await.unwrap();
    assert!(store.find_all().await.unwrap().is_empty());
}
