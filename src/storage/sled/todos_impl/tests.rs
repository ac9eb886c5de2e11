use super::*;

use crate::storage::sled::test_util::TestStorageBuilder;

#[tokio::test]
async fn test_insert_and_get() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo();

    let created = storage
        .insert(TodoDraft {
            text: "aaa".to_string(),
            done: false,
        })
        .await
        .unwrap();

    assert_eq!(created.text, "aaa");
    assert!(!created.done);
    assert_eq!(created.created_at, created.updated_at);

    let fetched = storage.get(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let result = storage.get(TodoId::new()).await;
    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_insert_generates_distinct_ids() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo();

    let first = storage
        .insert(TodoDraft {
            text: "aaa".to_string(),
            done: false,
        })
        .await
        .unwrap();
    let second = storage
        .insert(TodoDraft {
            text: "aaa".to_string(),
            done: false,
        })
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_update() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo();

    let created = storage
        .insert(TodoDraft {
            text: "aaa".to_string(),
            done: false,
        })
        .await
        .unwrap();

    let updated = storage
        .update(
            created.id,
            UpdateTodo {
                text: Some("bbb".to_string()),
                done: Some(true),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "bbb");
    assert!(updated.done);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let fetched = storage.get(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_nonexistent() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo();

    let result = storage
        .update(
            TodoId::new(),
            UpdateTodo {
                text: Some("bbb".to_string()),
                done: None,
            },
        )
        .await;

    assert!(matches!(result, Err(StorageError::NotFound)));
    assert_eq!(storage.get_all().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_with_empty_patch_is_noop() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo();

    let created = storage
        .insert(TodoDraft {
            text: "aaa".to_string(),
            done: true,
        })
        .await
        .unwrap();

    let updated = storage
        .update(
            created.id,
            UpdateTodo {
                text: None,
                done: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.text, created.text);
    assert_eq!(updated.done, created.done);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_get_all() {
    let todos_count = 15;
    let builder = TestStorageBuilder::new();
    let mut expected = builder.seed_todos(todos_count).await;
    let storage = builder.build_todo();

    expected.sort_by_key(|t| t.id);

    let todos = storage.get_all().await.unwrap();

    assert_eq!(todos.len(), todos_count);
    assert_eq!(todos, expected);
}

#[tokio::test]
async fn test_get_all_empty() {
    let builder = TestStorageBuilder::new();
    let storage = builder.build_todo();

    let todos = storage.get_all().await.unwrap();

    assert!(todos.is_empty());
}
