mod common;
use common::{create_seeded_test_app, create_test_app, spawn_test_app, TestAppClient};
use reqwest::StatusCode;
use serde_json::json;
use todo_service::{Todo, TodoId};

#[tokio::test]
async fn create_and_get_todo() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client
        .create_todo(&json!({"text": "buy milk", "done": false}))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Todo>().await.unwrap();
    assert_eq!(created.text, "buy milk");
    assert!(!created.done);

    let res = client.get_todo(&created.id.to_string()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let todo = res.json::<Todo>().await.unwrap();
    assert_eq!(todo, created);
}

#[tokio::test]
async fn create_todo_returns_full_record() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client
        .create_todo(&json!({"text": "buy milk", "done": false}))
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = res.json::<serde_json::Value>().await.unwrap();
    assert!(body["id"].is_string());
    assert_eq!(body["text"], "buy milk");
    assert_eq!(body["done"], false);
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn create_todo_without_done_defaults_to_false() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client.create_todo(&json!({"text": "aaa"})).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let created = res.json::<Todo>().await.unwrap();
    assert!(!created.done);
}

#[tokio::test]
async fn create_todo_without_text_is_rejected() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client.create_todo(&json!({"done": true})).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_nonexistent_todo() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client.get_todo(&TodoId::new().to_string()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_all_todos_on_empty_store() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn get_all_todos_returns_every_record() {
    let todo_count = 15;
    let (app, seeded) = create_seeded_test_app(todo_count).await;
    let handle = spawn_test_app(app).await;
    let client = TestAppClient::new(handle.address);

    let res = client.get_all_todos().await;
    assert_eq!(res.status(), StatusCode::OK);

    let todos = res.json::<Vec<Todo>>().await.unwrap();
    assert_eq!(todos.len(), todo_count);

    let any_lost_todo = seeded
        .iter()
        .any(|expected| !todos.iter().any(|t| t == expected));
    assert!(!any_lost_todo);
}

#[tokio::test]
async fn update_todo() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client
        .create_todo(&json!({"text": "aaa", "done": false}))
        .await;
    let created = res.json::<Todo>().await.unwrap();

    let res = client
        .update_todo(
            &created.id.to_string(),
            &json!({"text": "qwerty", "done": true}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let updated = res.json::<Todo>().await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "qwerty");
    assert!(updated.done);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let res = client.get_todo(&created.id.to_string()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Todo>().await.unwrap(), updated);
}

#[tokio::test]
async fn update_todo_applies_only_present_fields() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let res = client
        .create_todo(&json!({"text": "aaa", "done": false}))
        .await;
    let created = res.json::<Todo>().await.unwrap();

    let res = client
        .update_todo(&created.id.to_string(), &json!({"done": true}))
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let updated = res.json::<Todo>().await.unwrap();
    assert_eq!(updated.text, "aaa");
    assert!(updated.done);
}

#[tokio::test]
async fn update_nonexistent_todo_is_idempotent() {
    let handle = spawn_test_app(create_test_app().await).await;
    let client = TestAppClient::new(handle.address);

    let unknown_id = TodoId::new().to_string();

    let res = client
        .update_todo(&unknown_id, &json!({"text": "qwerty"}))
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().is_empty());

    let res = client
        .update_todo(&unknown_id, &json!({"text": "qwerty"}))
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().is_empty());

    // no record came into existence along the way
    let res = client.get_all_todos().await;
    assert_eq!(res.json::<Vec<Todo>>().await.unwrap().len(), 0);
}
