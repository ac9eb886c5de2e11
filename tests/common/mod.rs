#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_service::{build_app, FailingStorage, Service, TestStorageBuilder, Todo};

pub use server::{spawn_test_app, TestAppHandle};

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

pub async fn create_test_app() -> Router {
    let builder = TestStorageBuilder::new();
    let service = Service::new(builder.build_todo(), builder.build_flush());

    build_app(service)
}

pub async fn create_seeded_test_app(count: usize) -> (Router, Vec<Todo>) {
    let builder = TestStorageBuilder::new();
    let todos = builder.seed_todos(count).await;
    let service = Service::new(builder.build_todo(), builder.build_flush());

    (build_app(service), todos)
}

pub async fn create_failing_test_app() -> Router {
    let service = Service::new(FailingStorage::build_todo(), FailingStorage::build_flush());

    build_app(service)
}
