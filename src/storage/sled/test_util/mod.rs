#![allow(dead_code)]
use std::sync::Arc;

use crate::storage::{
    sled::{BINCODE_CONFIG, SLED_TODO_TREE},
    FlushStorage, StorageError, Todo, TodoDraft, TodoId, TodoStorage, UpdateTodo,
};
use async_trait::async_trait;
use sled::Config;

use super::error::SledStorageError;
use super::SledStorage;

pub struct TestStorageBuilder {
    storage: Arc<SledStorage>,
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        let config = Config::new().temporary(true);
        let db = config.open().unwrap();
        let storage = Arc::new(SledStorage {
            todo_tree: db.open_tree(SLED_TODO_TREE).unwrap(),
            bincode_config: BINCODE_CONFIG,
        });
        Self { storage }
    }

    /// Inserts `count` records through the real storage path and returns
    /// them as the store created them.
    pub async fn seed_todos(&self, count: usize) -> Vec<Todo> {
        let mut todos = Vec::with_capacity(count);
        for i in 0..count {
            let todo = self
                .storage
                .insert(TodoDraft {
                    text: format!("todo {}", i),
                    done: false,
                })
                .await
                .unwrap();
            todos.push(todo);
        }
        todos
    }

    pub fn build_todo(&self) -> Arc<dyn TodoStorage> {
        self.storage.clone()
    }

    pub fn build_flush(&self) -> Arc<dyn FlushStorage> {
        self.storage.clone()
    }
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static OUTAGE_TEXT: &str = "simulated storage outage";

fn outage() -> StorageError {
    StorageError::Internal(SledStorageError::Sled(sled::Error::Unsupported(
        OUTAGE_TEXT.to_string(),
    )))
}

/// Message every [`FailingStorage`] rejection carries, for asserting on
/// error response bodies.
pub fn outage_message() -> String {
    outage().to_string()
}

/// Storage double whose every operation is rejected, for driving the
/// operational-failure path end to end.
pub struct FailingStorage;

impl FailingStorage {
    pub fn build_todo() -> Arc<dyn TodoStorage> {
        Arc::new(Self)
    }

    pub fn build_flush() -> Arc<dyn FlushStorage> {
        Arc::new(Self)
    }
}

#[async_trait]
impl TodoStorage for FailingStorage {
    async fn insert(&self, _draft: TodoDraft) -> Result<Todo, StorageError> {
        Err(outage())
    }

    async fn get(&self, _id: TodoId) -> Result<Todo, StorageError> {
        Err(outage())
    }

    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        Err(outage())
    }

    async fn update(&self, _id: TodoId, _patch: UpdateTodo) -> Result<Todo, StorageError> {
        Err(outage())
    }
}

#[async_trait]
impl FlushStorage for FailingStorage {
    async fn flush(&self) -> Result<(), StorageError> {
        Err(outage())
    }
}
