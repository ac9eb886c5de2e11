mod error;
mod ids;
mod sled;
mod todo;

#[cfg(feature = "integration_tests")]
pub use sled::test_util;
pub(crate) use sled::{error::SledStartupError, SledStorage};

use async_trait::async_trait;
pub(crate) use error::StorageError;
pub use ids::TodoId;
pub use todo::Todo;
pub(crate) use todo::{TodoDraft, TodoVersion, UpdateTodo};

#[async_trait]
pub trait TodoStorage: Send + Sync {
    /// Persists a new record; the store generates the id and timestamps
    /// and returns the record as written.
    async fn insert(&self, draft: TodoDraft) -> Result<Todo, StorageError>;
    async fn get(&self, id: TodoId) -> Result<Todo, StorageError>;
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError>;
    /// Applies the present fields of `patch`, bumps `updated_at` and
    /// returns the post-update record.
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StorageError>;
}

#[async_trait]
pub trait FlushStorage: Send + Sync {
    async fn flush(&self) -> Result<(), StorageError>;
}
