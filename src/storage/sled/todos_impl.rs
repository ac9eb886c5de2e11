use crate::storage::sled::internal::TreeScan;
use crate::storage::todo::now_millis;
use crate::storage::{StorageError, TodoId};
use crate::trace_err;

use super::error::SledStorageError;
use super::internal::{
    span_wrappers::{
        deserialize_in_span, deserialize_in_transaction_with_span,
        get_value_in_transaction_with_span, get_value_with_span,
        insert_value_in_transaction_with_span, insert_value_with_span, serialize_in_span,
        serialize_in_transaction_with_span,
    },
    KeyPrefix, PrefixKind,
};
use super::{todo_key, FromBytesWithConfig};
use super::{BincodeConfig, SledStorage};
use super::{Todo, TodoDraft, TodoStorage, TodoVersion, UpdateTodo};
use async_trait::async_trait;
use sled::Tree;
use tracing::{info, info_span, instrument, Span};

#[async_trait]
impl TodoStorage for SledStorage {
    #[instrument(name = "SledStorage::insert_todo", skip_all)]
    async fn insert(&self, draft: TodoDraft) -> Result<Todo, StorageError> {
        let id = TodoId::new();
        info!(todo_id = %id, "insert todo");

        let now = trace_err!(now_millis(), "failed to take insert timestamp")?;
        let todo = Todo::new(id, draft, now);

        let key = todo_key(&id);
        let encoded: Vec<u8> = trace_err!(
            serialize_in_span(&self.bincode_config, &TodoVersion::from(todo.clone())),
            "failed to bin encode todo"
        )?;

        trace_err!(
            insert_value_with_span(&key, &encoded, &self.todo_tree),
            "failed to write todo into storage"
        )?;

        Ok(todo)
    }

    #[instrument(name = "SledStorage::get_todo", skip_all)]
    async fn get(&self, todo_id: TodoId) -> Result<Todo, StorageError> {
        info!(todo_id = %todo_id, "get todo");

        let key = todo_key(&todo_id);

        let value = trace_err!(
            get_value_with_span(&key, &self.todo_tree),
            "failed to read todo from storage"
        )?;

        let version = trace_err!(
            deserialize_in_span::<TodoVersion>(&self.bincode_config, &value),
            "failed to bin decode todo"
        )?;

        Ok(Todo::try_from(version)?)
    }

    #[instrument(name = "SledStorage::get_all_todos", skip_all)]
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        info!("get all todos");

        let items = info_span!("TreeScan::within::collect").in_scope(|| {
            trace_err!(
                TreeScan::within(&self.todo_tree, KeyPrefix::from_kind(PrefixKind::Todo)).collect(
                    &self.bincode_config,
                    |_, bytes, config| Todo::try_from(TodoVersion::from_bytes(bytes, config)?),
                ),
                "failed to do tree scan to get all todo-s"
            )
        })?;

        Ok(items)
    }

    #[instrument(name = "SledStorage::update_todo", skip_all)]
    async fn update(&self, todo_id: TodoId, patch: UpdateTodo) -> Result<Todo, StorageError> {
        // cloning the tree is cheap: struct Tree{inner: Arc<TreeInner>}
        let (todo_tree, bincode_config) = info_span!("Cloning tree and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| update_todo(todo_id, patch, &todo_tree, &bincode_config))
        })
        .await?
    }
}

#[instrument(name = "update_todo", skip_all)]
fn update_todo(
    todo_id: TodoId,
    patch: UpdateTodo,
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<Todo, StorageError> {
    info!(todo_id = %todo_id, "update todo");

    let now = trace_err!(now_millis(), "failed to take update timestamp")?;

    let updated = todo_tree
        .transaction(|tx| {
            let key = todo_key(&todo_id);
            let value = trace_err!(
                get_value_in_transaction_with_span(&key, tx),
                "failed to read todo from storage"
            )?;

            if let Some(value) = value {
                let mut todo: Todo = Todo::try_from(trace_err!(
                    deserialize_in_transaction_with_span::<TodoVersion>(bincode_config, &value),
                    "failed to bin decode todo"
                )?)?;

                todo.apply(&patch);
                todo.updated_at = now;

                let encoded = trace_err!(
                    serialize_in_transaction_with_span(
                        bincode_config,
                        &TodoVersion::from(todo.clone()),
                    ),
                    "failed to bin encode todo"
                )?;

                trace_err!(
                    insert_value_in_transaction_with_span(&key, &encoded, tx),
                    "failed to write todo into storage"
                )?;

                Ok(todo)
            } else {
                tracing::warn!("failed to find todo in the storage");
                Err(SledStorageError::NotFound.into())
            }
        })
        .map_err(SledStorageError::from)?;

    Ok(updated)
}

#[cfg(test)]
mod tests;
