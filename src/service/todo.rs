use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    handlers::{error::AppError, CreateTodo, UpdateTodo},
    storage::{Todo, TodoId, TodoStorage},
};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::add", skip_all)]
    pub(crate) async fn add(&self, input: &CreateTodo) -> Result<Todo, AppError> {
        let todo = self.storage.insert(input.into()).await?;

        info!(todo_id = %todo.id, "added todo");

        Ok(todo)
    }

    #[instrument(name = "Service::todo::get", skip_all)]
    pub(crate) async fn get(&self, todo_id: TodoId) -> Result<Todo, AppError> {
        self.storage.get(todo_id).await.map_err(Into::into)
    }

    #[instrument(name = "Service::todo::get_all", skip_all)]
    pub(crate) async fn get_all(&self) -> Result<Vec<Todo>, AppError> {
        self.storage.get_all().await.map_err(Into::into)
    }

    #[instrument(
        name = "Service::todo::update",
        skip_all,
        fields(text_is_some = patch.text.is_some(),
        done_is_some = patch.done.is_some()))
    ]
    pub(crate) async fn update(&self, id: TodoId, patch: &UpdateTodo) -> Result<Todo, AppError> {
        info!(todo_id = %id, "update todo");

        self.storage
            .update(id, patch.into())
            .await
            .map_err(Into::into)
    }
}
