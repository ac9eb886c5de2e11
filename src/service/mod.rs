pub(crate) mod todo;

use std::sync::Arc;

use crate::{
    handlers::error::AppError,
    storage::{FlushStorage, TodoStorage},
};
use todo::ServiceTodoRef;
use tracing::instrument;

/// Cloneable handle over the injected storage backends; everything a
/// request handler needs arrives through this.
#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    flush_storage: Arc<dyn FlushStorage>,
}

impl Service {
    #[instrument(name = "Service::new", skip_all)]
    pub fn new(todo_storage: Arc<dyn TodoStorage>, flush_storage: Arc<dyn FlushStorage>) -> Self {
        Self {
            todo_storage,
            flush_storage,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone())
    }

    pub async fn flush_storage(&self) -> Result<(), AppError> {
        self.flush_storage.flush().await.map_err(Into::into)
    }
}
