use super::sled::error::SledStorageError;
use super::TodoId;
use bincode::{Decode, Encode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted todo record. Timestamps carry millisecond precision, the
/// resolution of the stored representation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[schema(value_type = String)]
    pub id: TodoId,
    pub text: String,
    pub done: bool,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

fn apply_if_changed<T: PartialEq + Clone>(field: &mut T, new: &Option<T>) {
    if let Some(value) = new {
        if *field != *value {
            *field = value.clone();
        }
    }
}

impl Todo {
    pub(crate) fn new(id: TodoId, draft: TodoDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            text: draft.text,
            done: draft.done,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the fields present in `patch`. `updated_at` is managed by
    /// the storage layer, not here.
    pub(crate) fn apply(&mut self, patch: &UpdateTodo) {
        apply_if_changed(&mut self.text, &patch.text);
        apply_if_changed(&mut self.done, &patch.done);
    }
}

/// Input to an insert; the storage layer supplies id and timestamps.
#[derive(Debug)]
pub struct TodoDraft {
    pub text: String,
    pub done: bool,
}

impl From<&crate::handlers::CreateTodo> for TodoDraft {
    fn from(value: &crate::handlers::CreateTodo) -> Self {
        Self {
            text: value.text.clone(),
            done: value.done,
        }
    }
}

#[derive(Debug)]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub done: Option<bool>,
}

impl From<&crate::handlers::UpdateTodo> for UpdateTodo {
    fn from(value: &crate::handlers::UpdateTodo) -> Self {
        Self {
            text: value.text.clone(),
            done: value.done,
        }
    }
}

/// Stored shape of a todo record. New fields go into a new variant so
/// existing records keep decoding.
#[derive(Encode, Decode, Serialize, Deserialize, Debug)]
#[serde(tag = "version", content = "data")]
pub(crate) enum TodoVersion {
    V1 {
        id: TodoId,
        text: String,
        done: bool,
        created_at: i64,
        updated_at: i64,
    },
}

impl TryFrom<TodoVersion> for Todo {
    type Error = SledStorageError;

    fn try_from(value: TodoVersion) -> Result<Self, Self::Error> {
        let TodoVersion::V1 {
            id,
            text,
            done,
            created_at,
            updated_at,
        } = value;
        Ok(Self {
            id,
            text,
            done,
            created_at: datetime_from_millis(created_at)?,
            updated_at: datetime_from_millis(updated_at)?,
        })
    }
}

impl From<Todo> for TodoVersion {
    fn from(value: Todo) -> Self {
        Self::V1 {
            id: value.id,
            text: value.text,
            done: value.done,
            created_at: value.created_at.timestamp_millis(),
            updated_at: value.updated_at.timestamp_millis(),
        }
    }
}

fn datetime_from_millis(millis: i64) -> Result<DateTime<Utc>, SledStorageError> {
    DateTime::from_timestamp_millis(millis).ok_or(SledStorageError::InvalidTimestamp(millis))
}

/// Current time truncated to the precision the store round-trips, so a
/// record returned from an insert equals the same record read back.
pub(crate) fn now_millis() -> Result<DateTime<Utc>, SledStorageError> {
    datetime_from_millis(Utc::now().timestamp_millis())
}
