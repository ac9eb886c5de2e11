use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateTodo {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// Partial update: only the fields present in the body are applied.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateTodo {
    pub text: Option<String>,
    pub done: Option<bool>,
}
