use utoipa::OpenApi;

use crate::handlers::error::AppError;
use crate::handlers::types::{CreateTodo, UpdateTodo};
use crate::storage::Todo;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::todo::get_all,
        crate::handlers::todo::get,
        crate::handlers::todo::add,
        crate::handlers::todo::update,
    ),
    components(
        schemas(Todo, CreateTodo, UpdateTodo, AppError),
    ),
    tags(
        (name = "todos", description = "Endpoints to create and manage todo items")
    ),
    info(
        title = "Todo Service API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
