use super::error::AppError;
use super::types::*;
use crate::{handlers::Service, storage::Todo, storage::TodoId};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "List all todos", body = Vec<Todo>),
        (status = 500, description = "Storage failure"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(State(service): State<Service>) -> Result<impl IntoResponse, AppError> {
    let items = service.todo().get_all().await?;

    info!("Get {} ToDos", items.len());

    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "Get ToDo by ID", body = Todo),
        (status = 404, description = "ToDo not found"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get", skip_all)]
pub(crate) async fn get(
    State(service): State<Service>,
    Path(id): Path<TodoId>,
) -> Result<impl IntoResponse, AppError> {
    let todo = service.todo().get(id).await?;

    info!(todo = ?todo, "Get ToDo");

    Ok(Json(todo))
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body(
        content = CreateTodo,
        description = "New ToDo item",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "ToDo created", body = Todo),
        (status = 422, description = "Unprocessable Entity"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::post", skip_all)]
pub(crate) async fn add(
    State(service): State<Service>,
    Json(input): Json<CreateTodo>,
) -> Result<impl IntoResponse, AppError> {
    match service.todo().add(&input).await {
        Ok(todo) => Ok((StatusCode::CREATED, Json(todo))),
        Err(e) => {
            tracing::error!(err = ?e, "failed to add new ToDo");
            Err(e)
        }
    }
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(
        ("id" = String, Path, description = "ToDo ID")
    ),
    request_body(
        content = UpdateTodo,
        description = "Partial ToDo update",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo updated", body = Todo),
        (status = 404, description = "ToDo not found"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::update", skip_all)]
pub(crate) async fn update(
    State(service): State<Service>,
    Path(id): Path<TodoId>,
    Json(input): Json<UpdateTodo>,
) -> Result<impl IntoResponse, AppError> {
    let todo = service.todo().update(id, &input).await?;

    Ok(Json(todo))
}
